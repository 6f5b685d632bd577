//! Reveal-on-view for elements wrapped in [`Reveal`].
//!
//! One shared `IntersectionObserver` watches every tracked element. The first
//! time an element crosses the threshold it is revealed and unobserved, so
//! scrolling it out of view and back has no effect. Browsers without
//! intersection support, and visitors who prefer reduced motion, get every
//! element revealed on mount.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::set::RevealSet;
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::motion::prefers_reduced_motion;

const REVEAL_ID_ATTR: &str = "data-reveal-id";

type IntersectCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Inner {
    set: RevealSet,
    observer: Option<IntersectionObserver>,
    on_reveal: HashMap<u32, Callback<()>>,
    _on_intersect: Option<IntersectCallback>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

pub fn observation_supported() -> bool {
    window().map_or(false, |w| {
        Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

fn handle_entries(inner: &Weak<RefCell<Inner>>, entries: Array, observer: &IntersectionObserver) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let Some(id) = target
            .get_attribute(REVEAL_ID_ATTR)
            .and_then(|raw| raw.parse::<u32>().ok())
        else {
            continue;
        };

        let on_reveal = {
            let mut inner = inner.borrow_mut();
            if !inner.set.on_visibility(id, entry.is_intersecting()) {
                continue;
            }
            inner.on_reveal.remove(&id)
        };
        observer.unobserve(&target);
        if let Some(on_reveal) = on_reveal {
            on_reveal.emit(());
        }
    }
}

#[derive(Clone)]
pub struct RevealController {
    inner: Rc<RefCell<Inner>>,
}

impl RevealController {
    pub fn new() -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            set: RevealSet::default(),
            observer: None,
            on_reveal: HashMap::new(),
            _on_intersect: None,
        }));

        if !observation_supported() {
            debug!("IntersectionObserver unavailable, revealing everything");
        } else if prefers_reduced_motion() {
            debug!("Reduced motion preferred, revealing everything");
        } else {
            let weak = Rc::downgrade(&inner);
            let on_intersect = IntersectCallback::new(move |entries: Array, observer: IntersectionObserver| {
                handle_entries(&weak, entries, &observer);
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            init.set_root_margin(REVEAL_ROOT_MARGIN);

            match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    let mut inner = inner.borrow_mut();
                    inner.observer = Some(observer);
                    inner._on_intersect = Some(on_intersect);
                }
                Err(e) => warn!("Failed to create IntersectionObserver: {:?}", e),
            }
        }

        Self { inner }
    }

    /// Starts watching `element`. `on_reveal` fires at most once, possibly
    /// synchronously when there is nothing to observe with.
    pub fn track(&self, element: &Element, on_reveal: Callback<()>) -> RevealHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.set.track();
        let observer = inner.observer.clone();
        debug!("Tracking reveal element {} ({} pending)", id, inner.set.pending());
        match observer {
            Some(observer) => {
                if element.set_attribute(REVEAL_ID_ATTR, &id.to_string()).is_err() {
                    warn!("Failed to tag reveal element {}", id);
                }
                inner.on_reveal.insert(id, on_reveal);
                observer.observe(element);
            }
            None => {
                inner.set.reveal(id);
                drop(inner);
                on_reveal.emit(());
            }
        }
        RevealHandle {
            controller: self.clone(),
            element: element.clone(),
            id,
        }
    }

    fn untrack(&self, id: u32, element: &Element) {
        let mut inner = self.inner.borrow_mut();
        inner.set.untrack(id);
        inner.on_reveal.remove(&id);
        if let Some(observer) = &inner.observer {
            observer.unobserve(element);
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RevealController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Stops tracking its element when dropped.
pub struct RevealHandle {
    controller: RevealController,
    element: Element,
    id: u32,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.controller.untrack(self.id, &self.element);
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let controller = use_context::<RevealController>();
    let revealed = use_state(|| false);
    let node_ref = use_node_ref();

    {
        let setter = revealed.setter();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let handle = match (controller, node_ref.cast::<Element>()) {
                    (Some(controller), Some(element)) => Some(
                        controller.track(&element, Callback::from(move |_| setter.set(true))),
                    ),
                    _ => {
                        setter.set(true);
                        None
                    }
                };
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <div
            id={props.id.clone()}
            ref={node_ref}
            class={classes!("reveal-fade-up", props.class.clone(), (*revealed).then(|| "revealed"))}
        >
            { for props.children.iter() }
        </div>
    }
}

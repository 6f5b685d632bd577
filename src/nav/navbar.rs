use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, Node, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use super::state::{self, LinkAction, NavController, NavState};
use crate::content::NAV_LINKS;
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::Route;

const NAVBAR_ID: &str = "navbar";

fn section_on_page(id: &str) -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Smooth-scrolls so the section's top sits just below the fixed navbar.
pub fn scroll_to_anchor(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let target = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        warn!("No section with id {}", id);
        return;
    };
    let nav_height = document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0, |nav| nav.offset_height());

    let options = ScrollToOptions::new();
    options.set_top(state::anchor_scroll_top(
        f64::from(target.offset_top()),
        f64::from(nav_height),
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll_lock = use_context::<ScrollLock>().unwrap_or_else(ScrollLock::body);
    let controller = use_mut_ref(NavController::default);
    let nav_state = use_state(NavState::default);
    let lock_guard = use_mut_ref(|| None::<ScrollLockGuard>);
    let navigator = use_navigator();
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Scroll listener, coalesced to one recompute per animation frame
    {
        let controller = controller.clone();
        let setter = nav_state.setter();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let recompute = {
                        let controller = controller.clone();
                        let setter = setter.clone();
                        move |offset: f64| {
                            let next = controller.borrow_mut().on_frame(offset);
                            if let Some(next) = next {
                                setter.set(next);
                            }
                        }
                    };

                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        let recompute = recompute.clone();
                        move || {
                            if !controller.borrow_mut().on_scroll_event() {
                                return;
                            }
                            let frame = {
                                let window = window.clone();
                                let recompute = recompute.clone();
                                Closure::once_into_js(move || {
                                    recompute(window.scroll_y().unwrap_or(0.0));
                                })
                            };
                            if window.request_animation_frame(frame.unchecked_ref()).is_err() {
                                recompute(window.scroll_y().unwrap_or(0.0));
                            }
                        }
                    });

                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Failed to register scroll listener");
                    }

                    // Page may load already scrolled
                    recompute(window.scroll_y().unwrap_or(0.0));
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        if window
                            .remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_err()
                        {
                            warn!("Failed to remove scroll listener");
                        }
                    }
                }
            },
            (),
        );
    }

    // Mobile menu holds the scroll lock while open
    {
        let lock_guard = lock_guard.clone();
        use_effect_with_deps(
            move |menu| {
                state::sync_menu_lock(*menu, &mut lock_guard.borrow_mut(), &scroll_lock);
                || ()
            },
            nav_state.menu,
        );
    }

    // Close on any click outside the toggle and the menu panel
    {
        let controller = controller.clone();
        let setter = nav_state.setter();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map_or(false, |node| node.contains(target.as_ref()))
            };
            if inside(&toggle_ref) || inside(&menu_ref) {
                return;
            }
            let next = controller.borrow_mut().close_menu();
            if let Some(next) = next {
                setter.set(next);
            }
        });
    }

    let toggle_menu = {
        let controller = controller.clone();
        let setter = nav_state.setter();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = controller.borrow_mut().toggle_menu();
            setter.set(next);
        })
    };

    let link_click = |href: &'static str| {
        let controller = controller.clone();
        let setter = nav_state.setter();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            let next = controller.borrow_mut().close_menu();
            if let Some(next) = next {
                setter.set(next);
            }
            match state::resolve_link(href, section_on_page) {
                LinkAction::Scroll(id) => {
                    e.prevent_default();
                    scroll_to_anchor(id);
                }
                LinkAction::HomeSection(id) => {
                    let Some(navigator) = &navigator else {
                        // Outside a router the browser follows the href
                        return;
                    };
                    e.prevent_default();
                    navigator.push(&Route::Home);
                    if let Some(window) = window() {
                        if let Err(err) = window.location().set_hash(id) {
                            warn!("Failed to set location hash: {:?}", err);
                        }
                    }
                }
                LinkAction::Follow => {}
            }
        })
    };

    let menu_open = nav_state.is_menu_open();

    html! {
        <nav id={NAVBAR_ID} class={classes!("navbar", nav_state.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"K Entertainment"}
                </Link<Route>>

                <button
                    id="navToggle"
                    ref={toggle_ref}
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-controls="navMenu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li>
                            <a class="nav-link" href={link.href} onclick={link_click(link.href)}>
                                {link.label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}

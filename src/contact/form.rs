use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::message::{MessageSlot, SubmissionResult};
use super::sink::{configured_sink, SubmissionSink};
use super::validate::{validate, ContactFields, Field};
use crate::config::FORM_MESSAGE_DISPLAY_MS;

enum FieldAction {
    Set(Field, String),
    Reset,
}

#[derive(Default, PartialEq)]
struct FormFields(ContactFields);

impl Reducible for FormFields {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FieldAction::Set(field, value) => {
                let mut fields = self.0.clone();
                fields.set(field, value);
                Rc::new(FormFields(fields))
            }
            FieldAction::Reset => Rc::new(FormFields::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Identifies the shown result for its dismiss timer.
    pub token: u64,
    /// Whether the inputs should be cleared.
    pub reset: bool,
}

/// Validates `fields`, hands valid submissions to `sink` and replaces the
/// shown result. Fields are kept as typed when validation fails.
pub fn submit(
    fields: &ContactFields,
    slot: &mut MessageSlot,
    sink: &dyn SubmissionSink,
) -> SubmitOutcome {
    let (result, reset) = match validate(fields) {
        Ok(()) => {
            sink.deliver(fields.clone());
            (SubmissionResult::success(), true)
        }
        Err(err) => {
            debug!("Contact form rejected: {}", err);
            (err.into(), false)
        }
    };
    SubmitOutcome {
        token: slot.show(result),
        reset,
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_reducer(FormFields::default);
    let slot = use_mut_ref(MessageSlot::default);
    let redraw = use_force_update();
    let sink = use_memo(|_| configured_sink(), ());

    let on_input = |field: Field| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = match e.target_dyn_into::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            };
            fields.dispatch(FieldAction::Set(field, value));
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let slot = slot.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let outcome = submit(&fields.0, &mut slot.borrow_mut(), &**sink);
            if outcome.reset {
                fields.dispatch(FieldAction::Reset);
            }
            let token = outcome.token;
            redraw.force_update();

            let slot = slot.clone();
            let redraw = redraw.clone();
            Timeout::new(FORM_MESSAGE_DISPLAY_MS, move || {
                if slot.borrow_mut().expire(token) {
                    redraw.force_update();
                }
            })
            .forget();
        })
    };

    let message = slot.borrow().current().map(|result| {
        html! {
            <div class={classes!("form-message", result.kind.class())} role="status">
                {result.message.clone()}
            </div>
        }
    });

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit} novalidate={true}>
            <div class="form-row">
                <label class="form-field">
                    <span>{"Name"}</span>
                    <input type="text" name="name" autocomplete="name"
                        value={fields.0.name.clone()} oninput={on_input(Field::Name)} />
                </label>
                <label class="form-field">
                    <span>{"Email"}</span>
                    <input type="email" name="email" autocomplete="email"
                        value={fields.0.email.clone()} oninput={on_input(Field::Email)} />
                </label>
            </div>
            <label class="form-field">
                <span>{"Subject"}</span>
                <input type="text" name="subject"
                    value={fields.0.subject.clone()} oninput={on_input(Field::Subject)} />
            </label>
            <label class="form-field">
                <span>{"Message"}</span>
                <textarea name="message" rows="6"
                    value={fields.0.message.clone()} oninput={on_input(Field::Message)} />
            </label>
            { for message }
            <button type="submit" class="btn-primary form-submit">{"Send Message"}</button>
        </form>
    }
}

use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{error, warn};
use web_sys::{window, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::controller::{self, GateAction, GateState};
use super::storage::LocalStorage;
use crate::config::{AGE_EXIT_URL, GATE_FOCUS_DELAY_MS};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

#[function_component(AgeGate)]
pub fn age_gate() -> Html {
    let scroll_lock = use_context::<ScrollLock>().unwrap_or_else(ScrollLock::body);
    let state = use_state(|| controller::resolve(&LocalStorage::open(), Utc::now()));
    let lock_guard = use_mut_ref(|| None::<ScrollLockGuard>);
    let confirm_ref = use_node_ref();

    // Lock the page while prompting and move focus once the modal has painted
    {
        let lock_guard = lock_guard.clone();
        let confirm_ref = confirm_ref.clone();
        use_effect_with_deps(
            move |state| {
                if *state == GateState::Verified {
                    lock_guard.borrow_mut().take();
                } else if lock_guard.borrow().is_none() {
                    *lock_guard.borrow_mut() = Some(scroll_lock.acquire("age-gate"));
                    Timeout::new(GATE_FOCUS_DELAY_MS, move || {
                        if let Some(button) = confirm_ref.cast::<HtmlElement>() {
                            if let Err(e) = button.focus() {
                                warn!("Failed to focus age gate: {:?}", e);
                            }
                        }
                    })
                    .forget();
                }
                || ()
            },
            *state,
        );
    }

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: GateAction| {
            let next = controller::apply(&LocalStorage::open(), *state, action, Utc::now());
            if next == GateState::Exited {
                if let Some(window) = window() {
                    if let Err(e) = window.location().set_href(AGE_EXIT_URL) {
                        error!("Failed to leave site: {:?}", e);
                    }
                }
            }
            state.set(next);
        })
    };

    let onkeydown = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(action) = controller::key_action(&e.key()) {
                e.prevent_default();
                dispatch.emit(action);
            }
        })
    };

    let on_confirm = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(GateAction::Confirm))
    };
    let on_exit = Callback::from(move |_: MouseEvent| dispatch.emit(GateAction::Exit));

    if *state == GateState::Verified {
        return html! {};
    }

    html! {
        <div id="ageGate" class="age-gate" role="dialog" aria-modal="true"
            aria-labelledby="ageGateTitle" onkeydown={onkeydown}>
            <style>
                {r#"
                .age-gate {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: rgba(5, 8, 16, 0.92);
                    backdrop-filter: blur(12px);
                }
                .age-gate-card {
                    max-width: 460px;
                    width: 100%;
                    padding: 2.5rem;
                    text-align: center;
                    border-radius: 20px;
                    background: rgba(18, 22, 36, 0.95);
                    border: 1px solid rgba(0, 212, 255, 0.15);
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
                }
                .age-gate-card h2 {
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                    color: #fff;
                }
                .age-gate-card p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .age-gate-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                "#}
            </style>
            <div class="age-gate-card">
                <h2 id="ageGateTitle">{"Age Verification"}</h2>
                <p>
                    {"K Entertainment Studio archives contain material intended for mature audiences. "}
                    {"Please confirm that you are 18 years of age or older to continue."}
                </p>
                <div class="age-gate-actions">
                    <button id="ageConfirm" ref={confirm_ref} class="btn-primary" onclick={on_confirm}>
                        {"I am 18 or older"}
                    </button>
                    <button id="ageExit" class="btn-secondary" onclick={on_exit}>
                        {"Exit"}
                    </button>
                </div>
            </div>
        </div>
    }
}

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::lead::models::SubmitOutcome;

pub const MODAL_ID: &str = "modal";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub outcome: Option<SubmitOutcome>,
}

pub enum ModalAction {
    Open,
    Close,
    ShowOutcome(SubmitOutcome),
}

impl ModalState {
    /// Applies `action`, returning whether anything changed. Opening an open
    /// modal or closing a closed one is a no-op.
    pub fn apply(&mut self, action: ModalAction) -> bool {
        match action {
            // A fresh open drops the previous outcome, so the form is shown
            // again instead of the last thank-you or error message.
            ModalAction::Open => {
                if self.open {
                    return false;
                }
                self.open = true;
                self.outcome = None;
                true
            }
            ModalAction::Close => {
                if !self.open {
                    return false;
                }
                self.open = false;
                true
            }
            ModalAction::ShowOutcome(outcome) => {
                self.outcome = Some(outcome);
                true
            }
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub state: ModalState,
    pub on_action: Callback<ModalAction>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Page scrolling is locked while the dialog is up.
    {
        let open = props.state.open;
        use_effect_with_deps(
            move |open| {
                set_body_overflow(if *open { "hidden" } else { "auto" });
                || ()
            },
            open,
        );
    }

    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_action.emit(ModalAction::Close);
                    }
                });

                if let Some(document) = &document {
                    let _ = document
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_backdrop_click = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e
                .target_dyn_into::<Element>()
                .map_or(false, |target| target.id() == MODAL_ID);
            if on_backdrop {
                on_action.emit(ModalAction::Close);
            }
        })
    };

    let close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ModalAction::Close))
    };

    let on_outcome = {
        let on_action = props.on_action.clone();
        Callback::from(move |outcome: SubmitOutcome| {
            on_action.emit(ModalAction::ShowOutcome(outcome))
        })
    };

    let display = if props.state.open { "display: block;" } else { "display: none;" };

    html! {
        <div id={MODAL_ID} class="modal" style={display} onclick={on_backdrop_click}>
            <div class="modal-content">
                <span class="close" onclick={close.clone()}>{"×"}</span>
                {
                    match &props.state.outcome {
                        Some(outcome) => html! { <OutcomeView outcome={outcome.clone()} on_close={close} /> },
                        None => html! {
                            <>
                                <h2>{"Оставьте заявку"}</h2>
                                <p class="modal-subtitle">
                                    {"Расскажем, как бот закроет рутину именно в вашем бизнесе. Перезвоним в течение 24 часов."}
                                </p>
                                <LeadForm {on_outcome} />
                            </>
                        },
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OutcomeViewProps {
    outcome: SubmitOutcome,
    on_close: Callback<MouseEvent>,
}

#[function_component(OutcomeView)]
fn outcome_view(props: &OutcomeViewProps) -> Html {
    let content = props.outcome.content();

    html! {
        <div class="modal-outcome" style="text-align: center; padding: 20px 0;">
            <div style="font-size: 4rem; margin-bottom: 20px;">{content.icon}</div>
            <h2 style={format!("color: {}; margin-bottom: 16px;", content.accent)}>{content.title}</h2>
            <p style="color: #64748b; margin-bottom: 24px;">{content.text}</p>
            if let Some(detail) = content.detail.clone() {
                <p class="outcome-detail">{detail}</p>
            }
            <button class="cta-button" onclick={props.on_close.clone()}>{"Закрыть"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let mut state = ModalState::default();
        assert!(!state.apply(ModalAction::Close));
        assert!(!state.apply(ModalAction::Close));
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn open_then_close() {
        let mut state = ModalState::default();
        assert!(state.apply(ModalAction::Open));
        assert!(state.open);
        assert!(!state.apply(ModalAction::Open));
        assert!(state.apply(ModalAction::Close));
        assert!(!state.open);
    }

    #[test]
    fn outcome_replaces_form_until_reopened() {
        let mut state = ModalState::default();
        state.apply(ModalAction::Open);
        state.apply(ModalAction::ShowOutcome(SubmitOutcome::Success));
        assert_eq!(state.outcome, Some(SubmitOutcome::Success));

        state.apply(ModalAction::Close);
        // Closing keeps the outcome; only a fresh open brings the form back.
        assert_eq!(state.outcome, Some(SubmitOutcome::Success));

        state.apply(ModalAction::Open);
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn reducer_keeps_same_state_when_nothing_changes() {
        let state = Rc::new(ModalState::default());
        let next = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = state.clone().reduce(ModalAction::Open);
        assert!(!Rc::ptr_eq(&state, &opened));
        assert!(opened.open);
    }
}

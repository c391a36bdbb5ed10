use dioxus::prelude::*;

use crate::vm::QuizIntent;

/// Blocking "end early?" prompt. Clicking the backdrop declines.
#[component]
pub fn ConfirmEndModal(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div {
            class: "quiz-modal-overlay",
            onclick: move |_| on_intent.call(QuizIntent::CancelEnd),
            div {
                class: "quiz-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "quiz-modal-title",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "quiz-modal-title", id: "quiz-modal-title", "End quiz?" }
                p { class: "quiz-modal-body", "Are you sure you want to end the quiz early?" }
                div { class: "quiz-modal-actions",
                    button {
                        class: "btn quiz-modal-cancel",
                        id: "quiz-end-cancel",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::CancelEnd),
                        "Keep Going"
                    }
                    button {
                        class: "btn btn-danger",
                        id: "quiz-end-confirm",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::ConfirmEnd),
                        "End Quiz"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::confirm::ConfirmEndModal;
use crate::vm::{OptionVm, QuestionVm, QuizIntent};

#[component]
pub fn QuestionPanel(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let timer_class = if question.time_urgent {
        "quiz-timer quiz-timer--urgent"
    } else {
        "quiz-timer"
    };
    let options = question.options.clone();

    rsx! {
        div { class: "quiz-question",
            header { class: "quiz-question__header",
                span { class: "quiz-counter", id: "quiz-counter", "{question.counter_label}" }
                span { class: "{timer_class}", id: "quiz-timer", "Time Left: {question.time_left_label}" }
            }
            h1 { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-options",
                for (index, option) in options.into_iter().enumerate() {
                    OptionButton { key: "{index}", option, on_intent }
                }
            }
            footer { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    id: "quiz-previous",
                    r#type: "button",
                    disabled: !question.can_go_back,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{question.next_label}"
                }
                button {
                    class: "btn btn-danger",
                    id: "quiz-end",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::RequestEnd),
                    "End Quiz"
                }
            }
            if question.confirming_end {
                ConfirmEndModal { on_intent }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if option.selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let text = option.text.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::SelectAnswer(text.clone())),
            "{option.text}"
        }
    }
}

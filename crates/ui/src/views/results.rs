use dioxus::prelude::*;

use crate::vm::{QuizIntent, ResultsVm, ReviewItemVm};

#[component]
pub fn ResultsPanel(results: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let items = results.items.clone();

    rsx! {
        div { class: "quiz-results",
            h2 { class: "quiz-results__title", "Quiz Completed!" }
            p { class: "quiz-score", id: "quiz-score", "{results.score_label}" }
            div { class: "quiz-review",
                for item in items {
                    ReviewItem { key: "{item.heading}", item }
                }
            }
            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart Quiz"
            }
        }
    }
}

#[component]
fn ReviewItem(item: ReviewItemVm) -> Element {
    let (item_class, answer_class) = if item.is_correct {
        ("quiz-review-item quiz-review-item--correct", "quiz-answer--correct")
    } else {
        ("quiz-review-item quiz-review-item--incorrect", "quiz-answer--incorrect")
    };

    rsx! {
        div { class: "{item_class}",
            p { class: "quiz-review-item__question", "{item.heading}" }
            p { class: "quiz-review-item__answer",
                "Your Answer: "
                span { class: "{answer_class}", "{item.your_answer}" }
            }
            if let Some(correct) = item.correct_answer.as_ref() {
                p { class: "quiz-review-item__correct", "Correct Answer: {correct}" }
            }
        }
    }
}

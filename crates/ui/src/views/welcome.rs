use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub fn WelcomePanel(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-welcome",
            h1 { class: "quiz-welcome__title", "Welcome to the Blockchain Quiz!" }
            button {
                class: "btn btn-primary",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Quiz"
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus::core::Task;
use services::{TICK_INTERVAL, run_countdown};

use super::question::QuestionPanel;
use super::results::ResultsPanel;
use super::welcome::WelcomePanel;
use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizScreenVm, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_hook(|| QuizVm::new(ctx.question_bank(), ctx.settings()).map(Signal::new));

    match vm {
        Ok(vm) => rsx! {
            QuizScreen { vm }
        },
        Err(err) => rsx! {
            div { class: "quiz-card",
                p { class: "quiz-error", "{err.message()}" }
            }
        },
    }
}

/// Renders the current phase and runs the per-question countdown.
///
/// One tick task exists per countdown generation. Any reset (navigation,
/// restart) or opening the end-early prompt changes the timer key, which
/// cancels the running task before a new one is spawned.
#[component]
pub fn QuizScreen(vm: Signal<QuizVm>) -> Element {
    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        vm.write().dispatch(intent);
    });

    let timer_key = use_memo(move || vm.read().timer_key());
    let mut ticker = use_signal(|| None::<Task>);
    use_effect(move || {
        let key = timer_key();
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        let Some(generation) = key else {
            return;
        };
        tracing::trace!(generation, "countdown task spawned");
        let task = spawn(async move {
            let mut vm = vm;
            run_countdown(TICK_INTERVAL, move || vm.write().tick(generation)).await;
            tracing::trace!(generation, "countdown task finished");
        });
        ticker.set(Some(task));
    });

    let screen = vm.read().screen();

    rsx! {
        div { class: "quiz-card",
            match screen {
                QuizScreenVm::Welcome => rsx! {
                    WelcomePanel { on_intent: dispatch }
                },
                QuizScreenVm::Question(question) => rsx! {
                    QuestionPanel { question, on_intent: dispatch }
                },
                QuizScreenVm::Results(results) => rsx! {
                    ResultsPanel { results, on_intent: dispatch }
                },
            }
        }
    }
}

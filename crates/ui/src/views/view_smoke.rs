use std::sync::Arc;

use quiz_core::QuizSettings;
use quiz_core::bank::blockchain_bank;
use quiz_core::model::{Question, QuestionBank};

use super::test_harness::{quiz_vm_after, setup_app_harness, setup_screen_harness};
use crate::vm::{QuizIntent, QuizVm};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_welcome() {
    let mut harness = setup_app_harness(blockchain_bank());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Welcome to the Blockchain Quiz!"),
        "missing welcome title in {html}"
    );
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_bank_error() {
    let mut harness = setup_app_harness(QuestionBank::new(Vec::new()));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No questions available for this quiz."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_renders_first_question() {
    let vm = quiz_vm_after([
        QuizIntent::Start,
        QuizIntent::SelectAnswer("To store data".into()),
    ]);
    let mut harness = setup_screen_harness(vm);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Question 1 of 10",
        "Time Left: 30s",
        "What is the main function of a smart contract?",
        "To automate agreements",
        "quiz-option--selected",
        "Previous",
        "Next",
        "End Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Submit"), "unexpected Submit in {html}");
    assert!(!html.contains("quiz-timer--urgent"), "unexpected urgency in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_renders_submit_on_last_question() {
    let mut intents = vec![QuizIntent::Start];
    intents.extend(std::iter::repeat_n(QuizIntent::Next, 9));
    let mut harness = setup_screen_harness(quiz_vm_after(intents));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 10 of 10"), "missing counter in {html}");
    assert!(html.contains("Submit"), "missing Submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_renders_urgent_timer() {
    let mut vm = quiz_vm_after([QuizIntent::Start]);
    let generation = vm.engine().timer_generation();
    for _ in 0..25 {
        vm.tick(generation);
    }
    let mut harness = setup_screen_harness(vm);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Time Left: 5s"), "missing time in {html}");
    assert!(html.contains("quiz-timer--urgent"), "missing urgency in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_renders_end_confirmation() {
    let vm = quiz_vm_after([QuizIntent::Start, QuizIntent::RequestEnd]);
    let mut harness = setup_screen_harness(vm);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Are you sure you want to end the quiz early?"),
        "missing confirmation in {html}"
    );
    assert!(html.contains("Keep Going"), "missing cancel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_smoke_renders_breakdown() {
    let vm = quiz_vm_after([
        QuizIntent::Start,
        QuizIntent::SelectAnswer("To automate agreements".into()),
        QuizIntent::Next,
        QuizIntent::SelectAnswer("Python".into()),
        QuizIntent::RequestEnd,
        QuizIntent::ConfirmEnd,
    ]);
    let mut harness = setup_screen_harness(vm);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Quiz Completed!",
        "You scored 1 out of 10.",
        "quiz-review-item--correct",
        "quiz-review-item--incorrect",
        "Correct Answer: Solidity",
        "Restart Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Time Left"), "timer still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_renders_duplicate_options() {
    let bank = QuestionBank::new(vec![Question::new(
        "Pick one",
        ["Same", "Same", "Other"],
        "Other",
    )]);
    let mut vm = QuizVm::new(Arc::new(bank), QuizSettings::default()).expect("bank has a question");
    vm.dispatch(QuizIntent::Start);
    let mut harness = setup_screen_harness(vm);
    harness.rebuild();
    let html = harness.render();
    assert_eq!(
        html.matches("class=\"quiz-option\"").count(),
        3,
        "expected three option buttons in {html}"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn question_screen_smoke_auto_advances_after_timeout() {
    let mut harness = setup_screen_harness(quiz_vm_after([QuizIntent::Start]));
    harness.rebuild();
    harness.settle().await;

    harness.advance_secs(10).await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing counter in {html}");
    assert!(html.contains("Time Left: 20s"), "missing time in {html}");

    harness.advance_secs(20).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 10"), "missing counter in {html}");
    assert!(html.contains("Time Left: 30s"), "timer not reset in {html}");

    harness.advance_secs(5).await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 10"), "missing counter in {html}");
    assert!(html.contains("Time Left: 25s"), "timer not running in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn question_screen_smoke_pauses_timer_while_confirming() {
    let mut harness = setup_screen_harness(quiz_vm_after([QuizIntent::Start]));
    harness.rebuild();
    harness.settle().await;

    harness.advance_secs(2).await;
    assert!(harness.render().contains("Time Left: 28s"));

    harness.dispatch(QuizIntent::RequestEnd);
    harness.settle().await;
    harness.advance_secs(5).await;
    let html = harness.render();
    assert!(
        html.contains("Are you sure you want to end the quiz early?"),
        "missing confirmation in {html}"
    );
    assert!(html.contains("Time Left: 28s"), "timer ran while confirming in {html}");

    harness.dispatch(QuizIntent::CancelEnd);
    harness.settle().await;
    harness.advance_secs(1).await;
    let html = harness.render();
    assert!(html.contains("Time Left: 27s"), "timer did not resume in {html}");
    assert!(html.contains("Question 1 of 10"), "missing counter in {html}");
}

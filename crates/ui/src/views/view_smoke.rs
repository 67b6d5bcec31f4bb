use std::sync::Arc;

use chrono::Duration;
use dioxus::prelude::*;
use quiz_core::model::{OptionLetter, QuestionId};
use quiz_core::{CanvasSize, FeedbackTier, QuestionOutcome, QuizLayout, ScoreReport};
use services::{FinishedSnapshot, OptionSnapshot, QuestionSnapshot, SessionState};
use storage::Storage;

use super::quiz::{QuestionPanelProps, ResultPanelProps};
use super::test_harness::{
    PendingRepo, build_questions, drive_dom, setup_in_memory_harness, setup_quiz_harness,
};
use crate::views::{QuestionPanel, ResultPanel};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_in_memory_harness(build_questions(3, OptionLetter::A));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing header in {html}");
    assert!(html.contains("A. alpha"), "missing option in {html}");
    assert!(html.contains("quiz-advance--disabled"), "button should start disabled in {html}");
    assert!(html.contains("quiz-mascot"), "missing mascot in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loading_state() {
    let mut harness = setup_quiz_harness(Arc::new(PendingRepo));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Loading question bank"), "missing loading text in {html}");
    assert!(!html.contains("quiz-mascot"), "mascot shown while loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_bank_error() {
    let mut harness = setup_in_memory_harness(Vec::new());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("could not be loaded"), "missing error in {html}");
    assert!(html.contains("no questions available"), "missing detail in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_missing_file_error() {
    let path = std::env::temp_dir().join("quiz-ui-smoke-missing-bank.csv");
    let mut harness = setup_quiz_harness(Storage::csv(path).questions);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("question bank not found"), "missing detail in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_results_after_last_answer() {
    let mut harness = setup_in_memory_harness(build_questions(2, OptionLetter::C));
    harness.rebuild();
    harness.drive_async().await;

    let mut machine = harness.handles.machine();
    harness.dom.in_runtime(|| {
        assert_eq!(machine.read().state(), SessionState::InProgress);
        for _ in 0..2 {
            machine.write().select_option(OptionLetter::C);
            machine.write().advance();
        }
    });
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Quiz results"), "missing title in {html}");
    assert!(html.contains("2 / 2"), "missing score in {html}");
    assert!(html.contains("Click anywhere to restart"), "missing hint in {html}");
    assert!(html.contains("quiz-tier--perfect"), "missing tier class in {html}");
}

#[test]
fn question_panel_marks_selection_and_last_button() {
    let question = QuestionSnapshot {
        number: 5,
        total: 5,
        prompt: "Pick one".to_string(),
        options: OptionLetter::ALL
            .iter()
            .map(|&letter| OptionSnapshot {
                letter,
                text: format!("choice {letter}"),
                selected: letter == OptionLetter::B,
            })
            .collect(),
        selected: Some(OptionLetter::B),
        advance_enabled: true,
        is_last: true,
    };
    let layout = QuizLayout::compute(CanvasSize::default());

    let mut dom = VirtualDom::new_with_props(QuestionPanel, QuestionPanelProps { question, layout });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Question 5 of 5"), "missing header in {html}");
    assert!(html.contains("quiz-option--selected"), "missing selection in {html}");
    assert!(html.contains("See results"), "missing last label in {html}");
    assert!(!html.contains("quiz-advance--disabled"), "button disabled in {html}");
    assert!(html.contains("top: 212px"), "option not placed from layout in {html}");
}

#[test]
fn result_panel_shows_feedback_for_tier() {
    let finished = FinishedSnapshot {
        report: ScoreReport {
            score: 1,
            total: 4,
            percentage: 25.0,
            tier: FeedbackTier::NeedsImprovement,
            outcomes: (1..=4)
                .map(|id| QuestionOutcome {
                    question_id: QuestionId::new(id),
                    chosen: Some(OptionLetter::A),
                    correct: if id == 1 { OptionLetter::A } else { OptionLetter::D },
                })
                .collect(),
        },
        elapsed: Some(Duration::seconds(42)),
    };
    let layout = QuizLayout::compute(CanvasSize::default());

    let mut dom = VirtualDom::new_with_props(ResultPanel, ResultPanelProps { finished, layout });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("1 / 4"), "missing score in {html}");
    assert!(html.contains("25%"), "missing percentage in {html}");
    assert!(html.contains("Please review the material"), "missing feedback in {html}");
    assert!(html.contains("Time: 0:42"), "missing elapsed in {html}");
}

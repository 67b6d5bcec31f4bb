use quiz_core::model::{OptionLetter, QuestionId, QuestionRecord};
use quiz_core::time::fixed_now;
use quiz_core::{CanvasSize, FeedbackTier, Point, QuizLayout};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    Clock, QuizMachine, QuizSnapshot, SessionState, Transition, handle_click, load_bank,
};
use storage::Storage;

fn bank_of(size: u64) -> Vec<QuestionRecord> {
    (1..=size)
        .map(|id| {
            QuestionRecord::new(
                QuestionId::new(id),
                format!("Question {id}"),
                ["red", "green", "blue", "black"].map(String::from),
                OptionLetter::B,
            )
            .unwrap()
        })
        .collect()
}

fn click_option(
    machine: &mut QuizMachine<StdRng>,
    layout: &QuizLayout,
    letter: OptionLetter,
) -> Transition {
    let rect = layout.option_rect(letter);
    handle_click(machine, layout, Point::new(rect.x + 10.0, rect.y + 10.0))
}

fn click_advance(machine: &mut QuizMachine<StdRng>, layout: &QuizLayout) -> Transition {
    let button = layout.advance_button;
    handle_click(machine, layout, Point::new(button.x, button.y))
}

async fn loaded_machine(size: u64) -> QuizMachine<StdRng> {
    let storage = Storage::in_memory(bank_of(size));
    let bank = load_bank(storage.questions.as_ref()).await.unwrap();
    let mut machine =
        QuizMachine::new(StdRng::seed_from_u64(2024)).with_clock(Clock::fixed(fixed_now()));
    assert_eq!(machine.bank_loaded(bank), Transition::Started);
    machine
}

#[tokio::test]
async fn full_session_by_clicks_then_restart() {
    let layout = QuizLayout::compute(CanvasSize::default());
    let mut machine = loaded_machine(8).await;

    let mut answered = 0;
    while machine.state() == SessionState::InProgress {
        let letter = if answered % 2 == 0 {
            OptionLetter::B
        } else {
            OptionLetter::A
        };
        assert_eq!(
            click_option(&mut machine, &layout, letter),
            Transition::Selected(letter)
        );
        click_advance(&mut machine, &layout);
        answered += 1;
    }
    assert_eq!(answered, 5);

    let QuizSnapshot::Finished(finished) = machine.snapshot() else {
        panic!("expected finished snapshot");
    };
    assert_eq!(finished.report.score, 3);
    assert_eq!(finished.report.total, 5);
    assert_eq!(finished.report.tier, FeedbackTier::Pass);

    let retained = machine.session().cloned().unwrap();
    assert_eq!(
        handle_click(&mut machine, &layout, Point::new(1.0, 1.0)),
        Transition::Started
    );
    assert!(machine.session().unwrap().answers().is_empty());
    assert_eq!(retained.answers().len(), 5);
}

#[tokio::test]
async fn advance_button_is_inert_until_selection() {
    let layout = QuizLayout::compute(CanvasSize::new(1280.0, 800.0));
    let mut machine = loaded_machine(3).await;

    assert_eq!(click_advance(&mut machine, &layout), Transition::Ignored);
    let QuizSnapshot::InProgress(question) = machine.snapshot() else {
        panic!("expected question snapshot");
    };
    assert!(!question.advance_enabled);
    assert_eq!(question.number, 1);
    assert_eq!(question.total, 3);
}

#[tokio::test]
async fn small_bank_yields_short_session() {
    let layout = QuizLayout::compute(CanvasSize::default());
    let mut machine = loaded_machine(2).await;
    assert_eq!(machine.session().unwrap().len(), 2);

    click_option(&mut machine, &layout, OptionLetter::B);
    assert_eq!(click_advance(&mut machine, &layout), Transition::Advanced);

    let QuizSnapshot::InProgress(question) = machine.snapshot() else {
        panic!("expected question snapshot");
    };
    assert!(question.is_last);

    click_option(&mut machine, &layout, OptionLetter::B);
    assert_eq!(click_advance(&mut machine, &layout), Transition::Finished);
    assert_eq!(machine.report().unwrap().tier, FeedbackTier::Perfect);
}

#[tokio::test]
async fn empty_bank_locks_the_quiz() {
    let layout = QuizLayout::compute(CanvasSize::default());
    let storage = Storage::in_memory(Vec::new());
    let bank = load_bank(storage.questions.as_ref()).await.unwrap();

    let mut machine = QuizMachine::new(StdRng::seed_from_u64(1));
    assert_eq!(machine.bank_loaded(bank), Transition::Failed);
    assert_eq!(
        click_option(&mut machine, &layout, OptionLetter::A),
        Transition::Ignored
    );
    assert!(matches!(machine.snapshot(), QuizSnapshot::Error { .. }));
}

#[tokio::test]
async fn missing_csv_surfaces_load_failure() {
    let storage = Storage::csv(std::env::temp_dir().join("quiz-flow-missing-bank.csv"));
    let err = load_bank(storage.questions.as_ref()).await.unwrap_err();

    let mut machine = QuizMachine::new(StdRng::seed_from_u64(1));
    assert_eq!(machine.bank_failed(err), Transition::Failed);
    let QuizSnapshot::Error { message } = machine.snapshot() else {
        panic!("expected error snapshot");
    };
    assert!(message.contains("not found"));
}

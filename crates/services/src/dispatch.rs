//! Maps raw pointer and keyboard input onto machine operations.

use rand::Rng;

use quiz_core::model::OptionLetter;
use quiz_core::{HitTarget, Point, QuizLayout};

use crate::quiz::{QuizMachine, SessionState, Transition};

/// Keyboard shortcuts understood by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Select(OptionLetter),
    Advance,
}

impl KeyCommand {
    /// `A`-`D` (any case) and `1`-`4` select, `Enter` advances. Anything else is `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        if key == "Enter" {
            return Some(Self::Advance);
        }
        if let Some(letter) = OptionLetter::parse(key) {
            return Some(Self::Select(letter));
        }
        key.parse::<usize>()
            .ok()
            .and_then(|digit| digit.checked_sub(1))
            .and_then(OptionLetter::from_index)
            .map(Self::Select)
    }
}

/// Applies a click at `point` (canvas coordinates).
///
/// Any click restarts a finished quiz; clicks while loading or after an error do nothing.
pub fn handle_click<R: Rng>(
    machine: &mut QuizMachine<R>,
    layout: &QuizLayout,
    point: Point,
) -> Transition {
    match machine.state() {
        SessionState::Loading | SessionState::Error => Transition::Ignored,
        SessionState::Finished => machine.restart(),
        SessionState::InProgress => match layout.hit_test(point) {
            HitTarget::OptionHit(letter) => machine.select_option(letter),
            HitTarget::AdvanceButtonHit => machine.advance(),
            HitTarget::NoHit => Transition::Ignored,
        },
    }
}

/// Applies a key press. Recognised keys restart a finished quiz.
pub fn handle_key<R: Rng>(machine: &mut QuizMachine<R>, key: &str) -> Transition {
    let Some(command) = KeyCommand::from_key(key) else {
        return Transition::Ignored;
    };
    match (machine.state(), command) {
        (SessionState::Loading | SessionState::Error, _) => Transition::Ignored,
        (SessionState::Finished, _) => machine.restart(),
        (SessionState::InProgress, KeyCommand::Select(letter)) => machine.select_option(letter),
        (SessionState::InProgress, KeyCommand::Advance) => machine.advance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::CanvasSize;
    use quiz_core::model::{QuestionBank, QuestionId, QuestionRecord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn machine_with(size: u64) -> QuizMachine<StdRng> {
        let bank = QuestionBank::new(
            (1..=size)
                .map(|id| {
                    QuestionRecord::new(
                        QuestionId::new(id),
                        format!("Q{id}"),
                        ["a", "b", "c", "d"].map(String::from),
                        OptionLetter::D,
                    )
                    .unwrap()
                })
                .collect(),
        );
        let mut machine = QuizMachine::new(StdRng::seed_from_u64(3));
        machine.bank_loaded(bank);
        machine
    }

    fn center(layout: &QuizLayout, letter: OptionLetter) -> Point {
        let rect = layout.option_rect(letter);
        Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    #[test]
    fn key_mapping() {
        assert_eq!(KeyCommand::from_key("a"), Some(KeyCommand::Select(OptionLetter::A)));
        assert_eq!(KeyCommand::from_key("D"), Some(KeyCommand::Select(OptionLetter::D)));
        assert_eq!(KeyCommand::from_key("3"), Some(KeyCommand::Select(OptionLetter::C)));
        assert_eq!(KeyCommand::from_key("Enter"), Some(KeyCommand::Advance));
        assert_eq!(KeyCommand::from_key("0"), None);
        assert_eq!(KeyCommand::from_key("5"), None);
        assert_eq!(KeyCommand::from_key("Escape"), None);
    }

    #[test]
    fn clicks_are_ignored_while_loading() {
        let layout = QuizLayout::compute(CanvasSize::default());
        let mut machine: QuizMachine<StdRng> = QuizMachine::new(StdRng::seed_from_u64(1));
        let point = center(&layout, OptionLetter::A);
        assert_eq!(handle_click(&mut machine, &layout, point), Transition::Ignored);
        assert_eq!(handle_key(&mut machine, "a"), Transition::Ignored);
        assert_eq!(machine.state(), SessionState::Loading);
    }

    #[test]
    fn click_selects_then_button_advances() {
        let layout = QuizLayout::compute(CanvasSize::default());
        let mut machine = machine_with(2);

        let button = layout.advance_button;
        let on_button = Point::new(button.x + 1.0, button.y + 1.0);
        assert_eq!(handle_click(&mut machine, &layout, on_button), Transition::Ignored);

        let hit = handle_click(&mut machine, &layout, center(&layout, OptionLetter::C));
        assert_eq!(hit, Transition::Selected(OptionLetter::C));
        assert_eq!(handle_click(&mut machine, &layout, on_button), Transition::Advanced);
        assert_eq!(machine.session().unwrap().answers(), &[OptionLetter::C]);
    }

    #[test]
    fn empty_space_click_keeps_selection() {
        let layout = QuizLayout::compute(CanvasSize::default());
        let mut machine = machine_with(2);
        handle_click(&mut machine, &layout, center(&layout, OptionLetter::B));
        let outcome = handle_click(&mut machine, &layout, Point::new(5.0, 5.0));
        assert_eq!(outcome, Transition::Ignored);
        assert_eq!(machine.selected(), Some(OptionLetter::B));
    }

    #[test]
    fn keyboard_drives_a_whole_session() {
        let mut machine = machine_with(3);
        for _ in 0..3 {
            handle_key(&mut machine, "4");
            handle_key(&mut machine, "Enter");
        }
        assert_eq!(machine.state(), SessionState::Finished);
        assert_eq!(machine.report().unwrap().score, 3);

        assert_eq!(handle_key(&mut machine, "x"), Transition::Ignored);
        assert_eq!(handle_key(&mut machine, "Enter"), Transition::Started);
    }
}

use chrono::Duration;

use quiz_core::{FeedbackTier, Rect, ScoreReport};
use services::{FinishedSnapshot, QuestionSnapshot};

pub const RESULT_TITLE: &str = "Quiz results";
pub const RESULT_HINT: &str = "Click anywhere to restart";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub header: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub advance_label: &'static str,
    pub advance_enabled: bool,
}

#[must_use]
pub fn map_question(snapshot: &QuestionSnapshot) -> QuestionVm {
    QuestionVm {
        header: format!("Question {} of {}", snapshot.number, snapshot.total),
        prompt: snapshot.prompt.clone(),
        options: snapshot
            .options
            .iter()
            .map(|option| OptionVm {
                label: format!("{}. {}", option.letter, option.text),
                selected: option.selected,
            })
            .collect(),
        advance_label: advance_label(snapshot.is_last),
        advance_enabled: snapshot.advance_enabled,
    }
}

#[must_use]
pub fn advance_label(is_last: bool) -> &'static str {
    if is_last { "See results" } else { "Next" }
}

#[must_use]
pub fn feedback_message(tier: FeedbackTier) -> &'static str {
    match tier {
        FeedbackTier::Perfect => "Excellent! A perfect score!",
        FeedbackTier::Good => "Very good work, keep it up!",
        FeedbackTier::Pass => "You passed, but some areas need work.",
        FeedbackTier::NeedsImprovement => "Please review the material and try again.",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    pub score: String,
    pub percentage: String,
    pub feedback: &'static str,
    pub tier_class: &'static str,
    /// One mark per question, in session order.
    pub marks: String,
    pub elapsed: Option<String>,
}

#[must_use]
pub fn map_result(finished: &FinishedSnapshot) -> ResultVm {
    let ScoreReport {
        score,
        total,
        percentage,
        tier,
        outcomes,
    } = &finished.report;
    ResultVm {
        score: format!("{score} / {total}"),
        percentage: format!("{percentage:.0}%"),
        feedback: feedback_message(*tier),
        tier_class: tier.as_str(),
        marks: outcomes
            .iter()
            .map(|outcome| if outcome.is_correct() { "✓" } else { "✗" })
            .collect::<Vec<_>>()
            .join(" "),
        elapsed: finished.elapsed.map(format_elapsed),
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("Time: {}:{:02}", seconds / 60, seconds % 60)
}

/// Absolute placement inside the canvas element.
#[must_use]
pub fn rect_style(rect: Rect) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        rect.x, rect.y, rect.width, rect.height
    )
}

//! Canvas geometry shared by the renderer and the click hit-tester.
//!
//! Both sides must read positions from [`QuizLayout`]; a region drawn at one place and
//! hit-tested at another silently swallows clicks.

use serde::{Deserialize, Serialize};

use crate::model::OptionLetter;

const MARGIN_X: f32 = 50.0;
const HEADER_TOP_RATIO: f32 = 0.1;
const HEADER_HEIGHT: f32 = 40.0;
const PROMPT_HEIGHT: f32 = 100.0;
const OPTION_HEIGHT: f32 = 60.0;
const OPTION_SPACING: f32 = 15.0;
const BUTTON_WIDTH: f32 = 150.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_MARGIN: f32 = 50.0;
const MASCOT_BOTTOM_GAP: f32 = 10.0;

/// Drawing surface size in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(960.0, 720.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Containment is half-open: the top/left edges belong to the
/// rectangle, the bottom/right edges do not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Logical target of a pointer click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    OptionHit(OptionLetter),
    AdvanceButtonHit,
    NoHit,
}

/// Vertical anchors of the result screen, as fractions of the canvas height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultLayout {
    pub title_y: f32,
    pub score_y: f32,
    pub feedback_y: f32,
    pub hint_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizLayout {
    pub canvas: CanvasSize,
    /// "Question n of m" line.
    pub header: Rect,
    pub prompt: Rect,
    /// Option boxes in `OptionLetter::ALL` order.
    pub options: [Rect; 4],
    pub advance_button: Rect,
    pub result: ResultLayout,
}

impl QuizLayout {
    #[must_use]
    pub fn compute(canvas: CanvasSize) -> Self {
        let content_width = (canvas.width - MARGIN_X * 2.0).max(0.0);
        let header = Rect::new(
            MARGIN_X,
            canvas.height * HEADER_TOP_RATIO,
            content_width,
            HEADER_HEIGHT,
        );
        let prompt = Rect::new(MARGIN_X, header.bottom(), content_width, PROMPT_HEIGHT);

        let options_top = prompt.bottom();
        let options = std::array::from_fn(|i| {
            // i < 4, exact in f32
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f32 * (OPTION_HEIGHT + OPTION_SPACING);
            Rect::new(MARGIN_X, options_top + offset, content_width, OPTION_HEIGHT)
        });

        let advance_button = Rect::new(
            canvas.width - BUTTON_WIDTH - BUTTON_MARGIN,
            canvas.height - BUTTON_HEIGHT - BUTTON_MARGIN,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        Self {
            canvas,
            header,
            prompt,
            options,
            advance_button,
            result: ResultLayout {
                title_y: canvas.height * 0.2,
                score_y: canvas.height * 0.45,
                feedback_y: canvas.height * 0.65,
                hint_y: canvas.height * 0.85,
            },
        }
    }

    #[must_use]
    pub fn option_rect(&self, letter: OptionLetter) -> Rect {
        self.options[letter.index()]
    }

    /// Top edge of the mascot caption for a given font size.
    #[must_use]
    pub fn mascot_top(&self, size: f32) -> f32 {
        self.canvas.height - size - MASCOT_BOTTOM_GAP
    }

    /// Maps a click in canvas coordinates to the region under it.
    ///
    /// Options take precedence over the advance button.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> HitTarget {
        for letter in OptionLetter::ALL {
            if self.option_rect(letter).contains(point) {
                return HitTarget::OptionHit(letter);
            }
        }
        if self.advance_button.contains(point) {
            return HitTarget::AdvanceButtonHit;
        }
        HitTarget::NoHit
    }
}

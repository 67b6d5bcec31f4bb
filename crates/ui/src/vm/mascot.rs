use std::time::Duration;

use services::SessionState;

/// Caption font size, in canvas pixels.
pub const MASCOT_SIZE: f32 = 36.0;
/// Animation step; the mascot moves `SPEED_X` pixels per frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const START_X: f32 = 50.0;
const SPEED_X: f32 = 2.0;
const LEFT_BOUND: f32 = 10.0;
// Rendered caption width is font dependent; bounce against a fixed estimate.
const WIDTH_ESTIMATE: f32 = 150.0;
const FACE_INTERVAL: Duration = Duration::from_millis(500);
const FACES: [&str; 2] = ["ヽ(=^･ω･^=)丿", "ヾ(*ΦωΦ)ツ"];

/// Decorative caption bouncing along the bottom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mascot {
    x: f32,
    speed_x: f32,
    face: usize,
    since_switch: Duration,
}

impl Default for Mascot {
    fn default() -> Self {
        Self {
            x: START_X,
            speed_x: SPEED_X,
            face: 0,
            since_switch: Duration::ZERO,
        }
    }
}

impl Mascot {
    /// Advances one frame: move, bounce off either edge, and swap faces every 500 ms.
    pub fn tick(&mut self, canvas_width: f32, elapsed: Duration) {
        self.x += self.speed_x;
        if self.x < LEFT_BOUND || self.x > canvas_width - WIDTH_ESTIMATE {
            self.speed_x = -self.speed_x;
        }

        self.since_switch += elapsed;
        if self.since_switch > FACE_INTERVAL {
            self.face = (self.face + 1) % FACES.len();
            self.since_switch = Duration::ZERO;
        }
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn face(&self) -> &'static str {
        FACES[self.face]
    }

    #[must_use]
    pub fn is_moving_right(&self) -> bool {
        self.speed_x > 0.0
    }
}

/// Shown over the quiz and the results, never while loading or on error.
#[must_use]
pub fn mascot_visible(state: SessionState) -> bool {
    matches!(state, SessionState::InProgress | SessionState::Finished)
}

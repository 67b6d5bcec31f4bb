mod mascot;
mod quiz_vm;

pub use mascot::{FRAME_INTERVAL, MASCOT_SIZE, Mascot, mascot_visible};
pub use quiz_vm::{
    OptionVm, QuestionVm, RESULT_HINT, RESULT_TITLE, ResultVm, advance_label, feedback_message,
    map_question, map_result, rect_style,
};

use dioxus::prelude::*;

use quiz_core::{Point, QuizLayout};
use services::{FinishedSnapshot, QuestionSnapshot, handle_click, handle_key, load_bank};

use crate::context::AppContext;
use crate::views::{QuizScreen, ViewState, view_state_from_snapshot};
use crate::vm::{
    FRAME_INTERVAL, MASCOT_SIZE, Mascot, RESULT_HINT, RESULT_TITLE, map_question, map_result,
    mascot_visible, rect_style,
};

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use services::QuizMachine;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let layout = ctx.layout();
    let canvas = layout.canvas;
    let mut machine = use_signal(|| ctx.new_machine());
    let mascot = use_signal(Mascot::default);

    let repository = ctx.question_bank();
    use_future(move || {
        let repository = repository.clone();
        async move {
            let mut machine = machine;
            match load_bank(repository.as_ref()).await {
                Ok(bank) => {
                    machine.write().bank_loaded(bank);
                }
                Err(err) => {
                    machine.write().bank_failed(err);
                }
            }
        }
    });

    use_future(move || async move {
        let mut mascot = mascot;
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            mascot.write().tick(canvas.width, FRAME_INTERVAL);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(machine);
            }
        }
    }

    let on_click = move |evt: MouseEvent| {
        let coords = evt.data.element_coordinates();
        // canvas pixels stay far below f32 precision limits
        #[allow(clippy::cast_possible_truncation)]
        let point = Point::new(coords.x as f32, coords.y as f32);
        let transition = handle_click(&mut *machine.write(), &layout, point);
        tracing::trace!(?transition, x = point.x, y = point.y, "canvas click");
    };

    let on_key = move |evt: KeyboardEvent| {
        let key = evt.data.key().to_string();
        let transition = handle_key(&mut *machine.write(), &key);
        tracing::trace!(?transition, %key, "key press");
    };

    let state = machine.read().state();
    let view_state = view_state_from_snapshot(machine.read().snapshot());
    let canvas_style = format!("width: {}px; height: {}px;", canvas.width, canvas.height);

    rsx! {
        div {
            class: "quiz-canvas",
            id: "quiz-canvas",
            tabindex: "0",
            style: "{canvas_style}",
            onclick: on_click,
            onkeydown: on_key,
            onmounted: move |evt| async move {
                let _ = evt.data.set_focus(true).await;
            },
            match view_state {
                ViewState::Loading => rsx! {
                    p { class: "quiz-status", "Loading question bank..." }
                },
                ViewState::Error { error, detail } => rsx! {
                    div { class: "quiz-status quiz-status--error",
                        p { "{error.message()}" }
                        p { class: "quiz-status__detail", "{detail}" }
                    }
                },
                ViewState::Ready(QuizScreen::Question(question)) => rsx! {
                    QuestionPanel { question, layout }
                },
                ViewState::Ready(QuizScreen::Results(finished)) => rsx! {
                    ResultPanel { finished, layout }
                },
            }
            if mascot_visible(state) {
                MascotCaption { mascot: mascot(), layout }
            }
        }
    }
}

#[component]
pub fn QuestionPanel(question: QuestionSnapshot, layout: QuizLayout) -> Element {
    let vm = map_question(&question);
    let button_class = if vm.advance_enabled {
        "quiz-advance"
    } else {
        "quiz-advance quiz-advance--disabled"
    };

    rsx! {
        div { class: "quiz-header", style: rect_style(layout.header), "{vm.header}" }
        div { class: "quiz-prompt", style: rect_style(layout.prompt), "{vm.prompt}" }
        for (option, rect) in vm.options.iter().zip(layout.options) {
            div {
                key: "{option.label}",
                class: if option.selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
                style: rect_style(rect),
                "{option.label}"
            }
        }
        div { class: button_class, style: rect_style(layout.advance_button), "{vm.advance_label}" }
    }
}

#[component]
pub fn ResultPanel(finished: FinishedSnapshot, layout: QuizLayout) -> Element {
    let vm = map_result(&finished);
    let result = layout.result;
    let line = |y: f32| format!("top: {y}px;");

    rsx! {
        div { class: "quiz-result quiz-result--title", style: line(result.title_y), "{RESULT_TITLE}" }
        div { class: "quiz-result quiz-result--score", style: line(result.score_y),
            "{vm.score}"
            span { class: "quiz-result__percentage", " ({vm.percentage})" }
        }
        div { class: "quiz-result quiz-result--feedback quiz-tier--{vm.tier_class}",
            style: line(result.feedback_y),
            "{vm.feedback}"
            div { class: "quiz-result__marks", "{vm.marks}" }
            if let Some(elapsed) = vm.elapsed.as_ref() {
                div { class: "quiz-result__elapsed", "{elapsed}" }
            }
        }
        div { class: "quiz-result quiz-result--hint", style: line(result.hint_y), "{RESULT_HINT}" }
    }
}

#[component]
fn MascotCaption(mascot: Mascot, layout: QuizLayout) -> Element {
    let style = format!(
        "left: {}px; top: {}px; font-size: {MASCOT_SIZE}px;",
        mascot.x(),
        layout.mascot_top(MASCOT_SIZE)
    );
    rsx! {
        div { class: "quiz-mascot", style: "{style}", "{mascot.face()}" }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    machine: Rc<RefCell<Option<Signal<QuizMachine<StdRng>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, machine: Signal<QuizMachine<StdRng>>) {
        *self.machine.borrow_mut() = Some(machine);
    }

    pub(crate) fn machine(&self) -> Signal<QuizMachine<StdRng>> {
        (*self.machine.borrow()).expect("quiz machine registered")
    }
}

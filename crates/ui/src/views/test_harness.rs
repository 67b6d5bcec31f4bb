use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{OptionLetter, QuestionId, QuestionRecord};
use storage::{QuestionBankRepository, Storage, StorageError};

use crate::context::{QuizSettings, UiApp, build_app_context};
use crate::views::{QuizTestHandles, QuizView};

#[derive(Clone)]
struct TestApp {
    question_bank: Arc<dyn QuestionBankRepository>,
    settings: QuizSettings,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<dyn QuestionBankRepository> {
        Arc::clone(&self.question_bank)
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }
}

/// Never finishes loading.
pub struct PendingRepo;

#[async_trait::async_trait]
impl QuestionBankRepository for PendingRepo {
    async fn load_questions(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        std::future::pending().await
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarnessRoot(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn build_questions(count: u64, correct: OptionLetter) -> Vec<QuestionRecord> {
    (1..=count)
        .map(|id| {
            QuestionRecord::new(
                QuestionId::new(id),
                format!("Prompt number {id}"),
                ["alpha", "beta", "gamma", "delta"].map(String::from),
                correct,
            )
            .expect("valid question")
        })
        .collect()
}

pub fn setup_quiz_harness(question_bank: Arc<dyn QuestionBankRepository>) -> QuizHarness {
    let app = Arc::new(TestApp {
        question_bank,
        settings: QuizSettings {
            seed: Some(7),
            ..QuizSettings::default()
        },
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarnessRoot,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    QuizHarness { dom, handles }
}

pub fn setup_in_memory_harness(questions: Vec<QuestionRecord>) -> QuizHarness {
    setup_quiz_harness(Storage::in_memory(questions).questions)
}

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::CanvasSize;
use services::DEFAULT_QUIZ_SIZE;
use storage::{QuestionBankRepository, Storage};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, QuizSettings, UiApp, build_app_context};

const DEFAULT_BANK_PATH: &str = "questions.csv";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidBankPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_quiz_size(raw: String, flag: &'static str) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(ArgsError::InvalidNumber { flag, raw }),
    }
}

fn parse_seed(raw: String, flag: &'static str) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn parse_dimension(raw: String, flag: &'static str) -> Result<f32, ArgsError> {
    match raw.trim().parse::<u32>() {
        // window sizes are far below f32's exact integer range
        #[allow(clippy::cast_precision_loss)]
        Ok(px) if px > 0 => Ok(px as f32),
        _ => Err(ArgsError::InvalidNumber { flag, raw }),
    }
}

struct DesktopApp {
    question_bank: Arc<dyn QuestionBankRepository>,
    settings: QuizSettings,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<dyn QuestionBankRepository> {
        Arc::clone(&self.question_bank)
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    bank_path: PathBuf,
    settings: QuizSettings,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path>] [--questions <n>] [--seed <u64>]");
    eprintln!("                      [--width <px>] [--height <px>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank {DEFAULT_BANK_PATH}");
    eprintln!("  --questions {DEFAULT_QUIZ_SIZE}");
    eprintln!("  --seed (random)");
    eprintln!("  --width 960 --height 720");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_SIZE, QUIZ_SEED, QUIZ_WIDTH, QUIZ_HEIGHT, RUST_LOG");
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    /// Environment values are read first; flags override them.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut bank_path = PathBuf::from(DEFAULT_BANK_PATH);
        let mut settings = QuizSettings::default();

        if let Some(value) = env("QUIZ_BANK_PATH") {
            bank_path = PathBuf::from(value);
        }
        if let Some(value) = env("QUIZ_SIZE") {
            settings.quiz_size = parse_quiz_size(value, "QUIZ_SIZE")?;
        }
        if let Some(value) = env("QUIZ_SEED") {
            settings.seed = Some(parse_seed(value, "QUIZ_SEED")?);
        }
        if let Some(value) = env("QUIZ_WIDTH") {
            settings.canvas.width = parse_dimension(value, "QUIZ_WIDTH")?;
        }
        if let Some(value) = env("QUIZ_HEIGHT") {
            settings.canvas.height = parse_dimension(value, "QUIZ_HEIGHT")?;
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    bank_path = PathBuf::from(value);
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    settings.quiz_size = parse_quiz_size(value, "--questions")?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    settings.seed = Some(parse_seed(value, "--seed")?);
                }
                "--width" => {
                    let value = require_value(args, "--width")?;
                    settings.canvas.width = parse_dimension(value, "--width")?;
                }
                "--height" => {
                    let value = require_value(args, "--height")?;
                    settings.canvas.height = parse_dimension(value, "--height")?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            bank_path,
            settings,
        }))
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(log_fmt::layer().with_target(false))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    tracing::info!(
        bank = %args.bank_path.display(),
        quiz_size = args.settings.quiz_size,
        seed = ?args.settings.seed,
        "starting quiz"
    );

    // The bank is read asynchronously by the UI once the window is up.
    let storage = Storage::csv(args.bank_path);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        question_bank: storage.questions,
        settings: args.settings,
    });
    let context = build_app_context(&app);

    let CanvasSize { width, height } = args.settings.canvas;
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)))
            .with_resizable(false)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

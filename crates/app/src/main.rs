use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizSettings;
use quiz_core::bank::blockchain_bank;
use quiz_core::model::QuestionBank;
use ui::{App, UiApp, build_app_context};

/// Environment variable holding the `tracing` filter directive.
const LOG_ENV: &str = "QUIZ_LOG";

struct DesktopApp {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| format!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let bank = Arc::new(blockchain_bank());
    let settings = QuizSettings::default();
    tracing::info!(
        questions = bank.len(),
        question_secs = settings.question_secs(),
        "launching quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { bank, settings });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Blockchain Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

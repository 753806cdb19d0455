use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learner_core::{
    GapPriority, Learner, LearningPath, LearningPathId, PathStatus, SkillGap, SkillGapId,
};
use services::{InMemoryLearnerState, LearnerStateProvider, load_learner_file};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLearnerPath { raw: String },
    ConflictingSources,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLearnerPath { raw } => write!(f, "invalid --learner value: {raw}"),
            ArgsError::ConflictingSources => {
                write!(f, "--learner and --demo cannot be used together")
            }
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

struct DesktopApp {
    learners: Arc<InMemoryLearnerState>,
}

impl UiApp for DesktopApp {
    fn learner_state(&self) -> Arc<dyn LearnerStateProvider> {
        self.learners.clone()
    }
}

/// Where the signed-in learner record comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LearnerSource {
    File(PathBuf),
    Demo,
    /// Nothing supplied; the dashboard stays in its loading state.
    Unset,
}

struct Args {
    source: LearnerSource,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--learner <path.json>] [--demo]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --learner <path>   Learner record exported by the web front end (JSON)");
    eprintln!("  --demo             Use a built-in sample learner");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARNER_FILE       Fallback for --learner");
    eprintln!("  RUST_LOG           Log filter (default: info)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut learner_file = std::env::var("LEARNER_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut demo = false;
        let mut explicit_file = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--learner" => {
                    let value = require_value(args, "--learner")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLearnerPath { raw: value });
                    }
                    learner_file = Some(PathBuf::from(value));
                    explicit_file = true;
                }
                "--demo" => demo = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let source = match (learner_file, demo) {
            (Some(_), true) if explicit_file => return Err(ArgsError::ConflictingSources),
            // An explicit --demo wins over the environment fallback.
            (_, true) => LearnerSource::Demo,
            (Some(path), false) => LearnerSource::File(path),
            (None, false) => LearnerSource::Unset,
        };

        Ok(Self { source })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. under a test runner) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn demo_learner() -> Learner {
    let path = LearningPath::new(
        LearningPathId::new(1),
        "Cloud-Native Backend Engineering",
        40.0,
        35,
        PathStatus::InProgress,
    );
    Learner::new("Ava")
        .with_path(path)
        .with_skill_gaps(vec![
            SkillGap::new(SkillGapId::new(1), "Kubernetes", 1, 4, GapPriority::High),
            SkillGap::new(SkillGapId::new(2), "Distributed Tracing", 2, 4, GapPriority::High),
            SkillGap::new(SkillGapId::new(3), "SQL Query Tuning", 2, 3, GapPriority::Medium),
            SkillGap::new(SkillGapId::new(4), "Terraform", 3, 4, GapPriority::Low),
        ])
        .with_completion_rate(35)
}

fn build_learner_state(
    source: &LearnerSource,
) -> Result<InMemoryLearnerState, Box<dyn std::error::Error>> {
    let state = InMemoryLearnerState::new();
    match source {
        LearnerSource::File(path) => state.set_learner(load_learner_file(path)?),
        LearnerSource::Demo => {
            tracing::info!("using built-in demo learner");
            state.set_learner(demo_learner());
        }
        LearnerSource::Unset => {
            tracing::warn!("no learner record supplied; dashboard will show the loading state");
        }
    }
    Ok(state)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let learners = Arc::new(build_learner_state(&parsed.source)?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { learners });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learning Dashboard")
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
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

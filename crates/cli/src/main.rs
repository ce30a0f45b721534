use std::sync::atomic::AtomicBool;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use melkman::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod artifact;

#[derive(Parser)]
#[command(name = "melkman")]
#[command(about = "Melkman convex-hull engine runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrictnessArg {
    Strict,
    Inclusive,
}

impl From<StrictnessArg> for Strictness {
    fn from(s: StrictnessArg) -> Self {
        match s {
            StrictnessArg::Strict => Strictness::Strict,
            StrictnessArg::Inclusive => Strictness::Inclusive,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate a random simple chain, run the hull engine to completion,
    /// and optionally write a JSON artifact
    Run {
        /// Sampling attempts (accepted chain length is usually lower)
        #[arg(long, default_value_t = 100)]
        npoints: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, value_enum, default_value_t = StrictnessArg::Strict)]
        strictness: StrictnessArg,
        /// Path for the JSON run artifact
        #[arg(long)]
        out: Option<String>,
    },
    /// Robustness run: repeated generate/run/check rounds
    Test {
        #[arg(long, default_value_t = 5000)]
        trials: u64,
        #[arg(long, default_value_t = 300)]
        npoints: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, value_enum, default_value_t = StrictnessArg::Strict)]
        strictness: StrictnessArg,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            npoints,
            seed,
            width,
            height,
            strictness,
            out,
        } => run(npoints, seed, width, height, strictness.into(), out),
        Action::Test {
            trials,
            npoints,
            seed,
            width,
            height,
            strictness,
        } => test(trials, npoints, seed, width, height, strictness.into()),
    }
}

fn run(
    npoints: usize,
    seed: u64,
    width: f64,
    height: f64,
    strictness: Strictness,
    out: Option<String>,
) -> Result<()> {
    let area = Area2::new(Vec2::new(0.0, 0.0), Vec2::new(width, height));
    let chain = generate_chain(area, npoints, ReplayToken { seed, index: 0 });
    tracing::info!(requested = npoints, accepted = chain.len(), "chain");

    let mut engine = Melkman::with_chain(chain, EngineCfg { strictness });
    engine.run();
    let valid = engine.check();
    tracing::info!(
        hull_edges = engine.hull().len().saturating_sub(1),
        rotation = ?engine.rotation(),
        valid,
        "run"
    );

    if let Some(out) = out {
        let path = artifact::write_run(&out, &engine, seed)?;
        tracing::info!(path = %path.display(), "artifact");
    }
    anyhow::ensure!(valid, "hull failed the validity check");
    Ok(())
}

fn test(
    trials: u64,
    npoints: usize,
    seed: u64,
    width: f64,
    height: f64,
    strictness: Strictness,
) -> Result<()> {
    let cfg = TrialCfg {
        area: Area2::new(Vec2::new(0.0, 0.0), Vec2::new(width, height)),
        npoints,
        trials,
        seed,
        strictness,
    };
    let cancel = AtomicBool::new(false);
    let report = run_trials(cfg, &cancel);
    tracing::info!(
        passed = report.passed,
        failed = report.failed,
        cancelled = report.cancelled,
        "test"
    );
    anyhow::ensure!(
        report.failed == 0,
        "{} of {} checks failed",
        report.failed,
        report.checks()
    );
    Ok(())
}

//! Robustness harness: repeated generate / run / check rounds.
//!
//! Each trial builds a fresh chain and engine, runs the hull to completion,
//! and asks the offline oracle whether the result is convex and covering. A
//! failed check means an engine or precondition bug, so the loop stops there
//! instead of retrying. Cancellation is cooperative and coarse: the flag is
//! read between trials only, one chain/hull construction being an atomic
//! unit of work.

use std::sync::atomic::{AtomicBool, Ordering};

use nalgebra::Vector2;

use crate::chain::rand::{generate_chain, Area2, ReplayToken};
use crate::engine::{EngineCfg, Melkman, Strictness};

/// Robustness-run configuration.
#[derive(Clone, Copy, Debug)]
pub struct TrialCfg {
    pub area: Area2,
    /// Sampling attempts per chain (accepted count is usually lower).
    pub npoints: usize,
    pub trials: u64,
    pub seed: u64,
    pub strictness: Strictness,
}

impl Default for TrialCfg {
    fn default() -> Self {
        Self {
            area: Area2::new(Vector2::new(0.0, 0.0), Vector2::new(800.0, 600.0)),
            npoints: 300,
            trials: 5000,
            seed: 0,
            strictness: Strictness::Strict,
        }
    }
}

/// Outcome of a robustness run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialReport {
    pub passed: u64,
    pub failed: u64,
    pub cancelled: bool,
}

impl TrialReport {
    #[inline]
    pub fn checks(&self) -> u64 {
        self.passed + self.failed
    }
}

/// Run up to `cfg.trials` independent trials, stopping early on the first
/// validator failure or when `cancel` is raised between trials.
pub fn run_trials(cfg: TrialCfg, cancel: &AtomicBool) -> TrialReport {
    let mut report = TrialReport::default();
    for k in 0..cfg.trials {
        if cancel.load(Ordering::Relaxed) {
            report.cancelled = true;
            break;
        }
        let tok = ReplayToken {
            seed: cfg.seed,
            index: k,
        };
        let chain = generate_chain(cfg.area, cfg.npoints, tok);
        let mut engine = Melkman::with_chain(
            chain,
            EngineCfg {
                strictness: cfg.strictness,
            },
        );
        engine.run();
        if engine.check() {
            report.passed += 1;
        } else {
            report.failed += 1;
            break;
        }
    }
    report
}

//! Melkman's algorithm: incremental convex hull of a simple polygonal chain.
//!
//! This crate is the algorithmic core behind the visualizer shells: the
//! chain-validity gate, the deque-based hull state machine, the random chain
//! generator, and the post-hoc hull oracle. Rendering, windowing and event
//! handling are external collaborators that only read the views exposed here
//! (`Melkman::chain`, `Melkman::hull`, `Melkman::latest`, `Melkman::finished`)
//! and never participate in the algorithm itself.

pub mod chain;
pub mod engine;
pub mod geom;
pub mod trials;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chain::rand::{generate_chain, Area2, ReplayToken};
    pub use crate::chain::{Append, Chain, Vertex};
    pub use crate::engine::{check_hull, EngineCfg, Melkman, Rotation, Strictness};
    pub use crate::trials::{run_trials, TrialCfg, TrialReport};
    pub use nalgebra::Vector2 as Vec2;
}

//! Simple polygonal chain: the validity gate in front of the hull engine.
//!
//! Purpose
//! - Own the insertion-indexed vertex sequence and enforce the simple-chain
//!   invariant (no two non-adjacent edges intersect) on every append.
//!   Melkman's algorithm is only correct on simple chains, so the gate is
//!   the precondition the engine relies on.
//! - Provide the seeded random generator used by the step and test modes.

pub mod rand;
mod types;

pub use types::{Append, Chain, Vertex};

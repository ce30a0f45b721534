//! Incremental Hull Engine: Melkman's algorithm over a simple chain.
//!
//! Purpose
//! - Maintain the convex hull of a growing simple polygonal chain in O(1)
//!   amortized per accepted point, as a deque with the closing vertex
//!   duplicated at both ends.
//! - Offer both consumption modes behind one state machine: interactive
//!   appends and stepping through a pre-built chain.
//!
//! Why this design
//! - Strict vs inclusive boundary handling is a comparison policy
//!   (`Strictness`) on one engine, not two parallel implementations.
//! - Hull entries are chain vertices stored by value; the deque orders a
//!   subset of the chain and never aliases into it.

mod step;
mod types;
mod validate;

pub use step::Melkman;
pub use types::{EngineCfg, Rotation, Strictness};
pub use validate::check_hull;

#[cfg(test)]
mod tests;

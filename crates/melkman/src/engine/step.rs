//! The Melkman state machine: initialization scan and deque update step.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::chain::{Append, Chain, Vertex};
use crate::geom::orientation;

use super::types::{EngineCfg, Rotation, Strictness};
use super::validate::check_hull;

/// Incremental convex hull of a growing simple polygonal chain.
///
/// The hull deque holds chain vertices by value and is kept "open" with the
/// same vertex duplicated at both ends once initialized, so front and back
/// insertion stay symmetric and consecutive pairs trace the full cycle.
///
/// One engine instance owns one chain for one run; construct fresh per
/// session. All work is caller-driven: one accepted point or one consumed
/// position per call, no blocking and no shared state.
#[derive(Clone, Debug)]
pub struct Melkman {
    cfg: EngineCfg,
    chain: Chain,
    hull: VecDeque<Vertex>,
    rotation: Option<Rotation>,
    /// Number of chain positions consumed so far.
    cursor: usize,
    latest: Option<Vertex>,
    /// Step mode drains a pre-built chain; interactive mode never finishes.
    step_mode: bool,
}

impl Melkman {
    /// Interactive engine over an initially empty chain; feed it with
    /// [`Melkman::add_point`].
    pub fn new(cfg: EngineCfg) -> Self {
        Self::from_parts(Chain::new(), cfg, false)
    }

    /// Step engine over a pre-built chain; drive it with
    /// [`Melkman::advance`] or [`Melkman::run`].
    pub fn with_chain(chain: Chain, cfg: EngineCfg) -> Self {
        Self::from_parts(chain, cfg, true)
    }

    fn from_parts(chain: Chain, cfg: EngineCfg, step_mode: bool) -> Self {
        Self {
            cfg,
            chain,
            hull: VecDeque::new(),
            rotation: None,
            cursor: 0,
            latest: None,
            step_mode,
        }
    }

    /// The chain, insertion order.
    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Hull cycle (duplicate endpoint included); empty until initialized.
    #[inline]
    pub fn hull(&self) -> &VecDeque<Vertex> {
        &self.hull
    }

    /// Rotational sense fixed at initialization; `None` while the hull is
    /// empty (fewer than three consistent points, or degenerate collinear
    /// input — a valid terminal state, not an error).
    #[inline]
    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    /// Most recently accepted (interactive) or consumed (step) vertex.
    #[inline]
    pub fn latest(&self) -> Option<Vertex> {
        self.latest
    }

    /// True when a pre-built chain is fully consumed. Interactive engines
    /// never finish.
    #[inline]
    pub fn finished(&self) -> bool {
        self.step_mode && self.cursor >= self.chain.len()
    }

    /// Interactive entry point: gate `p` through the chain, then run exactly
    /// one initialization attempt or hull step on accept. A rejected
    /// candidate leaves chain, hull and rotation untouched.
    pub fn add_point(&mut self, p: Vector2<f64>) -> Append {
        let res = self.chain.try_append(p);
        if res.is_accepted() {
            self.consume_next();
        }
        res
    }

    /// Consume the next unconsumed chain position; `None` once exhausted
    /// (repeatable without mutation).
    pub fn advance(&mut self) -> Option<Vertex> {
        self.consume_next()
    }

    /// Drive [`Melkman::advance`] until the chain is exhausted.
    pub fn run(&mut self) {
        while self.advance().is_some() {}
    }

    /// Offline oracle: every chain point on the good side of every hull
    /// edge. O(hull * chain); not part of the online update.
    pub fn check(&self) -> bool {
        check_hull(&self.chain, &self.hull, self.rotation)
    }

    fn consume_next(&mut self) -> Option<Vertex> {
        let v = *self.chain.get(self.cursor)?;
        self.cursor += 1;
        self.latest = Some(v);
        if self.rotation.is_none() {
            self.try_initialize();
        } else {
            self.step(v);
        }
        Some(v)
    }

    /// Initialization attempt for the newest consumed position.
    ///
    /// Strict mode scans: each consumed position `pos >= 2` proposes the
    /// closing triple `(chain[0], chain[pos-1], chain[pos])`; a collinear
    /// result leaves the hull empty and the next point retries one position
    /// further (bounded scan, terminates with an empty hull on fully
    /// collinear input). Inclusive mode seeds unconditionally on the third
    /// point, treating an exactly collinear triple as counter-clockwise.
    fn try_initialize(&mut self) {
        let pos = self.cursor - 1;
        if pos < 2 {
            return;
        }
        let verts = self.chain.vertices();
        let (a, b, c) = (verts[0], verts[pos - 1], verts[pos]);
        let o = orientation(a.p, b.p, c.p);
        let rotation = match self.cfg.strictness {
            Strictness::Strict => match Rotation::from_sign(o) {
                Some(r) => r,
                None => return,
            },
            Strictness::Inclusive => Rotation::from_sign(o).unwrap_or(Rotation::Ccw),
        };
        // Seed [c, a, b, c]: every consecutive triple of the cycle already
        // agrees with the rotation, and the closing vertex sits at both ends.
        self.rotation = Some(rotation);
        self.hull.push_back(c);
        self.hull.push_back(a);
        self.hull.push_back(b);
        self.hull.push_back(c);
    }

    /// One Melkman step for a newly consumed vertex.
    fn step(&mut self, v: Vertex) {
        let rotation = match self.rotation {
            Some(r) => r,
            None => return,
        };
        if self.front_ok(v, rotation) && self.back_ok(v, rotation) {
            // Interior to the current hull cone on both ends: absorbed.
            return;
        }
        // Front and back evictions are independent; the length guards keep a
        // testable pair on degenerate inputs the chain gate still admits.
        while self.hull.len() >= 2 && !self.front_ok(v, rotation) {
            self.hull.pop_front();
        }
        while self.hull.len() >= 2 && !self.back_ok(v, rotation) {
            self.hull.pop_back();
        }
        self.hull.push_front(v);
        self.hull.push_back(v);
    }

    fn front_ok(&self, v: Vertex, rotation: Rotation) -> bool {
        let o = orientation(self.hull[0].p, self.hull[1].p, v.p);
        self.cfg.strictness.edge_ok(o, rotation)
    }

    fn back_ok(&self, v: Vertex, rotation: Rotation) -> bool {
        let n = self.hull.len();
        let o = orientation(self.hull[n - 2].p, self.hull[n - 1].p, v.p);
        self.cfg.strictness.edge_ok(o, rotation)
    }
}

//! Chain model: insertion-indexed vertices and the simple-chain append gate.

use nalgebra::Vector2;

use crate::geom::segments_intersect;

/// A chain point tagged with the 0-based index at which it was accepted.
///
/// The index is permanent and is the vertex's identity: it labels the point
/// for renderers and drives "latest point" comparisons, and it survives even
/// if a chain is later rebuilt from a prefix. Equality compares indices only.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub p: Vector2<f64>,
    pub index: usize,
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}
impl Eq for Vertex {}

/// Result of a candidate append: either a new vertex or a rejection for
/// breaking the simple-chain invariant. Rejection is a normal outcome in
/// interactive use, not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Append {
    Accepted(Vertex),
    Rejected,
}

impl Append {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Append::Accepted(_))
    }
    #[inline]
    pub fn accepted(self) -> Option<Vertex> {
        match self {
            Append::Accepted(v) => Some(v),
            Append::Rejected => None,
        }
    }
}

/// Open polygonal chain, insertion order = index order.
///
/// Invariant: no two non-adjacent edges intersect. `try_append` and
/// `try_append_indexed` are the only way to grow the chain, so the invariant
/// holds by construction.
#[derive(Clone, Debug, Default)]
pub struct Chain {
    verts: Vec<Vertex>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&Vertex> {
        self.verts.get(pos)
    }

    #[inline]
    pub fn last(&self) -> Option<&Vertex> {
        self.verts.last()
    }

    /// Read-only view in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    /// Whether the chain stays simple after appending `p`.
    ///
    /// Tests the candidate trailing edge `(last, p)` against every existing
    /// edge except the one ending at `last` (adjacent, shares the endpoint).
    pub fn stays_simple_with(&self, p: Vector2<f64>) -> bool {
        if self.verts.len() <= 1 {
            return true;
        }
        let last = self.verts[self.verts.len() - 1].p;
        (0..self.verts.len() - 2)
            .all(|i| !segments_intersect(self.verts[i].p, self.verts[i + 1].p, last, p))
    }

    /// Append `p` if the chain stays simple; the new vertex gets
    /// `index = len`. A rejected candidate leaves the chain untouched and
    /// consumes no index.
    pub fn try_append(&mut self, p: Vector2<f64>) -> Append {
        self.try_append_indexed(p, self.verts.len())
    }

    /// Append gate with a caller-chosen index. The generator numbers
    /// vertices by draw attempt, so its rejected draws leave index gaps.
    pub fn try_append_indexed(&mut self, p: Vector2<f64>, index: usize) -> Append {
        if !self.stays_simple_with(p) {
            return Append::Rejected;
        }
        let v = Vertex { p, index };
        self.verts.push(v);
        Append::Accepted(v)
    }
}

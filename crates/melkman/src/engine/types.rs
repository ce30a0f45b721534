//! Configuration and identity types for the hull engine.
//!
//! Kept small and explicit to make `step` and `validate` easy to read.

/// Rotational sense fixed at hull initialization; never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Ccw,
    Cw,
}

impl Rotation {
    /// Orientation sign this rotation expects from hull triples.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Rotation::Ccw => 1,
            Rotation::Cw => -1,
        }
    }

    /// Rotation from an orientation sign; `None` for collinear (0).
    #[inline]
    pub fn from_sign(s: i8) -> Option<Rotation> {
        if s > 0 {
            Some(Rotation::Ccw)
        } else if s < 0 {
            Some(Rotation::Cw)
        } else {
            None
        }
    }
}

/// Boundary-comparison policy: one engine, one switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// A collinear point against the boundary edge is "not ok": the engine
    /// evicts past it, and a fully collinear input never initializes a hull.
    #[default]
    Strict,
    /// Boundary-collinear points are tolerated as still convex; the hull
    /// seeds unconditionally from the first three consumed points.
    Inclusive,
}

impl Strictness {
    /// Whether an orientation sign `o` keeps a point on the good side of a
    /// hull edge for the fixed `rotation`.
    #[inline]
    pub fn edge_ok(self, o: i8, rotation: Rotation) -> bool {
        match self {
            Strictness::Strict => o == rotation.sign(),
            Strictness::Inclusive => o == rotation.sign() || o == 0,
        }
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineCfg {
    pub strictness: Strictness,
}

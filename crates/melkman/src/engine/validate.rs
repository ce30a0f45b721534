//! Post-hoc hull validity oracle.

use std::collections::VecDeque;

use crate::chain::{Chain, Vertex};
use crate::geom::orientation;

use super::types::Rotation;

/// Check every chain point against every hull edge: each must lie on the
/// hull's `rotation` side or on the edge itself (orientation 0).
///
/// O(hull * chain); this is the offline correctness oracle used by the
/// robustness harness, never part of the online update. An uninitialized
/// hull (no rotation, empty deque) is trivially valid.
pub fn check_hull(chain: &Chain, hull: &VecDeque<Vertex>, rotation: Option<Rotation>) -> bool {
    let rotation = match rotation {
        Some(r) => r,
        None => return true,
    };
    if hull.len() < 2 {
        return true;
    }
    for w in 0..hull.len() - 1 {
        let (a, b) = (hull[w], hull[w + 1]);
        for v in chain.vertices() {
            let o = orientation(a.p, b.p, v.p);
            if o != rotation.sign() && o != 0 {
                return false;
            }
        }
    }
    true
}

use nalgebra::vector;
use proptest::prelude::*;

use super::*;
use crate::chain::rand::{generate_chain, Area2, ReplayToken};
use crate::chain::{Append, Chain};

fn interactive(strictness: Strictness) -> Melkman {
    Melkman::new(EngineCfg { strictness })
}

fn feed(m: &mut Melkman, pts: &[[f64; 2]]) {
    for p in pts {
        assert!(m.add_point(vector![p[0], p[1]]).is_accepted());
    }
}

/// Hull cycle as indices, duplicate endpoint stripped, rotated so the
/// smallest index comes first (the deque is one rotation of the expected
/// cycle, never a reflection).
fn hull_cycle(m: &Melkman) -> Vec<usize> {
    let ids: Vec<usize> = m.hull().iter().map(|v| v.index).collect();
    if ids.is_empty() {
        return ids;
    }
    assert_eq!(ids.first(), ids.last(), "hull must close on itself");
    let mut open = ids[..ids.len() - 1].to_vec();
    let min_at = (0..open.len()).min_by_key(|&i| open[i]).unwrap();
    open.rotate_left(min_at);
    open
}

#[test]
fn ccw_square_builds_full_hull() {
    let mut m = interactive(Strictness::Strict);
    feed(&mut m, &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
    assert_eq!(m.rotation(), Some(Rotation::Ccw));
    assert_eq!(hull_cycle(&m), vec![0, 1, 2, 3]);
    assert!(m.check());
    assert_eq!(m.latest().map(|v| v.index), Some(3));
    // Interactive mode never finishes.
    assert!(!m.finished());
}

#[test]
fn cw_square_fixes_clockwise_rotation() {
    let mut m = interactive(Strictness::Strict);
    feed(&mut m, &[[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]]);
    assert_eq!(m.rotation(), Some(Rotation::Cw));
    assert_eq!(hull_cycle(&m), vec![0, 1, 2, 3]);
    assert!(m.check());
}

#[test]
fn interior_point_absorbed() {
    let mut m = interactive(Strictness::Strict);
    feed(&mut m, &[[0.0, 0.0], [4.0, 0.0], [2.0, 2.0], [0.0, 4.0]]);
    // Vertex 2 sits on/inside the triangle 0-1-3 and never reaches the hull.
    assert_eq!(hull_cycle(&m), vec![0, 1, 3]);
    assert!(m.check());
}

#[test]
fn rejected_point_changes_nothing() {
    let mut m = interactive(Strictness::Strict);
    feed(&mut m, &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]);
    let hull_before = hull_cycle(&m);
    let rot_before = m.rotation();
    // Trailing edge to (2,-2) would cross the first chain edge.
    assert_eq!(m.add_point(vector![2.0, -2.0]), Append::Rejected);
    assert_eq!(m.chain().len(), 3);
    assert_eq!(hull_cycle(&m), hull_before);
    assert_eq!(m.rotation(), rot_before);
}

#[test]
fn strict_collinear_input_never_initializes() {
    let mut m = interactive(Strictness::Strict);
    feed(&mut m, &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
    assert!(m.hull().is_empty());
    assert_eq!(m.rotation(), None);
    // Degenerate terminal state is trivially valid.
    assert!(m.check());
}

#[test]
fn strict_scan_skips_collinear_prefix() {
    let mut m = interactive(Strictness::Strict);
    feed(&mut m, &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
    assert!(m.hull().is_empty());
    // The first off-line point completes the scan in one step.
    feed(&mut m, &[[1.0, 2.0]]);
    assert_eq!(m.rotation(), Some(Rotation::Ccw));
    assert_eq!(hull_cycle(&m), vec![0, 3, 4]);
    assert!(m.check());
}

#[test]
fn inclusive_seeds_collinear_triple_as_ccw() {
    let mut m = interactive(Strictness::Inclusive);
    feed(&mut m, &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
    assert_eq!(m.rotation(), Some(Rotation::Ccw));
    assert_eq!(hull_cycle(&m), vec![0, 1, 2]);
    assert!(m.check());
    // A later point above the line restores a proper hull; the collinear
    // mid-point is tolerated on the boundary and stays in the cycle.
    feed(&mut m, &[[1.0, 2.0]]);
    assert_eq!(hull_cycle(&m), vec![0, 1, 2, 3]);
    assert!(m.check());
}

#[test]
fn collinear_hull_extension_strict_vs_inclusive() {
    // Vertex 2 ends up in the middle of the collinear edge 1-3.
    let pts = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [4.0, 8.0]];

    let mut strict = interactive(Strictness::Strict);
    feed(&mut strict, &pts);
    // Strict evicts past the boundary-collinear vertex.
    assert_eq!(hull_cycle(&strict), vec![0, 1, 3]);
    assert!(strict.check());

    let mut inclusive = interactive(Strictness::Inclusive);
    feed(&mut inclusive, &pts);
    // Inclusive tolerates it as still convex.
    assert_eq!(hull_cycle(&inclusive), vec![0, 1, 2, 3]);
    assert!(inclusive.check());
}

#[test]
fn step_mode_drains_prebuilt_chain() {
    let mut chain = Chain::new();
    for p in [
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ] {
        assert!(chain.try_append(p).is_accepted());
    }
    let mut m = Melkman::with_chain(chain, EngineCfg::default());
    assert!(!m.finished());
    assert_eq!(m.advance().map(|v| v.index), Some(0));
    assert_eq!(m.advance().map(|v| v.index), Some(1));
    assert_eq!(m.latest().map(|v| v.index), Some(1));
    // Hull appears with the third consumed vertex.
    assert!(m.hull().is_empty());
    assert_eq!(m.advance().map(|v| v.index), Some(2));
    assert_eq!(m.rotation(), Some(Rotation::Ccw));
    assert_eq!(m.advance().map(|v| v.index), Some(3));
    assert!(m.finished());
    assert_eq!(hull_cycle(&m), vec![0, 1, 2, 3]);
}

#[test]
fn advance_after_finish_is_idempotent() {
    let area = Area2::new(vector![0.0, 0.0], vector![100.0, 100.0]);
    let chain = generate_chain(area, 30, ReplayToken { seed: 5, index: 1 });
    let mut m = Melkman::with_chain(chain, EngineCfg::default());
    m.run();
    assert!(m.finished());
    let hull_before = hull_cycle(&m);
    let len_before = m.chain().len();
    for _ in 0..3 {
        assert_eq!(m.advance(), None);
    }
    assert_eq!(hull_cycle(&m), hull_before);
    assert_eq!(m.chain().len(), len_before);
}

#[test]
fn hull_is_subset_of_chain() {
    let area = Area2::new(vector![0.0, 0.0], vector![800.0, 600.0]);
    let chain = generate_chain(area, 80, ReplayToken { seed: 11, index: 0 });
    let mut m = Melkman::with_chain(chain, EngineCfg::default());
    m.run();
    for h in m.hull() {
        let found = m
            .chain()
            .vertices()
            .iter()
            .any(|v| v.index == h.index && v.p == h.p);
        assert!(found, "hull vertex {} missing from chain", h.index);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_chains_yield_valid_hulls(
        seed in any::<u64>(),
        index in 0u64..512,
        n in 4usize..80,
    ) {
        let area = Area2::new(vector![0.0, 0.0], vector![800.0, 600.0]);
        let chain = generate_chain(area, n, ReplayToken { seed, index });
        prop_assert!(chain.len() <= n);
        let mut m = Melkman::with_chain(chain, EngineCfg::default());
        m.run();
        prop_assert!(m.finished());
        prop_assert!(m.check());
        if !m.hull().is_empty() {
            prop_assert_eq!(
                m.hull().front().map(|v| v.index),
                m.hull().back().map(|v| v.index)
            );
        }
    }

    #[test]
    fn inclusive_mode_is_also_sound(
        seed in any::<u64>(),
        n in 4usize..60,
    ) {
        let area = Area2::new(vector![0.0, 0.0], vector![400.0, 400.0]);
        let chain = generate_chain(area, n, ReplayToken { seed, index: 0 });
        let mut m = Melkman::with_chain(
            chain,
            EngineCfg { strictness: Strictness::Inclusive },
        );
        m.run();
        prop_assert!(m.check());
    }
}

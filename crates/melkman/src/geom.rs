//! Exact 2D orientation and segment-intersection predicates.
//!
//! Purpose
//! - Provide the two sign tests the chain gate and the hull engine are built
//!   on. Both use exact f64 sign semantics (no epsilon): hull maintenance
//!   depends on exact classification of collinearity.

use nalgebra::Vector2;

/// Orientation sign of the ordered triple `(a, b, c)`.
///
/// Sign of the cross product of `b - a` and `c - a`: +1 for a
/// counter-clockwise turn, -1 for clockwise, 0 for collinear.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> i8 {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.x * ac.y - ab.y * ac.x;
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

/// Whether segments `[a,b]` and `[c,d]` intersect anywhere beyond a single
/// shared endpoint.
///
/// Proper interior crossings count, a vertex of one segment lying in the
/// other's interior counts, and collinear overlap of positive length counts.
/// Touching only at one common endpoint does not: adjacent chain edges
/// legitimately share a vertex.
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);

    // Proper crossing: each segment's endpoints strictly straddle the other.
    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    // Fully collinear: intersect iff the 1-D overlap has positive length
    // (touching end to end is just a shared endpoint).
    if d1 == 0 && d2 == 0 && d3 == 0 && d4 == 0 {
        return collinear_overlap(a, b, c, d);
    }
    // Touching: a vertex of one segment inside the other's interior.
    (d1 == 0 && strictly_between(c, d, a))
        || (d2 == 0 && strictly_between(c, d, b))
        || (d3 == 0 && strictly_between(a, b, c))
        || (d4 == 0 && strictly_between(a, b, d))
}

/// 1-D overlap test for four collinear points, projected on the dominant axis.
fn collinear_overlap(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let horizontal =
        (b.x - a.x).abs().max((d.x - c.x).abs()) >= (b.y - a.y).abs().max((d.y - c.y).abs());
    let (lo1, hi1, lo2, hi2) = if horizontal {
        (a.x.min(b.x), a.x.max(b.x), c.x.min(d.x), c.x.max(d.x))
    } else {
        (a.y.min(b.y), a.y.max(b.y), c.y.min(d.y), c.y.max(d.y))
    };
    hi1.min(hi2) > lo1.max(lo2)
}

/// Whether `r`, known collinear with `[p,q]`, lies strictly between `p` and `q`.
fn strictly_between(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    if (q.x - p.x).abs() >= (q.y - p.y).abs() {
        (p.x < r.x && r.x < q.x) || (q.x < r.x && r.x < p.x)
    } else {
        (p.y < r.y && r.y < q.y) || (q.y < r.y && r.y < p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orientation_signs() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        assert_eq!(orientation(a, b, vector![0.0, 4.0]), 1);
        assert_eq!(orientation(a, b, vector![0.0, -4.0]), -1);
        assert_eq!(orientation(a, b, vector![8.0, 0.0]), 0);
        assert_eq!(orientation(a, b, vector![2.0, 0.0]), 0);
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect(
            vector![0.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![4.0, 0.0],
        ));
        // Far apart: no intersection.
        assert!(!segments_intersect(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 2.0],
            vector![1.0, 2.0],
        ));
    }

    #[test]
    fn shared_endpoint_is_not_an_intersection() {
        assert!(!segments_intersect(
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
        ));
        // Collinear but only touching end to end.
        assert!(!segments_intersect(
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 0.0],
            vector![5.0, 0.0],
        ));
    }

    #[test]
    fn vertex_in_interior_counts() {
        // Endpoint of the second segment sits inside the first.
        assert!(segments_intersect(
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 3.0],
        ));
    }

    #[test]
    fn collinear_overlap_counts() {
        assert!(segments_intersect(
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 0.0],
            vector![6.0, 0.0],
        ));
        // One segment fully inside the other.
        assert!(segments_intersect(
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 0.0],
            vector![3.0, 0.0],
        ));
        // Collinear but disjoint.
        assert!(!segments_intersect(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![3.0, 0.0],
        ));
    }
}

//! Planar arrangement of equal-radius circle boundaries, specialized to
//! what the coverage search needs: the exact vertex set.
//!
//! Purpose
//! - The coverage count is piecewise constant on open arrangement faces and
//!   disks are closed, so the global maximum is attained at an arrangement
//!   vertex. Enumerating vertices exactly therefore replaces any plane
//!   discretization without approximation error.
//!
//! Why a specialized arrangement
//! - Circle boundaries of equal radius meet in at most two points per pair,
//!   computable in closed form over the rationals plus one square root. A
//!   full curved-arrangement structure (edges, faces, twin half-edges)
//!   would add nothing the evaluator reads, so only the vertex set is kept.
//!
//! Vertex coordinates
//! - Centers `c₁, c₂` with offset `δ = c₂ - c₁`, `d² = |δ|²`, shared
//!   squared radius `s`: the intersections are `m ± h·perp(δ)` with `m` the
//!   midpoint and `h² = (4s - d²) / (4d²)`. Both coordinates of one vertex
//!   share the root `h²`; `4s = d²` is the tangency (a single rational
//!   vertex), `4s < d²` means the pair does not meet.
//!
//! Code cross-refs: `geom::{Circle, VertexPoint}`, `cover::evaluate`

use num_traits::{Signed, Zero};

use crate::exact::{Rat, SqrtExt};
use crate::geom::{Circle, VertexPoint};

/// Vertex set of the circle-boundary arrangement. Read-only after `build`;
/// vertices are sorted lexicographically by `(x, y)` and exactly
/// deduplicated, so construction is deterministic and idempotent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arrangement {
    vertices: Vec<VertexPoint>,
}

impl Arrangement {
    /// Build the vertex set for a family of equal-radius circles.
    ///
    /// Every pairwise intersection or tangency contributes its vertices;
    /// any circle left without a single intersection vertex (isolated, or
    /// duplicated and isolated) contributes its canonical boundary
    /// representative instead, so no circle is invisible to the search.
    pub fn build(circles: &[Circle]) -> Arrangement {
        let mut vertices: Vec<VertexPoint> = Vec::new();
        let mut touched = vec![false; circles.len()];
        for i in 0..circles.len() {
            for j in (i + 1)..circles.len() {
                let before = vertices.len();
                pair_vertices(&circles[i], &circles[j], &mut vertices);
                if vertices.len() > before {
                    touched[i] = true;
                    touched[j] = true;
                }
            }
        }
        for (i, circle) in circles.iter().enumerate() {
            if !touched[i] {
                vertices.push(circle.boundary_representative());
            }
        }
        // Exact semantic order: coincident vertices coming from different
        // pairs (hence different root representations) collapse here.
        vertices.sort();
        vertices.dedup();
        Arrangement { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[VertexPoint] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Push the 0, 1, or 2 intersection points of a circle pair.
///
/// Coincident centers (duplicate input points) yield coincident circles
/// and contribute no vertex; the representative rule catches them if the
/// duplicate pair is otherwise isolated.
fn pair_vertices(c1: &Circle, c2: &Circle, out: &mut Vec<VertexPoint>) {
    debug_assert_eq!(c1.sq_radius, c2.sq_radius, "shared-radius invariant");
    let dx = &c2.center.x - &c1.center.x;
    let dy = &c2.center.y - &c1.center.y;
    let d2 = &dx * &dx + &dy * &dy;
    if d2.is_zero() {
        return;
    }
    let four = Rat::from_integer(4.into());
    let s = &c1.sq_radius;
    // h² = (4s - d²) / (4d²); negative means the boundaries do not meet.
    let h2 = (&four * s - &d2) / (&four * &d2);
    if h2.is_negative() {
        return;
    }
    let half = Rat::new(1.into(), 2.into());
    let mx = (&c1.center.x + &c2.center.x) * &half;
    let my = (&c1.center.y + &c2.center.y) * &half;
    if h2.is_zero() {
        // Tangency: the midpoint, a rational vertex.
        out.push(VertexPoint::from_rats(mx, my));
        return;
    }
    // m ± h·perp(δ) with perp(δ) = (-dy, dx) and h = √h².
    out.push(VertexPoint::new(
        SqrtExt::new(mx.clone(), -dy.clone(), h2.clone()),
        SqrtExt::new(my.clone(), dx.clone(), h2.clone()),
    ));
    out.push(VertexPoint::new(
        SqrtExt::new(mx, dy, h2.clone()),
        SqrtExt::new(my, -dx, h2),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{rat, ratio};
    use crate::geom::{circles_from_points, Point};

    fn points(coords: &[(i64, i64)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(x, y)| Point::new(rat(x), rat(y)))
            .collect()
    }

    #[test]
    fn crossing_pair_has_two_vertices() {
        let circles = circles_from_points(&points(&[(0, 0), (1, 0)]), &rat(1)).unwrap();
        let arr = Arrangement::build(&circles);
        assert_eq!(arr.len(), 2);
        // (1/2, ±√(3/4)); sorted order puts the negative-y vertex first.
        let lo = &arr.vertices()[0];
        let hi = &arr.vertices()[1];
        assert_eq!(*lo.x.a(), ratio(1, 2));
        assert_eq!(*hi.x.a(), ratio(1, 2));
        assert_eq!(*lo.y.root(), ratio(3, 4));
        assert_eq!(lo.y.sign(), -1);
        assert_eq!(hi.y.sign(), 1);
    }

    #[test]
    fn tangent_pair_has_single_rational_vertex() {
        let circles = circles_from_points(&points(&[(0, 0), (2, 0)]), &rat(1)).unwrap();
        let arr = Arrangement::build(&circles);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.vertices()[0], VertexPoint::from_rats(rat(1), rat(0)));
    }

    #[test]
    fn disjoint_circles_get_representatives() {
        let circles = circles_from_points(&points(&[(0, 0), (10, 0), (0, 10)]), &rat(1)).unwrap();
        let arr = Arrangement::build(&circles);
        assert_eq!(arr.len(), 3);
        // Representatives (cx + 1, cy), sorted lexicographically.
        assert_eq!(arr.vertices()[0], VertexPoint::from_rats(rat(1), rat(0)));
        assert_eq!(arr.vertices()[1], VertexPoint::from_rats(rat(1), rat(10)));
        assert_eq!(arr.vertices()[2], VertexPoint::from_rats(rat(11), rat(0)));
    }

    #[test]
    fn triple_point_deduplicates_across_pairs() {
        // All three circles pass through (1, 0): the tangency of the first
        // pair and an intersection of each other pair. Different pairs
        // represent it with different roots; dedup must still collapse it.
        let circles = circles_from_points(&points(&[(0, 0), (2, 0), (1, 1)]), &rat(1)).unwrap();
        let arr = Arrangement::build(&circles);
        let target = VertexPoint::from_rats(rat(1), rat(0));
        let hits = arr.vertices().iter().filter(|v| **v == target).count();
        assert_eq!(hits, 1);
        // (1,0) from three pairs, plus (0,1) and (2,1).
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn coincident_circles_contribute_one_representative() {
        let circles = circles_from_points(&points(&[(3, 3), (3, 3)]), &rat(1)).unwrap();
        let arr = Arrangement::build(&circles);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.vertices()[0], VertexPoint::from_rats(rat(4), rat(3)));
    }

    #[test]
    fn single_circle_is_not_invisible() {
        let circles = circles_from_points(&points(&[(0, 0)]), &rat(4)).unwrap();
        let arr = Arrangement::build(&circles);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.vertices()[0], VertexPoint::from_rats(rat(2), rat(0)));
    }

    #[test]
    fn empty_input_builds_empty_arrangement() {
        let arr = Arrangement::build(&[]);
        assert!(arr.is_empty());
    }

    #[test]
    fn build_is_idempotent() {
        let circles =
            circles_from_points(&points(&[(0, 0), (1, 0), (0, 1), (5, 5)]), &rat(2)).unwrap();
        let a = Arrangement::build(&circles);
        let b = Arrangement::build(&circles);
        assert_eq!(a, b);
    }

    #[test]
    fn input_order_does_not_change_the_vertex_set() {
        let fwd = circles_from_points(&points(&[(0, 0), (1, 0), (0, 1)]), &rat(1)).unwrap();
        let mut rev = fwd.clone();
        rev.reverse();
        assert_eq!(Arrangement::build(&fwd), Arrangement::build(&rev));
    }
}

//! Points, circles, and the exact closed-disk inclusion predicate.
//!
//! Purpose
//! - `Point`: exact rational input coordinate.
//! - `Circle`: center plus shared squared radius, one per input point.
//! - `VertexPoint`: arrangement vertex with quadratic-extension coordinates,
//!   ordered lexicographically by `(x, y)`, the documented tie-break.
//!
//! Code cross-refs: `exact::{Rat, SqrtExt, sign_two_roots}`,
//! `arrangement::Arrangement`

use std::fmt;

use num_traits::{One, Signed};

use crate::error::Error;
use crate::exact::{sign_two_roots, Rat, SqrtExt};

/// Exact 2D input point. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub x: Rat,
    pub y: Rat,
}

impl Point {
    #[inline]
    pub fn new(x: Rat, y: Rat) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}/{}, {}/{})",
            self.x.numer(),
            self.x.denom(),
            self.y.numer(),
            self.y.denom()
        )
    }
}

/// Circle with a rational center and exact squared radius.
///
/// All circles of one run share the same `sq_radius`; `circles_from_points`
/// upholds that invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub sq_radius: Rat,
}

impl Circle {
    /// Exact closed-disk test: `|v - center|² ≤ sq_radius`.
    ///
    /// The two coordinates of `v` may carry different roots (representative
    /// points mix a root-carrying x with a rational y), so the comparison
    /// is a two-root sign: with `x = a₁ + b₁√p` and `y = a₂ + b₂√q`,
    /// `|v-c|² - r²` is `A + B√p + C√q` for rationals `A, B, C`.
    pub fn covers(&self, v: &VertexPoint) -> bool {
        let u1 = v.x.a() - &self.center.x;
        let u2 = v.y.a() - &self.center.y;
        let (b1, p) = (v.x.b(), v.x.root());
        let (b2, q) = (v.y.b(), v.y.root());
        let a = &u1 * &u1 + b1 * b1 * p + &u2 * &u2 + b2 * b2 * q - &self.sq_radius;
        let bx = Rat::from_integer(2.into()) * &u1 * b1;
        let by = Rat::from_integer(2.into()) * &u2 * b2;
        sign_two_roots(&a, &bx, p, &by, q) <= 0
    }

    /// Canonical representative point on the boundary: `(cx + √r², cy)`.
    ///
    /// Inserted for circles that intersect no other circle, so that every
    /// circle contributes at least one candidate vertex.
    pub fn boundary_representative(&self) -> VertexPoint {
        VertexPoint {
            x: SqrtExt::new(self.center.x.clone(), Rat::one(), self.sq_radius.clone()),
            y: SqrtExt::from_rat(self.center.y.clone()),
        }
    }
}

/// Arrangement vertex with exact quadratic-extension coordinates.
///
/// The derived `Ord` is lexicographic by `(x, y)` under the semantic order
/// of `SqrtExt`, which makes vertex order independent of how a coordinate
/// happens to be represented.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VertexPoint {
    pub x: SqrtExt,
    pub y: SqrtExt,
}

impl VertexPoint {
    #[inline]
    pub fn new(x: SqrtExt, y: SqrtExt) -> Self {
        Self { x, y }
    }

    /// Vertex at a purely rational location (tangency points, test fixtures).
    #[inline]
    pub fn from_rats(x: Rat, y: Rat) -> Self {
        Self {
            x: SqrtExt::from_rat(x),
            y: SqrtExt::from_rat(y),
        }
    }
}

impl fmt::Display for VertexPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Derive one circle per input point with the shared squared radius.
///
/// Rejects non-positive radii (`Error::InvalidGeometry`); the downstream
/// arrangement math assumes `sq_radius > 0`. Pure and order-preserving.
pub fn circles_from_points(points: &[Point], sq_radius: &Rat) -> Result<Vec<Circle>, Error> {
    if !sq_radius.is_positive() {
        return Err(Error::InvalidGeometry(format!(
            "squared radius must be positive, got {}/{}",
            sq_radius.numer(),
            sq_radius.denom()
        )));
    }
    Ok(points
        .iter()
        .map(|p| Circle {
            center: p.clone(),
            sq_radius: sq_radius.clone(),
        })
        .collect())
}

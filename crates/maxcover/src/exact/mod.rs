//! Exact number kernel: arbitrary-precision rationals and one-level
//! square-root extensions.
//!
//! Purpose
//! - Provide the number types on which every geometric predicate in this
//!   crate is decided: `Rat` (exact rational) and `SqrtExt` (`a + b·√d`).
//! - All comparisons return the mathematically correct sign. No `f64`
//!   appears anywhere in this module; tangencies and on-boundary cases are
//!   decided, not approximated.
//!
//! Why one-level extensions suffice
//! - Circle–circle intersections of rational circles have coordinates of
//!   the form `a + b·√d` with rational `a, b, d`. Squared distances of such
//!   points to rational centers stay inside expressions with at most two
//!   distinct roots, whose sign `sign_two_roots` decides by sign-aware
//!   squaring.
//!
//! Code cross-refs: `geom::{Circle, VertexPoint}`, `arrangement::Arrangement`

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use thiserror::Error;

/// Exact rational scalar used throughout the crate.
pub type Rat = num_rational::BigRational;

/// Failure to read a numeric literal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseRatError {
    #[error("empty numeric literal")]
    Empty,
    #[error("invalid numeric literal `{0}`")]
    Invalid(String),
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

/// Parse an exact rational from an integer (`"4"`), fraction (`"9/4"`,
/// `"-3/7"`), or decimal (`"2.25"`, `"-.5"`) literal.
pub fn parse_rat(s: &str) -> Result<Rat, ParseRatError> {
    let raw = s.trim();
    if raw.is_empty() {
        return Err(ParseRatError::Empty);
    }
    if let Some((num, den)) = raw.split_once('/') {
        let n: BigInt = num
            .trim()
            .parse()
            .map_err(|_| ParseRatError::Invalid(raw.to_owned()))?;
        let d: BigInt = den
            .trim()
            .parse()
            .map_err(|_| ParseRatError::Invalid(raw.to_owned()))?;
        if d.is_zero() {
            return Err(ParseRatError::ZeroDenominator(raw.to_owned()));
        }
        return Ok(Rat::new(n, d));
    }
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ParseRatError::Invalid(raw.to_owned()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseRatError::Invalid(raw.to_owned()));
    }
    let digits = format!("{int_part}{frac_part}");
    let mut numer: BigInt = digits
        .parse()
        .map_err(|_| ParseRatError::Invalid(raw.to_owned()))?;
    if negative {
        numer = -numer;
    }
    let denom = num_traits::pow(BigInt::from(10), frac_part.len());
    Ok(Rat::new(numer, denom))
}

#[inline]
fn rat_sign(r: &Rat) -> i8 {
    if r.is_zero() {
        0
    } else if r.is_positive() {
        1
    } else {
        -1
    }
}

/// Exact sign of `u + v·√d` for rationals `u, v` and `d ≥ 0`.
///
/// Opposite-sign case reduces to `sign(u² − v²·d)` flipped onto the sign
/// of `u`, since `(u + v√d)(u − v√d) = u² − v²d`.
pub fn sign_one_root(u: &Rat, v: &Rat, d: &Rat) -> i8 {
    debug_assert!(!d.is_negative(), "negative radicand");
    if v.is_zero() || d.is_zero() {
        return rat_sign(u);
    }
    let su = rat_sign(u);
    let sv = rat_sign(v);
    if su == 0 {
        return sv;
    }
    if su == sv {
        return su;
    }
    su * rat_sign(&(u * u - v * v * d))
}

/// Exact sign of `u + v·√p + w·√q` for rationals with `p, q ≥ 0`.
///
/// Decided by sign-aware squaring: the radical part `v√p + w√q` gets a sign
/// first; if it opposes `u`, the comparison of `u²` against
/// `(v√p + w√q)² = v²p + w²q + 2vw√(pq)` is a one-root sign again.
pub fn sign_two_roots(u: &Rat, v: &Rat, p: &Rat, w: &Rat, q: &Rat) -> i8 {
    if v.is_zero() || p.is_zero() {
        return sign_one_root(u, w, q);
    }
    if w.is_zero() || q.is_zero() {
        return sign_one_root(u, v, p);
    }
    if p == q {
        return sign_one_root(u, &(v + w), p);
    }
    let sv = rat_sign(v);
    let sw = rat_sign(w);
    let ss = if sv == sw {
        sv
    } else {
        sv * rat_sign(&(v * v * p - w * w * q))
    };
    let su = rat_sign(u);
    if su == 0 {
        return ss;
    }
    if ss == 0 || ss == su {
        return su;
    }
    let a = u * u - v * v * p - w * w * q;
    let b = Rat::from_integer(BigInt::from(-2)) * v * w;
    su * sign_one_root(&a, &b, &(p * q))
}

/// Quadratic-extension value `a + b·√d` over the rationals.
///
/// Invariants:
/// - `d ≥ 0`.
/// - Normalized: `b == 0 ⟺ d == 0` (purely rational values carry a zero
///   root so the representation of a rational is unique).
///
/// Equality and ordering are semantic (by real value), so `2` compares
/// equal to `0 + 1·√4` even though the representations differ. That is
/// what vertex deduplication and the lexicographic tie-break rely on.
#[derive(Clone, Debug)]
pub struct SqrtExt {
    a: Rat,
    b: Rat,
    d: Rat,
}

impl SqrtExt {
    /// Normalizing constructor for `a + b·√d`. Requires `d ≥ 0`.
    pub fn new(a: Rat, b: Rat, d: Rat) -> Self {
        debug_assert!(!d.is_negative(), "negative radicand");
        if b.is_zero() || d.is_zero() {
            Self {
                a,
                b: Rat::zero(),
                d: Rat::zero(),
            }
        } else {
            Self { a, b, d }
        }
    }

    #[inline]
    pub fn from_rat(a: Rat) -> Self {
        Self {
            a,
            b: Rat::zero(),
            d: Rat::zero(),
        }
    }

    #[inline]
    pub fn from_int(n: i64) -> Self {
        Self::from_rat(Rat::from_integer(BigInt::from(n)))
    }

    #[inline]
    pub fn a(&self) -> &Rat {
        &self.a
    }
    #[inline]
    pub fn b(&self) -> &Rat {
        &self.b
    }
    #[inline]
    pub fn root(&self) -> &Rat {
        &self.d
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        self.b.is_zero()
    }

    /// Exact sign of the represented real: -1, 0, or 1.
    #[inline]
    pub fn sign(&self) -> i8 {
        sign_one_root(&self.a, &self.b, &self.d)
    }
}

impl PartialEq for SqrtExt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for SqrtExt {}

impl PartialOrd for SqrtExt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SqrtExt {
    /// Total order by real value, across different extensions.
    fn cmp(&self, other: &Self) -> Ordering {
        let u = &self.a - &other.a;
        let w = -other.b.clone();
        match sign_two_roots(&u, &self.b, &self.d, &w, &other.d) {
            0 => Ordering::Equal,
            s if s > 0 => Ordering::Greater,
            _ => Ordering::Less,
        }
    }
}

impl fmt::Display for SqrtExt {
    /// Rational values print as `num/den`; root-carrying values print as
    /// the triple `(num_a/den_a, num_b/den_b, num_d/den_d)` meaning
    /// `a + b·√d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rational() {
            write!(f, "{}/{}", self.a.numer(), self.a.denom())
        } else {
            write!(
                f,
                "({}/{}, {}/{}, {}/{})",
                self.a.numer(),
                self.a.denom(),
                self.b.numer(),
                self.b.denom(),
                self.d.numer(),
                self.d.denom()
            )
        }
    }
}

/// Shorthand for an integer-valued `Rat`, used all over the tests.
#[inline]
pub fn rat(n: i64) -> Rat {
    Rat::from_integer(BigInt::from(n))
}

/// Shorthand for `p/q` as a `Rat`. Panics on `q == 0`.
#[inline]
pub fn ratio(p: i64, q: i64) -> Rat {
    Rat::new(BigInt::from(p), BigInt::from(q))
}

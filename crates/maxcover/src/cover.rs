//! Coverage evaluation over arrangement vertices and maximum selection.
//!
//! Purpose
//! - `evaluate`: exact closed-disk coverage count for every candidate
//!   vertex, O(V·N).
//! - `select_max`: the single best candidate; ties go to the first
//!   candidate in evaluation order, which is the lexicographically
//!   smallest vertex because the arrangement sorts its vertex set.
//! - `max_cover`: the whole batch pipeline in one call.
//!
//! Code cross-refs: `arrangement::Arrangement`, `geom::{Circle, VertexPoint}`

use crate::arrangement::Arrangement;
use crate::error::Error;
use crate::exact::Rat;
use crate::geom::{circles_from_points, Circle, Point, VertexPoint};

/// A candidate vertex with its coverage count. `count ∈ [0, N]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coverage {
    pub vertex: VertexPoint,
    pub count: usize,
}

/// Count, for every arrangement vertex, the circles whose closed disk
/// contains it. Output order follows the arrangement's vertex order.
pub fn evaluate(arrangement: &Arrangement, circles: &[Circle]) -> Vec<Coverage> {
    arrangement
        .vertices()
        .iter()
        .map(|v| Coverage {
            count: circles.iter().filter(|c| c.covers(v)).count(),
            vertex: v.clone(),
        })
        .collect()
}

/// Keep the candidate with the highest count; the first occurrence wins
/// ties. Surfaces `Error::EmptyCandidateSet` instead of inventing a
/// default point when there are no candidates.
pub fn select_max(candidates: Vec<Coverage>) -> Result<Coverage, Error> {
    let mut best: Option<Coverage> = None;
    for cand in candidates {
        match &best {
            Some(b) if cand.count <= b.count => {}
            _ => best = Some(cand),
        }
    }
    best.ok_or(Error::EmptyCandidateSet)
}

/// Full pipeline: points → circles → arrangement → evaluation → maximum.
///
/// The winner's coordinates are exact; a tie among equally covered
/// vertices resolves to the lexicographically smallest one.
pub fn max_cover(points: &[Point], sq_radius: &Rat) -> Result<Coverage, Error> {
    let circles = circles_from_points(points, sq_radius)?;
    let arrangement = Arrangement::build(&circles);
    let candidates = evaluate(&arrangement, &circles);
    select_max(candidates)
}

//! Maximum point coverage by a fixed-radius disk.
//!
//! Given N points in the plane and one shared squared radius r², find a
//! disk center covering the largest number of input points, exactly.
//!
//! The pipeline is a single batch computation: points → equal-radius
//! circles → arrangement vertex set → per-vertex coverage counts →
//! maximum. Correctness rests on the candidate-set argument (the coverage
//! count is piecewise constant on open arrangement faces, so the optimum
//! of the closed-disk count is attained at an arrangement vertex) and on
//! the exact number kernel in [`exact`] (no floating comparison anywhere,
//! so tangencies and on-boundary points are never misclassified).
//!
//! Ties among equally covered vertices resolve to the lexicographically
//! smallest vertex; that order is part of the contract.

pub mod arrangement;
pub mod cover;
pub mod error;
pub mod exact;
pub mod geom;
pub mod io;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cover::{evaluate, max_cover, select_max, Coverage};
pub use error::Error;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arrangement::Arrangement;
    pub use crate::cover::{evaluate, max_cover, select_max, Coverage};
    pub use crate::error::Error;
    pub use crate::exact::{parse_rat, rat, ratio, Rat, SqrtExt};
    pub use crate::geom::{circles_from_points, Circle, Point, VertexPoint};
    pub use crate::io::{load_points, parse_points};
}

//! Smallest end-to-end run: two unit circles tangent at (1, 0).
//!
//! Purpose
//! - Show the library surface without any file I/O: build the point set in
//!   code, run the pipeline, print the exact winner.
//! - The tangency is the textbook exactness case: a float rendition can
//!   flip the boundary test either way, the exact kernel cannot.

use maxcover::prelude::*;

fn main() {
    let points = vec![
        Point::new(rat(0), rat(0)),
        Point::new(rat(2), rat(0)),
    ];
    let best = max_cover(&points, &rat(1)).expect("non-empty candidate set");
    println!("covered points: {}", best.count);
    println!("disk center:    {}", best.vertex);
}

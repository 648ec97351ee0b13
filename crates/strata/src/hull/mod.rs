//! Planar convex hull by divide and conquer.
//!
//! The hull is not returned as a polygon; instead every point carries `cw`
//! and `ccw` neighbor ids, set for hull points and cleared for interior ones.
//! Renderers walk the cycle from `Hull::start()`.
//!
//! Degeneracy policy
//! - Exact duplicates are dropped by `Hull::from_points`.
//! - Only corners are hull points: a point lying on a hull edge between two
//!   others (a 3-point base case, a merge bridge, an all-collinear input) is
//!   cleared like an interior point. Collinear input yields a 2-point hull.
//!
//! Code cross-refs: `predicates::turn`, `build::build_hull`, `arena::Hull`

mod arena;
mod build;
mod types;

pub use arena::Hull;
pub use build::build_hull;
pub use types::{HullPoint, PointId};

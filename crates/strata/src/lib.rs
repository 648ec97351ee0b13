//! Planar hulls, triangle strips, and slice-band meshing.
//!
//! Three independent batch algorithms over in-memory geometry:
//! - `hull`: divide-and-conquer convex hull as a cw/ccw neighbor relation.
//! - `strips`: shared-edge adjacency plus greedy triangle-strip chaining.
//! - `band`: minimum-area triangulation of the band between two slices (DP).
//!
//! Every linked structure is an arena addressed by integer ids; links are
//! `Option<Id>` and are rebuilt from scratch on each call.
//!
//! API Policy
//! - `io` and `gen` exist for the CLI, tests and benches; the algorithms
//!   themselves never touch files or randomness.

pub mod band;
pub mod cfg;
pub mod error;
pub mod gen;
pub mod hull;
pub mod io;
pub mod predicates;
pub mod strips;

pub use error::{Defect, Diagnostic, Error, Result};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::band::{
        solve_table, triangulate_pair, triangulate_stack, AreaTable, Band, BandTriangle,
        SliceStack, Step, VertexId,
    };
    pub use crate::hull::{build_hull, Hull, HullPoint, PointId};
    pub use crate::predicates::{point_in_triangle, turn, Turn};
    pub use crate::strips::{build_strips, TriId, TriMesh, Triangle};
    pub use crate::{Error, Result};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

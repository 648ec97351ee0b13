//! Minimum-area triangulation of the band between consecutive slices.
//!
//! Each slice is a closed vertex loop. For a pair of slices the seam is the
//! closest vertex pair; both loops are unrolled from their seam vertex and a
//! DP over the `(n_upper + 1) x (n_lower + 1)` lattice picks, at each cell,
//! whether the next triangle advances on the upper or the lower loop.
//!
//! Slices wound right-handed about +y, stacked downward, give outward normals.
//!
//! Code cross-refs: `gen::circle_stack`, `io::read_slices`

mod build;
mod table;
mod types;

pub use build::{solve_table, triangulate_pair, triangulate_stack};
pub use table::{AreaTable, Step};
pub use types::{normalize, triangle_area, Band, BandTriangle, Slice, SliceStack, Vertex3, VertexId};

//! Triangle adjacency and greedy triangle strips.
//!
//! - `TriMesh::new` validates faces, drops collinear ones and builds the
//!   neighbor relation in O(n) by hashing directed edges: the neighbor across
//!   `(v0, v1)` is whichever triangle owns `(v1, v0)`.
//! - `build_strips` links triangles into `next`/`prev` chains that partition
//!   the mesh and reports the chain count.
//!
//! Code cross-refs: `predicates::{turn, point_in_triangle}`

mod build;
mod mesh;
mod types;

pub use build::build_strips;
pub use mesh::TriMesh;
pub use types::{TriId, Triangle};

#[cfg(test)]
mod tests;

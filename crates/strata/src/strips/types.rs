//! Triangle arena types for adjacency and strip links.

/// Index of a triangle in its mesh (after degenerate faces were dropped).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriId(pub usize);

/// A planar triangle with per-edge neighbors and strip links.
///
/// Invariants:
/// - `adj[i]` is the triangle across the directed edge `verts[i] → verts[(i+1)%3]`;
///   the relation is symmetric.
/// - `next`/`prev` form simple paths: `a.next == Some(b)` iff `b.prev == Some(a)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub verts: [usize; 3],
    pub adj: [Option<TriId>; 3],
    pub next: Option<TriId>,
    pub prev: Option<TriId>,
    /// Position of this face in the caller's face list.
    pub source: usize,
}

impl Triangle {
    #[inline]
    pub(crate) fn new(verts: [usize; 3], source: usize) -> Self {
        Self {
            verts,
            adj: [None; 3],
            next: None,
            prev: None,
            source,
        }
    }
    /// Adjacent triangles in edge order.
    #[inline]
    pub fn neighbors(&self) -> impl Iterator<Item = TriId> + '_ {
        self.adj.iter().flatten().copied()
    }
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.verts[i], self.verts[(i + 1) % 3])
    }
}

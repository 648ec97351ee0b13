//! Slice stack arena and band output types.

use nalgebra::Vector3;

use crate::cfg::NORMAL_EPS;
use crate::error::{Error, Result};

/// Index of a vertex in its stack arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// A slice vertex; `next` closes the loop of its slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex3 {
    pub pos: Vector3<f64>,
    pub next: VertexId,
    pub slice: usize,
}

/// One cross-section loop, in winding order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice {
    pub verts: Vec<VertexId>,
}

/// Slices ordered top to bottom; consecutive pairs are triangulated.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceStack {
    verts: Vec<Vertex3>,
    slices: Vec<Slice>,
}

impl SliceStack {
    /// Build the arena and close each loop; every slice needs at least 3 vertices.
    pub fn new(loops: Vec<Vec<Vector3<f64>>>) -> Result<Self> {
        let mut verts = Vec::with_capacity(loops.iter().map(Vec::len).sum());
        let mut slices = Vec::with_capacity(loops.len());
        for (s, ring) in loops.into_iter().enumerate() {
            if ring.len() < 3 {
                return Err(Error::SliceTooSmall {
                    slice: s,
                    len: ring.len(),
                });
            }
            let base = verts.len();
            let n = ring.len();
            for (k, pos) in ring.into_iter().enumerate() {
                verts.push(Vertex3 {
                    pos,
                    next: VertexId(base + (k + 1) % n),
                    slice: s,
                });
            }
            slices.push(Slice {
                verts: (base..base + n).map(VertexId).collect(),
            });
        }
        Ok(Self { verts, slices })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
    #[inline]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }
    #[inline]
    pub fn slice(&self, s: usize) -> &Slice {
        &self.slices[s]
    }
    #[inline]
    pub fn verts(&self) -> &[Vertex3] {
        &self.verts
    }
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex3 {
        &self.verts[id.0]
    }
    #[inline]
    pub fn pos(&self, id: VertexId) -> Vector3<f64> {
        self.verts[id.0].pos
    }
    #[inline]
    pub fn next(&self, id: VertexId) -> VertexId {
        self.verts[id.0].next
    }
}

/// Band triangle: vertex ids in emitted order plus its unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandTriangle {
    pub verts: [VertexId; 3],
    pub normal: Vector3<f64>,
}

impl BandTriangle {
    /// Normal is `(v1 - v0) × (v2 - v0)`, normalized once here.
    pub fn new(stack: &SliceStack, verts: [VertexId; 3]) -> Self {
        let [a, b, c] = verts.map(|v| stack.pos(v));
        Self {
            verts,
            normal: normalize((b - a).cross(&(c - a))),
        }
    }

    pub fn area(&self, stack: &SliceStack) -> f64 {
        let [a, b, c] = self.verts.map(|v| stack.pos(v));
        triangle_area(a, b, c)
    }

    pub fn centroid(&self, stack: &SliceStack) -> Vector3<f64> {
        let [a, b, c] = self.verts.map(|v| stack.pos(v));
        (a + b + c) / 3.0
    }
}

/// Triangulated band between slices `upper` and `upper + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub upper: usize,
    /// Closest vertex pair `(on upper, on lower)`; the seam of the band.
    pub seed: (VertexId, VertexId),
    /// In reconstruction order (from the closing seam back to the opening one).
    pub triangles: Vec<BandTriangle>,
    pub total_area: f64,
}

#[inline]
pub fn triangle_area(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> f64 {
    0.5 * (b - a).cross(&(c - a)).norm()
}

/// Unit vector along `v`; vectors not longer than `NORMAL_EPS` come back as is.
#[inline]
pub fn normalize(v: Vector3<f64>) -> Vector3<f64> {
    let d = v.norm();
    if d > NORMAL_EPS {
        v / d
    } else {
        v
    }
}

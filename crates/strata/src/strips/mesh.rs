//! Mesh construction: index validation, degenerate filtering, edge-hash adjacency.

use std::collections::HashMap;

use nalgebra::Vector2;

use super::types::{TriId, Triangle};
use crate::error::{Error, Result};
use crate::predicates::{point_in_triangle, turn, Turn};

/// Shared vertex table plus the non-degenerate triangles over it.
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh {
    verts: Vec<Vector2<f64>>,
    pub(crate) tris: Vec<Triangle>,
    dropped_faces: usize,
    dropped_links: usize,
}

impl TriMesh {
    /// Validate `faces` against `verts`, drop collinear faces, build adjacency.
    ///
    /// The first out-of-range index aborts the build; nothing partial is returned.
    pub fn new(verts: Vec<Vector2<f64>>, faces: &[[usize; 3]]) -> Result<Self> {
        for (face, f) in faces.iter().enumerate() {
            if let Some(&index) = f.iter().find(|&&i| i >= verts.len()) {
                return Err(Error::IndexOutOfRange {
                    face,
                    index,
                    len: verts.len(),
                });
            }
        }
        let mut tris = Vec::with_capacity(faces.len());
        for (source, f) in faces.iter().enumerate() {
            if turn(verts[f[0]], verts[f[1]], verts[f[2]]) != Turn::Collinear {
                tris.push(Triangle::new(*f, source));
            }
        }
        let dropped_faces = faces.len() - tris.len();
        if dropped_faces > 0 {
            tracing::debug!(dropped_faces, "skipped degenerate faces");
        }
        let mut mesh = Self {
            verts,
            tris,
            dropped_faces,
            dropped_links: 0,
        };
        mesh.build_adjacency();
        Ok(mesh)
    }

    /// Hash every directed edge, then look up each edge reversed.
    fn build_adjacency(&mut self) {
        let mut edges: HashMap<(usize, usize), TriId> =
            HashMap::with_capacity(3 * self.tris.len());
        for (t, tri) in self.tris.iter().enumerate() {
            for i in 0..3 {
                edges.insert(tri.edge(i), TriId(t));
            }
        }
        for tri in self.tris.iter_mut() {
            for i in 0..3 {
                let (v0, v1) = tri.edge(i);
                tri.adj[i] = edges.get(&(v1, v0)).copied();
            }
        }
        // A repeated directed edge leaves one-sided links; keep only mutual ones.
        let mut one_sided = Vec::new();
        for (t, tri) in self.tris.iter().enumerate() {
            for (i, n) in tri.adj.iter().enumerate() {
                if let Some(n) = n {
                    if !self.tris[n.0].neighbors().any(|m| m.0 == t) {
                        one_sided.push((t, i));
                    }
                }
            }
        }
        for &(t, i) in &one_sided {
            self.tris[t].adj[i] = None;
        }
        self.dropped_links = one_sided.len();
        if self.dropped_links > 0 {
            tracing::warn!(
                dropped_links = self.dropped_links,
                "repeated directed edges; dropped one-sided adjacency"
            );
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tris.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tris.is_empty()
    }
    #[inline]
    pub fn verts(&self) -> &[Vector2<f64>] {
        &self.verts
    }
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.tris
    }
    #[inline]
    pub fn triangle(&self, id: TriId) -> &Triangle {
        &self.tris[id.0]
    }
    #[inline]
    pub fn neighbors(&self, id: TriId) -> impl Iterator<Item = TriId> + '_ {
        self.tris[id.0].neighbors()
    }
    #[inline]
    pub fn are_adjacent(&self, a: TriId, b: TriId) -> bool {
        self.neighbors(a).any(|n| n == b)
    }
    /// Faces removed as collinear during construction.
    #[inline]
    pub fn dropped_faces(&self) -> usize {
        self.dropped_faces
    }
    /// One-sided adjacency links removed during construction.
    #[inline]
    pub fn dropped_links(&self) -> usize {
        self.dropped_links
    }

    pub fn centroid(&self, id: TriId) -> Vector2<f64> {
        let [a, b, c] = self.tris[id.0].verts;
        (self.verts[a] + self.verts[b] + self.verts[c]) / 3.0
    }

    /// First triangle (by id) strictly containing `p`; only CCW faces can match.
    pub fn locate(&self, p: Vector2<f64>) -> Option<TriId> {
        self.tris
            .iter()
            .position(|t| {
                let [a, b, c] = t.verts;
                point_in_triangle(self.verts[a], self.verts[b], self.verts[c], p)
            })
            .map(TriId)
    }

    /// Remove every `next`/`prev` link.
    pub fn clear_strips(&mut self) {
        for t in self.tris.iter_mut() {
            t.next = None;
            t.prev = None;
        }
    }

    /// Chains as id lists, ordered by head id; follows at most `len()` links each.
    pub fn strips(&self) -> Vec<Vec<TriId>> {
        let mut out = Vec::new();
        for (h, head) in self.tris.iter().enumerate() {
            if head.prev.is_some() {
                continue;
            }
            let mut chain = vec![TriId(h)];
            let mut cur = head.next;
            while let Some(id) = cur {
                if chain.len() > self.tris.len() {
                    break;
                }
                chain.push(id);
                cur = self.tris[id.0].next;
            }
            out.push(chain);
        }
        out
    }
}

//! Greedy strip chaining.
//!
//! A chain starts at the unassigned triangle with the fewest unassigned
//! neighbors and grows its tail the same way until the tail is boxed in.
//! Ties go to the lowest triangle id. No backtracking.

use std::collections::BTreeSet;

use super::mesh::TriMesh;
use super::types::TriId;

/// Distinct neighbors of `t`; a triangle may share more than one edge with another.
fn distinct_neighbors(mesh: &TriMesh, t: usize) -> impl Iterator<Item = usize> {
    let adj = mesh.tris[t].adj;
    (0..3).filter_map(move |i| match adj[i] {
        Some(n) if !adj[..i].contains(&Some(n)) => Some(n.0),
        _ => None,
    })
}

/// Unassigned triangles bucketed by their count of unassigned neighbors (0..=3).
struct Pending {
    degree: Vec<usize>,
    assigned: Vec<bool>,
    buckets: [BTreeSet<usize>; 4],
}

impl Pending {
    fn new(mesh: &TriMesh) -> Self {
        let mut buckets: [BTreeSet<usize>; 4] = Default::default();
        let degree: Vec<usize> = (0..mesh.tris.len())
            .map(|t| distinct_neighbors(mesh, t).count())
            .collect();
        for (t, &d) in degree.iter().enumerate() {
            buckets[d].insert(t);
        }
        Self {
            degree,
            assigned: vec![false; mesh.tris.len()],
            buckets,
        }
    }

    /// Lowest-degree unassigned triangle, lowest id first.
    fn pick_start(&self) -> Option<usize> {
        self.buckets.iter().find_map(|b| b.first().copied())
    }

    /// Lowest-degree unassigned neighbor of `t`, lowest id first.
    fn pick_next(&self, mesh: &TriMesh, t: usize) -> Option<usize> {
        distinct_neighbors(mesh, t)
            .filter(|&n| !self.assigned[n])
            .min_by_key(|&n| (self.degree[n], n))
    }

    fn assign(&mut self, mesh: &TriMesh, t: usize) {
        debug_assert!(!self.assigned[t], "triangle {t} assigned twice");
        self.assigned[t] = true;
        self.buckets[self.degree[t]].remove(&t);
        for n in distinct_neighbors(mesh, t) {
            if self.assigned[n] {
                continue;
            }
            let d = self.degree[n];
            debug_assert!(d > 0, "triangle {n} degree underflow");
            self.buckets[d].remove(&n);
            self.degree[n] = d - 1;
            self.buckets[d - 1].insert(n);
        }
    }
}

/// Partition `mesh` into `next`/`prev` chains; returns the number of chains.
///
/// Existing links are cleared first, so repeated calls give the same result.
pub fn build_strips(mesh: &mut TriMesh) -> usize {
    mesh.clear_strips();
    let mut pending = Pending::new(mesh);
    let mut count = 0usize;
    while let Some(start) = pending.pick_start() {
        count += 1;
        pending.assign(mesh, start);
        let mut tail = start;
        while let Some(next) = pending.pick_next(mesh, tail) {
            pending.assign(mesh, next);
            mesh.tris[tail].next = Some(TriId(next));
            mesh.tris[next].prev = Some(TriId(tail));
            tail = next;
        }
    }
    tracing::debug!(triangles = mesh.len(), strips = count, "strips built");
    count
}

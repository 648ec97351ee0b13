//! Seam selection, table solve and triangle reconstruction.

use super::table::AreaTable;
use super::types::{Band, BandTriangle, SliceStack, VertexId};
use crate::error::{Error, Result};

/// Positions `(i, j)` of the closest vertex pair between two slices.
/// First strictly smaller distance wins, scanning the upper slice outermost.
fn closest_pair(stack: &SliceStack, upper: usize, lower: usize) -> (usize, usize) {
    let up = &stack.slice(upper).verts;
    let lo = &stack.slice(lower).verts;
    let mut best = (0, 0);
    let mut best_d = f64::INFINITY;
    for (i, &u) in up.iter().enumerate() {
        for (j, &l) in lo.iter().enumerate() {
            let d = (stack.pos(u) - stack.pos(l)).norm();
            if d < best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    best
}

/// `ring` rotated to start at `start`, with the start repeated at the end.
fn aligned(ring: &[VertexId], start: usize) -> Vec<VertexId> {
    let mut out = Vec::with_capacity(ring.len() + 1);
    out.extend_from_slice(&ring[start..]);
    out.extend_from_slice(&ring[..=start]);
    out
}

fn check_pair(stack: &SliceStack, upper: usize) -> Result<()> {
    if upper + 1 >= stack.len() {
        return Err(Error::NoSuchPair {
            upper,
            slices: stack.len(),
        });
    }
    Ok(())
}

/// Fill the DP table for slices `upper` and `upper + 1`.
pub fn solve_table(stack: &SliceStack, upper: usize) -> Result<AreaTable> {
    check_pair(stack, upper)?;
    let lower = upper + 1;
    let (i, j) = closest_pair(stack, upper, lower);
    Ok(AreaTable::fill(
        stack,
        aligned(&stack.slice(upper).verts, i),
        aligned(&stack.slice(lower).verts, j),
    ))
}

/// Triangulate the band between slices `upper` and `upper + 1`.
///
/// Emits `n_upper + n_lower` triangles, each as (lower vertex, upper vertex,
/// third vertex) of the reconstructed step.
pub fn triangulate_pair(stack: &SliceStack, upper: usize) -> Result<Band> {
    let table = solve_table(stack, upper)?;
    let path = table.path();
    let triangles: Vec<BandTriangle> = path
        .windows(2)
        .map(|w| {
            let ((r, c), (pr, pc)) = (w[0], w[1]);
            let third = if pr < r {
                table.lower[pr]
            } else {
                table.upper[pc]
            };
            BandTriangle::new(stack, [table.lower[r], table.upper[c], third])
        })
        .collect();
    debug_assert_eq!(triangles.len(), table.rows() + table.cols() - 2);
    let total_area = table.min_area();
    tracing::debug!(
        upper,
        triangles = triangles.len(),
        total_area,
        "band triangulated"
    );
    Ok(Band {
        upper,
        seed: (table.upper[0], table.lower[0]),
        triangles,
        total_area,
    })
}

/// Triangulate every consecutive pair, top to bottom.
pub fn triangulate_stack(stack: &SliceStack) -> Result<Vec<Band>> {
    if stack.len() < 2 {
        return Err(Error::TooFewSlices(stack.len()));
    }
    (0..stack.len() - 1)
        .map(|s| triangulate_pair(stack, s))
        .collect()
}

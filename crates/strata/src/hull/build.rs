//! Divide-and-conquer hull construction with walk-up/walk-down merges.

use nalgebra::Vector2;

use super::types::{HullPoint, PointId};
use crate::error::{Error, Result};
use crate::predicates::{turn, Turn};

/// Build the hull of `points` in place by setting every `cw`/`ccw` link.
///
/// Pre: `points.len() >= 2`, sorted ascending by `(x, y)`, no exact duplicates.
/// Post: hull points form one ccw cycle and the matching cw cycle; all other
/// points have both links cleared. Ids are positions in `points`.
/// Points collinear with a hull edge count as interior.
///
/// A merge that meets an unlinked point reports `Error::BrokenHull`.
pub fn build_hull(points: &mut [HullPoint]) -> Result<()> {
    assert!(
        points.len() >= 2,
        "build_hull needs at least 2 points, got {}",
        points.len()
    );
    assert!(
        points.windows(2).all(|w| lex_le(w[0].pos, w[1].pos)),
        "build_hull expects points sorted by (x, y)"
    );
    for p in points.iter_mut() {
        p.clear();
    }
    let mut stepped = Vec::new();
    build_range(points, 0, points.len(), &mut stepped)?;
    tracing::debug!(points = points.len(), "hull built");
    Ok(())
}

#[inline]
fn lex_le(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    a.x < b.x || (a.x == b.x && a.y <= b.y)
}

fn build_range(
    pts: &mut [HullPoint],
    lo: usize,
    hi: usize,
    stepped: &mut Vec<usize>,
) -> Result<()> {
    match hi - lo {
        2 => link_pair(pts, lo, lo + 1),
        3 => link_triple(pts, lo),
        n => {
            // Position split; valid because the input is sorted.
            let mid = lo + n / 2;
            build_range(pts, lo, mid, stepped)?;
            build_range(pts, mid, hi, stepped)?;
            merge(pts, mid - 1, mid, n, stepped)?;
        }
    }
    Ok(())
}

/// Make `to` the ccw successor of `from` (and `from` the cw successor of `to`).
#[inline]
fn link(pts: &mut [HullPoint], from: usize, to: usize) {
    pts[from].ccw = Some(PointId(to));
    pts[to].cw = Some(PointId(from));
}

fn link_pair(pts: &mut [HullPoint], a: usize, b: usize) {
    link(pts, a, b);
    link(pts, b, a);
}

fn link_triple(pts: &mut [HullPoint], i: usize) {
    let (p0, p1, p2) = (i, i + 1, i + 2);
    match turn(pts[p0].pos, pts[p1].pos, pts[p2].pos) {
        Turn::Left => {
            link(pts, p0, p1);
            link(pts, p1, p2);
            link(pts, p2, p0);
        }
        Turn::Right => {
            link(pts, p0, p2);
            link(pts, p2, p1);
            link(pts, p1, p0);
        }
        Turn::Collinear => {
            // Sorted collinear triple: the middle point is interior.
            link_pair(pts, p0, p2);
            pts[p1].clear();
        }
    }
}

fn ccw_of(pts: &[HullPoint], i: usize) -> Result<usize> {
    pts[i]
        .ccw
        .map(|p| p.0)
        .ok_or_else(|| Error::BrokenHull(format!("merge reached unlinked point {i}")))
}

fn cw_of(pts: &[HullPoint], i: usize) -> Result<usize> {
    pts[i]
        .cw
        .map(|p| p.0)
        .ok_or_else(|| Error::BrokenHull(format!("merge reached unlinked point {i}")))
}

/// Whether the bridge end `from` should move to its neighbor `cand`:
/// `cand` lies strictly on the `outside` side of the line `from`→`other`,
/// or on that line beyond `from` (so `from` becomes interior).
#[inline]
fn should_step(pts: &[HullPoint], from: usize, other: usize, cand: usize, outside: Turn) -> bool {
    let (a, b, c) = (pts[from].pos, pts[other].pos, pts[cand].pos);
    match turn(a, b, c) {
        Turn::Collinear => (c - a).dot(&(b - a)) < 0.0,
        t => t == outside,
    }
}

/// Join the hulls whose rightmost/leftmost points are `left_start`/`right_start`.
///
/// `budget` bounds each walk; it is only reached on degenerate input.
fn merge(
    pts: &mut [HullPoint],
    left_start: usize,
    right_start: usize,
    budget: usize,
    stepped: &mut Vec<usize>,
) -> Result<()> {
    stepped.clear();

    // Walk up: everything must end on the right of top_l -> top_r.
    let (mut l, mut r) = (left_start, right_start);
    for _ in 0..=budget {
        let up_l = ccw_of(pts, l)?;
        let up_r = cw_of(pts, r)?;
        if should_step(pts, l, r, up_l, Turn::Left) {
            stepped.push(l);
            l = up_l;
        } else if should_step(pts, r, l, up_r, Turn::Right) {
            stepped.push(r);
            r = up_r;
        } else {
            break;
        }
    }
    let (top_l, top_r) = (l, r);

    // Walk down, mirrored.
    let (mut l, mut r) = (left_start, right_start);
    for _ in 0..=budget {
        let down_l = cw_of(pts, l)?;
        let down_r = ccw_of(pts, r)?;
        if should_step(pts, l, r, down_l, Turn::Right) {
            stepped.push(l);
            l = down_l;
        } else if should_step(pts, r, l, down_r, Turn::Left) {
            stepped.push(r);
            r = down_r;
        } else {
            break;
        }
    }
    let (bot_l, bot_r) = (l, r);

    link(pts, top_r, top_l);
    link(pts, bot_l, bot_r);

    for &i in stepped.iter() {
        if i != top_l && i != top_r && i != bot_l && i != bot_r {
            pts[i].clear();
        }
    }
    Ok(())
}

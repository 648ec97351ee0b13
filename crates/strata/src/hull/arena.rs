//! Owned hull arena: sorting, rebuilding, traversal and link validation.

use nalgebra::Vector2;

use super::build::build_hull;
use super::types::{HullPoint, PointId};
use crate::error::{Error, Result};

/// Points sorted by `(x, y)` plus their hull links.
///
/// `PointId(i)` is the i-th point in sorted order, so `PointId(0)` is the
/// lexicographically smallest point and always lies on the hull.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    points: Vec<HullPoint>,
}

impl Hull {
    /// Sort, drop exact duplicates, and build.
    pub fn from_points(points: &[Vector2<f64>]) -> Result<Self> {
        let mut pts: Vec<Vector2<f64>> = points.to_vec();
        pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        pts.dedup();
        if pts.len() < 2 {
            return Err(Error::TooFewPoints(pts.len()));
        }
        let mut hull = Self {
            points: pts.into_iter().map(HullPoint::new).collect(),
        };
        hull.rebuild()?;
        Ok(hull)
    }

    /// Clear every link and build again from the stored points.
    pub fn rebuild(&mut self) -> Result<()> {
        build_hull(&mut self.points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn points(&self) -> &[HullPoint] {
        &self.points
    }
    #[inline]
    pub fn point(&self, id: PointId) -> &HullPoint {
        &self.points[id.0]
    }
    #[inline]
    pub fn pos(&self, id: PointId) -> Vector2<f64> {
        self.points[id.0].pos
    }
    #[inline]
    pub fn cw(&self, id: PointId) -> Option<PointId> {
        self.points[id.0].cw
    }
    #[inline]
    pub fn ccw(&self, id: PointId) -> Option<PointId> {
        self.points[id.0].ccw
    }
    #[inline]
    pub fn is_on_hull(&self, id: PointId) -> bool {
        self.points[id.0].is_linked()
    }
    #[inline]
    pub fn start(&self) -> PointId {
        PointId(0)
    }

    /// Hull vertices in counterclockwise order, starting at `start()`.
    pub fn cycle_ccw(&self) -> Vec<PointId> {
        self.walk(|p| p.ccw)
    }

    /// Hull vertices in clockwise order, starting at `start()`.
    pub fn cycle_cw(&self) -> Vec<PointId> {
        self.walk(|p| p.cw)
    }

    pub fn hull_len(&self) -> usize {
        self.points.iter().filter(|p| p.is_linked()).count()
    }

    /// Points strictly inside, plus points collinear with a hull edge.
    pub fn interior(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_linked())
            .map(|(i, _)| PointId(i))
    }

    /// Follow `next` from `start()`; stops after `len()` steps on broken links.
    fn walk(&self, next: impl Fn(&HullPoint) -> Option<PointId>) -> Vec<PointId> {
        let start = self.start();
        let mut out = Vec::new();
        let mut cur = start;
        for _ in 0..self.points.len() {
            out.push(cur);
            match next(&self.points[cur.0]) {
                Some(n) if n == start => break,
                Some(n) => cur = n,
                None => break,
            }
        }
        out
    }

    /// Check link symmetry and that all linked points form a single closed cycle.
    pub fn validate(&self) -> Result<()> {
        for (i, p) in self.points.iter().enumerate() {
            match (p.cw, p.ccw) {
                (None, None) => continue,
                (Some(cw), Some(ccw)) => {
                    if self.points[cw.0].ccw != Some(PointId(i)) {
                        return Err(Error::BrokenHull(format!(
                            "point {i}: cw neighbor {} does not link back",
                            cw.0
                        )));
                    }
                    if self.points[ccw.0].cw != Some(PointId(i)) {
                        return Err(Error::BrokenHull(format!(
                            "point {i}: ccw neighbor {} does not link back",
                            ccw.0
                        )));
                    }
                }
                _ => {
                    return Err(Error::BrokenHull(format!(
                        "point {i} has exactly one neighbor"
                    )))
                }
            }
        }
        if !self.is_on_hull(self.start()) {
            return Err(Error::BrokenHull("start point is not on the hull".into()));
        }
        let linked = self.hull_len();
        for (name, cycle) in [("ccw", self.cycle_ccw()), ("cw", self.cycle_cw())] {
            if cycle.len() != linked {
                return Err(Error::BrokenHull(format!(
                    "{name} cycle has {} points, {linked} are linked",
                    cycle.len()
                )));
            }
        }
        Ok(())
    }
}

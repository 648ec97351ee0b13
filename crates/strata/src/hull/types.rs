//! Arena types for the hull: points with optional cw/ccw neighbor ids.

use nalgebra::Vector2;

/// Index of a point in its hull arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// A point and its two hull neighbors.
///
/// Invariants:
/// - `cw` and `ccw` are both `Some` (point on the hull) or both `None`.
/// - `a.cw == Some(b)` iff `b.ccw == Some(a)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullPoint {
    pub pos: Vector2<f64>,
    pub cw: Option<PointId>,
    pub ccw: Option<PointId>,
}

impl HullPoint {
    #[inline]
    pub fn new(pos: Vector2<f64>) -> Self {
        Self {
            pos,
            cw: None,
            ccw: None,
        }
    }
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.cw.is_some() && self.ccw.is_some()
    }
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.cw = None;
        self.ccw = None;
    }
}

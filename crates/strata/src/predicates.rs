//! Orientation predicate shared by the hull, strip and picking code.
//!
//! `turn` is an exact sign test on the raw determinant (no epsilon): only a
//! determinant of exactly zero counts as collinear.

use nalgebra::Vector2;

/// Direction of the path `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Twice the signed area of triangle `(a, b, c)`; positive for a left turn.
#[inline]
pub fn orient2d(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// Classify `a → b → c` as a left turn, right turn, or collinear.
#[inline]
pub fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Turn {
    let det = orient2d(a, b, c);
    if det > 0.0 {
        Turn::Left
    } else if det < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Strict containment of `p` in the CCW triangle `(a, b, c)`.
///
/// Points on an edge are outside; a clockwise triangle contains nothing.
#[inline]
pub fn point_in_triangle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
) -> bool {
    turn(a, b, p) == Turn::Left && turn(b, c, p) == Turn::Left && turn(c, a, p) == Turn::Left
}

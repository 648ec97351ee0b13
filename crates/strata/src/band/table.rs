//! Minimum-area DP table over two aligned slices.
//!
//! Rows index the lower slice, columns the upper one. Both index lists start
//! at the seam vertex and repeat it at the end, so the cyclic problem becomes
//! a monotone lattice walk from `(0, 0)` to `(rows - 1, cols - 1)`.

use std::fmt;

use nalgebra::DMatrix;

use super::types::{triangle_area, SliceStack, VertexId};

/// Which neighbor cell a minimum came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Only `(0, 0)`.
    Origin,
    /// From `(r - 1, c)`; the third vertex is on the lower slice.
    PrevRow,
    /// From `(r, c - 1)`; the third vertex is on the upper slice.
    PrevCol,
}

/// Filled DP table for one slice pair.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaTable {
    /// Upper slice from its seam vertex, seam repeated at the end (columns).
    pub upper: Vec<VertexId>,
    /// Lower slice from its seam vertex, seam repeated at the end (rows).
    pub lower: Vec<VertexId>,
    pub area: DMatrix<f64>,
    pub dir: DMatrix<Step>,
}

impl AreaTable {
    /// Fill the table. Exact ties between the two candidates go to `PrevCol`.
    pub(crate) fn fill(stack: &SliceStack, upper: Vec<VertexId>, lower: Vec<VertexId>) -> Self {
        let rows = lower.len();
        let cols = upper.len();
        let p = |id: VertexId| stack.pos(id);
        let mut area = DMatrix::<f64>::zeros(rows, cols);
        let mut dir = DMatrix::from_element(rows, cols, Step::Origin);

        for c in 1..cols {
            area[(0, c)] = area[(0, c - 1)] + triangle_area(p(lower[0]), p(upper[c]), p(upper[c - 1]));
            dir[(0, c)] = Step::PrevCol;
        }
        for r in 1..rows {
            area[(r, 0)] = area[(r - 1, 0)] + triangle_area(p(lower[r]), p(lower[r - 1]), p(upper[0]));
            dir[(r, 0)] = Step::PrevRow;
        }
        for r in 1..rows {
            for c in 1..cols {
                let from_row =
                    area[(r - 1, c)] + triangle_area(p(lower[r]), p(upper[c]), p(lower[r - 1]));
                let from_col =
                    area[(r, c - 1)] + triangle_area(p(lower[r]), p(upper[c]), p(upper[c - 1]));
                if from_row < from_col {
                    area[(r, c)] = from_row;
                    dir[(r, c)] = Step::PrevRow;
                } else {
                    area[(r, c)] = from_col;
                    dir[(r, c)] = Step::PrevCol;
                }
            }
        }
        Self {
            upper,
            lower,
            area,
            dir,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.lower.len()
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.upper.len()
    }
    /// Minimum total band area (the last cell).
    #[inline]
    pub fn min_area(&self) -> f64 {
        self.area[(self.rows() - 1, self.cols() - 1)]
    }

    /// Cells of the optimal walk, from the last cell back to `(0, 0)` inclusive.
    pub fn path(&self) -> Vec<(usize, usize)> {
        let (mut r, mut c) = (self.rows() - 1, self.cols() - 1);
        let mut out = Vec::with_capacity(r + c + 1);
        out.push((r, c));
        while r > 0 || c > 0 {
            match self.dir[(r, c)] {
                Step::PrevRow => r -= 1,
                Step::PrevCol => c -= 1,
                Step::Origin => unreachable!("origin tag away from (0, 0) at ({r}, {c})"),
            }
            out.push((r, c));
        }
        out
    }
}

/// Area with a direction mark per cell: `-` previous column, `|` previous row.
impl fmt::Display for AreaTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..self.cols() {
            write!(f, "{c:>7}   ")?;
        }
        writeln!(f)?;
        for r in 0..self.rows() {
            write!(f, "{r}")?;
            for c in 0..self.cols() {
                let mark = match self.dir[(r, c)] {
                    Step::PrevRow => '|',
                    Step::PrevCol => '-',
                    Step::Origin => '.',
                };
                write!(f, "{:>7.1} {mark} ", self.area[(r, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

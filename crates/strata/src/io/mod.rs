//! Line-oriented readers for points, triangle meshes and slice stacks.
//!
//! Readers keep going after a bad record so one run reports every defect,
//! each tagged with its 1-based line. Any defect means `Error::Malformed`
//! and no partial result.

mod points;
mod slices;
mod triangles;

pub use points::{parse_points, read_points};
pub use slices::{parse_slices, read_slices, StackOrder};
pub use triangles::{parse_triangles, read_triangles, MeshFile};

use crate::error::{Defect, Diagnostic, Error, Result};


/// Positional cursor over the lines of one file, collecting diagnostics.
pub(crate) struct Records<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    diags: Vec<Diagnostic>,
}

impl<'a> Records<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines().collect(),
            pos: 0,
            diags: Vec::new(),
        }
    }

    /// Next line with its 1-based number; past the end records `UnexpectedEof` once.
    pub(crate) fn next_line(&mut self) -> Option<(usize, &'a str)> {
        match self.lines.get(self.pos) {
            Some(&text) => {
                self.pos += 1;
                Some((self.pos, text))
            }
            None => {
                self.eof();
                None
            }
        }
    }

    /// Lines not read yet; an upper bound on the records a count can refer to.
    pub(crate) fn remaining(&self) -> usize {
        self.lines.len().saturating_sub(self.pos)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub(crate) fn eof(&mut self) {
        let line = self.lines.len() + 1;
        if !self
            .diags
            .iter()
            .any(|d| d.defect == Defect::UnexpectedEof)
        {
            self.diags.push(Diagnostic::new(line, Defect::UnexpectedEof));
        }
    }

    /// A line holding one non-negative integer.
    pub(crate) fn count(&mut self) -> Option<usize> {
        let (line, text) = self.next_line()?;
        match text.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.push(line, Defect::ExpectedCount);
                None
            }
        }
    }

    /// A line of exactly `N` finite floats; wrong arity reports `arity`.
    pub(crate) fn floats<const N: usize>(&mut self, arity: Defect) -> Option<[f64; N]> {
        let (line, text) = self.next_line()?;
        float_record(line, text, arity, &mut self.diags)
    }

    pub(crate) fn push(&mut self, line: usize, defect: Defect) {
        self.diags.push(Diagnostic::new(line, defect));
    }

    /// Non-blank lines left after the last record read.
    pub(crate) fn trailing(&self) -> usize {
        self.lines[self.pos.min(self.lines.len())..]
            .iter()
            .filter(|l| !l.trim().is_empty())
            .count()
    }

    pub(crate) fn finish<T>(self, value: T) -> Result<T> {
        if self.diags.is_empty() {
            Ok(value)
        } else {
            Err(Error::Malformed(self.diags))
        }
    }

    pub(crate) fn abort<T>(self) -> Result<T> {
        debug_assert!(!self.diags.is_empty(), "abort without a diagnostic");
        Err(Error::Malformed(self.diags))
    }
}

/// Parse one whitespace-separated record of `N` finite floats.
pub(crate) fn float_record<const N: usize>(
    line: usize,
    text: &str,
    arity: Defect,
    diags: &mut Vec<Diagnostic>,
) -> Option<[f64; N]> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != N {
        diags.push(Diagnostic::new(line, arity));
        return None;
    }
    let mut out = [0.0; N];
    let mut ok = true;
    for (slot, field) in out.iter_mut().zip(&fields) {
        match parse_float(field) {
            Ok(v) => *slot = v,
            Err(d) => {
                diags.push(Diagnostic::new(line, d));
                ok = false;
            }
        }
    }
    ok.then_some(out)
}

/// Finite float, or `NotANumber` carrying the raw field.
pub(crate) fn parse_float(field: &str) -> std::result::Result<f64, Defect> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Defect::NotANumber(field.to_string())),
    }
}

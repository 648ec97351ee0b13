//! Error types shared by the readers and the algorithms.
//!
//! Malformed input is reported per source line and aborts the whole build;
//! degenerate geometry is filtered silently and never shows up here.

use std::fmt;

use thiserror::Error;

/// A single defect found in an input record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Defect {
    #[error("vertex does not have two coordinates")]
    VertexNot2D,
    #[error("vertex does not have three coordinates")]
    VertexNot3D,
    #[error("triangle does not have three vertices")]
    TriangleNot3,
    #[error("vertex index is not in range [0,{}]", .len.saturating_sub(1))]
    IndexOutOfRange { index: i64, len: usize },
    #[error("expected a count")]
    ExpectedCount,
    #[error("field is not a number: {0:?}")]
    NotANumber(String),
    #[error("file ends before all records were read")]
    UnexpectedEof,
}

/// A defect tied to its 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub defect: Defect,
}

impl Diagnostic {
    #[inline]
    pub fn new(line: usize, defect: Defect) -> Self {
        Self { line, defect }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.defect)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// One or more malformed records; nothing was built.
    #[error("malformed input: {} defect(s), first at {}", .0.len(), first_of(.0))]
    Malformed(Vec<Diagnostic>),
    #[error("face {face} refers to vertex {index}, but only {len} vertices exist")]
    IndexOutOfRange { face: usize, index: usize, len: usize },
    #[error("a hull needs at least 2 distinct points, got {0}")]
    TooFewPoints(usize),
    #[error("slice {slice} has {len} vertices; at least 3 are required")]
    SliceTooSmall { slice: usize, len: usize },
    #[error("a stack needs at least 2 slices, got {0}")]
    TooFewSlices(usize),
    #[error("no slice pair starts at {upper} in a stack of {slices}")]
    NoSuchPair { upper: usize, slices: usize },
    #[error("hull links are inconsistent: {0}")]
    BrokenHull(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn first_of(diags: &[Diagnostic]) -> String {
    diags
        .first()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "<none>".to_string())
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_messages_match_reader_wording() {
        let d = Diagnostic::new(4, Defect::VertexNot2D);
        assert_eq!(d.to_string(), "line 4: vertex does not have two coordinates");
        let d = Diagnostic::new(9, Defect::IndexOutOfRange { index: 7, len: 5 });
        assert_eq!(d.to_string(), "line 9: vertex index is not in range [0,4]");
    }

    #[test]
    fn malformed_reports_count_and_first_line() {
        let err = Error::Malformed(vec![
            Diagnostic::new(2, Defect::TriangleNot3),
            Diagnostic::new(5, Defect::UnexpectedEof),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 defect(s)"), "{msg}");
        assert!(msg.contains("line 2"), "{msg}");
    }
}

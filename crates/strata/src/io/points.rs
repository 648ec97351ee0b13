use std::path::Path;

use nalgebra::Vector2;

use super::float_record;
use crate::error::{Defect, Error, Result};

/// One `x y` record per non-blank line.
pub fn parse_points(src: &str) -> Result<Vec<Vector2<f64>>> {
    let mut diags = Vec::new();
    let mut out = Vec::new();
    for (i, text) in src.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        if let Some([x, y]) = float_record::<2>(i + 1, text, Defect::VertexNot2D, &mut diags) {
            out.push(Vector2::new(x, y));
        }
    }
    if !diags.is_empty() {
        return Err(Error::Malformed(diags));
    }
    tracing::debug!(points = out.len(), "points parsed");
    Ok(out)
}

pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Vector2<f64>>> {
    parse_points(&std::fs::read_to_string(path)?)
}

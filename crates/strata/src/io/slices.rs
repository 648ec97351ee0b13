use std::path::Path;

use nalgebra::Vector3;

use super::Records;
use crate::band::SliceStack;
use crate::error::{Defect, Result};

/// Which end of the stack a slices file lists first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackOrder {
    /// Bottom slice first; reversed on read so index 0 is the top.
    #[default]
    BottomFirst,
    /// Top slice first; kept as is.
    TopFirst,
}

/// Slice count, then per slice a vertex count and that many `x y z` records.
/// The result is ordered top to bottom.
pub fn parse_slices(src: &str, order: StackOrder) -> Result<Vec<Vec<Vector3<f64>>>> {
    let mut rec = Records::new(src);
    let Some(ns) = rec.count() else {
        return rec.abort();
    };
    let mut loops = Vec::with_capacity(ns.min(rec.remaining()));
    for _ in 0..ns {
        let Some(nv) = rec.count() else {
            return rec.abort();
        };
        let mut ring = Vec::with_capacity(nv.min(rec.remaining()));
        for _ in 0..nv {
            if rec.at_end() {
                rec.eof();
                return rec.abort();
            }
            if let Some([x, y, z]) = rec.floats::<3>(Defect::VertexNot3D) {
                ring.push(Vector3::new(x, y, z));
            }
        }
        loops.push(ring);
    }
    if order == StackOrder::BottomFirst {
        loops.reverse();
    }
    tracing::debug!(slices = ns, ?order, "slices parsed");
    rec.finish(loops)
}

pub fn read_slices(path: impl AsRef<Path>, order: StackOrder) -> Result<SliceStack> {
    SliceStack::new(parse_slices(&std::fs::read_to_string(path)?, order)?)
}

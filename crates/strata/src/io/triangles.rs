use std::path::Path;

use nalgebra::Vector2;

use super::Records;
use crate::error::{Defect, Result};
use crate::strips::TriMesh;

/// Vertex table and faces as read, before any geometric filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshFile {
    pub verts: Vec<Vector2<f64>>,
    pub faces: Vec<[usize; 3]>,
}

impl MeshFile {
    /// Build adjacency; collinear faces are dropped there.
    pub fn into_mesh(self) -> Result<TriMesh> {
        TriMesh::new(self.verts, &self.faces)
    }
}

/// Vertex count, `x y` records, triangle count, `a b c` records.
pub fn parse_triangles(src: &str) -> Result<MeshFile> {
    let mut rec = Records::new(src);
    let Some(nv) = rec.count() else {
        return rec.abort();
    };
    let mut verts = Vec::with_capacity(nv.min(rec.remaining()));
    for _ in 0..nv {
        if rec.at_end() {
            rec.eof();
            return rec.abort();
        }
        if let Some([x, y]) = rec.floats::<2>(Defect::VertexNot2D) {
            verts.push(Vector2::new(x, y));
        }
    }

    let Some(nt) = rec.count() else {
        return rec.abort();
    };
    let mut faces = Vec::with_capacity(nt.min(rec.remaining()));
    for _ in 0..nt {
        let Some((line, text)) = rec.next_line() else {
            return rec.abort();
        };
        if let Some(face) = face_record(&mut rec, line, text, nv) {
            faces.push(face);
        }
    }
    let extra = rec.trailing();
    if extra > 0 {
        tracing::debug!(lines = extra, "ignoring records after the last triangle");
    }
    tracing::debug!(vertices = nv, triangles = nt, "mesh parsed");
    rec.finish(MeshFile { verts, faces })
}

fn face_record(rec: &mut Records<'_>, line: usize, text: &str, nv: usize) -> Option<[usize; 3]> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        rec.push(line, Defect::TriangleNot3);
        return None;
    }
    let mut face = [0usize; 3];
    let mut ok = true;
    for (slot, field) in face.iter_mut().zip(&fields) {
        match field.parse::<i64>() {
            Ok(i) if i >= 0 && (i as u64) < nv as u64 => *slot = i as usize,
            Ok(i) => {
                rec.push(line, Defect::IndexOutOfRange { index: i, len: nv });
                ok = false;
            }
            Err(_) => {
                rec.push(line, Defect::NotANumber(field.to_string()));
                ok = false;
            }
        }
    }
    ok.then_some(face)
}

pub fn read_triangles(path: impl AsRef<Path>) -> Result<MeshFile> {
    parse_triangles(&std::fs::read_to_string(path)?)
}

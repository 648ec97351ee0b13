//! Subcommand bodies: read input, run one algorithm, write JSON plus sidecar.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;

use strata::band::{solve_table, triangulate_pair, triangulate_stack, Band, SliceStack};
use strata::gen::{circle_stack, grid_mesh, random_points, ReplayToken, StackCfg};
use strata::hull::Hull;
use strata::io::{read_points, read_slices, read_triangles, StackOrder};
use strata::strips::{build_strips, TriMesh};
use strata::Vec2;

use crate::provenance::{write_sidecar, Payload};

#[derive(Debug, Serialize)]
pub struct HullVertex {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct HullReport {
    pub points: usize,
    /// Hull vertices counter-clockwise from the leftmost point.
    pub hull: Vec<HullVertex>,
    pub interior: usize,
}

#[derive(Debug, Serialize)]
pub struct StripsReport {
    pub triangles: usize,
    pub dropped_faces: usize,
    pub dropped_links: usize,
    pub strips: usize,
    pub chains: Vec<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct BandTriangleOut {
    pub verts: [usize; 3],
    pub normal: [f64; 3],
}

#[derive(Debug, Serialize)]
pub struct BandOut {
    pub upper: usize,
    pub seed: [usize; 2],
    pub total_area: f64,
    pub triangles: Vec<BandTriangleOut>,
}

#[derive(Debug, Serialize)]
pub struct BandReport {
    pub slices: usize,
    pub vertices: Vec<[f64; 3]>,
    pub bands: Vec<BandOut>,
}

pub fn hull_report(points: &[Vec2<f64>]) -> Result<HullReport> {
    let hull = Hull::from_points(points)?;
    hull.validate()?;
    let cycle = hull
        .cycle_ccw()
        .into_iter()
        .map(|id| {
            let p = hull.pos(id);
            HullVertex {
                id: id.0,
                x: p.x,
                y: p.y,
            }
        })
        .collect();
    Ok(HullReport {
        points: hull.len(),
        hull: cycle,
        interior: hull.interior().count(),
    })
}

pub fn strips_report(mut mesh: TriMesh) -> StripsReport {
    let strips = build_strips(&mut mesh);
    tracing::info!("generated {strips} strips");
    StripsReport {
        triangles: mesh.len(),
        dropped_faces: mesh.dropped_faces(),
        dropped_links: mesh.dropped_links(),
        strips,
        chains: mesh
            .strips()
            .into_iter()
            .map(|c| c.into_iter().map(|t| t.0).collect())
            .collect(),
    }
}

/// All pairs, or only the one starting at `pair`; `table` logs each DP table.
pub fn band_report(stack: &SliceStack, pair: Option<usize>, table: bool) -> Result<BandReport> {
    let bands: Vec<Band> = match pair {
        Some(k) => vec![triangulate_pair(stack, k)?],
        None => triangulate_stack(stack)?,
    };
    if table {
        for band in &bands {
            let t = solve_table(stack, band.upper)?;
            tracing::info!(upper = band.upper, "area table\n{t}");
        }
    }
    let out = bands
        .iter()
        .map(|b| BandOut {
            upper: b.upper,
            seed: [b.seed.0 .0, b.seed.1 .0],
            total_area: b.total_area,
            triangles: b
                .triangles
                .iter()
                .map(|t| BandTriangleOut {
                    verts: t.verts.map(|v| v.0),
                    normal: [t.normal.x, t.normal.y, t.normal.z],
                })
                .collect(),
        })
        .collect();
    Ok(BandReport {
        slices: stack.len(),
        vertices: stack.verts().iter().map(|v| [v.pos.x, v.pos.y, v.pos.z]).collect(),
        bands: out,
    })
}

pub fn hull(input: &Path, out: &Path) -> Result<HullReport> {
    let points = read_points(input).with_context(|| format!("reading {}", input.display()))?;
    tracing::info!("read {} points", points.len());
    let report = hull_report(&points)?;
    tracing::info!(hull = report.hull.len(), interior = report.interior, "hull built");
    write_json(out, &report)?;
    write_sidecar(out, Payload::new("hull", json!({})).with_input(input))?;
    Ok(report)
}

pub fn strips(input: &Path, out: &Path) -> Result<StripsReport> {
    let file = read_triangles(input).with_context(|| format!("reading {}", input.display()))?;
    tracing::info!("read {} vertices and {} triangles", file.verts.len(), file.faces.len());
    let report = strips_report(file.into_mesh()?);
    write_json(out, &report)?;
    write_sidecar(out, Payload::new("strips", json!({})).with_input(input))?;
    Ok(report)
}

pub fn band(
    input: &Path,
    out: &Path,
    pair: Option<usize>,
    top_first: bool,
    table: bool,
) -> Result<BandReport> {
    let order = if top_first {
        StackOrder::TopFirst
    } else {
        StackOrder::BottomFirst
    };
    let stack = read_slices(input, order).with_context(|| format!("reading {}", input.display()))?;
    tracing::info!("read {} slices", stack.len());
    let report = band_report(&stack, pair, table)?;
    write_json(out, &report)?;
    let params = json!({ "pair": pair, "top_first": top_first });
    write_sidecar(out, Payload::new("band", params).with_input(input))?;
    Ok(report)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    Hull,
    Strips,
    Band,
}

/// Run one algorithm on generated input. `size` is the point count, the grid
/// side, or the slice count.
pub fn demo(kind: DemoKind, seed: u64, size: usize, out: &Path) -> Result<()> {
    let tok = ReplayToken::new(seed, 0);
    match kind {
        DemoKind::Hull => {
            let report = hull_report(&random_points(size, 1.0, tok))?;
            tracing::info!(hull = report.hull.len(), "demo hull");
            write_json(out, &report)?;
        }
        DemoKind::Strips => {
            let (verts, faces) = grid_mesh(size, size);
            let report = strips_report(TriMesh::new(verts, &faces)?);
            write_json(out, &report)?;
        }
        DemoKind::Band => {
            let cfg = StackCfg {
                slices: size.max(2),
                ..StackCfg::default()
            };
            let stack = SliceStack::new(circle_stack(cfg, tok))?;
            let report = band_report(&stack, None, false)?;
            tracing::info!(bands = report.bands.len(), "demo band");
            write_json(out, &report)?;
        }
    }
    let params = json!({ "kind": format!("{kind:?}").to_lowercase(), "seed": seed, "size": size });
    write_sidecar(out, Payload::new("demo", params))?;
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn load(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn hull_writes_cycle_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.txt");
        fs::write(&input, "0 0\n4 0\n4 4\n0 4\n2 2\n").unwrap();
        let out = dir.path().join("out/hull.json");
        let report = hull(&input, &out).unwrap();
        assert_eq!(report.hull.len(), 4);
        assert_eq!(report.interior, 1);
        let doc = load(&out);
        assert_eq!(doc["points"], 5);
        assert_eq!(doc["hull"][0]["x"], 0.0);
        assert!(dir.path().join("out/hull.provenance.json").exists());
    }

    #[test]
    fn hull_of_an_integer_grid_keeps_corners() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("grid.txt");
        let src: String = (0..5)
            .flat_map(|i| (0..5).map(move |j| format!("{i} {j}\n")))
            .collect();
        fs::write(&input, src).unwrap();
        let report = hull(&input, &dir.path().join("grid.json")).unwrap();
        assert_eq!(report.hull.len(), 4);
        assert_eq!(report.interior, 21);
    }

    #[test]
    fn malformed_input_surfaces_diagnostics() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.txt");
        fs::write(&input, "0 0\n1\n2 2\n").unwrap();
        let err = hull(&input, &dir.path().join("hull.json")).unwrap_err();
        match err.downcast_ref::<strata::Error>() {
            Some(strata::Error::Malformed(d)) => {
                assert_eq!(d.len(), 1);
                assert_eq!(d[0].to_string(), "line 2: vertex does not have two coordinates");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!dir.path().join("hull.json").exists());
    }

    #[test]
    fn strips_on_two_triangles() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("mesh.txt");
        fs::write(&input, "4\n0 0\n1 0\n1 1\n0 1\n2\n0 1 2\n0 2 3\n").unwrap();
        let report = strips(&input, &dir.path().join("strips.json")).unwrap();
        assert_eq!(report.strips, 1);
        assert_eq!(report.chains, vec![vec![0, 1]]);
    }

    #[test]
    fn band_single_pair_and_order() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("slices.txt");
        // Bottom slice first, as in the reference data files.
        let src = "2\n4\n0 0 0\n0 0 1\n1 0 1\n1 0 0\n4\n0 1 0\n0 1 1\n1 1 1\n1 1 0\n";
        fs::write(&input, src).unwrap();
        let out = dir.path().join("band.json");
        let report = band(&input, &out, Some(0), false, true).unwrap();
        assert_eq!(report.bands.len(), 1);
        assert_eq!(report.bands[0].triangles.len(), 8);
        assert!((report.bands[0].total_area - 4.0).abs() < 1e-12);
        assert_eq!(report.vertices[0][1], 1.0);
        let prov = load(&dir.path().join("band.provenance.json"));
        assert_eq!(prov["params"]["top_first"], false);

        let err = band(&input, &out, Some(1), false, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<strata::Error>(),
            Some(strata::Error::NoSuchPair { upper: 1, slices: 2 })
        ));
    }

    #[test]
    fn demos_are_reproducible() {
        let dir = tempdir().unwrap();
        for kind in [DemoKind::Hull, DemoKind::Strips, DemoKind::Band] {
            let a = dir.path().join("a.json");
            let b = dir.path().join("b.json");
            demo(kind, 5, 6, &a).unwrap();
            demo(kind, 5, 6, &b).unwrap();
            assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap(), "{kind:?}");
            assert_eq!(load(&dir.path().join("a.provenance.json"))["command"], "demo");
        }
    }
}

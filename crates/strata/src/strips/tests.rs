use super::*;
use crate::gen::{grid_mesh, ReplayToken};
use crate::Error;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::seq::SliceRandom;

/// Chains partition the mesh, links are mutual, and every link joins neighbors.
fn assert_partition(mesh: &TriMesh, count: usize) {
    let strips = mesh.strips();
    assert_eq!(strips.len(), count);
    let mut seen = vec![false; mesh.len()];
    for chain in &strips {
        for w in chain.windows(2) {
            assert!(mesh.are_adjacent(w[0], w[1]), "{:?} not adjacent", w);
            assert_eq!(mesh.triangle(w[0]).next, Some(w[1]));
            assert_eq!(mesh.triangle(w[1]).prev, Some(w[0]));
        }
        for id in chain {
            assert!(!seen[id.0], "{id:?} in two chains");
            seen[id.0] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "some triangle is in no chain");
}

fn star() -> TriMesh {
    let verts = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 2.0],
        vector![1.0, -1.5],
        vector![2.5, 1.5],
        vector![-0.5, 1.5],
    ];
    TriMesh::new(verts, &[[0, 1, 2], [1, 0, 3], [2, 1, 4], [0, 2, 5]]).unwrap()
}

#[test]
fn adjacency_from_shared_edges() {
    let mesh = star();
    assert_eq!(mesh.len(), 4);
    let centre: Vec<TriId> = mesh.neighbors(TriId(0)).collect();
    assert_eq!(centre, vec![TriId(1), TriId(2), TriId(3)]);
    for leaf in 1..4 {
        let n: Vec<TriId> = mesh.neighbors(TriId(leaf)).collect();
        assert_eq!(n, vec![TriId(0)]);
    }
    assert_eq!(mesh.dropped_links(), 0);
}

#[test]
fn star_strips_follow_lowest_id_tie_break() {
    let mut mesh = star();
    let count = build_strips(&mut mesh);
    assert_eq!(count, 2);
    assert_eq!(
        mesh.strips(),
        vec![vec![TriId(1), TriId(0), TriId(2)], vec![TriId(3)]]
    );
    assert_partition(&mesh, count);
}

#[test]
fn row_of_triangles_is_one_strip() {
    // Unit squares along x, each split on its rising diagonal.
    let (verts, faces) = grid_mesh(3, 1);
    let mut mesh = TriMesh::new(verts, &faces).unwrap();
    let count = build_strips(&mut mesh);
    assert_eq!(count, 1);
    // Both end triangles have one neighbor; the lower id (upper-left of cell 0) starts.
    assert_eq!(
        mesh.strips()[0],
        [1, 0, 3, 2, 5, 4].map(TriId).to_vec()
    );
    assert_partition(&mesh, count);
}

#[test]
fn degenerate_faces_are_dropped() {
    let verts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![0.0, 1.0],
    ];
    let mesh = TriMesh::new(verts, &[[0, 1, 2], [0, 1, 3], [1, 1, 3]]).unwrap();
    assert_eq!(mesh.len(), 1);
    assert_eq!(mesh.dropped_faces(), 2);
    assert_eq!(mesh.triangle(TriId(0)).source, 1);
}

#[test]
fn out_of_range_index_aborts() {
    let verts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    let err = TriMesh::new(verts, &[[0, 1, 2], [0, 3, 1]]).unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            face: 1,
            index: 3,
            len: 3
        }
    ));
}

#[test]
fn repeated_directed_edge_keeps_relation_symmetric() {
    let verts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.5, 1.0],
        vector![0.5, -1.0],
        vector![0.6, -2.0],
    ];
    let mesh = TriMesh::new(verts, &[[0, 1, 2], [1, 0, 3], [1, 0, 4]]).unwrap();
    assert_eq!(mesh.dropped_links(), 1);
    assert!(mesh.are_adjacent(TriId(0), TriId(2)));
    assert!(mesh.are_adjacent(TriId(2), TriId(0)));
    assert_eq!(mesh.neighbors(TriId(1)).count(), 0);
    for t in 0..mesh.len() {
        for n in mesh.neighbors(TriId(t)) {
            assert!(mesh.are_adjacent(n, TriId(t)));
        }
    }
}

#[test]
fn locate_and_centroid() {
    let mesh = star();
    assert_eq!(mesh.locate(vector![1.0, 0.5]), Some(TriId(0)));
    assert_eq!(mesh.locate(vector![1.0, -0.5]), Some(TriId(1)));
    assert_eq!(mesh.locate(vector![10.0, 10.0]), None);
    let c = mesh.centroid(TriId(0));
    assert!((c - vector![1.0, 2.0 / 3.0]).norm() < 1e-12);
}

#[test]
fn rebuilding_strips_is_idempotent() {
    let (verts, faces) = grid_mesh(6, 5);
    let mut mesh = TriMesh::new(verts, &faces).unwrap();
    let first = build_strips(&mut mesh);
    let snapshot = mesh.clone();
    let second = build_strips(&mut mesh);
    assert_eq!(first, second);
    assert_eq!(mesh, snapshot);
}

#[test]
fn empty_mesh_has_no_strips() {
    let mut mesh = TriMesh::new(Vec::<Vector2<f64>>::new(), &[]).unwrap();
    assert_eq!(build_strips(&mut mesh), 0);
    assert!(mesh.strips().is_empty());
}

#[test]
fn neighbor_across_several_edges_counts_once() {
    // Triangle 0 sees triangle 1 across all three edges; triangle 1 only sees
    // it across two, its third edge having been claimed by triangle 2.
    let verts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
    ];
    let mut mesh = TriMesh::new(verts, &[[0, 1, 2], [1, 0, 2], [1, 2, 3]]).unwrap();
    assert_eq!(mesh.dropped_links(), 0);
    assert_eq!(mesh.neighbors(TriId(0)).count(), 3);
    assert_eq!(
        mesh.neighbors(TriId(1)).collect::<Vec<_>>(),
        vec![TriId(0), TriId(0), TriId(2)]
    );
    let count = build_strips(&mut mesh);
    assert_eq!(count, 1);
    assert_eq!(mesh.strips(), vec![vec![TriId(0), TriId(1), TriId(2)]]);
    assert_partition(&mesh, count);
}

proptest! {
    #[test]
    fn prop_strips_partition_shuffled_grids(nx in 1usize..9, ny in 1usize..9, seed in any::<u64>()) {
        let (verts, mut faces) = grid_mesh(nx, ny);
        let mut rng = ReplayToken::new(seed, 0).to_std_rng();
        faces.shuffle(&mut rng);
        let mut mesh = TriMesh::new(verts, &faces).unwrap();
        prop_assert_eq!(mesh.len(), 2 * nx * ny);
        let count = build_strips(&mut mesh);
        prop_assert!(count >= 1 && count <= mesh.len());
        assert_partition(&mesh, count);
    }
}

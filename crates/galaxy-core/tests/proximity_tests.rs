// Host-side tests for the pairwise proximity graph.

use galaxy_core::*;
use glam::Vec3;
use rand::prelude::*;

const PALETTE: [[f32; 3]; 2] = [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];

fn still(positions: &[Vec3]) -> Vec<MovingPoint> {
    positions
        .iter()
        .map(|p| MovingPoint {
            position: *p,
            velocity: Vec3::ZERO,
        })
        .collect()
}

fn random_points(n: usize, seed: u64) -> Vec<MovingPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(n, 15.0, &mut rng).points().to_vec()
}

#[test]
fn two_points_within_distance_make_one_edge() {
    let pts = still(&[Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)]);
    let mut g = ProximityGraph::with_capacity(30);
    assert_eq!(g.build(&pts, 4.5, PALETTE), 1);
    let e = g.edges()[0];
    assert_eq!((e.index_a, e.index_b), (0, 1));
    assert_eq!(g.line_positions(), &[0.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
    assert_eq!(g.draw_vertex_count(), 2);
}

#[test]
fn two_points_beyond_distance_make_no_edge() {
    let pts = still(&[Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)]);
    let mut g = ProximityGraph::with_capacity(30);
    assert_eq!(g.build(&pts, 2.0, PALETTE), 0);
    assert!(g.is_empty());
    assert!(g.line_positions().is_empty());
    assert!(g.line_colors().is_empty());
}

#[test]
fn edges_match_brute_force_exactly_once() {
    let pts = random_points(120, 7);
    let d = 4.5_f32;
    let mut g = ProximityGraph::with_capacity(120 * 120);
    g.build(&pts, d, PALETTE);

    let mut seen = std::collections::HashSet::new();
    for e in g.edges() {
        assert!(e.index_a < e.index_b, "unordered or self edge {e:?}");
        assert!(seen.insert((e.index_a, e.index_b)), "duplicate edge {e:?}");
        let dist = pts[e.index_a].position.distance(pts[e.index_b].position);
        assert!(dist < d + 1e-4);
    }
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let near = pts[i].position.distance_squared(pts[j].position) < d * d;
            assert_eq!(near, seen.contains(&(i, j)), "pair ({i},{j})");
        }
    }
}

#[test]
fn edge_color_follows_parity_of_lower_index() {
    let pts = still(&[
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ]);
    let mut g = ProximityGraph::with_capacity(10);
    g.build(&pts, 1.5, PALETTE);
    assert_eq!(g.len(), 2);
    for (k, e) in g.edges().iter().enumerate() {
        let want = PALETTE[e.index_a % 2];
        assert_eq!(e.color_a, want);
        assert_eq!(e.color_b, want);
        assert_eq!(&g.line_colors()[k * 6..k * 6 + 3], &want);
        assert_eq!(&g.line_colors()[k * 6 + 3..k * 6 + 6], &want);
    }
}

#[test]
fn edge_count_is_capped_without_error() {
    // every pair qualifies: 20 points on top of each other
    let pts = still(&vec![Vec3::ONE; 20]);
    let mut g = ProximityGraph::with_capacity(15);
    assert_eq!(g.build(&pts, 1.0, PALETTE), 15);
    assert_eq!(g.len(), g.capacity());
    assert_eq!(g.line_positions().len(), 15 * 6);
    // the kept edges are the first ones in scan order
    assert_eq!((g.edges()[0].index_a, g.edges()[0].index_b), (0, 1));
    assert_eq!((g.edges()[14].index_a, g.edges()[14].index_b), (0, 15));
}

#[test]
fn rebuild_shrinks_live_range() {
    let mut g = ProximityGraph::with_capacity(10);
    g.build(&still(&[Vec3::ZERO, Vec3::X, Vec3::Y]), 5.0, PALETTE);
    assert_eq!(g.len(), 3);
    g.build(&still(&[Vec3::ZERO, Vec3::splat(10.0)]), 5.0, PALETTE);
    assert_eq!(g.len(), 0);
    assert_eq!(g.capacity(), 10);
}

#[test]
fn build_does_not_move_points() {
    let pts = random_points(50, 3);
    let before = pts.clone();
    let mut g = ProximityGraph::with_capacity(750);
    g.build(&pts, 4.5, PALETTE);
    assert_eq!(pts, before);
}

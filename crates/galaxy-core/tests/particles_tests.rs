// Host-side tests for the drifting network particles.

use galaxy_core::*;
use glam::Vec3;
use rand::prelude::*;

#[test]
fn same_seed_spawns_same_field() {
    let a = ParticleField::new(64, 15.0, &mut StdRng::seed_from_u64(9));
    let b = ParticleField::new(64, 15.0, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.points(), b.points());
}

#[test]
fn spawn_stays_inside_spawn_box() {
    let f = ParticleField::new(500, 15.0, &mut StdRng::seed_from_u64(1));
    for p in f.points() {
        for axis in 0..3 {
            assert!(p.position[axis].abs() <= NETWORK_SPAWN_EXTENT[axis] * 0.5);
            assert!(p.velocity[axis].abs() <= NETWORK_MAX_SPEED[axis]);
        }
    }
}

#[test]
fn step_integrates_velocity() {
    let mut f = ParticleField::from_points(
        vec![MovingPoint {
            position: Vec3::ZERO,
            velocity: Vec3::new(1.0, -2.0, 0.5),
        }],
        15.0,
    );
    f.step(0.05);
    assert!((f.points()[0].position - Vec3::new(0.05, -0.1, 0.025)).length() < 1e-6);
}

#[test]
fn step_wraps_x_and_y_but_not_z() {
    let mut f = ParticleField::from_points(
        vec![
            MovingPoint {
                position: Vec3::new(14.99, 0.0, 0.0),
                velocity: Vec3::new(1.0, 0.0, 0.0),
            },
            MovingPoint {
                position: Vec3::new(0.0, -14.99, 14.99),
                velocity: Vec3::new(0.0, -1.0, 1.0),
            },
        ],
        15.0,
    );
    f.step(0.05);
    let p = f.points();
    assert_eq!(p[0].position.x, -15.0);
    assert_eq!(p[1].position.y, 15.0);
    assert!(p[1].position.z > 15.0);
}

#[test]
fn oversized_or_bad_delta_is_clamped() {
    let start = MovingPoint {
        position: Vec3::ZERO,
        velocity: Vec3::X,
    };
    let mut f = ParticleField::from_points(vec![start], 15.0);
    f.step(10.0);
    assert!((f.points()[0].position.x - MAX_FRAME_DT).abs() < 1e-6);
    f.step(f32::NAN);
    f.step(-1.0);
    assert!((f.points()[0].position.x - MAX_FRAME_DT).abs() < 1e-6);
}

#[test]
fn write_positions_fills_flat_buffer() {
    let f = ParticleField::new(4, 15.0, &mut StdRng::seed_from_u64(2));
    let mut buf = vec![9.0; 12];
    assert_eq!(f.write_positions(&mut buf), 4);
    for (i, p) in f.points().iter().enumerate() {
        assert_eq!(&buf[i * 3..i * 3 + 3], &p.position.to_array());
    }
    let mut short = vec![0.0; 6];
    assert_eq!(f.write_positions(&mut short), 2);
}

#[test]
fn network_params_validation() {
    assert!(NetworkParams::default().validate().is_ok());
    assert_eq!(NetworkParams::default().max_edges(), NETWORK_COUNT * EDGE_CAP_FACTOR);

    let mut p = NetworkParams::default();
    p.count = 0;
    assert_eq!(p.validate(), Err(SceneError::EmptyNetwork));

    let mut p = NetworkParams::default();
    p.connection_distance = f32::NAN;
    assert!(matches!(
        p.validate(),
        Err(SceneError::InvalidConnectionDistance(_))
    ));

    let mut p = NetworkParams::default();
    p.edge_cap_factor = 0;
    assert_eq!(p.validate(), Err(SceneError::ZeroEdgeCapacity));

    let mut p = NetworkParams::default();
    p.wrap_bound = -1.0;
    assert_eq!(p.validate(), Err(SceneError::InvalidWrapBound(-1.0)));
}

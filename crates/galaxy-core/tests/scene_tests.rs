// Host-side tests for the scene composer and its fixed buffers.

use galaxy_core::*;
use glam::{Vec2, Vec3};

fn small_config() -> SceneConfig {
    SceneConfig {
        star_count: 50,
        dust_count: 40,
        halo_count: 30,
        ..SceneConfig::default()
    }
}

fn frame(elapsed: f32) -> FrameInput {
    FrameInput {
        elapsed,
        delta: 1.0 / 60.0,
        pointer: Vec2::ZERO,
    }
}

#[test]
fn scene_builds_with_defaults() {
    let scene = Scene::new(SceneConfig::default()).expect("default scene");
    assert_eq!(scene.field().len(), NETWORK_COUNT);
    assert_eq!(scene.graph().capacity(), NETWORK_COUNT * EDGE_CAP_FACTOR);
    assert_eq!(scene.stars().len(), STAR_COUNT);
    assert_eq!(scene.planet_transforms().len(), 8);
    assert_eq!(scene.rock_transforms().len(), 8);
    assert_eq!(scene.actor_transforms().len(), 4);
}

#[test]
fn bad_network_config_is_rejected() {
    let mut cfg = small_config();
    cfg.network.count = 0;
    assert!(matches!(Scene::new(cfg), Err(SceneError::EmptyNetwork)));
}

#[test]
fn same_seed_gives_identical_frames() {
    let mut a = Scene::new(small_config()).unwrap();
    let mut b = Scene::new(small_config()).unwrap();
    for i in 1..30 {
        a.tick(&frame(i as f32 / 60.0));
        b.tick(&frame(i as f32 / 60.0));
    }
    assert_eq!(a.point_positions(), b.point_positions());
    assert_eq!(a.graph().edges(), b.graph().edges());
    assert_eq!(a.transforms(), b.transforms());
}

#[test]
fn edges_are_built_from_this_frames_positions() {
    let mut scene = Scene::new(small_config()).unwrap();
    let d = scene.network().connection_distance;
    for i in 1..120 {
        scene.tick(&frame(i as f32 / 60.0));
        let pts = scene.field().points();
        let flat = scene.point_positions();
        for (k, p) in pts.iter().enumerate() {
            assert_eq!(&flat[k * 3..k * 3 + 3], &p.position.to_array());
        }
        for e in scene.graph().edges() {
            let dist = pts[e.index_a].position.distance(pts[e.index_b].position);
            assert!(dist < d + 1e-4);
        }
    }
}

#[test]
fn buffers_never_outgrow_their_capacity() {
    let mut cfg = small_config();
    // pack everything so far more pairs qualify than the cap allows
    cfg.network.connection_distance = 100.0;
    let mut scene = Scene::new(cfg).unwrap();
    let sprite_cap = scene.sprites().capacity();
    let line_cap = scene.network_lines().capacity_segments();
    for i in 1..10 {
        scene.tick(&frame(i as f32));
        assert_eq!(scene.graph().len(), scene.graph().capacity());
        assert_eq!(scene.network_lines().vertex_count(), scene.graph().draw_vertex_count());
        assert_eq!(scene.sprites().capacity(), sprite_cap);
        assert_eq!(scene.network_lines().capacity_segments(), line_cap);
        // every reserved sprite slot is used each frame
        assert_eq!(scene.sprites().len(), sprite_cap);
    }
}

#[test]
fn actor_transforms_follow_motion_model() {
    let mut scene = Scene::new(small_config()).unwrap();
    scene.tick(&frame(3.25));
    let actors = scene.actors().to_vec();
    for (a, t) in actors.iter().zip(scene.actor_transforms()) {
        let pose = a.pose_at(3.25);
        assert_eq!(t.position, pose.position);
        assert_eq!(t.rotation, pose.rotation);
        assert_eq!(t.scale, a.scale);
    }
}

#[test]
fn custom_actors_replace_default_squad() {
    let mut cfg = small_config();
    cfg.actors = Some(vec![TrajectoryActor {
        kind: ActorKind::Rocket,
        pattern: MotionPattern::Orbit,
        base_position: Vec3::ZERO,
        speed: 1.0,
        phase_offset: 0.0,
        scale: 1.0,
    }]);
    let mut scene = Scene::new(cfg).unwrap();
    scene.tick(&frame(0.0));
    assert_eq!(scene.actor_transforms().len(), 1);
    assert!((scene.actor_transforms()[0].position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
}

#[test]
fn avatar_eases_toward_pointer() {
    let mut scene = Scene::new(small_config()).unwrap();
    let mut input = frame(1.0);
    input.pointer = Vec2::new(1.0, 0.0);
    let mut last = 0.0;
    for i in 0..240 {
        input.elapsed = 1.0 + i as f32 / 60.0;
        scene.tick(&input);
        let q = scene.avatar_transform().rotation;
        let yaw = (q * Vec3::Z).x;
        assert!(yaw >= last - 1e-6);
        last = yaw;
    }
    // settles near the pointer gain
    assert!((last - AVATAR_TILT.sin()).abs() < 1e-2);
}

#[test]
fn planets_stay_on_their_orbits() {
    let mut scene = Scene::new(small_config()).unwrap();
    let sun = SOLAR_POSITION;
    let planets = galaxy_core::solar::default_planets();
    for step in 0..20 {
        scene.tick(&frame(step as f32 * 1.7));
        for (pl, t) in planets.iter().zip(scene.planet_transforms()) {
            let r = t.position.distance(sun);
            assert!((r - pl.distance * SOLAR_SCALE).abs() < 1e-3, "{} off orbit", pl.name);
            assert!((t.scale - pl.size * SOLAR_SCALE).abs() < 1e-6);
        }
    }
}

#[test]
fn non_finite_time_does_not_poison_buffers() {
    let mut scene = Scene::new(small_config()).unwrap();
    scene.tick(&FrameInput {
        elapsed: f32::NAN,
        delta: f32::INFINITY,
        pointer: Vec2::ZERO,
    });
    assert!(scene.point_positions().iter().all(|v| v.is_finite()));
    assert!(scene.transforms().iter().all(|t| t.position.is_finite()));
}

#[test]
fn ringed_planets_emit_ring_lines() {
    let scene = Scene::new(small_config()).unwrap();
    let planets = galaxy_core::solar::default_planets();
    let ringed = planets.iter().filter(|p| p.ring).count();
    assert_eq!(ringed, 2);
    let expected = planets.len() * ORBIT_PATH_SEGMENTS + ringed * 2 * RING_SEGMENTS + 4;
    assert_eq!(scene.decor_lines().vertex_count(), expected * 2);
}

#[test]
fn network_lines_mirror_graph_segments_and_colours() {
    let mut scene = Scene::new(small_config()).unwrap();
    for i in 1..60 {
        scene.tick(&frame(i as f32 / 60.0));
        let positions = scene.graph().line_positions();
        let colors = scene.graph().line_colors();
        let verts = scene.network_lines().as_slice();
        assert_eq!(verts.len(), scene.graph().len() * 2);
        for (k, v) in verts.iter().enumerate() {
            assert_eq!(&v.position[..], &positions[k * 3..k * 3 + 3]);
            assert_eq!(&v.color[..3], &colors[k * 3..k * 3 + 3]);
            assert_eq!(v.color[3], NETWORK_LINE_ALPHA);
        }
    }
}

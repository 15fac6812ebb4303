//! Scene composer: owns every decorative actor and the particle network, and
//! rewrites the fixed render buffers once per tick.

use crate::buffers::*;
use crate::constants::*;
use crate::decor::{Avatar, DustCloud, SpaceRock};
use crate::error::SceneError;
use crate::motion::{ActorKind, ActorPose, MotionPattern, TrajectoryActor};
use crate::particles::{NetworkParams, ParticleField};
use crate::proximity::ProximityGraph;
use crate::solar::SolarSystem;
use crate::state::{FrameInput, Transform};
use glam::{Quat, Vec3};
use rand::prelude::*;

pub const NETWORK_LINE_ALPHA: f32 = 0.3;
const ROCKET_BODY: [f32; 4] = [0.88, 0.88, 0.88, 1.0];
const ROCKET_NOSE: [f32; 4] = [1.0, 42.0 / 255.0, 42.0 / 255.0, 1.0];
const ROBOT_BODY: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const ROBOT_VISOR: [f32; 4] = [NEON_CYAN[0], NEON_CYAN[1], NEON_CYAN[2], 1.0];
const AVATAR_LAYERS: usize = 5;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub network: NetworkParams,
    pub seed: u64,
    pub star_count: usize,
    pub dust_count: usize,
    pub halo_count: usize,
    /// Rockets and robots; `None` uses the default squad with seeded phases.
    pub actors: Option<Vec<TrajectoryActor>>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            network: NetworkParams::default(),
            seed: 42,
            star_count: STAR_COUNT,
            dust_count: DUST_COUNT,
            halo_count: HALO_COUNT,
            actors: None,
        }
    }
}

/// Two rockets and two robots criss-crossing the foreground.
pub fn default_squad(rng: &mut impl Rng) -> Vec<TrajectoryActor> {
    let mut actor = |kind, pattern, base: [f32; 3], scale, speed| TrajectoryActor {
        kind,
        pattern,
        base_position: Vec3::from(base),
        speed,
        phase_offset: rng.gen::<f32>() * 100.0,
        scale,
    };
    vec![
        actor(ActorKind::Rocket, MotionPattern::Figure8, [0.0, 0.0, -4.0], 0.8, 0.5),
        actor(ActorKind::Rocket, MotionPattern::Wander, [2.0, 2.0, 0.0], 0.6, 0.7),
        actor(ActorKind::Robot, MotionPattern::Wander, [-2.0, 0.0, -2.0], 0.7, 0.4),
        actor(ActorKind::Robot, MotionPattern::Orbit, [3.0, -2.0, -5.0], 0.8, 0.3),
    ]
}

pub struct Scene {
    network: NetworkParams,
    solar: SolarSystem,
    rocks: Vec<SpaceRock>,
    actors: Vec<TrajectoryActor>,
    avatar: Avatar,
    dust: DustCloud,
    field: ParticleField,
    graph: ProximityGraph,

    point_positions: Box<[f32]>,
    stars: SpriteBatch,
    sprites: SpriteBatch,
    network_lines: LineBatch,
    decor_lines: LineBatch,
    orbit_paths: Vec<Vec<Vec3>>,
    ring_scratch: Vec<Vec3>,

    transforms: Vec<Transform>,
    poses: Vec<ActorPose>,
    elapsed: f32,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        config.network.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);

        let network = config.network;
        let field = ParticleField::new(network.count, network.wrap_bound, &mut rng);
        let graph = ProximityGraph::with_capacity(network.max_edges());
        let solar = SolarSystem::default();
        let rocks = SpaceRock::scatter(&mut rng);
        let actors = match config.actors {
            Some(a) => a,
            None => default_squad(&mut rng),
        };
        let avatar = Avatar::new(config.halo_count, &mut rng);
        let dust = DustCloud::new(config.dust_count, &mut rng);

        let mut stars = SpriteBatch::with_capacity(config.star_count);
        for (p, brightness) in crate::decor::starfield(config.star_count, &mut rng) {
            stars.push(SpriteInstance::billboard(
                SPRITE_DOT,
                p,
                STAR_SIZE,
                [brightness, brightness, brightness, 1.0],
            ));
        }

        let orbit_paths = solar
            .planets
            .iter()
            .map(|pl| {
                let mut path = Vec::with_capacity(ORBIT_PATH_SEGMENTS);
                solar.orbit_path(pl.distance, ORBIT_PATH_SEGMENTS, &mut path);
                path
            })
            .collect::<Vec<_>>();
        let ringed = solar.planets.iter().filter(|p| p.ring).count();

        let sprite_capacity = dust.len()
            + 2 // sun + corona
            + solar.planets.len()
            + rocks.len()
            + network.count
            + actors.len()
            + avatar.halo_len()
            + AVATAR_LAYERS;
        let decor_segments = solar.planets.len() * ORBIT_PATH_SEGMENTS
            + ringed * 2 * RING_SEGMENTS
            + actors.len();
        let transform_count = solar.planets.len() + rocks.len() + actors.len() + 1;

        log::debug!(
            "scene: {} points, edge cap {}, {} sprites, {} decor segments",
            network.count,
            graph.capacity(),
            sprite_capacity,
            decor_segments
        );

        let mut scene = Self {
            point_positions: vec![0.0; network.count * 3].into_boxed_slice(),
            network_lines: LineBatch::with_capacity(graph.capacity()),
            network,
            solar,
            rocks,
            poses: Vec::with_capacity(actors.len()),
            actors,
            avatar,
            dust,
            field,
            graph,
            stars,
            sprites: SpriteBatch::with_capacity(sprite_capacity),
            decor_lines: LineBatch::with_capacity(decor_segments),
            orbit_paths,
            ring_scratch: Vec::with_capacity(RING_SEGMENTS),
            transforms: vec![Transform::default(); transform_count],
            elapsed: 0.0,
        };
        // populate buffers so the first frame has something to draw
        scene.tick(&FrameInput::default());
        Ok(scene)
    }

    /// Advance one frame. Particles move first so the edge scan always sees
    /// this frame's positions.
    pub fn tick(&mut self, input: &FrameInput) {
        let elapsed = if input.elapsed.is_finite() {
            input.elapsed
        } else {
            self.elapsed
        };
        self.elapsed = elapsed;

        self.field.step(input.delta);
        self.field.write_positions(&mut self.point_positions);
        self.graph.build(
            self.field.points(),
            self.network.connection_distance,
            self.network.palette,
        );
        self.write_network_lines();

        self.avatar.follow_pointer(input.pointer, input.delta);
        self.poses.clear();
        for a in &self.actors {
            self.poses.push(a.pose_at(elapsed));
        }

        self.write_transforms(elapsed);
        self.write_sprites(elapsed);
        self.write_decor_lines(elapsed);
    }

    fn write_network_lines(&mut self) {
        self.network_lines.clear();
        let positions = self.graph.line_positions().chunks_exact(6);
        let colors = self.graph.line_colors().chunks_exact(6);
        for (p, c) in positions.zip(colors) {
            self.network_lines.push_segment(
                Vec3::from_slice(&p[..3]),
                Vec3::from_slice(&p[3..]),
                [c[0], c[1], c[2], NETWORK_LINE_ALPHA],
            );
        }
    }

    fn write_transforms(&mut self, elapsed: f32) {
        let mut slots = self.transforms.iter_mut();
        for pl in &self.solar.planets {
            let pose = self.solar.pose(pl, elapsed);
            if let Some(t) = slots.next() {
                *t = Transform {
                    position: pose.position,
                    rotation: Quat::from_rotation_y(pose.spin),
                    scale: pose.radius,
                };
            }
        }
        for rock in &self.rocks {
            if let Some(t) = slots.next() {
                *t = Transform {
                    position: rock.position_at(elapsed),
                    rotation: rock.rotation_at(elapsed),
                    scale: rock.scale,
                };
            }
        }
        for (a, pose) in self.actors.iter().zip(&self.poses) {
            if let Some(t) = slots.next() {
                *t = Transform {
                    position: pose.position,
                    rotation: pose.rotation,
                    scale: a.scale,
                };
            }
        }
        if let Some(t) = slots.next() {
            *t = Transform {
                position: self.avatar.position_at(elapsed),
                rotation: self.avatar.rotation(),
                scale: self.avatar.scale,
            };
        }
    }

    fn write_sprites(&mut self, elapsed: f32) {
        let s = &mut self.sprites;
        s.clear();

        let dust_color = [NEON_CYAN[0], NEON_CYAN[1], NEON_CYAN[2], 0.8];
        for p in self.dust.positions_at(elapsed) {
            s.push(SpriteInstance::billboard(SPRITE_DOT, p, DUST_SIZE, dust_color));
        }

        let sun = self.solar.sun_position();
        let sun_r = self.solar.sun_radius();
        s.push(SpriteInstance::billboard(
            SPRITE_DOT,
            sun,
            sun_r * CORONA_SCALE,
            CORONA_COLOR,
        ));
        s.push(SpriteInstance::billboard(
            SPRITE_SPHERE,
            sun,
            sun_r,
            [SUN_COLOR[0], SUN_COLOR[1], SUN_COLOR[2], 1.0],
        ));

        let planets = self.solar.planets.len();
        for (pl, t) in self.solar.planets.iter().zip(&self.transforms[..planets]) {
            let c = pl.color;
            s.push(
                SpriteInstance::billboard(SPRITE_SPHERE, t.position, t.scale, [c[0], c[1], c[2], 1.0])
                    .with_spin(elapsed * PLANET_SPIN_PER_SEC),
            );
        }

        let rock_color = [ROCK_COLOR[0], ROCK_COLOR[1], ROCK_COLOR[2], 1.0];
        for t in &self.transforms[planets..planets + self.rocks.len()] {
            s.push(SpriteInstance::billboard(SPRITE_SPHERE, t.position, t.scale, rock_color));
        }

        let point_color = [NEON_CYAN[0], NEON_CYAN[1], NEON_CYAN[2], 0.9];
        for p in self.point_positions.chunks_exact(3) {
            s.push(SpriteInstance::billboard(
                SPRITE_DOT,
                Vec3::from_slice(p),
                NETWORK_POINT_SIZE,
                point_color,
            ));
        }

        for (a, pose) in self.actors.iter().zip(&self.poses) {
            let (color, size) = match a.kind {
                ActorKind::Rocket => (ROCKET_BODY, 0.5 * a.scale),
                ActorKind::Robot => (ROBOT_BODY, 0.4 * a.scale),
            };
            s.push(SpriteInstance::oriented(
                SPRITE_SPHERE,
                pose.position,
                size,
                color,
                pose.rotation,
            ));
        }

        for (p, c) in self.avatar.halo_at(elapsed) {
            s.push(SpriteInstance::billboard(
                SPRITE_DOT,
                p,
                HALO_POINT_SIZE,
                [c[0], c[1], c[2], 0.8],
            ));
        }

        let centre = self.avatar.position_at(elapsed);
        let rot = self.avatar.rotation();
        let k = self.avatar.scale;
        let cyan = |alpha: f32| [NEON_CYAN[0], NEON_CYAN[1], NEON_CYAN[2], alpha];
        s.push(
            SpriteInstance::oriented(SPRITE_RING, centre, 1.6 * 1.1 * k, [0.0, 0.0, 0.0, 0.9], rot)
                .with_inner_ratio(0.0),
        );
        s.push(
            SpriteInstance::oriented(SPRITE_RING, centre, AVATAR_GLOW_RADIUS * k, cyan(0.6), rot)
                .with_inner_ratio(1.55 / AVATAR_GLOW_RADIUS)
                .with_spin(-0.3 * elapsed),
        );
        s.push(
            SpriteInstance::oriented(SPRITE_RING, centre, 1.55 * k, [1.0, 1.0, 1.0, 1.0], rot)
                .with_inner_ratio(1.5 / 1.55),
        );
        let pulse = 1.0 + (elapsed * 3.0).sin() * 0.01;
        s.push(
            SpriteInstance::oriented(
                SPRITE_RING,
                centre,
                1.54 * k * pulse,
                cyan(0.5 + (elapsed * 4.0).sin() * 0.5),
                rot,
            )
            .with_inner_ratio(1.5 / 1.54),
        );
        s.push(SpriteInstance::oriented(
            SPRITE_AVATAR,
            centre,
            AVATAR_RADIUS * k,
            [1.0, 1.0, 1.0, 1.0],
            rot,
        ));
    }

    fn write_decor_lines(&mut self, elapsed: f32) {
        let l = &mut self.decor_lines;
        l.clear();
        let path_color = [1.0, 1.0, 1.0, ORBIT_PATH_ALPHA];
        for path in &self.orbit_paths {
            l.push_loop(path, path_color);
        }
        for pl in self.solar.planets.iter().filter(|p| p.ring) {
            let c = [pl.color[0], pl.color[1], pl.color[2], 0.6];
            for factor in [RING_INNER_FACTOR, RING_OUTER_FACTOR] {
                self.solar
                    .ring_path(pl, elapsed, factor, RING_SEGMENTS, &mut self.ring_scratch);
                l.push_loop(&self.ring_scratch, c);
            }
        }
        for (a, pose) in self.actors.iter().zip(&self.poses) {
            let forward = pose.rotation * Vec3::Z;
            let (color, len) = match a.kind {
                ActorKind::Rocket => (ROCKET_NOSE, 0.8 * a.scale),
                ActorKind::Robot => (ROBOT_VISOR, 0.5 * a.scale),
            };
            l.push_segment(pose.position, pose.position + forward * len, color);
        }
    }

    // ---------------- read-only views for the renderer ----------------

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn graph(&self) -> &ProximityGraph {
        &self.graph
    }

    /// Network point positions, three floats per point.
    #[inline]
    pub fn point_positions(&self) -> &[f32] {
        &self.point_positions
    }

    /// Static starfield, uploaded once.
    #[inline]
    pub fn stars(&self) -> &SpriteBatch {
        &self.stars
    }

    #[inline]
    pub fn sprites(&self) -> &SpriteBatch {
        &self.sprites
    }

    #[inline]
    pub fn network_lines(&self) -> &LineBatch {
        &self.network_lines
    }

    #[inline]
    pub fn decor_lines(&self) -> &LineBatch {
        &self.decor_lines
    }

    #[inline]
    pub fn actors(&self) -> &[TrajectoryActor] {
        &self.actors
    }

    #[inline]
    pub fn poses(&self) -> &[ActorPose] {
        &self.poses
    }

    #[inline]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn planet_transforms(&self) -> &[Transform] {
        &self.transforms[..self.solar.planets.len()]
    }

    pub fn rock_transforms(&self) -> &[Transform] {
        let start = self.solar.planets.len();
        &self.transforms[start..start + self.rocks.len()]
    }

    pub fn actor_transforms(&self) -> &[Transform] {
        let start = self.solar.planets.len() + self.rocks.len();
        &self.transforms[start..start + self.actors.len()]
    }

    pub fn avatar_transform(&self) -> Transform {
        self.transforms.last().copied().unwrap_or_default()
    }
}

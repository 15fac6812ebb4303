//! Background decoration: tumbling rocks, the starfield shell, the slowly
//! turning dust cloud, and the profile badge with its particle halo.

use crate::constants::*;
use glam::{EulerRot, Quat, Vec2, Vec3};
use rand::prelude::*;

/// Hand-placed rocks: (position, scale).
pub const ROCK_LAYOUT: [([f32; 3], f32); 8] = [
    ([-8.0, 6.0, -10.0], 0.5),
    ([10.0, -5.0, -12.0], 0.7),
    ([-12.0, -8.0, -15.0], 0.4),
    ([5.0, 10.0, -20.0], 0.6),
    ([0.0, -8.0, -8.0], 0.5),
    ([15.0, 5.0, -15.0], 0.8),
    ([-15.0, 2.0, -10.0], 0.3),
    ([8.0, -8.0, -5.0], 0.4),
];

#[derive(Clone, Debug)]
pub struct SpaceRock {
    pub position: Vec3,
    pub scale: f32,
    /// Radians per second about x, y, z.
    pub spin: Vec3,
    pub bob_phase: f32,
}

impl SpaceRock {
    pub fn scatter(rng: &mut impl Rng) -> Vec<SpaceRock> {
        ROCK_LAYOUT
            .iter()
            .map(|(p, s)| SpaceRock {
                position: Vec3::from(*p),
                scale: *s,
                spin: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * ROCK_SPIN_MAX,
                    (rng.gen::<f32>() - 0.5) * 2.0 * ROCK_SPIN_MAX,
                    (rng.gen::<f32>() - 0.5) * 2.0 * ROCK_SPIN_MAX,
                ),
                bob_phase: rng.gen::<f32>() * 100.0,
            })
            .collect()
    }

    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        self.position + Vec3::Y * float_bob(elapsed, self.bob_phase) * self.scale
    }

    pub fn rotation_at(&self, elapsed: f32) -> Quat {
        let a = self.spin * elapsed;
        Quat::from_euler(EulerRot::XYZ, a.x, a.y, a.z)
    }
}

/// Gentle vertical hover shared by the floating props.
#[inline]
pub fn float_bob(elapsed: f32, phase: f32) -> f32 {
    let t = (elapsed + phase) * FLOAT_SPEED;
    (t / 4.0).sin() * FLOAT_INTENSITY * 0.2 + (t * 0.5).sin() * FLOAT_INTENSITY * 0.1
}

/// Stars scattered in a thick spherical shell around the camera.
pub fn starfield(count: usize, rng: &mut impl Rng) -> Vec<(Vec3, f32)> {
    (0..count)
        .map(|_| {
            let r = STAR_RADIUS + rng.gen::<f32>() * STAR_DEPTH;
            let u: f32 = rng.gen::<f32>() * 2.0 - 1.0;
            let theta: f32 = rng.gen::<f32>() * std::f32::consts::TAU;
            let s = (1.0 - u * u).max(0.0).sqrt();
            let dir = Vec3::new(s * theta.cos(), u, s * theta.sin());
            // brightness falls off with depth into the shell
            let brightness = 1.0 - (r - STAR_RADIUS) / STAR_DEPTH * 0.6;
            (dir * r, brightness)
        })
        .collect()
}

pub struct DustCloud {
    local: Vec<Vec3>,
}

impl DustCloud {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let local = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                    (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                    (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                )
            })
            .collect();
        Self { local }
    }

    #[inline]
    pub fn rotation_at(elapsed: f32) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            elapsed * DUST_SPIN[0],
            elapsed * DUST_SPIN[1],
            0.0,
        )
    }

    pub fn positions_at(&self, elapsed: f32) -> impl Iterator<Item = Vec3> + '_ {
        let rot = Self::rotation_at(elapsed);
        self.local.iter().map(move |p| rot * *p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.local.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
struct HaloParticle {
    radius: f32,
    theta: f32,
    phi: f32,
    speed: f32,
    color: [f32; 3],
}

/// Profile badge: eases toward the pointer and carries an orbiting halo.
pub struct Avatar {
    pub base_position: Vec3,
    pub scale: f32,
    /// Current (x, y) tilt in radians.
    tilt: Vec2,
    halo: Vec<HaloParticle>,
}

impl Avatar {
    pub fn new(halo_count: usize, rng: &mut impl Rng) -> Self {
        let palette = [NEON_CYAN, NEON_PURPLE, [1.0, 1.0, 1.0]];
        let halo = (0..halo_count)
            .map(|_| {
                let dir = if rng.gen::<bool>() { 1.0 } else { -1.0 };
                HaloParticle {
                    radius: HALO_RADIUS_MIN + rng.gen::<f32>() * HALO_RADIUS_SPAN,
                    theta: rng.gen::<f32>() * std::f32::consts::TAU,
                    phi: (rng.gen::<f32>() - 0.5) * std::f32::consts::PI,
                    speed: (0.2 + rng.gen::<f32>() * 0.5) * dir,
                    color: palette[rng.gen_range(0..palette.len())],
                }
            })
            .collect();
        Self {
            base_position: AVATAR_POSITION,
            scale: AVATAR_SCALE,
            tilt: Vec2::ZERO,
            halo,
        }
    }

    /// Ease the tilt toward the pointer. `pointer` is in NDC, y up.
    pub fn follow_pointer(&mut self, pointer: Vec2, delta: f32) {
        let target = Vec2::new(-pointer.y * AVATAR_TILT, pointer.x * AVATAR_TILT);
        let alpha = ease_alpha(AVATAR_EASE, delta);
        self.tilt += (target - self.tilt) * alpha;
    }

    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        self.base_position + Vec3::Y * elapsed.sin() * AVATAR_BOB
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, 0.0)
    }

    #[inline]
    pub fn halo_len(&self) -> usize {
        self.halo.len()
    }

    /// Halo particle positions (world space) with their colors.
    pub fn halo_at(&self, elapsed: f32) -> impl Iterator<Item = (Vec3, [f32; 3])> + '_ {
        let centre = self.position_at(elapsed);
        let scale = self.scale;
        self.halo.iter().enumerate().map(move |(i, p)| {
            let t = p.theta + elapsed * p.speed * 0.2;
            let r = p.radius + (elapsed * 2.0 + i as f32).sin() * 0.1;
            let (sin_phi, cos_phi) = p.phi.sin_cos();
            let local = Vec3::new(r * t.cos() * cos_phi, r * sin_phi, r * t.sin() * cos_phi);
            (centre + local * scale, p.color)
        })
    }
}

/// Convert a per-frame lerp factor tuned at 60 fps into one for `delta` seconds.
#[inline]
pub fn ease_alpha(per_frame: f32, delta: f32) -> f32 {
    let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
    1.0 - (1.0 - per_frame).powf(delta * 60.0)
}

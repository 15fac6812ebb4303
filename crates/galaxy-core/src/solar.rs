//! Static solar-system layout: a sun with eight orbiting bodies, tilted and
//! shrunk into the back of the scene.

use crate::constants::*;
use glam::{Affine3A, EulerRot, Quat, Vec3};

#[derive(Clone, Debug)]
pub struct PlanetConfig {
    pub name: &'static str,
    pub distance: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub speed: f32,
    pub offset: f32,
    pub ring: bool,
}

fn planet(
    name: &'static str,
    distance: f32,
    size: f32,
    color: u32,
    speed: f32,
    offset: f32,
    ring: bool,
) -> PlanetConfig {
    PlanetConfig {
        name,
        distance,
        size,
        color: rgb_hex(color),
        speed,
        offset,
        ring,
    }
}

/// Mercury through Neptune with compacted distances.
pub fn default_planets() -> Vec<PlanetConfig> {
    vec![
        planet("mercury", 2.5, 0.3, 0xdbceca, 0.8, 0.0, false),
        planet("venus", 3.5, 0.5, 0xe3bb76, 0.6, 2.0, false),
        planet("earth", 5.0, 0.6, 0x2f6a69, 0.5, 4.0, false),
        planet("mars", 6.5, 0.4, 0xc1440e, 0.4, 1.0, false),
        planet("jupiter", 9.0, 1.4, 0xd8ca9d, 0.2, 5.0, false),
        planet("saturn", 12.0, 1.2, 0xead6b8, 0.15, 3.0, true),
        planet("uranus", 15.0, 1.0, 0xd1e7e7, 0.1, 6.0, true),
        planet("neptune", 18.0, 1.0, 0x5b5ddf, 0.08, 0.0, false),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetPose {
    /// World-space centre.
    pub position: Vec3,
    /// World-space radius.
    pub radius: f32,
    /// Self-rotation about the planet's own Y axis.
    pub spin: f32,
}

pub struct SolarSystem {
    pub planets: Vec<PlanetConfig>,
    transform: Affine3A,
    scale: f32,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new(default_planets())
    }
}

impl SolarSystem {
    pub fn new(planets: Vec<PlanetConfig>) -> Self {
        let tilt = Quat::from_euler(EulerRot::XYZ, SOLAR_TILT[0], SOLAR_TILT[1], SOLAR_TILT[2]);
        let transform =
            Affine3A::from_scale_rotation_translation(Vec3::splat(SOLAR_SCALE), tilt, SOLAR_POSITION);
        Self {
            planets,
            transform,
            scale: SOLAR_SCALE,
        }
    }

    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.transform.transform_point3(local)
    }

    #[inline]
    pub fn sun_position(&self) -> Vec3 {
        self.to_world(Vec3::ZERO)
    }

    #[inline]
    pub fn sun_radius(&self) -> f32 {
        SUN_RADIUS * self.scale
    }

    pub fn pose(&self, planet: &PlanetConfig, elapsed: f32) -> PlanetPose {
        let orbit_angle = elapsed * planet.speed + planet.offset;
        PlanetPose {
            position: self.to_world(orbit_local(planet.distance, orbit_angle)),
            radius: planet.size * self.scale,
            spin: elapsed * PLANET_SPIN_PER_SEC,
        }
    }

    /// World-space polyline of a planet's orbit path.
    pub fn orbit_path(&self, distance: f32, segments: usize, out: &mut Vec<Vec3>) {
        out.clear();
        let n = segments.max(3);
        for k in 0..n {
            let a = k as f32 / n as f32 * std::f32::consts::TAU;
            out.push(self.to_world(orbit_local(distance, a)));
        }
    }

    /// World-space circle of a ringed planet's band at `radius_factor * size`.
    pub fn ring_path(
        &self,
        planet: &PlanetConfig,
        elapsed: f32,
        radius_factor: f32,
        segments: usize,
        out: &mut Vec<Vec3>,
    ) {
        out.clear();
        let orbit = Quat::from_rotation_y(elapsed * planet.speed + planet.offset);
        let tilt = Quat::from_rotation_x(RING_TILT);
        let r = planet.size * radius_factor;
        let n = segments.max(3);
        for k in 0..n {
            let a = k as f32 / n as f32 * std::f32::consts::TAU;
            let ring_local = tilt * Vec3::new(r * a.cos(), r * a.sin(), 0.0);
            let local = orbit * (Vec3::new(planet.distance, 0.0, 0.0) + ring_local);
            out.push(self.to_world(local));
        }
    }
}

/// Position on a circular orbit in the system's XZ plane, rotating about +Y.
#[inline]
pub fn orbit_local(distance: f32, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * Vec3::new(distance, 0.0, 0.0)
}

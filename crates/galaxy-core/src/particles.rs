use crate::constants::*;
use crate::error::SceneError;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovingPoint {
    pub position: Vec3,
    /// World units per second.
    pub velocity: Vec3,
}

#[derive(Clone, Debug)]
pub struct NetworkParams {
    pub count: usize,
    pub connection_distance: f32,
    pub edge_cap_factor: usize,
    pub wrap_bound: f32,
    pub palette: [[f32; 3]; 2],
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            count: NETWORK_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            edge_cap_factor: EDGE_CAP_FACTOR,
            wrap_bound: NETWORK_WRAP_BOUND,
            palette: [NEON_CYAN, NEON_PURPLE],
        }
    }
}

impl NetworkParams {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.count == 0 {
            return Err(SceneError::EmptyNetwork);
        }
        if !self.connection_distance.is_finite() || self.connection_distance <= 0.0 {
            return Err(SceneError::InvalidConnectionDistance(self.connection_distance));
        }
        if self.edge_cap_factor == 0 {
            return Err(SceneError::ZeroEdgeCapacity);
        }
        if !self.wrap_bound.is_finite() || self.wrap_bound <= 0.0 {
            return Err(SceneError::InvalidWrapBound(self.wrap_bound));
        }
        Ok(())
    }

    #[inline]
    pub fn max_edges(&self) -> usize {
        self.count.saturating_mul(self.edge_cap_factor)
    }
}

/// The drifting points of the connection network.
pub struct ParticleField {
    points: Vec<MovingPoint>,
    wrap_bound: f32,
}

impl ParticleField {
    pub fn new(count: usize, wrap_bound: f32, rng: &mut impl Rng) -> Self {
        let points = (0..count)
            .map(|_| MovingPoint {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * NETWORK_SPAWN_EXTENT[0],
                    (rng.gen::<f32>() - 0.5) * NETWORK_SPAWN_EXTENT[1],
                    (rng.gen::<f32>() - 0.5) * NETWORK_SPAWN_EXTENT[2],
                ),
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * NETWORK_MAX_SPEED[0],
                    (rng.gen::<f32>() - 0.5) * 2.0 * NETWORK_MAX_SPEED[1],
                    (rng.gen::<f32>() - 0.5) * 2.0 * NETWORK_MAX_SPEED[2],
                ),
            })
            .collect();
        Self { points, wrap_bound }
    }

    pub fn from_points(points: Vec<MovingPoint>, wrap_bound: f32) -> Self {
        Self { points, wrap_bound }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[MovingPoint] {
        &self.points
    }

    /// Integrate velocities over `dt` seconds and wrap x/y at the bound.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let b = self.wrap_bound;
        for p in &mut self.points {
            p.position += p.velocity * dt;
            p.position.x = wrap_axis(p.position.x, b);
            p.position.y = wrap_axis(p.position.y, b);
        }
    }

    /// Copy positions into a flat xyz buffer; extra capacity is left untouched.
    pub fn write_positions(&self, out: &mut [f32]) -> usize {
        let n = self.points.len().min(out.len() / 3);
        for (i, p) in self.points.iter().take(n).enumerate() {
            out[i * 3] = p.position.x;
            out[i * 3 + 1] = p.position.y;
            out[i * 3 + 2] = p.position.z;
        }
        n
    }
}

#[inline]
fn wrap_axis(v: f32, bound: f32) -> f32 {
    if v > bound {
        -bound
    } else if v < -bound {
        bound
    } else {
        v
    }
}

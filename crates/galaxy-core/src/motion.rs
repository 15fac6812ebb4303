//! Stateless trajectories for the rockets and robots drifting through the scene.
//!
//! Every pose is a pure function of elapsed time, so an actor can be evaluated
//! at any timestamp (including the look-ahead sample used for its heading)
//! without carrying velocity or orientation between frames.

use crate::constants::*;
use glam::{Mat3, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPattern {
    Orbit,
    Figure8,
    Wander,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Rocket,
    Robot,
}

#[derive(Clone, Debug)]
pub struct TrajectoryActor {
    pub kind: ActorKind,
    pub pattern: MotionPattern,
    pub base_position: Vec3,
    pub speed: f32,
    pub phase_offset: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorPose {
    pub position: Vec3,
    pub look_target: Vec3,
    pub rotation: Quat,
}

/// Displacement from the base position for a pattern at pattern-time `t`.
pub fn pattern_offset(pattern: MotionPattern, t: f32) -> Vec3 {
    match pattern {
        MotionPattern::Orbit => Vec3::new(
            t.sin() * ORBIT_RADIUS,
            (t * 0.5).sin() * ORBIT_HEIGHT,
            t.cos() * ORBIT_RADIUS,
        ),
        MotionPattern::Figure8 => {
            let s = t.sin();
            let denom = 1.0 + s * s;
            Vec3::new(
                FIGURE8_SCALE * t.cos() / denom,
                (t * 1.5).sin() * FIGURE8_HEIGHT,
                FIGURE8_SCALE * s * t.cos() / denom,
            )
        }
        MotionPattern::Wander => Vec3::new(
            t.sin() * 5.0 + (t * 0.3).sin() * 2.0,
            (t * 0.5).cos() * 3.0 + (t * 0.2).sin(),
            (t * 0.7).sin() * 4.0 + (t * 0.4).cos() * 2.0,
        ),
    }
}

impl TrajectoryActor {
    #[inline]
    pub fn pattern_time(&self, elapsed: f32) -> f32 {
        elapsed * self.speed + self.phase_offset
    }

    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        self.base_position + pattern_offset(self.pattern, self.pattern_time(elapsed))
    }

    /// Position plus an orientation facing the point the actor reaches
    /// `LOOK_AHEAD_SEC` of pattern-time later.
    pub fn pose_at(&self, elapsed: f32) -> ActorPose {
        let t = self.pattern_time(elapsed);
        let position = self.base_position + pattern_offset(self.pattern, t);
        let look_target = self.base_position + pattern_offset(self.pattern, t + LOOK_AHEAD_SEC);
        ActorPose {
            position,
            look_target,
            rotation: look_rotation(position, look_target),
        }
    }
}

/// Rotation taking local +Z onto the direction `from -> to`.
///
/// Falls back to identity when the two points coincide.
pub fn look_rotation(from: Vec3, to: Vec3) -> Quat {
    let forward = to - from;
    if forward.length_squared() < 1e-12 {
        return Quat::IDENTITY;
    }
    let z = forward.normalize();
    let mut x = Vec3::Y.cross(z);
    if x.length_squared() < 1e-12 {
        // heading straight up or down; pick any perpendicular
        x = Vec3::X.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

//! Fixed-capacity, GPU-ready buffers with a live draw range.
//!
//! Capacity is chosen when the scene is built. `clear` only resets the live
//! length; pushes past capacity are dropped and reported with `false`.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

pub const SPRITE_DOT: f32 = 0.0;
pub const SPRITE_SPHERE: f32 = 1.0;
pub const SPRITE_AVATAR: f32 = 2.0;
pub const SPRITE_RING: f32 = 3.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    /// x: sprite kind, y: inner radius ratio for rings, z: spin angle, w: 1 when `orient` is used.
    pub params: [f32; 4],
    /// Quaternion for oriented quads; ignored for billboards.
    pub orient: [f32; 4],
}

impl SpriteInstance {
    pub fn billboard(kind: f32, position: Vec3, size: f32, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            size,
            color,
            params: [kind, 0.0, 0.0, 0.0],
            orient: Quat::IDENTITY.to_array(),
        }
    }

    pub fn oriented(kind: f32, position: Vec3, size: f32, color: [f32; 4], rotation: Quat) -> Self {
        Self {
            position: position.to_array(),
            size,
            color,
            params: [kind, 0.0, 0.0, 1.0],
            orient: rotation.to_array(),
        }
    }

    pub fn with_inner_ratio(mut self, ratio: f32) -> Self {
        self.params[1] = ratio;
        self
    }

    pub fn with_spin(mut self, angle: f32) -> Self {
        self.params[2] = angle;
        self
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

pub struct SpriteBatch {
    items: Box<[SpriteInstance]>,
    live: usize,
}

impl SpriteBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: vec![SpriteInstance::default(); capacity].into_boxed_slice(),
            live: 0,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.live = 0;
    }

    #[inline]
    pub fn push(&mut self, sprite: SpriteInstance) -> bool {
        match self.items.get_mut(self.live) {
            Some(slot) => {
                *slot = sprite;
                self.live += 1;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[SpriteInstance] {
        &self.items[..self.live]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }
}

pub struct LineBatch {
    vertices: Box<[LineVertex]>,
    live: usize,
}

impl LineBatch {
    /// Capacity is in segments (two vertices each).
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            vertices: vec![LineVertex::default(); segments * 2].into_boxed_slice(),
            live: 0,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.live = 0;
    }

    pub fn push_segment(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) -> bool {
        if self.live + 2 > self.vertices.len() {
            return false;
        }
        self.vertices[self.live] = LineVertex {
            position: a.to_array(),
            color,
        };
        self.vertices[self.live + 1] = LineVertex {
            position: b.to_array(),
            color,
        };
        self.live += 2;
        true
    }

    /// Closed polyline through `points` (last joins first).
    pub fn push_loop(&mut self, points: &[Vec3], color: [f32; 4]) -> bool {
        let n = points.len();
        let mut ok = true;
        for i in 0..n {
            ok &= self.push_segment(points[i], points[(i + 1) % n], color);
        }
        ok
    }

    #[inline]
    pub fn as_slice(&self) -> &[LineVertex] {
        &self.vertices[..self.live]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn capacity_segments(&self) -> usize {
        self.vertices.len() / 2
    }
}

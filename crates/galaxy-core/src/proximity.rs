//! Pairwise proximity edges for the particle network.
//!
//! The scan is O(n²) over unordered pairs and is only meant for the ~100-150
//! points the backdrop uses. Larger fields would need a uniform grid first.
//!
//! All storage is sized once for `capacity` edges; each build only moves the
//! live length, so the renderer can upload the same buffers every frame and
//! draw `draw_vertex_count()` vertices.

use crate::particles::MovingPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdge {
    pub index_a: usize,
    pub index_b: usize,
    pub color_a: [f32; 3],
    pub color_b: [f32; 3],
}

pub struct ProximityGraph {
    edges: Vec<ProximityEdge>,
    line_positions: Box<[f32]>,
    line_colors: Box<[f32]>,
    capacity: usize,
    live: usize,
}

impl ProximityGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            line_positions: vec![0.0; capacity * 6].into_boxed_slice(),
            line_colors: vec![0.0; capacity * 6].into_boxed_slice(),
            capacity,
            live: 0,
        }
    }

    /// Rebuild edges for the current point positions. Returns the live edge
    /// count, which never exceeds `capacity()`; surplus pairs are dropped in
    /// scan order.
    pub fn build(
        &mut self,
        points: &[MovingPoint],
        connection_distance: f32,
        palette: [[f32; 3]; 2],
    ) -> usize {
        self.edges.clear();
        self.live = 0;
        let max_sq = connection_distance * connection_distance;
        let n = points.len();
        'scan: for i in 0..n {
            let pi = points[i].position;
            let color = palette[i % 2];
            for j in (i + 1)..n {
                let pj = points[j].position;
                if pi.distance_squared(pj) >= max_sq {
                    continue;
                }
                if self.live >= self.capacity {
                    break 'scan;
                }
                let k = self.live * 6;
                self.line_positions[k..k + 3].copy_from_slice(&pi.to_array());
                self.line_positions[k + 3..k + 6].copy_from_slice(&pj.to_array());
                self.line_colors[k..k + 3].copy_from_slice(&color);
                self.line_colors[k + 3..k + 6].copy_from_slice(&color);
                self.edges.push(ProximityEdge {
                    index_a: i,
                    index_b: j,
                    color_a: color,
                    color_b: color,
                });
                self.live += 1;
            }
        }
        log::trace!("proximity: {} edges of {}", self.live, self.capacity);
        self.live
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
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
    pub fn edges(&self) -> &[ProximityEdge] {
        &self.edges
    }

    /// Two xyz vertices per live edge.
    #[inline]
    pub fn line_positions(&self) -> &[f32] {
        &self.line_positions[..self.live * 6]
    }

    #[inline]
    pub fn line_colors(&self) -> &[f32] {
        &self.line_colors[..self.live * 6]
    }

    #[inline]
    pub fn draw_vertex_count(&self) -> usize {
        self.live * 2
    }
}

use glam::Vec2;

/// Latest pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    pub fn update(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        self.ndc = client_to_ndc(client_x, client_y, viewport_w, viewport_h);
    }
}

/// Map a client-space position to [-1, 1]² with y up.
/// A degenerate viewport yields the centre.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / viewport_w) * 2.0 - 1.0;
    let y = -(client_y / viewport_h) * 2.0 + 1.0;
    let v = Vec2::new(x, y);
    if v.is_finite() {
        v.clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
    } else {
        Vec2::ZERO
    }
}

/// Seconds between two clock readings, clamped to `[0, max]`.
#[inline]
pub fn clamp_delta(dt_sec: f32, max: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max)
    } else {
        0.0
    }
}

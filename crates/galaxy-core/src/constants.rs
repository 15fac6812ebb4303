use glam::Vec3;

// Shared scene tuning constants used by the core and the web frontend.

// Network particles
pub const NETWORK_COUNT: usize = 100;
pub const NETWORK_SPAWN_EXTENT: [f32; 3] = [20.0, 20.0, 10.0]; // full width of the spawn box per axis
pub const NETWORK_MAX_SPEED: [f32; 3] = [1.5, 1.5, 0.6]; // half-range of spawn velocity (units/sec)
pub const NETWORK_WRAP_BOUND: f32 = 15.0; // x/y teleport to the opposite side past this
pub const CONNECTION_DISTANCE: f32 = 4.5;
pub const EDGE_CAP_FACTOR: usize = 15; // max edges = factor * particle count
pub const NETWORK_POINT_SIZE: f32 = 0.1;

// Edge palette, alternated by the parity of the lower endpoint index
pub const NEON_CYAN: [f32; 3] = [0.0, 243.0 / 255.0, 1.0]; // #00f3ff
pub const NEON_PURPLE: [f32; 3] = [188.0 / 255.0, 19.0 / 255.0, 254.0 / 255.0]; // #bc13fe

// Frame clock
pub const MAX_FRAME_DT: f32 = 0.1; // clamp for a tab that was backgrounded

// Trajectory patterns
pub const ORBIT_RADIUS: f32 = 5.0;
pub const ORBIT_HEIGHT: f32 = 2.0;
pub const FIGURE8_SCALE: f32 = 6.0;
pub const FIGURE8_HEIGHT: f32 = 1.5;
pub const LOOK_AHEAD_SEC: f32 = 0.1;

// Solar system group transform
pub const SOLAR_POSITION: Vec3 = Vec3::new(0.0, 1.0, -10.0);
pub const SOLAR_SCALE: f32 = 0.55;
pub const SOLAR_TILT: [f32; 3] = [0.4, 0.0, 0.3]; // XYZ euler, radians
pub const SUN_RADIUS: f32 = 2.5;
pub const SUN_COLOR: [f32; 3] = [1.0, 170.0 / 255.0, 0.0]; // #ffaa00
pub const CORONA_SCALE: f32 = 1.1;
pub const CORONA_COLOR: [f32; 4] = [1.0, 85.0 / 255.0, 0.0, 0.3]; // #ff5500
pub const PLANET_SPIN_PER_SEC: f32 = 0.6;
pub const ORBIT_PATH_SEGMENTS: usize = 96;
pub const ORBIT_PATH_ALPHA: f32 = 0.15;
pub const RING_INNER_FACTOR: f32 = 1.4;
pub const RING_OUTER_FACTOR: f32 = 2.0;
pub const RING_TILT: f32 = std::f32::consts::FRAC_PI_3;
pub const RING_SEGMENTS: usize = 48;

// Rocks
pub const ROCK_SPIN_MAX: f32 = 6.0; // half-range of angular velocity (rad/sec)
pub const ROCK_COLOR: [f32; 3] = [139.0 / 255.0, 90.0 / 255.0, 43.0 / 255.0]; // #8b5a2b
pub const FLOAT_SPEED: f32 = 1.0;
pub const FLOAT_INTENSITY: f32 = 0.5;

// Avatar badge
pub const AVATAR_POSITION: Vec3 = Vec3::new(7.0, 2.5, 0.0);
pub const AVATAR_SCALE: f32 = 0.7;
pub const AVATAR_RADIUS: f32 = 1.5;
pub const AVATAR_GLOW_RADIUS: f32 = 1.8;
pub const AVATAR_TILT: f32 = 0.2; // pointer-to-rotation gain
pub const AVATAR_EASE: f32 = 0.1; // per-frame lerp factor at 60 fps
pub const AVATAR_BOB: f32 = 0.1;
pub const HALO_COUNT: usize = 300;
pub const HALO_RADIUS_MIN: f32 = 1.8;
pub const HALO_RADIUS_SPAN: f32 = 2.5;
pub const HALO_POINT_SIZE: f32 = 0.06;

// Background
pub const STAR_COUNT: usize = 7000;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_SIZE: f32 = 0.6;
pub const DUST_COUNT: usize = 2000;
pub const DUST_EXTENT: f32 = 50.0;
pub const DUST_SPIN: [f32; 2] = [0.02, 0.05]; // rad/sec about X and Y
pub const DUST_SIZE: f32 = 0.25;

// Camera (matches the page canvas)
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;

// Guide
pub const SECTION_BREAKPOINTS: [f32; 4] = [0.5, 1.5, 2.5, 3.5]; // in viewport heights
pub const SECTION_MESSAGE_SEC: f64 = 5.0;
pub const CLICK_MESSAGE_SEC: f64 = 8.0;

#[inline]
pub fn rgb_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

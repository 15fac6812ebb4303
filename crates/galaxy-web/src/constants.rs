// Host-side constants: DOM ids, asset paths and render tuning

pub const CANVAS_ID: &str = "galaxy-canvas";

// Guide widget elements
pub const GUIDE_BUBBLE_ID: &str = "guide-bubble";
pub const GUIDE_TITLE_ID: &str = "guide-title";
pub const GUIDE_BODY_ID: &str = "guide-body";
pub const GUIDE_TIP_ID: &str = "guide-tip";
pub const GUIDE_AVATAR_ID: &str = "guide-avatar";
pub const GUIDE_CLOSE_ID: &str = "guide-close";
pub const GUIDE_HIDDEN_CLASS: &str = "hidden";

pub const BADGE_URL: &str = "profile.jpg";

// Background clear, near-black with a blue tint
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.02,
    a: 1.0,
};

// Frame deltas larger than this (tab in background) are clamped before the scene sees them
pub const MAX_HOST_DT_SEC: f32 = 0.25;

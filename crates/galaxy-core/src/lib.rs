pub mod buffers;
pub mod constants;
pub mod decor;
pub mod error;
pub mod guide;
pub mod motion;
pub mod particles;
pub mod proximity;
pub mod scene;
pub mod solar;
pub mod state;

pub use buffers::*;
pub use constants::*;
pub use error::SceneError;
pub use guide::*;
pub use motion::*;
pub use particles::*;
pub use proximity::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

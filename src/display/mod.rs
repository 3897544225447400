mod pixel_buffer;
#[cfg(feature = "window")]
mod window;

pub use pixel_buffer::{Color, PixelBuffer};
#[cfg(feature = "window")]
pub use window::{Display, InputEvent, RenderTarget};

pub const DEFAULT_WIDTH: u32 = 320;
pub const DEFAULT_HEIGHT: u32 = 180;

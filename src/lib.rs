//! trifill: flat-color triangles rasterized into an RGBA8 pixel buffer
//!
//! The core is [`display::PixelBuffer`] plus the scanline rasterizer in
//! [`raster`]. [`scene`] describes and builds the static scene that the
//! binary presents through SDL2 (feature `window`).

pub mod display;
pub mod error;
pub mod raster;
pub mod scene;
pub mod util;

pub use display::{Color, PixelBuffer};
pub use error::{Error, Result};
pub use raster::{fill_triangle, Triangle, Vertex};
pub use scene::{FrameDriver, SceneConfig};

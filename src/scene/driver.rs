use std::path::Path;

use log::{debug, info};

use super::SceneConfig;
use crate::display::PixelBuffer;
use crate::error::Result;
use crate::raster::fill_triangle;

/// Owns the pixel buffer, draws the static scene into it once and hands the
/// bytes to whoever presents them.
pub struct FrameDriver {
    scene: SceneConfig,
    buffer: PixelBuffer,
}

impl FrameDriver {
    /// Validate the scene and allocate its buffer. Nothing is drawn yet.
    pub fn new(scene: SceneConfig) -> Result<Self> {
        scene.validate()?;
        let buffer = PixelBuffer::with_size(scene.width, scene.height);
        Ok(Self { scene, buffer })
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    /// Paint the background, then every triangle in order.
    /// Returns the number of triangle pixels written.
    pub fn build(&mut self) -> usize {
        info!(
            "Building scene '{}' at {}x{} ({} triangles)",
            self.scene.name,
            self.buffer.width(),
            self.buffer.height(),
            self.scene.triangles.len()
        );
        self.scene.background.paint(&mut self.buffer);

        let mut total = 0;
        for (i, fill) in self.scene.triangles.iter().enumerate() {
            let written = fill_triangle(&mut self.buffer, &fill.triangle(), fill.color);
            debug!("triangle {} {:?}: {} pixels", i, fill.vertices, written);
            total += written;
        }
        info!("Scene built: {} triangle pixels written", total);
        total
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The current frame as flat RGBA8 bytes, for upload
    pub fn frame_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Write the buffer to a PNG file
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            self.buffer.as_bytes(),
            self.buffer.width(),
            self.buffer.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        info!("Snapshot written to {}", path.display());
        Ok(())
    }
}

mod driver;

pub use driver::FrameDriver;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::{Color, PixelBuffer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::raster::{Triangle, Vertex};

/// Largest accepted buffer side, in pixels
pub const MAX_DIMENSION: u32 = 8192;

/// What the buffer holds before any triangle is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Red ramps with x, green with y, blue fixed at 255
    #[default]
    Gradient,
    Solid { color: Color },
}

impl Background {
    pub fn paint(&self, buffer: &mut PixelBuffer) {
        match *self {
            Self::Gradient => {
                let (w, h) = (buffer.width(), buffer.height());
                for y in 0..h {
                    for x in 0..w {
                        let r = (x as f32 / w as f32 * 255.0) as u8;
                        let g = (y as f32 / h as f32 * 255.0) as u8;
                        buffer.set_pixel(x as i32, y as i32, Color::rgb(r, g, 255));
                    }
                }
            },
            Self::Solid { color } => buffer.clear(color),
        }
    }
}

/// One flat-colored triangle in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleFill {
    pub vertices: [Vertex; 3],
    #[serde(default)]
    pub color: Color,
}

impl TriangleFill {
    pub fn new(a: (i32, i32), b: (i32, i32), c: (i32, i32), color: Color) -> Self {
        Self {
            vertices: [a.into(), b.into(), c.into()],
            color,
        }
    }

    pub fn triangle(&self) -> Triangle {
        Triangle(self.vertices)
    }
}

/// Static scene: buffer size, background and triangles in draw order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub triangles: Vec<TriangleFill>,
}

impl SceneConfig {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            background: Background::default(),
            triangles: Vec::new(),
        }
    }

    /// The built-in scene: gradient plus four black triangles on 320x180
    pub fn reference() -> Self {
        let (w, h) = (DEFAULT_WIDTH as i32, DEFAULT_HEIGHT as i32);
        let mut scene = Self::new("reference", DEFAULT_WIDTH, DEFAULT_HEIGHT);
        scene.triangles = vec![
            TriangleFill::new((40, 40), (20, 60), (60, 60), Color::BLACK),
            TriangleFill::new((20, 60), (60, 60), (40, 80), Color::BLACK),
            TriangleFill::new((80, 80), (60, 100), (100, 120), Color::BLACK),
            TriangleFill::new((0, 0), (w, 0), (w, h), Color::BLACK),
        ];
        scene
    }

    pub fn with_triangle(mut self, fill: TriangleFill) -> Self {
        self.triangles.push(fill);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |side: u32| (1..=MAX_DIMENSION).contains(&side);
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load and validate a scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene: Self = serde_json::from_str(&json)?;
        scene.validate()?;
        Ok(scene)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::reference()
    }
}

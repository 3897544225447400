//! Error type shared by the scene, snapshot and display layers
//!
//! The rasterizer itself never fails; everything here comes from the
//! surrounding I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::scene::MAX_DIMENSION;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access scene file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid buffer size {width}x{height}: each side must be in 1..={MAX_DIMENSION}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to write snapshot: {0}")]
    Snapshot(#[from] image::ImageError),

    /// SDL2 reports its failures as plain strings
    #[error("display error: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the conversion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting an image to a splat scene.
///
/// Every variant is fatal for the invocation: the pipeline reports the
/// error and the process exits nonzero, leaving no partial output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to load depth map {path}: {source}")]
    DepthLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Depth map is {depth_width}x{depth_height} but image is {image_width}x{image_height}")]
    DepthDimensionMismatch {
        image_width: u32,
        image_height: u32,
        depth_width: u32,
        depth_height: u32,
    },

    #[error("Failed to open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

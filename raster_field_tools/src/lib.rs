//! # Raster Field Tools
//!
//! Image adapters around [`sdf_field_renderer`]: thresholding a color
//! raster into a [`sdf_field_renderer::BitmapMask`], colorizing a signed
//! field back into an RGB image, and async helpers for pushing whole files
//! through the pipeline.
//!
//! The engines themselves never touch pixels or files; everything
//! format-shaped lives here.

mod error;
mod threshold;
mod tools;
mod visualize;

// Re-export the renderer and image libs so callers can stay on one version.
pub use image;
pub use sdf_field_renderer;

pub use crate::error::RasterFieldError;
pub use crate::threshold::*;
pub use crate::tools::*;
pub use crate::visualize::*;

//! Silhouette profile extraction from orthographic ship imagery.
//!
//! This crate covers the 2D half of the image-to-geometry pipeline:
//!
//! - **Background detection**: estimate the background color of a
//!   raster image so content pixels can be told apart from empty space
//! - **Profile extraction**: scan an image column by column into a
//!   normalized 1D extent curve ([`hull_types::ProfileData`])
//! - **Smoothing**: reduce per-column noise while preserving the
//!   curve's macro shape
//!
//! Everything here is synchronous, allocation-light, pure computation
//! over caller-owned buffers. Identical inputs always produce
//! bit-identical outputs.
//!
//! # Quick Start
//!
//! ```
//! use hull_profile::{detect_background, extract_profile, BackgroundMode, ExtractParams};
//! use hull_types::{PixelBuffer, Rgb};
//!
//! // White image with a black ship silhouette
//! let mut image = PixelBuffer::solid(100, 50, Rgb::WHITE).unwrap();
//! image.fill_rect(10, 10, 80, 30, Rgb::BLACK);
//!
//! let background = detect_background(&image, BackgroundMode::Auto);
//! let profile = extract_profile(&image, background.color, &ExtractParams::default());
//!
//! assert!(profile.curve()[50] > 0.99);
//! assert!(profile.curve()[5] < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod background;
mod error;
mod extract;
mod smooth;

pub use background::{detect_background, BackgroundEstimate, BackgroundMethod, BackgroundMode};
pub use error::{ProfileError, ProfileResult};
pub use extract::{extract_profile, ExtractParams};
pub use smooth::{smooth_curve, SmoothingMethod};

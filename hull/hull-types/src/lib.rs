//! Core value types for the hull generation pipeline.
//!
//! This crate provides the shared vocabulary for turning orthographic
//! ship imagery into 3D geometry:
//!
//! - [`PixelBuffer`] - A raw RGBA image owned by the caller
//! - [`Rgb`] - 8-bit color with Euclidean distance
//! - [`ProfileData`] - A normalized 1D silhouette curve with bounds
//! - [`ShipDimensions`] - Real-world length/beam/draft in meters
//! - [`GeometryHints`] - Normalized feature positions from upstream
//! - [`GroupGeometry`] - A named vertex/face group (triangles + quads)
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`MeshStats`] - Derived summary of an assembled mesh
//!
//! # Coordinate System
//!
//! Fixed by the export contract:
//! - X: beam (port/starboard)
//! - Y: vertical (keel up to deck)
//! - Z: length (bow at `z = 0`, stern at `z = length`)
//!
//! Right-handed, with **counter-clockwise (CCW) winding** viewed from
//! outside.
//!
//! # Lifecycle
//!
//! All types here are immutable value objects from the pipeline's point
//! of view: each run creates fresh instances from fresh inputs and never
//! mutates them in place. There is no ambient or cached state.
//!
//! # Example
//!
//! ```
//! use hull_types::{PixelBuffer, Rgb, ProfileData};
//!
//! let image = PixelBuffer::solid(4, 4, Rgb::WHITE).unwrap();
//! assert_eq!(image.pixel(0, 0), Rgb::WHITE);
//!
//! let profile = ProfileData::flat(8);
//! assert!((profile.sample(0.5) - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod color;
mod dimensions;
mod error;
mod geometry;
mod hints;
mod pixel;
mod profile;
mod stats;

pub use bounds::Aabb;
pub use color::Rgb;
pub use dimensions::ShipDimensions;
pub use error::{TypeError, TypeResult};
pub use geometry::{Face, GroupGeometry};
pub use hints::{GeometryHints, SuperstructureSpan};
pub use pixel::PixelBuffer;
pub use profile::{CurveBounds, ProfileData};
pub use stats::MeshStats;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

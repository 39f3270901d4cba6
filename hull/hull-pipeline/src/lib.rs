//! End-to-end ship generation: orthographic images in, OBJ text out.
//!
//! This crate wires the pipeline stages together in a fixed order:
//!
//! 1. Background detection and column-wise profile extraction for the
//!    plan view (beam) and side view (draft), via `hull-profile`
//! 2. Optional profile smoothing
//! 3. Hull lofting and procedural component placement, via `hull-loft`
//! 4. OBJ assembly, via `hull-obj`
//!
//! Each run is pure and deterministic: identical images, dimensions,
//! hints, and configuration produce byte-identical OBJ output.
//! Per-feature problems (a malformed turret hint, a content-free view)
//! never abort a run; they surface as [`Issue`]s on the returned
//! [`ShipModel`].
//!
//! # Quick Start
//!
//! ```
//! use hull_pipeline::{build_ship, PipelineConfig};
//! use hull_types::{GeometryHints, PixelBuffer, Rgb, ShipDimensions};
//!
//! // Plan and side silhouettes of a simple hull
//! let mut plan = PixelBuffer::solid(100, 40, Rgb::WHITE).unwrap();
//! plan.fill_rect(5, 10, 90, 20, Rgb::BLACK);
//! let mut side = PixelBuffer::solid(100, 30, Rgb::WHITE).unwrap();
//! side.fill_rect(5, 8, 90, 14, Rgb::BLACK);
//!
//! let dims = ShipDimensions::new(200.0, 30.0, 10.0).unwrap();
//! let hints = GeometryHints {
//!     turret_positions: vec![0.2, 0.8],
//!     ..GeometryHints::default()
//! };
//!
//! let model = build_ship(&plan, &side, dims, Some(&hints), &PipelineConfig::default())
//!     .unwrap();
//!
//! assert_eq!(model.groups[0].name, "hull");
//! assert!(model.obj_text.starts_with("# ship"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod error;
mod pipeline;

pub use config::{PipelineConfig, SmoothingConfig};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{build_ship, Issue, ShipModel, ViewKind};

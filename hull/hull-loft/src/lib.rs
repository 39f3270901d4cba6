//! Hull lofting and procedural component placement.
//!
//! The 3D half of the image-to-geometry pipeline:
//!
//! - **Lofting**: sweep elliptical cross-sections along the ship's
//!   length, sized per station from the plan-view (beam) and side-view
//!   (draft) profile curves, and stitch them into a watertight hull
//! - **Component placement**: turrets (with barrels), a superstructure
//!   block, and funnels, positioned from normalized feature hints and
//!   sized relative to the local hull width
//!
//! # Quick Start
//!
//! ```
//! use hull_loft::{loft_hull, LoftParams};
//! use hull_types::{ProfileData, ShipDimensions};
//!
//! let dims = ShipDimensions::new(200.0, 30.0, 10.0).unwrap();
//! let top = ProfileData::flat(64);
//! let side = ProfileData::flat(64);
//!
//! let hull = loft_hull(&top, &side, dims, &LoftParams::default()).unwrap();
//! assert_eq!(hull.name, "hull");
//! assert_eq!(hull.vertex_count(), 25 * 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod components;
mod error;
mod loft;
mod params;
mod ring;

pub use components::{place_components, HintKind, PlacedComponents, SkippedHint};
pub use error::{LoftError, LoftResult};
pub use loft::loft_hull;
pub use params::{
    ComponentParams, CrossSection, FunnelParams, LoftParams, SuperstructureParams, TurretParams,
};

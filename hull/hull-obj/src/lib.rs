//! Wavefront OBJ assembly and export for hull geometry groups.
//!
//! Concatenates named geometry groups into one OBJ document, tracking
//! a running vertex-index offset so each group's faces reference
//! globally unique, 1-based indices. Emits `g` markers per group,
//! vertex coordinates at 6 decimal places, and triangle or quad `f`
//! lines.
//!
//! A minimal parser ([`parse_obj`]) is included for round-trip
//! verification and re-import of files this crate wrote.
//!
//! # Example
//!
//! ```
//! use hull_obj::{export_obj, parse_obj, ObjMetadata};
//! use hull_types::{Face, GroupGeometry, Point3};
//!
//! let mut hull = GroupGeometry::new("hull");
//! hull.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! hull.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! hull.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! hull.faces.push(Face::Tri([0, 1, 2]));
//!
//! let export = export_obj(std::slice::from_ref(&hull), &ObjMetadata::default());
//! assert!(export.text.contains("g hull"));
//!
//! let reparsed = parse_obj(&export.text).unwrap();
//! assert_eq!(reparsed[0].vertex_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod export;
mod parse;

pub use error::{ObjError, ObjResult};
pub use export::{export_obj, save_obj, ObjExport, ObjMetadata};
pub use parse::{load_obj, parse_obj};

//! Real-world ship dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Principal ship dimensions in meters.
///
/// Supplied by an upstream identification collaborator. This crate
/// requires each value to be positive and finite; the naval-sense
/// ordering `length > beam > draft` is expected but validated upstream,
/// not here.
///
/// # Example
///
/// ```
/// use hull_types::ShipDimensions;
///
/// let dims = ShipDimensions::new(200.0, 30.0, 10.0).unwrap();
/// assert!((dims.length - 200.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipDimensions {
    /// Overall length in meters (Z axis).
    pub length: f64,
    /// Maximum beam (width) in meters (X axis).
    pub beam: f64,
    /// Draft (hull depth) in meters (Y axis).
    pub draft: f64,
}

impl ShipDimensions {
    /// Create validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidDimension`] if any value is zero,
    /// negative, or not finite.
    pub fn new(length: f64, beam: f64, draft: f64) -> TypeResult<Self> {
        for (name, value) in [("length", length), ("beam", beam), ("draft", draft)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TypeError::InvalidDimension { name, value });
            }
        }
        Ok(Self {
            length,
            beam,
            draft,
        })
    }
}

//! Feature placement hints from the upstream identifier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Normalized longitudinal span occupied by the superstructure.
///
/// `start` and `end` are fractions of ship length, bow to stern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuperstructureSpan {
    /// Span start as a fraction of length, in `[0, 1)`.
    pub start: f64,
    /// Span end as a fraction of length, in `(0, 1]`.
    pub end: f64,
}

impl SuperstructureSpan {
    /// Create a validated span.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidSpan`] unless
    /// `0 <= start < end <= 1` and both values are finite.
    pub fn new(start: f64, end: f64) -> TypeResult<Self> {
        if !(start.is_finite() && end.is_finite() && 0.0 <= start && start < end && end <= 1.0) {
            return Err(TypeError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Check whether a normalized position lies inside the span.
    #[inline]
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }
}

impl Default for SuperstructureSpan {
    /// The documented fallback span when the upstream service supplies
    /// none: amidships, `[0.3, 0.6]`.
    fn default() -> Self {
        Self {
            start: 0.3,
            end: 0.6,
        }
    }
}

/// Feature placement hints for procedural components.
///
/// These arrive from an external AI-grounding collaborator as
/// loosely-typed, possibly-partial data. This struct is the exhaustive,
/// validated form: missing fields take documented defaults, and
/// per-feature positions are range-checked downstream (a malformed
/// position skips that one feature rather than aborting the run).
///
/// # Example
///
/// ```
/// use hull_types::GeometryHints;
///
/// let hints = GeometryHints::default();
/// assert!(hints.turret_positions.is_empty());
/// assert!((hints.superstructure.start - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryHints {
    /// Turret centers as fractions of length, sorted bow to stern.
    pub turret_positions: Vec<f64>,
    /// Longitudinal span of the superstructure block.
    pub superstructure: SuperstructureSpan,
    /// Funnel centers as fractions of length.
    pub funnel_positions: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_validates_ordering() {
        assert!(SuperstructureSpan::new(0.3, 0.6).is_ok());
        assert!(SuperstructureSpan::new(0.6, 0.3).is_err());
        assert!(SuperstructureSpan::new(0.5, 0.5).is_err());
    }

    #[test]
    fn span_validates_range() {
        assert!(SuperstructureSpan::new(-0.1, 0.5).is_err());
        assert!(SuperstructureSpan::new(0.1, 1.5).is_err());
        assert!(SuperstructureSpan::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn span_contains_is_inclusive() {
        let span = SuperstructureSpan::new(0.3, 0.6).unwrap();
        assert!(span.contains(0.3));
        assert!(span.contains(0.6));
        assert!(!span.contains(0.29));
        assert!(!span.contains(0.61));
    }

    #[test]
    fn default_hints_match_documented_fallbacks() {
        let hints = GeometryHints::default();
        assert!(hints.turret_positions.is_empty());
        assert!(hints.funnel_positions.is_empty());
        assert!((hints.superstructure.start - 0.3).abs() < 1e-12);
        assert!((hints.superstructure.end - 0.6).abs() < 1e-12);
    }
}

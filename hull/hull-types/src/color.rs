//! 8-bit RGB color.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
///
/// Alpha is ignored throughout the pipeline; background detection and
/// content thresholding work on the color channels only.
///
/// # Example
///
/// ```
/// use hull_types::Rgb;
///
/// let sea = Rgb::new(20, 40, 80);
/// assert_eq!(sea.g, 40);
/// assert!(sea.distance(&Rgb::BLACK) > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new color from RGB components.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance to another color in RGB space.
    ///
    /// Ranges from 0.0 (identical) to ~441.67 (black to white).
    ///
    /// # Example
    ///
    /// ```
    /// use hull_types::Rgb;
    ///
    /// let d = Rgb::BLACK.distance(&Rgb::WHITE);
    /// assert!((d - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
    }

    /// Black color (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);
}

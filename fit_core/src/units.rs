//! # Unit Types
//!
//! Type-safe wrappers for height measurements. Each is a plain `f64` newtype
//! that serializes as a bare number.
//!
//! The calculator works in centimetres internally. Height may also be
//! entered in feet and inches; it is converted to centimetres before any
//! computation.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::units::{Centimeters, Feet, Inches};
//!
//! let height: Centimeters = Feet(6.0).into();
//! assert!((height.0 - 182.88).abs() < 1e-9);
//!
//! let extra: Centimeters = Inches(1.0).into();
//! assert_eq!(extra.0, 2.54);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Centimetres per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Length
// ============================================================================

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Centimeters {
    fn from(ft: Feet) -> Self {
        Centimeters(ft.0 * CM_PER_FOOT)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

impl Centimeters {
    /// Height given as feet plus inches, e.g. 5 ft 10 in.
    ///
    /// Computed as `feet*30.48 + inches*2.54` in that order so results
    /// match the website exactly.
    pub fn from_feet_inches(feet: Feet, inches: Inches) -> Self {
        Centimeters::from(feet) + Centimeters::from(inches)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to metres
    pub fn meters(self) -> f64 {
        self.0 / 100.0
    }
}

impl Add for Centimeters {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Centimeters(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_inches_to_cm() {
        let cm = Centimeters::from_feet_inches(Feet(5.0), Inches(10.0));
        assert_eq!(cm.0, 5.0 * 30.48 + 10.0 * 2.54);
        assert!((cm.0 - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_inches_only() {
        let cm = Centimeters::from_feet_inches(Feet(0.0), Inches(70.0));
        assert!((cm.0 - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_add_and_meters() {
        let a = Centimeters(180.0);
        let b = Centimeters(20.0);
        assert_eq!((a + b).value(), 200.0);
        assert_eq!(a.meters(), 1.8);
    }

    #[test]
    fn test_serialization() {
        let h = Centimeters(180.5);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "180.5");
    }
}

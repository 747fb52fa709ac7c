//! # BMI Classification
//!
//! Category thresholds are closed-open intervals:
//!
//! | BMI           | Category    | Severity |
//! |---------------|-------------|----------|
//! | < 18.5        | Underweight | warning  |
//! | [18.5, 25)    | Normal      | normal   |
//! | [25, 30)      | Overweight  | warning  |
//! | >= 30         | Obese       | danger   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::Centimeters;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OBESE_FROM: f64 = 30.0;

/// Body-mass index
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = Centimeters(height_cm).meters();
    weight_kg / (height_m * height_m)
}

/// Coarse weight category derived from BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else if bmi < OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn severity(self) -> BmiSeverity {
        match self {
            BmiCategory::Normal => BmiSeverity::Normal,
            BmiCategory::Underweight | BmiCategory::Overweight => BmiSeverity::Warning,
            BmiCategory::Obese => BmiSeverity::Danger,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Styling hint attached to a category by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiSeverity {
    Normal,
    Warning,
    Danger,
}

impl BmiSeverity {
    /// CSS class used by the site stylesheet
    pub fn css_class(self) -> &'static str {
        match self {
            BmiSeverity::Normal => "bmi-normal",
            BmiSeverity::Warning => "bmi-warning",
            BmiSeverity::Danger => "bmi-danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_body_mass_index() {
        let bmi = body_mass_index(80.0, 180.0);
        assert!((bmi - 24.691358).abs() < 1e-5);
    }

    #[test]
    fn test_severity_classes() {
        assert_eq!(BmiCategory::Underweight.severity().css_class(), "bmi-warning");
        assert_eq!(BmiCategory::Normal.severity().css_class(), "bmi-normal");
        assert_eq!(BmiCategory::Overweight.severity().css_class(), "bmi-warning");
        assert_eq!(BmiCategory::Obese.severity().css_class(), "bmi-danger");
    }

    #[test]
    fn test_labels() {
        assert_eq!(BmiCategory::Normal.to_string(), "Normal weight");
        assert_eq!(
            serde_json::to_string(&BmiCategory::Overweight).unwrap(),
            "\"overweight\""
        );
    }
}

//! # Metrics Input
//!
//! Strongly-typed calculator input. Build one directly, or parse it from raw
//! form strings with [`RawMetricsForm`](super::form::RawMetricsForm).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "age_years": 30,
//!   "sex": "male",
//!   "activity_factor": 1.55,
//!   "goal": "maintain",
//!   "weight_kg": 80.0,
//!   "height_cm": 180.0
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FitError, FitResult};

/// Biological sex, selects the BMR constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Constant term added to the Mifflin-St Jeor equation
    pub fn bmr_offset(self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(FitError::invalid_input("sex", s, "Expected 'male' or 'female'")),
        }
    }
}

/// Body-weight goal, shifts the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Gain,
    Lose,
    Maintain,
}

impl Goal {
    /// Daily calorie adjustment applied on top of TDEE (kcal)
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::Gain => 300.0,
            Goal::Lose => -300.0,
            Goal::Maintain => 0.0,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Gain => write!(f, "gain"),
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
        }
    }
}

impl FromStr for Goal {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gain" => Ok(Goal::Gain),
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            _ => Err(FitError::invalid_input(
                "goal",
                s,
                "Expected 'gain', 'lose' or 'maintain'",
            )),
        }
    }
}

/// Named activity levels offered by the site's activity selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or training twice a day
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier for this level
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Identifier accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Resolve a form value to a factor: either a preset name or a number.
    pub fn parse_factor(s: &str) -> FitResult<f64> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<ActivityLevel>() {
            return Ok(level.factor());
        }
        trimmed.parse::<f64>().map_err(|_| {
            FitError::invalid_input(
                "activity",
                s,
                "Expected a multiplier such as 1.55 or a level name",
            )
        })
    }
}

impl FromStr for ActivityLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| FitError::invalid_input("activity", s, "Unknown activity level"))
    }
}

/// Validated biometric input for a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsInput {
    /// Age in whole years
    pub age_years: u32,

    pub sex: Sex,

    /// TDEE multiplier, typically 1.2 to 1.9
    pub activity_factor: f64,

    pub goal: Goal,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimetres
    pub height_cm: f64,
}

impl MetricsInput {
    /// Validate input parameters.
    ///
    /// Zero or negative height is rejected here since BMI divides by it.
    pub fn validate(&self) -> FitResult<()> {
        if self.age_years == 0 {
            return Err(FitError::invalid_input(
                "age",
                self.age_years.to_string(),
                "Age must be positive",
            ));
        }
        check_positive("activity", self.activity_factor, "Activity factor must be positive")?;
        check_positive("weight_kg", self.weight_kg, "Weight must be positive")?;
        check_positive("height_cm", self.height_cm, "Height must be positive")?;
        Ok(())
    }
}

fn check_positive(field: &str, value: f64, reason: &str) -> FitResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FitError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> MetricsInput {
        MetricsInput {
            age_years: 30,
            sex: Sex::Male,
            activity_factor: 1.55,
            goal: Goal::Maintain,
            weight_kg: 80.0,
            height_cm: 180.0,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(reference_input().validate().is_ok());
    }

    #[test]
    fn test_zero_height_rejected() {
        let input = MetricsInput {
            height_cm: 0.0,
            ..reference_input()
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, FitError::InvalidInput { ref field, .. } if field == "height_cm"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let input = MetricsInput {
            weight_kg: f64::NAN,
            ..reference_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_zero_age_rejected() {
        let input = MetricsInput {
            age_years: 0,
            ..reference_input()
        };
        assert_eq!(input.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" female ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
        assert_eq!("LOSE".parse::<Goal>().unwrap(), Goal::Lose);
        assert!("bulk".parse::<Goal>().is_err());
    }

    #[test]
    fn test_activity_factor_parsing() {
        assert_eq!(ActivityLevel::parse_factor("1.725").unwrap(), 1.725);
        assert_eq!(ActivityLevel::parse_factor("moderate").unwrap(), 1.55);
        assert_eq!(ActivityLevel::parse_factor("Very Active").unwrap(), 1.9);
        assert!(ActivityLevel::parse_factor("lots").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&reference_input()).unwrap();
        assert!(json.contains("\"sex\":\"male\""));
        assert!(json.contains("\"goal\":\"maintain\""));
        let roundtrip: MetricsInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, reference_input());
    }
}

//! # Metrics Calculation
//!
//! Converts a [`MetricsInput`] into the derived fitness metrics.
//!
//! ## Formulas
//!
//! - BMR (Mifflin-St Jeor): `10w + 6.25h - 5a + 5` (male), `... - 161` (female)
//! - TDEE: `BMR × activity factor`
//! - Target calories: TDEE `+300` (gain), `-300` (lose)
//! - BMI: `w / (h/100)²`
//! - Water: 40 mL per kg of body weight
//! - Protein: 1.7 g per kg; the remaining calories split 60/40 between
//!   carbohydrate (4 kcal/g) and fat (9 kcal/g)
//!
//! The arithmetic order is fixed so that results match the website digit for
//! digit.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::metrics::{compute, Goal, MetricsInput, Sex};
//!
//! let input = MetricsInput {
//!     age_years: 30,
//!     sex: Sex::Male,
//!     activity_factor: 1.55,
//!     goal: Goal::Maintain,
//!     weight_kg: 80.0,
//!     height_cm: 180.0,
//! };
//!
//! let result = compute(&input).unwrap();
//! assert_eq!(result.bmr, 1780.0);
//! assert_eq!(result.protein_grams, 136);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::FitResult;

use super::bmi::{body_mass_index, BmiCategory};
use super::input::MetricsInput;
use super::rounding::round_half_up;

/// Water target per kilogram of body weight (mL)
pub const WATER_ML_PER_KG: f64 = 40.0;

/// Protein target per kilogram of body weight (g)
pub const PROTEIN_G_PER_KG: f64 = 1.7;

/// Share of non-protein calories assigned to carbohydrate
pub const CARB_SHARE: f64 = 0.6;

/// Share of non-protein calories assigned to fat
pub const FAT_SHARE: f64 = 0.4;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Derived metrics for one input.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bmr": 1780.0,
///   "tdee": 2759.0,
///   "target_calories": 2759.0,
///   "bmi": 24.69,
///   "bmi_category": "normal",
///   "water_litres": 3.2,
///   "protein_grams": 136,
///   "carbs_grams": 332,
///   "fats_grams": 98
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,

    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,

    /// TDEE adjusted for the goal (kcal/day)
    pub target_calories: f64,

    pub bmi: f64,

    pub bmi_category: BmiCategory,

    /// Daily water target (L)
    pub water_litres: f64,

    pub protein_grams: i64,

    /// May be negative when protein alone exceeds the calorie target
    pub carbs_grams: i64,

    /// May be negative when protein alone exceeds the calorie target
    pub fats_grams: i64,
}

impl MetricsResult {
    /// Calories supplied by protein
    pub fn protein_calories(&self) -> f64 {
        self.protein_grams as f64 * KCAL_PER_G_PROTEIN
    }

    /// Calories represented by the rounded macro targets.
    ///
    /// Differs from `target_calories` only by the three roundings.
    pub fn macro_calories(&self) -> f64 {
        self.protein_calories()
            + self.carbs_grams as f64 * KCAL_PER_G_CARB
            + self.fats_grams as f64 * KCAL_PER_G_FAT
    }
}

/// Compute all metrics for a validated input.
///
/// # Returns
///
/// * `Ok(MetricsResult)` - Calculation results
/// * `Err(FitError)` - A validation error; nothing is computed
pub fn compute(input: &MetricsInput) -> FitResult<MetricsResult> {
    input.validate()?;

    let weight = input.weight_kg;
    let height = input.height_cm;
    let age = f64::from(input.age_years);

    let bmr = 10.0 * weight + 6.25 * height - 5.0 * age + input.sex.bmr_offset();
    let tdee = bmr * input.activity_factor;
    let target_calories = tdee + input.goal.calorie_adjustment();

    let bmi = body_mass_index(weight, height);
    let bmi_category = BmiCategory::from_bmi(bmi);

    let water_litres = weight * WATER_ML_PER_KG / 1000.0;

    let protein = round_half_up(weight * PROTEIN_G_PER_KG);
    let remaining = target_calories - protein * KCAL_PER_G_PROTEIN;
    let carbs = round_half_up(remaining * CARB_SHARE / KCAL_PER_G_CARB);
    let fats = round_half_up(remaining * FAT_SHARE / KCAL_PER_G_FAT);

    let result = MetricsResult {
        bmr,
        tdee,
        target_calories,
        bmi,
        bmi_category,
        water_litres,
        protein_grams: protein as i64,
        carbs_grams: carbs as i64,
        fats_grams: fats as i64,
    };

    tracing::debug!(
        bmr = result.bmr,
        tdee = result.tdee,
        bmi = result.bmi,
        category = %result.bmi_category,
        "computed metrics"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FitError;
    use crate::metrics::input::{Goal, Sex};

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
    fn test_reference_scenario() {
        let result = compute(&reference_input()).unwrap();

        assert_eq!(result.bmr, 1780.0);
        assert!((result.tdee - 2759.0).abs() < 1e-9);
        assert_eq!(result.target_calories, result.tdee);
        assert!((result.bmi - 24.69).abs() < 0.01);
        assert_eq!(result.bmi_category, BmiCategory::Normal);
        assert!((result.water_litres - 3.2).abs() < 1e-12);
        assert_eq!(result.protein_grams, 136);
        assert_eq!(result.carbs_grams, 332);
        assert_eq!(result.fats_grams, 98);
    }

    #[test]
    fn test_female_bmr_offset() {
        let input = MetricsInput {
            sex: Sex::Female,
            ..reference_input()
        };
        let result = compute(&input).unwrap();
        // 1780 - 5 - 161
        assert_eq!(result.bmr, 1614.0);
    }

    #[test]
    fn test_goal_adjustments() {
        let maintain = compute(&reference_input()).unwrap();
        let gain = compute(&MetricsInput {
            goal: Goal::Gain,
            ..reference_input()
        })
        .unwrap();
        let lose = compute(&MetricsInput {
            goal: Goal::Lose,
            ..reference_input()
        })
        .unwrap();

        assert!((gain.target_calories - maintain.target_calories - 300.0).abs() < 1e-9);
        assert!((maintain.target_calories - lose.target_calories - 300.0).abs() < 1e-9);
        // TDEE itself is unaffected by the goal
        assert_eq!(gain.tdee, lose.tdee);
        assert!(gain.carbs_grams > maintain.carbs_grams);
        assert!(lose.fats_grams < maintain.fats_grams);
    }

    #[test]
    fn test_macro_calories_track_target() {
        for (weight, height, age, activity) in [
            (80.0, 180.0, 30, 1.55),
            (52.3, 161.0, 45, 1.2),
            (104.9, 193.5, 22, 1.9),
            (67.0, 172.7, 61, 1.375),
        ] {
            let input = MetricsInput {
                age_years: age,
                weight_kg: weight,
                height_cm: height,
                activity_factor: activity,
                ..reference_input()
            };
            let result = compute(&input).unwrap();
            // each of carbs and fats is off by at most half a gram
            let tolerance = 0.5 * KCAL_PER_G_CARB + 0.5 * KCAL_PER_G_FAT;
            assert!(
                (result.macro_calories() - result.target_calories).abs() <= tolerance,
                "weight {weight}: {} vs {}",
                result.macro_calories(),
                result.target_calories
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compute(&reference_input()).unwrap();
        let b = compute(&reference_input()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_obese_category() {
        let input = MetricsInput {
            weight_kg: 120.0,
            height_cm: 170.0,
            ..reference_input()
        };
        let result = compute(&input).unwrap();
        assert_eq!(result.bmi_category, BmiCategory::Obese);
    }

    #[test]
    fn test_negative_height_is_validation_error() {
        let input = MetricsInput {
            height_cm: -180.0,
            ..reference_input()
        };
        let err = compute(&input).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, FitError::InvalidInput { .. }));
    }

    #[test]
    fn test_result_serialization() {
        let result = compute(&reference_input()).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["bmi_category"], "normal");
        assert_eq!(json["protein_grams"], 136);
    }
}

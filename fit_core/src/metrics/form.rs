//! # Form Parsing
//!
//! Turns the raw string values collected by a form into a validated
//! [`MetricsInput`]. Parsing stops at the first bad field, checked in the
//! order age, sex, activity, goal, weight, height.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "age": "30",
//!   "sex": "male",
//!   "activity": "1.55",
//!   "goal": "maintain",
//!   "weight_kg": "80",
//!   "height_ft": "5",
//!   "height_in": "10"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FitError, FitResult};
use crate::units::{Centimeters, Feet, Inches};

use super::input::{ActivityLevel, Goal, MetricsInput, Sex};

/// Raw field values as submitted. Every field is optional; blanks count as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetricsForm {
    pub age: Option<String>,
    /// Also accepted as `gender`, the site's form field name
    #[serde(alias = "gender")]
    pub sex: Option<String>,
    /// Multiplier or activity level name
    pub activity: Option<String>,
    pub goal: Option<String>,
    pub weight_kg: Option<String>,
    /// Fallback for `weight_kg`
    pub weight: Option<String>,
    pub height_ft: Option<String>,
    pub height_in: Option<String>,
    pub height_cm: Option<String>,
}

impl RawMetricsForm {
    /// Parse and validate every field.
    ///
    /// # Returns
    ///
    /// * `Ok(MetricsInput)` - All fields resolved
    /// * `Err(FitError::MissingField)` - A required field is blank
    /// * `Err(FitError::InvalidInput)` - A field is malformed or out of range
    pub fn parse(&self) -> FitResult<MetricsInput> {
        let age_raw = required("age", &self.age)?;
        let age_years = age_raw.parse::<u32>().map_err(|_| {
            FitError::invalid_input("age", age_raw, "Age must be a whole number of years")
        })?;

        let sex: Sex = required("sex", &self.sex)?.parse()?;
        let activity_factor = ActivityLevel::parse_factor(required("activity", &self.activity)?)?;
        let goal: Goal = required("goal", &self.goal)?.parse()?;

        let weight_raw = non_blank(&self.weight_kg)
            .or_else(|| non_blank(&self.weight))
            .ok_or_else(|| FitError::missing_field("weight_kg"))?;
        let weight_kg = parse_number("weight_kg", weight_raw)?;

        let height_cm = self.resolve_height_cm()?;

        let input = MetricsInput {
            age_years,
            sex,
            activity_factor,
            goal,
            weight_kg,
            height_cm,
        };
        input.validate()?;
        Ok(input)
    }

    /// Imperial height wins when feet or inches is non-zero.
    fn resolve_height_cm(&self) -> FitResult<f64> {
        let feet = optional_number("height_ft", &self.height_ft)?.unwrap_or(0.0);
        let inches = optional_number("height_in", &self.height_in)?.unwrap_or(0.0);

        if feet != 0.0 || inches != 0.0 {
            return Ok(Centimeters::from_feet_inches(Feet(feet), Inches(inches)).value());
        }

        parse_number("height_cm", required("height_cm", &self.height_cm)?)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(field: &str, value: &'a Option<String>) -> FitResult<&'a str> {
    non_blank(value).ok_or_else(|| FitError::missing_field(field))
}

fn parse_number(field: &str, raw: &str) -> FitResult<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FitError::invalid_input(field, raw, "Expected a number")),
    }
}

fn optional_number(field: &str, value: &Option<String>) -> FitResult<Option<f64>> {
    non_blank(value).map(|raw| parse_number(field, raw)).transpose()
}

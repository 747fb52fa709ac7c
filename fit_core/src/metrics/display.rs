//! # Display Formatting
//!
//! Turns a [`MetricsResult`] into the strings a renderer puts into each
//! result slot. Slot names match the element ids used by the site.

use serde::{Deserialize, Serialize};

use super::bmi::BmiSeverity;
use super::calculator::MetricsResult;
use super::rounding::{round_half_up, to_fixed};

/// Rendered values for every result slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsDisplay {
    pub bmr: String,
    pub tdee: String,
    pub calories: String,
    /// One decimal place
    pub bmi: String,
    pub bmi_category: String,
    pub bmi_severity: BmiSeverity,
    /// Two decimal places
    pub water: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

impl MetricsDisplay {
    pub fn from_result(result: &MetricsResult) -> Self {
        MetricsDisplay {
            bmr: whole(result.bmr),
            tdee: whole(result.tdee),
            calories: whole(result.target_calories),
            bmi: to_fixed(result.bmi, 1),
            bmi_category: result.bmi_category.label().to_string(),
            bmi_severity: result.bmi_category.severity(),
            water: to_fixed(result.water_litres, 2),
            protein: result.protein_grams.to_string(),
            carbs: result.carbs_grams.to_string(),
            fats: result.fats_grams.to_string(),
        }
    }

    /// `(slot id, text)` pairs in page order.
    pub fn slots(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("bmr", self.bmr.as_str()),
            ("bmi", self.bmi.as_str()),
            ("bmi-category", self.bmi_category.as_str()),
            ("tdee", self.tdee.as_str()),
            ("calories", self.calories.as_str()),
            ("water", self.water.as_str()),
            ("protein", self.protein.as_str()),
            ("carbs", self.carbs.as_str()),
            ("fats", self.fats.as_str()),
        ]
    }

    /// CSS class for a slot, if any.
    pub fn slot_class(&self, slot: &str) -> Option<&'static str> {
        (slot == "bmi-category").then(|| self.bmi_severity.css_class())
    }
}

impl From<&MetricsResult> for MetricsDisplay {
    fn from(result: &MetricsResult) -> Self {
        MetricsDisplay::from_result(result)
    }
}

fn whole(value: f64) -> String {
    to_fixed(round_half_up(value), 0)
}

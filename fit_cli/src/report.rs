//! Plain-text rendering of a calculation.

use fit_core::metrics::{MetricsDisplay, MetricsInput};

const RULE: &str = "═══════════════════════════════════════";

pub fn render_text(input: &MetricsInput, display: &MetricsDisplay) -> String {
    let lines = [
        RULE.to_string(),
        "  FITNESS METRICS".to_string(),
        RULE.to_string(),
        String::new(),
        "Input:".to_string(),
        format!("  Age:      {} years", input.age_years),
        format!("  Sex:      {}", input.sex),
        format!("  Weight:   {:.1} kg", input.weight_kg),
        format!("  Height:   {:.1} cm", input.height_cm),
        format!("  Activity: x{}", input.activity_factor),
        format!("  Goal:     {}", input.goal),
        String::new(),
        "Energy:".to_string(),
        format!("  BMR:      {} kcal/day", display.bmr),
        format!("  TDEE:     {} kcal/day", display.tdee),
        format!("  Target:   {} kcal/day", display.calories),
        String::new(),
        "Body:".to_string(),
        format!(
            "  BMI:      {} ({}) [{}]",
            display.bmi,
            display.bmi_category,
            display.bmi_severity.css_class()
        ),
        format!("  Water:    {} L/day", display.water),
        String::new(),
        "Macros:".to_string(),
        format!("  Protein:  {} g", display.protein),
        format!("  Carbs:    {} g", display.carbs),
        format!("  Fats:     {} g", display.fats),
        RULE.to_string(),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::metrics::{compute, Goal, Sex};

    #[test]
    fn test_report_contains_every_slot() {
        let input = MetricsInput {
            age_years: 30,
            sex: Sex::Male,
            activity_factor: 1.55,
            goal: Goal::Maintain,
            weight_kg: 80.0,
            height_cm: 180.0,
        };
        let display = MetricsDisplay::from_result(&compute(&input).unwrap());
        let text = render_text(&input, &display);

        assert!(text.contains("BMR:      1780 kcal/day"));
        assert!(text.contains("BMI:      24.7 (Normal weight) [bmi-normal]"));
        assert!(text.contains("Water:    3.20 L/day"));
        assert!(text.contains("Carbs:    332 g"));
        assert!(text.contains("Activity: x1.55"));
    }

    #[test]
    fn test_report_framed_by_rules() {
        let input = MetricsInput {
            age_years: 41,
            sex: Sex::Female,
            activity_factor: 1.2,
            goal: Goal::Lose,
            weight_kg: 62.5,
            height_cm: 165.0,
        };
        let display = MetricsDisplay::from_result(&compute(&input).unwrap());
        let text = render_text(&input, &display);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.first(), Some(&RULE));
        assert_eq!(lines.last(), Some(&RULE));
        assert_eq!(lines.len(), 26);
        assert!(text.ends_with(&format!("{RULE}\n")));
        assert!(text.contains("  Goal:     lose"));
    }
}

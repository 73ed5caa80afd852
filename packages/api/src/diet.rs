//! Diet percentage: share of meals flagged on-diet, for display.

/// Share of on-diet meals as a percentage, or `None` when there is nothing
/// meaningful to show (no meals, or no on-diet meals).
pub fn diet_ratio(total_meals: Option<u64>, total_meals_within_diet: Option<u64>) -> Option<f64> {
    let total = total_meals.filter(|&t| t > 0)?;
    let within = total_meals_within_diet.filter(|&w| w > 0)?;
    Some(within as f64 / total as f64 * 100.0)
}

/// Display string for the diet percentage.
///
/// The empty case returns `"0%"` while the normal case returns the bare
/// number with two decimals (`"50.00"`); callers append `%` when the result
/// parses as a number.
pub fn calculate_diet_percentage(
    total_meals: Option<u64>,
    total_meals_within_diet: Option<u64>,
) -> String {
    match diet_ratio(total_meals, total_meals_within_diet) {
        Some(percentage) => format!("{percentage:.2}"),
        None => "0%".to_string(),
    }
}

/// Colour band the percentage cards use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietBand {
    /// Nothing recorded yet.
    Empty,
    /// At least half the meals are on-diet.
    Healthy,
    Unhealthy,
}

impl DietBand {
    pub fn of(ratio: Option<f64>) -> Self {
        match ratio {
            None => DietBand::Empty,
            Some(p) if p >= 50.0 => DietBand::Healthy,
            Some(_) => DietBand::Unhealthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_yield_zero_percent() {
        assert_eq!(calculate_diet_percentage(Some(0), Some(5)), "0%");
        assert_eq!(calculate_diet_percentage(Some(0), None), "0%");
        assert_eq!(calculate_diet_percentage(None, Some(3)), "0%");
        assert_eq!(calculate_diet_percentage(Some(4), None), "0%");
        assert_eq!(calculate_diet_percentage(None, None), "0%");
    }

    #[test]
    fn test_no_on_diet_meals_is_empty_case() {
        assert_eq!(calculate_diet_percentage(Some(4), Some(0)), "0%");
        assert_eq!(diet_ratio(Some(4), Some(0)), None);
    }

    #[test]
    fn test_two_decimal_formatting() {
        assert_eq!(calculate_diet_percentage(Some(200), Some(100)), "50.00");
        assert_eq!(calculate_diet_percentage(Some(3), Some(1)), "33.33");
        assert_eq!(calculate_diet_percentage(Some(3), Some(2)), "66.67");
        assert_eq!(calculate_diet_percentage(Some(7), Some(7)), "100.00");
    }

    #[test]
    fn test_bands() {
        assert_eq!(DietBand::of(diet_ratio(None, None)), DietBand::Empty);
        assert_eq!(DietBand::of(diet_ratio(Some(2), Some(1))), DietBand::Healthy);
        assert_eq!(DietBand::of(diet_ratio(Some(3), Some(1))), DietBand::Unhealthy);
    }
}

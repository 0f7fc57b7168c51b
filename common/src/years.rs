//! Which fiscal years of revenue the questionnaire must collect.

/// Sentinel creation-year meaning "created before 2022".
pub const BEFORE_2022: &str = "avant-2022";

/// Fiscal years to request revenue figures for, most recent first.
///
/// The sentinel maps to the fixed set `[2024, 2023, 2022]`; a literal
/// creation year `Y` yields `current_year - 1` down to
/// `max(Y, current_year - 3)`. Callers must pass a real clock-derived
/// `current_year`, never a constant.
pub fn revenue_years(creation: &str, current_year: i32) -> Vec<i32> {
    if creation == BEFORE_2022 {
        return vec![2024, 2023, 2022];
    }
    let Ok(year) = creation.trim().parse::<i32>() else {
        return Vec::new();
    };
    let floor = year.max(current_year - 3);
    (floor..current_year).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_yields_fixed_descending_set() {
        assert_eq!(revenue_years(BEFORE_2022, 2025), vec![2024, 2023, 2022]);
    }

    #[test]
    fn literal_year_yields_years_since_creation() {
        assert_eq!(revenue_years("2023", 2025), vec![2024, 2023]);
    }

    #[test]
    fn creation_this_year_yields_nothing() {
        assert_eq!(revenue_years("2025", 2025), Vec::<i32>::new());
    }

    #[test]
    fn old_creation_year_is_capped_at_three_years() {
        assert_eq!(revenue_years("2018", 2025), vec![2024, 2023, 2022]);
    }

    #[test]
    fn future_or_garbage_input_yields_nothing() {
        assert_eq!(revenue_years("2030", 2025), Vec::<i32>::new());
        assert_eq!(revenue_years("l'an dernier", 2025), Vec::<i32>::new());
        assert_eq!(revenue_years("", 2025), Vec::<i32>::new());
    }
}

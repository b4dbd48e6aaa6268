use crate::domain::meal_analysis::entities::Visualizations;

/// kcal in one 500ml bottle of cola
pub const COLA_CALORIES: f64 = 270.0;
/// kcal in one medium bowl of rice
pub const RICE_BOWL_CALORIES: f64 = 232.0;
/// kcal burned running one kilometre
pub const RUNNING_KM_CALORIES: f64 = 60.0;

/// Restates a calorie total in relatable units, each rounded to one decimal.
/// Negative totals are not rejected and simply yield negative units.
pub fn visualize(total_calories: i64) -> Visualizations {
    let total = total_calories as f64;

    Visualizations {
        cola: round_one_decimal(total / COLA_CALORIES),
        rice: round_one_decimal(total / RICE_BOWL_CALORIES),
        running_km: round_one_decimal(total / RUNNING_KM_CALORIES),
    }
}

/// Rounds on the exact binary value with ties to even, so `6.25` gives `6.2`.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_calories_is_all_zero() {
        assert_eq!(
            visualize(0),
            Visualizations {
                cola: 0.0,
                rice: 0.0,
                running_km: 0.0,
            }
        );
    }

    #[test]
    fn one_bottle_of_cola() {
        let units = visualize(270);

        assert_eq!(units.cola, 1.0);
        assert_eq!(units.rice, 1.2);
        assert_eq!(units.running_km, 4.5);
    }

    #[test]
    fn mixed_meal() {
        let units = visualize(447);

        assert_eq!(units.cola, 1.7);
        assert_eq!(units.rice, 1.9);
        assert_eq!(units.running_km, 7.5);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(visualize(15).running_km, 0.2);
        assert_eq!(visualize(375).running_km, 6.2);
        assert_eq!(visualize(135).rice, 0.6);
    }

    #[test]
    fn negative_totals_propagate() {
        let units = visualize(-120);

        assert_eq!(units.running_km, -2.0);
        assert!(units.cola < 0.0);
    }
}

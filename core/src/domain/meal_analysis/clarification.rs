use crate::domain::meal_analysis::entities::{ClarifiedItem, ClearAnalysis, FoodItem};

pub const FALLBACK_DIETARY_ADVICE: &str = "请保持均衡饮食，适量摄入蛋白质、碳水化合物和蔬菜。";
pub const FALLBACK_HEALTH_SCORE: i64 = 70;

/// Sum of every item's calories, saturating instead of overflowing.
pub fn sum_calories(foods: &[FoodItem]) -> i64 {
    foods
        .iter()
        .fold(0i64, |total, food| total.saturating_add(food.calories))
}

/// Every resolved food rendered as `"name quantity (N卡)"`, clear foods first.
pub fn resolved_food_lines(clear_foods: &[FoodItem], clarified_items: &[ClarifiedItem]) -> Vec<String> {
    clear_foods
        .iter()
        .map(FoodItem::describe)
        .chain(clarified_items.iter().map(ClarifiedItem::describe))
        .collect()
}

/// Computes the final result without the model.
///
/// Only arithmetic over values the caller already holds, so it cannot fail and always
/// gives the same output for the same input.
pub fn resolve_manually(clear_foods: &[FoodItem], clarified_items: &[ClarifiedItem]) -> ClearAnalysis {
    let foods: Vec<FoodItem> = clear_foods
        .iter()
        .cloned()
        .chain(clarified_items.iter().map(ClarifiedItem::to_food_item))
        .collect();

    let total_calories = sum_calories(&foods);

    ClearAnalysis::new(
        foods,
        total_calories,
        FALLBACK_DIETARY_ADVICE.to_string(),
        FALLBACK_HEALTH_SCORE,
    )
}

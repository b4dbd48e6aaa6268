use crate::domain::meal_analysis::entities::{ClarifiedItem, FoodItem, MealType};

#[derive(Debug, Clone)]
pub struct AnalyzeMealInput {
    pub meal_type: MealType,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ConfirmClarificationInput {
    pub meal_type: MealType,
    pub clear_foods: Vec<FoodItem>,
    /// One entry per previously ambiguous item.
    pub clarified_items: Vec<ClarifiedItem>,
}

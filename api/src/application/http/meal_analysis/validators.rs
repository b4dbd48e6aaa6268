use calorielens_core::domain::meal_analysis::{
    entities::{ClarifiedItem, FoodItem, MealType},
    value_objects::{AnalyzeMealInput, ConfirmClarificationInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Upper bound for the calories of a single food.
pub const MAX_ITEM_CALORIES: i64 = 100_000;

fn calories_in_range(calories: i64) -> Result<(), ValidationError> {
    if (0..=MAX_ITEM_CALORIES).contains(&calories) {
        Ok(())
    } else {
        Err(ValidationError::new("calories_out_of_range").with_message(
            format!("calories must be between 0 and {}", MAX_ITEM_CALORIES).into(),
        ))
    }
}

fn validate_food_calories(foods: &[FoodItem]) -> Result<(), ValidationError> {
    foods
        .iter()
        .try_for_each(|food| calories_in_range(food.calories))
}

fn validate_clarified_calories(items: &[ClarifiedItem]) -> Result<(), ValidationError> {
    items
        .iter()
        .try_for_each(|item| calories_in_range(item.calories))
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeMealRequest {
    #[serde(default)]
    pub meal_type: MealType,
    #[validate(length(min = 1, max = 5000, message = "请输入饮食内容"))]
    #[schema(example = "一碗米饭，一杯可乐")]
    pub description: String,
}

impl From<AnalyzeMealRequest> for AnalyzeMealInput {
    fn from(request: AnalyzeMealRequest) -> Self {
        AnalyzeMealInput {
            meal_type: request.meal_type,
            description: request.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ConfirmClarificationRequest {
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    #[validate(
        length(max = 50, message = "clear_foods must contain at most 50 items"),
        custom(function = "validate_food_calories")
    )]
    pub clear_foods: Vec<FoodItem>,
    #[serde(default)]
    #[validate(
        length(max = 50, message = "clarified_items must contain at most 50 items"),
        custom(function = "validate_clarified_calories")
    )]
    pub clarified_items: Vec<ClarifiedItem>,
}

impl From<ConfirmClarificationRequest> for ConfirmClarificationInput {
    fn from(request: ConfirmClarificationRequest) -> Self {
        ConfirmClarificationInput {
            meal_type: request.meal_type,
            clear_foods: request.clear_foods,
            clarified_items: request.clarified_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meal_type_defaults_to_lunch() {
        let request: AnalyzeMealRequest =
            serde_json::from_value(json!({"description": "一碗米饭"})).unwrap();

        assert_eq!(request.meal_type, MealType::Lunch);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_description_is_rejected() {
        let request: AnalyzeMealRequest =
            serde_json::from_value(json!({"meal_type": "早餐", "description": ""})).unwrap();

        assert_eq!(request.meal_type, MealType::Breakfast);
        assert!(request.validate().is_err());
    }

    #[test]
    fn too_many_clarified_items_are_rejected() {
        let items: Vec<_> = (0..51)
            .map(|i| json!({"food": format!("食物{i}"), "selected_label": "中份", "calories": 100}))
            .collect();
        let request: ConfirmClarificationRequest =
            serde_json::from_value(json!({"clarified_items": items})).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn out_of_range_calories_are_rejected() {
        let request: ConfirmClarificationRequest = serde_json::from_value(json!({
            "clear_foods": [{"name": "米饭", "quantity": "中碗", "calories": "1e30"}],
            "clarified_items": [{"food": "可乐", "selected_label": "中杯", "calories": 215}]
        }))
        .unwrap();
        assert!(request.validate().is_err());

        let request: ConfirmClarificationRequest = serde_json::from_value(json!({
            "clarified_items": [{"food": "可乐", "selected_label": "中杯", "calories": -5}]
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}

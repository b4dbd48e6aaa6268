use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[serde(alias = "早餐")]
    Breakfast,
    #[default]
    #[serde(alias = "午餐")]
    Lunch,
    #[serde(alias = "晚餐")]
    Dinner,
    #[serde(alias = "零食")]
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Name used when talking to the model.
    pub fn label(&self) -> &str {
        match self {
            MealType::Breakfast => "早餐",
            MealType::Lunch => "午餐",
            MealType::Dinner => "晚餐",
            MealType::Snack => "零食",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_english_and_chinese_names() {
        let english: MealType = serde_json::from_str("\"dinner\"").unwrap();
        let chinese: MealType = serde_json::from_str("\"晚餐\"").unwrap();

        assert_eq!(english, MealType::Dinner);
        assert_eq!(chinese, MealType::Dinner);
        assert_eq!(serde_json::to_string(&chinese).unwrap(), "\"dinner\"");
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(serde_json::from_str::<MealType>("\"brunch\"").is_err());
        assert_eq!(MealType::default(), MealType::Lunch);
    }
}

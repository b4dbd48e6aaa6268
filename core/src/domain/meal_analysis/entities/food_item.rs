use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A food with a known portion and calorie value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    /// Human readable portion, e.g. "中碗" or "2个"
    #[serde(default)]
    pub quantity: String,
    #[serde(deserialize_with = "deserialize_calories")]
    pub calories: i64,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, calories: i64) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            calories,
        }
    }

    /// `"name quantity (N卡)"`, the form foods are listed in when sent back to the model.
    pub fn describe(&self) -> String {
        format!("{} {} ({}卡)", self.name, self.quantity, self.calories)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PortionSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortionOption {
    pub label: String,
    pub value: PortionSize,
    #[serde(deserialize_with = "deserialize_calories")]
    pub calories: i64,
}

/// A food whose portion the model could not determine. The user picks one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AmbiguousFoodItem {
    pub food: String,
    #[serde(default)]
    pub question: String,
    pub options: Vec<PortionOption>,
}

/// The option a user picked for one ambiguous food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClarifiedItem {
    pub food: String,
    pub selected_label: String,
    #[serde(deserialize_with = "deserialize_calories")]
    pub calories: i64,
}

impl ClarifiedItem {
    pub fn new(food: impl Into<String>, selected_label: impl Into<String>, calories: i64) -> Self {
        Self {
            food: food.into(),
            selected_label: selected_label.into(),
            calories,
        }
    }

    pub fn describe(&self) -> String {
        format!("{} {} ({}卡)", self.food, self.selected_label, self.calories)
    }

    /// The chosen label becomes the portion of the resolved food.
    pub fn to_food_item(&self) -> FoodItem {
        FoodItem::new(self.food.clone(), self.selected_label.clone(), self.calories)
    }
}

/// Models are loose with numbers: `232`, `232.4` and `"232"` all show up.
#[derive(Deserialize)]
#[serde(untagged)]
enum CalorieValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CalorieValue {
    fn into_calories(self) -> Result<i64, String> {
        match self {
            CalorieValue::Integer(value) => Ok(value),
            CalorieValue::Float(value) if value.is_finite() => Ok(value.round() as i64),
            CalorieValue::Float(value) => Err(format!("invalid calorie value: {}", value)),
            CalorieValue::Text(text) => {
                let trimmed = text
                    .trim()
                    .trim_end_matches("kcal")
                    .trim_end_matches('卡')
                    .trim();
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .map(|value| value.round() as i64)
                    .ok_or_else(|| format!("invalid calorie value: {:?}", text))
            }
        }
    }
}

pub(crate) fn deserialize_calories<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    CalorieValue::deserialize(deserializer)?
        .into_calories()
        .map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_optional_calories<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<CalorieValue>::deserialize(deserializer)?
        .map(CalorieValue::into_calories)
        .transpose()
        .map_err(serde::de::Error::custom)
}

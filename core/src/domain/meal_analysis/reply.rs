use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_analysis::{
        clarification::{FALLBACK_HEALTH_SCORE, sum_calories},
        entities::{
            AmbiguousFoodItem, AnalysisResult, ClearAnalysis, FoodItem, PendingClarification,
            food_item::deserialize_optional_calories,
        },
    },
};

/// The two shapes the model is instructed to answer with.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ModelReply {
    Clear {
        #[serde(default)]
        foods: Vec<FoodItem>,
        #[serde(default, deserialize_with = "deserialize_optional_calories")]
        total_calories: Option<i64>,
        #[serde(default)]
        dietary_advice: String,
        #[serde(default, deserialize_with = "deserialize_optional_calories")]
        health_score: Option<i64>,
    },
    NeedClarification {
        #[serde(default)]
        clear_foods: Vec<FoodItem>,
        #[serde(default)]
        ambiguous_items: Vec<AmbiguousFoodItem>,
    },
}

impl From<ModelReply> for AnalysisResult {
    fn from(reply: ModelReply) -> Self {
        match reply {
            ModelReply::Clear {
                foods,
                total_calories,
                dietary_advice,
                health_score,
            } => {
                // Trust the model's total; only derive one when it left it out.
                let total_calories = total_calories.unwrap_or_else(|| sum_calories(&foods));

                AnalysisResult::Clear(ClearAnalysis::new(
                    foods,
                    total_calories,
                    dietary_advice,
                    health_score.unwrap_or(FALLBACK_HEALTH_SCORE),
                ))
            }
            ModelReply::NeedClarification {
                clear_foods,
                ambiguous_items,
            } => AnalysisResult::NeedsClarification(PendingClarification {
                clear_foods,
                ambiguous_items,
            }),
        }
    }
}

/// Reads parsed JSON as one of the two result shapes.
pub fn interpret_reply(value: Value) -> Result<AnalysisResult, CoreError> {
    serde_json::from_value::<ModelReply>(value)
        .map(AnalysisResult::from)
        .map_err(|e| CoreError::UpstreamFormat(format!("unexpected AI reply shape: {}", e)))
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal_analysis::{
    entities::food_item::{AmbiguousFoodItem, FoodItem},
    visualization::visualize,
};

/// Outcome of analyzing a meal. A pending result is never mistaken for a final one:
/// only `Clear` carries totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status")]
pub enum AnalysisResult {
    #[serde(rename = "clear")]
    Clear(ClearAnalysis),
    #[serde(rename = "need_clarification")]
    NeedsClarification(PendingClarification),
}

impl AnalysisResult {
    pub fn is_clear(&self) -> bool {
        matches!(self, AnalysisResult::Clear(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClearAnalysis {
    pub foods: Vec<FoodItem>,
    pub total_calories: i64,
    pub dietary_advice: String,
    /// 0-100
    pub health_score: u8,
    pub visualizations: Visualizations,
}

impl ClearAnalysis {
    pub fn new(
        foods: Vec<FoodItem>,
        total_calories: i64,
        dietary_advice: String,
        health_score: i64,
    ) -> Self {
        Self {
            foods,
            total_calories,
            dietary_advice,
            health_score: health_score.clamp(0, 100) as u8,
            visualizations: visualize(total_calories),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PendingClarification {
    pub clear_foods: Vec<FoodItem>,
    pub ambiguous_items: Vec<AmbiguousFoodItem>,
}

/// A calorie total restated in relatable units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Visualizations {
    /// Bottles of cola
    pub cola: f64,
    /// Bowls of rice
    pub rice: f64,
    pub running_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clear_result_serializes_with_status_tag() {
        let result = AnalysisResult::Clear(ClearAnalysis::new(
            vec![FoodItem::new("馒头", "1个", 220)],
            220,
            "搭配些蔬菜".to_string(),
            75,
        ));

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["status"], "clear");
        assert_eq!(value["total_calories"], 220);
        assert_eq!(value["visualizations"]["running_km"], 3.7);
    }

    #[test]
    fn pending_result_carries_no_visualizations() {
        let result = AnalysisResult::NeedsClarification(PendingClarification {
            clear_foods: vec![],
            ambiguous_items: vec![],
        });

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({"status": "need_clarification", "clear_foods": [], "ambiguous_items": []})
        );
        assert!(!result.is_clear());
    }

    #[test]
    fn health_score_is_clamped() {
        let high = ClearAnalysis::new(vec![], 0, String::new(), 130);
        let low = ClearAnalysis::new(vec![], 0, String::new(), -5);

        assert_eq!(high.health_score, 100);
        assert_eq!(low.health_score, 0);
    }
}

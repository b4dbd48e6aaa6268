use super::handlers::{
    analyze_meal::{__path_analyze_meal, analyze_meal},
    confirm_clarification::{__path_confirm_clarification, confirm_clarification},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_meal, confirm_clarification))]
pub struct MealAnalysisApiDoc;

pub fn meal_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyze-meal", state.args.server.root_path),
            post(analyze_meal),
        )
        .route(
            &format!("{}/confirm-clarification", state.args.server.root_path),
            post(confirm_clarification),
        )
}

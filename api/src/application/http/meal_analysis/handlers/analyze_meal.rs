use axum::extract::State;
use calorielens_core::domain::meal_analysis::{
    entities::AnalysisResult, ports::MealAnalysisService,
};

use crate::application::http::{
    meal_analysis::validators::AnalyzeMealRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze-meal",
    tag = "meal-analysis",
    summary = "Analyze a meal description",
    description = "Estimates the calories of a free-text meal. Returns either a complete analysis or the foods whose portion must be clarified first.",
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse, description = "Empty description"),
        (status = 500, body = ApiErrorResponse, description = "AI credential missing"),
        (status = 502, body = ApiErrorResponse, description = "AI call failed or returned an unreadable reply"),
    ),
    request_body = AnalyzeMealRequest
)]
pub async fn analyze_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeMealRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze_meal(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

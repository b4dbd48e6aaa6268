use axum::extract::State;
use calorielens_core::domain::meal_analysis::{
    entities::AnalysisResult, ports::MealAnalysisService,
};

use crate::application::http::{
    meal_analysis::validators::ConfirmClarificationRequest,
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
    path = "/confirm-clarification",
    tag = "meal-analysis",
    summary = "Finish an analysis with the chosen portions",
    description = "Combines the clear foods with the portions picked by the user. Falls back to a plain calorie sum when the AI reply cannot be used.",
    responses(
        (status = 200, body = AnalysisResult, description = "Always the `clear` variant"),
        (status = 400, body = ApiErrorResponse, description = "Malformed request"),
        (status = 500, body = ApiErrorResponse, description = "AI credential missing"),
    ),
    request_body = ConfirmClarificationRequest
)]
pub async fn confirm_clarification(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ConfirmClarificationRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .confirm_clarification(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalysisResult::Clear(result)))
}

use crate::application::http::{
    health::router::HealthApiDoc, meal_analysis::router::MealAnalysisApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "CalorieLens API",
    description = "Meal calorie analysis backed by a chat-completion model"
))]
pub struct ApiDoc;

/// Full document; paths are relative to the server root path.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MealAnalysisApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}

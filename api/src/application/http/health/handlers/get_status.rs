use axum::extract::State;
use calorielens_core::domain::health::{entities::ServiceStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/status",
    tag = "health",
    summary = "Report whether the AI credential is configured",
    responses(
        (status = 200, body = ServiceStatus)
    )
)]
pub async fn get_status(State(state): State<AppState>) -> Response<ServiceStatus> {
    Response::OK(state.service.status())
}

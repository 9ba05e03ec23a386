use crate::AppState;
use crate::handler::internal_error;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use shared::organization_status::OrganizationStatus;

/// GET /api/organization/status - aggregate counters of the workspace
pub async fn api_get_organization_status(
    State(state): State<AppState>,
) -> Result<Json<OrganizationStatus>, (StatusCode, String)> {
    state
        .db
        .organization()
        .get_status()
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to count organization content", e))
}

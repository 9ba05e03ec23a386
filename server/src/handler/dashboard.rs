use crate::AppState;
use crate::handler::internal_error;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::dashboard::{Dashboard, NewDashboardDto};
use tracing::info;

/// GET /api/dashboards - JSON list of all dashboards
pub async fn api_list_dashboards(
    State(state): State<AppState>,
) -> Result<Json<Vec<Dashboard>>, (StatusCode, String)> {
    state
        .db
        .dashboard()
        .get_all_dashboards()
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to get dashboards", e))
}

/// GET /api/dashboards/{id}
pub async fn api_get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Dashboard>, (StatusCode, String)> {
    state
        .db
        .dashboard()
        .get_dashboard(id)
        .await
        .map_err(|e| internal_error("Failed to get dashboard", e))?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Dashboard {id} not found")))
}

/// POST /api/dashboards - create a dashboard from `{ "name": "..." }`
pub async fn api_create_dashboard(
    State(state): State<AppState>,
    Json(dto): Json<NewDashboardDto>,
) -> Result<(StatusCode, Json<Dashboard>), (StatusCode, String)> {
    let name = dto
        .validated_name()
        .ok_or((StatusCode::BAD_REQUEST, "Dashboard name is required".to_string()))?;

    let dashboard = state
        .db
        .dashboard()
        .insert_dashboard(name)
        .await
        .map_err(|e| internal_error("Failed to create dashboard", e))?;

    info!("Created dashboard '{}' ({})", dashboard.name, dashboard.slug);
    Ok((StatusCode::CREATED, Json(dashboard)))
}

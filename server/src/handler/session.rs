use crate::AppState;
use crate::handler::{header_value_as_opt_string, internal_error};
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use shared::endpoint::USER_ID_HEADER_KEY;
use shared::session::CurrentUser;
use tracing::warn;

/// GET /api/session - user named by the `X-User-Id` header, else the first admin
pub async fn api_get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CurrentUser>, (StatusCode, String)> {
    let repo = state.db.user();
    let user = match header_value_as_opt_string(&headers, USER_ID_HEADER_KEY) {
        Some(raw_id) => {
            let id = raw_id.parse::<i64>().map_err(|_| {
                warn!("Invalid {USER_ID_HEADER_KEY} header '{raw_id}'");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid {USER_ID_HEADER_KEY} header"),
                )
            })?;
            repo.get_user(id).await
        }
        None => repo.get_first_admin().await,
    }
    .map_err(|e| internal_error("Failed to load session user", e))?;

    user.map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No such user".to_string()))
}

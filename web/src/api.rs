use gloo_net::http::Request;
use shared::dashboard::{Dashboard, NewDashboardDto};
use shared::endpoint::ServerEndpoint;
use shared::organization_status::OrganizationStatus;
use shared::session::CurrentUser;

pub async fn fetch_organization_status() -> Result<OrganizationStatus, String> {
    Request::get(ServerEndpoint::ApiOrganizationStatus.to_str())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_session() -> Result<CurrentUser, String> {
    let resp = Request::get(ServerEndpoint::ApiSession.to_str())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        Err(resp.text().await.map_err(|e| e.to_string())?)
    }
}

pub async fn fetch_dashboards() -> Result<Vec<Dashboard>, String> {
    Request::get(ServerEndpoint::ApiDashboards.to_str())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_dashboard(id: &str) -> Result<Dashboard, String> {
    let url = ServerEndpoint::ApiDashboard.to_str().replace("{id}", id);
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if resp.ok() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        Err(resp.text().await.map_err(|e| e.to_string())?)
    }
}

pub async fn create_dashboard(dto: &NewDashboardDto) -> Result<Dashboard, String> {
    let resp = Request::post(ServerEndpoint::ApiDashboards.to_str())
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        Err(resp.text().await.map_err(|e| e.to_string())?)
    }
}

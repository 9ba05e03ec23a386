pub const USER_ID_HEADER_KEY: &str = "X-User-Id";

pub enum ServerEndpoint {
    Ping,
    Version,

    /// SPA frontend
    App,
    /// svg illustrations referenced by empty states
    Illustrations,

    /// JSON API: aggregate counters of the workspace
    ApiOrganizationStatus,
    /// JSON API: user of the current session
    ApiSession,
    /// JSON API: list or create dashboards
    ApiDashboards,
    /// JSON API: single dashboard by ID
    ApiDashboard,
}

impl ServerEndpoint {
    pub fn to_str(&self) -> &str {
        match self {
            ServerEndpoint::Ping => "/ping",
            ServerEndpoint::Version => "/version",
            // apps
            ServerEndpoint::App => "/app",
            ServerEndpoint::Illustrations => "/static/images/illustrations",
            // api
            ServerEndpoint::ApiOrganizationStatus => "/api/organization/status",
            ServerEndpoint::ApiSession => "/api/session",
            ServerEndpoint::ApiDashboards => "/api/dashboards",
            ServerEndpoint::ApiDashboard => "/api/dashboards/{id}",
        }
    }
}

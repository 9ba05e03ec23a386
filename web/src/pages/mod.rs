mod dashboard;
mod dashboards;
mod home;

pub use dashboard::DashboardPage;
pub use dashboards::DashboardsPage;
pub use home::HomePage;

const HELP_URL: &str = "https://redash.io/help/user-guide/getting-started";

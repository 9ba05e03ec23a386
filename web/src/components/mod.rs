mod create_dashboard_dialog;
mod empty_state;
mod loading;
mod message;
mod navbar;
mod step;

pub use create_dashboard_dialog::{
    CreateDashboardDialog, CreateDashboardDialogHandle, provide_create_dashboard_dialog,
};
pub use empty_state::{EmptyState, POLICY_NOTICES};
pub use loading::Loading;
pub use message::Message;
pub use navbar::Navbar;
pub use step::Step;

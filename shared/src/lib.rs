pub mod dashboard;
pub mod endpoint;
pub mod illustration;
pub mod onboarding;
pub mod organization_status;
pub mod session;

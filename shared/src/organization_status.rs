use serde::{Deserialize, Serialize};

/// Aggregate usage counters of the current workspace.
///
/// Owned and refreshed by the status provider, consumers only read a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationStatus {
    #[serde(default)]
    pub data_sources: u64,
    #[serde(default)]
    pub queries: u64,
    #[serde(default)]
    pub alerts: u64,
    #[serde(default)]
    pub dashboards: u64,
    #[serde(default)]
    pub users: u64,
}

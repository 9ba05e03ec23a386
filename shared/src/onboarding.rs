use crate::organization_status::OrganizationStatus;

/// Setup milestones tracked by the onboarding panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    DataSource,
    Query,
    Alert,
    Dashboard,
    InviteUsers,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::DataSource,
        Topic::Query,
        Topic::Alert,
        Topic::Dashboard,
        Topic::InviteUsers,
    ];

    /// A topic counts as completed once its counter exceeds this value.
    /// Every workspace has at least its creator, hence 1 for users.
    pub fn completion_threshold(&self) -> u64 {
        match self {
            Topic::InviteUsers => 1,
            _ => 0,
        }
    }

    fn counter(&self, status: &OrganizationStatus) -> u64 {
        match self {
            Topic::DataSource => status.data_sources,
            Topic::Query => status.queries,
            Topic::Alert => status.alerts,
            Topic::Dashboard => status.dashboards,
            Topic::InviteUsers => status.users,
        }
    }
}

/// One boolean per [`Topic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicFlags {
    pub data_source: bool,
    pub query: bool,
    pub alert: bool,
    pub dashboard: bool,
    pub invite_users: bool,
}

impl TopicFlags {
    pub fn get(&self, topic: Topic) -> bool {
        match topic {
            Topic::DataSource => self.data_source,
            Topic::Query => self.query,
            Topic::Alert => self.alert,
            Topic::Dashboard => self.dashboard,
            Topic::InviteUsers => self.invite_users,
        }
    }

    fn from_fn(f: impl Fn(Topic) -> bool) -> Self {
        TopicFlags {
            data_source: f(Topic::DataSource),
            query: f(Topic::Query),
            alert: f(Topic::Alert),
            dashboard: f(Topic::Dashboard),
            invite_users: f(Topic::InviteUsers),
        }
    }
}

/// Caller supplied switches for the optional steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalSteps {
    pub alert: bool,
    pub dashboard: bool,
    pub invite_users: bool,
}

impl OptionalSteps {
    /// Data sources and queries are always relevant, the rest follows the switches.
    pub fn available(&self) -> TopicFlags {
        TopicFlags {
            data_source: true,
            query: true,
            alert: self.alert,
            dashboard: self.dashboard,
            invite_users: self.invite_users,
        }
    }
}

pub fn completed(status: &OrganizationStatus) -> TopicFlags {
    TopicFlags::from_fn(|topic| topic.counter(status) > topic.completion_threshold())
}

/// The panel stays hidden only in onboarding mode once every relevant topic is done.
pub fn should_show_panel(onboarding_mode: bool, available: &TopicFlags, completed: &TopicFlags) -> bool {
    if !onboarding_mode {
        return true;
    }
    Topic::ALL
        .iter()
        .any(|topic| available.get(*topic) && !completed.get(*topic))
}

/// Same as [`should_show_panel`] for a snapshot that may still be loading. Only onboarding
/// mode depends on the counters, so it waits for them and renders nothing meanwhile.
pub fn should_show_panel_for(onboarding_mode: bool, available: &TopicFlags, status: Option<&OrganizationStatus>) -> bool {
    match status {
        Some(status) => should_show_panel(onboarding_mode, available, &completed(status)),
        None => !onboarding_mode,
    }
}

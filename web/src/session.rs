use leptos::logging::warn;
use leptos::prelude::*;
use shared::session::CurrentUser;

use crate::api;

#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<CurrentUser>>,
}

impl Session {
    pub fn new(user: Option<CurrentUser>) -> Self {
        Self {
            user: RwSignal::new(user),
        }
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.get()
    }
}

pub fn provide_session() -> Session {
    let session = Session::new(None);
    provide_context(session);
    let user = session.user;
    leptos::task::spawn_local(async move {
        match api::fetch_session().await {
            Ok(current) => {
                user.try_set(Some(current));
            }
            Err(e) => warn!("No session: {}", e),
        }
    });
    session
}

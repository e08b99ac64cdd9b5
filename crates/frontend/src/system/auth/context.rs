use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api_utils::is_unauthorized;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// `/me` has answered at least once.
    pub checked: bool,
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            checked: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            checked: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // The cookie is HttpOnly: ask the backend who we are.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => set_auth_state.set(AuthState::signed_in(user)),
                Err(e) => {
                    log::debug!("No active session: {}", e);
                    set_auth_state.set(AuthState::signed_out());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Display name of the signed-in user, used by the "my" table tabs.
pub fn current_user_name(auth_state: ReadSignal<AuthState>) -> Signal<Option<String>> {
    Signal::derive(move || auth_state.with(|s| s.user.as_ref().map(|u| u.full_name.clone())))
}

/// A 401 from any API call ends the session on the client; the route
/// guard then sends the user to the login page.
pub fn handle_api_error(error: &str, set_auth_state: WriteSignal<AuthState>) {
    if is_unauthorized(error) {
        set_auth_state.set(AuthState::signed_out());
    }
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let result = api::logout().await.map(|_| ());
    // Local state is cleared even when the request failed.
    set_auth_state.set(AuthState::signed_out());
    result
}

use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    /// Start from whatever session the client's token store already holds.
    pub fn restore(api: &ApiClient) -> Self {
        let user = api.session().map(|s| s.user);
        if let Some(u) = &user {
            tracing::info!(user_id = %u.id, "Restored session");
        }
        Self {
            current_user: Signal::new(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current_user.read().as_ref().and_then(AuthUser::role)
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

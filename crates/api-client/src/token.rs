use shared_types::AuthSession;
use std::sync::{Arc, Mutex};

/// Where the signed-in session lives between requests (and page loads, in the browser).
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<AuthSession>;
    fn save(&self, session: &AuthSession);
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }
}

/// Process-local store used by tests and the desktop build.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    session: Arc<Mutex<Option<AuthSession>>>,
}

impl MemoryTokenStore {
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(Some(session))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<AuthSession> {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, session: &AuthSession) {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Browser `localStorage` store: the raw token under `token`, the user JSON under `user`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::{LocalStorageTokenStore, TokenStore};
    use shared_types::{AuthSession, AuthUser};

    const TOKEN_KEY: &str = "token";
    const USER_KEY: &str = "user";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    impl TokenStore for LocalStorageTokenStore {
        fn load(&self) -> Option<AuthSession> {
            let storage = storage()?;
            let token = storage.get_item(TOKEN_KEY).ok()??;
            let user_json = storage.get_item(USER_KEY).ok()??;
            match serde_json::from_str::<AuthUser>(&user_json) {
                Ok(user) => Some(AuthSession { token, user }),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored user is unreadable, ignoring session");
                    None
                }
            }
        }

        fn save(&self, session: &AuthSession) {
            let Some(storage) = storage() else {
                tracing::warn!("localStorage unavailable, session not persisted");
                return;
            };
            let user_json = match serde_json::to_string(&session.user) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize user");
                    return;
                }
            };
            if storage.set_item(TOKEN_KEY, &session.token).is_err()
                || storage.set_item(USER_KEY, &user_json).is_err()
            {
                tracing::warn!("Failed to write session to localStorage");
            }
        }

        fn clear(&self) {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }

        fn token(&self) -> Option<String> {
            storage()?.get_item(TOKEN_KEY).ok()?
        }
    }
}

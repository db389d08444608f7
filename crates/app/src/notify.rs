use crate::auth::AuthState;
use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

/// Report a failed call. A rejected session also signs the user out locally.
pub fn api_error(toast: Toasts, auth: &mut AuthState, err: &AppError) {
    if err.is_unauthorized() {
        auth.clear_auth();
    }
    tracing::warn!(error = %err, "Request failed");
    toast.error(err.friendly_message(), ToastOptions::new());
}

pub fn success(toast: Toasts, message: &str) {
    toast.success(message.to_string(), ToastOptions::new());
}

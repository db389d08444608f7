//! Endpoint wrappers, one module per resource. Each adds methods to [`crate::ApiClient`].

pub mod auth;
pub mod branch;
pub mod case;
pub mod client;

//! HTTP access to the case-desk API plus the workflows the pages drive.

pub mod api;
pub mod config;
pub mod error_convert;
pub mod http;
pub mod in_flight;
pub mod status;
pub mod token;
pub mod workflow;

pub use http::ApiClient;
pub use in_flight::{InFlight, InFlightGuard};
pub use status::RequestState;
pub use token::{MemoryTokenStore, TokenStore};
pub use workflow::*;

#[cfg(target_arch = "wasm32")]
pub use token::LocalStorageTokenStore;

pub mod error;
pub mod models;

// Case-desk domain modules
pub mod branch;
pub mod case;
pub mod client;
pub mod common;
pub mod config;

pub use error::*;
pub use models::*;

pub use branch::*;
pub use case::*;
pub use client::*;
pub use common::*;
pub use config::*;

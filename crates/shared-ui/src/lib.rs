//! Component kit shared by the case-desk pages. Each component carries its own stylesheet.

pub mod components;

pub use components::*;

//! Core types for contact-list
//!
//! Domain types, validation, and outcome messages shared across all other crates.

mod constants;
mod contact;
mod env_config;
mod outcome;
mod validation;

pub use constants::*;
pub use contact::*;
pub use env_config::*;
pub use outcome::*;
pub use validation::*;

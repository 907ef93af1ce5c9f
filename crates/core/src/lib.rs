//! Core types for sqlscout
//!
//! This crate contains domain types shared across all other crates.

mod conversation;
mod document;
mod env_config;
mod outcome;

pub use conversation::*;
pub use document::*;
pub use env_config::*;
pub use outcome::*;

//! Shared types used across the domain and infrastructure crates.

pub mod types;

pub use types::EntityId;

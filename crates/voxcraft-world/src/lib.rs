//! Authoritative block store and session world generation.
#![forbid(unsafe_code)]

pub mod store;
pub mod worldgen;

pub use store::{EditError, WorldStore};
pub use worldgen::{WorldGenConfig, generate};

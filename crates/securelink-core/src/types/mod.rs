//! Shared types used across SecureLink crates.

pub mod pagination;

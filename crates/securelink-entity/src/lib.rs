//! # securelink-entity
//!
//! Domain entity models for SecureLink. The sole entity is [`link::Link`],
//! a named, owned, tokenized reference to a destination URL, optionally
//! gated behind a shared secret. Entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod link;

pub use link::{CreateLink, Link, LinkPatch};

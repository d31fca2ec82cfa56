//! Public resolution surface.

pub mod service;

pub use service::{Resolution, ResolveService, SecretCheck};

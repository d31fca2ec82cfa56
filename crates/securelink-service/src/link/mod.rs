//! Owner management surface.

pub mod service;

pub use service::{CreateLinkRequest, LinkService, UpdateLinkRequest};

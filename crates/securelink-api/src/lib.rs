//! # securelink-api
//!
//! HTTP API layer for SecureLink built on Axum.
//!
//! Provides the owner management endpoints, the public resolution
//! endpoints, extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

//! HTTP request handlers.

pub mod health;
pub mod link;
pub mod resolve;

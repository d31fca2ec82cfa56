//! Request DTOs for the HTTP API.

pub mod request;

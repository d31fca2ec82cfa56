//! # securelink-service
//!
//! Business logic for SecureLink. Two surfaces sit on top of the link
//! store: the authenticated owner management surface ([`LinkService`])
//! and the unauthenticated public resolution surface ([`ResolveService`]).
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Identity is never ambient:
//! every owner-side call takes an explicit [`RequestContext`].

pub mod context;
pub mod link;
pub mod resolve;

pub use context::RequestContext;
pub use link::LinkService;
pub use resolve::ResolveService;

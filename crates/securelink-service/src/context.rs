//! Request context carrying the authenticated owner identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted at the HTTP boundary and passed into every owner-side
/// service method, so each operation knows *who* is acting without any
/// shared mutable identity state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated owner's ID, as issued by the identity provider.
    pub owner_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            owner_id,
            request_time: Utc::now(),
        }
    }
}

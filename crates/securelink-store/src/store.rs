//! The `LinkStore` trait, the seam between surfaces and persistence.

use async_trait::async_trait;
use uuid::Uuid;

use securelink_core::result::AppResult;
use securelink_core::types::pagination::{PageRequest, PageResponse};
use securelink_entity::link::{CreateLink, Link, LinkPatch};

/// Durable mapping from id/token to link rows.
///
/// Ownership is enforced here, not in callers: `update` and `delete`
/// verify the row's owner against the caller's identity so no surface
/// can bypass the check.
#[async_trait]
pub trait LinkStore: Send + Sync + std::fmt::Debug {
    /// Persists a new link. Assigns the id, generates a collision-checked
    /// unique token, stamps timestamps, and starts the view count at zero.
    ///
    /// Fails with `Validation` if the name is empty or a URL is malformed.
    async fn insert(&self, data: CreateLink) -> AppResult<Link>;

    /// Looks up a link by its public resolution token.
    ///
    /// Fails with `NotFound` for unknown tokens; deleted and never-created
    /// tokens are indistinguishable.
    async fn get_by_token(&self, token: &str) -> AppResult<Link>;

    /// Lists an owner's links, newest-created first. Each call re-reads
    /// current state.
    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Link>>;

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// Fails with `NotFound` if no row matches the id, `Forbidden` if the
    /// row belongs to a different owner, `Validation` on malformed fields.
    async fn update(&self, id: Uuid, owner_id: Uuid, patch: LinkPatch) -> AppResult<Link>;

    /// Hard-deletes a link. Same `NotFound`/`Forbidden` semantics as
    /// `update`; deleting an absent row is an error, never a silent no-op.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<()>;

    /// Atomically increments the view counter for the row matching
    /// `token` and returns the new count. Safe under concurrent public
    /// resolutions of the same token.
    async fn increment_view(&self, token: &str) -> AppResult<i64>;
}

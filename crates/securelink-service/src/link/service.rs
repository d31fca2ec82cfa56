//! Link CRUD service: the owner management surface.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use securelink_core::error::AppError;
use securelink_core::types::pagination::{PageRequest, PageResponse};
use securelink_entity::link::{CreateLink, Link, LinkPatch};
use securelink_store::LinkStore;

use crate::context::RequestContext;

/// Manages link creation, listing, update, and deletion, scoped to the
/// authenticated owner. Ownership checks themselves live in the store.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Link store.
    store: Arc<dyn LinkStore>,
}

/// Request to create a new link.
///
/// Only the four owner-editable fields exist here; owner, token, view
/// count, and timestamps are server-assigned and cannot be supplied.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateLinkRequest {
    /// Display name.
    pub name: String,
    /// Destination URL.
    pub destination_url: String,
    /// Thumbnail URL (optional).
    pub thumbnail_url: Option<String>,
    /// Plaintext secret gating resolution (optional).
    pub secret: Option<String>,
}

/// Request to update an existing link.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateLinkRequest {
    /// Update the display name.
    pub name: Option<String>,
    /// Update the destination URL.
    pub destination_url: Option<String>,
    /// Update or clear the thumbnail URL.
    pub thumbnail_url: Option<Option<String>>,
    /// Update or remove the secret.
    pub secret: Option<Option<String>>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates a new link owned by the calling identity.
    pub async fn create_link(
        &self,
        ctx: &RequestContext,
        req: CreateLinkRequest,
    ) -> Result<Link, AppError> {
        let data = CreateLink {
            owner_id: ctx.owner_id,
            name: req.name,
            destination_url: req.destination_url,
            // The original form submits empty strings for untouched
            // optional fields; normalize them to absent.
            thumbnail_url: req.thumbnail_url.filter(|s| !s.is_empty()),
            secret: req.secret.filter(|s| !s.is_empty()),
        };

        let link = self.store.insert(data).await?;

        info!(
            owner_id = %ctx.owner_id,
            link_id = %link.id,
            gated = link.requires_secret(),
            "Link created"
        );

        Ok(link)
    }

    /// Lists links created by the current owner, newest first.
    pub async fn list_links(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Link>, AppError> {
        self.store.list_by_owner(ctx.owner_id, &page).await
    }

    /// Updates a link. Only name, destination, thumbnail, and secret are
    /// patchable; anything else in the request simply has no field to
    /// land in.
    pub async fn update_link(
        &self,
        ctx: &RequestContext,
        link_id: Uuid,
        req: UpdateLinkRequest,
    ) -> Result<Link, AppError> {
        // Empty strings from the form mean "clear", same as on create.
        let patch = LinkPatch {
            name: req.name,
            destination_url: req.destination_url,
            thumbnail_url: req.thumbnail_url.map(|t| t.filter(|s| !s.is_empty())),
            secret: req.secret.map(|s| s.filter(|s| !s.is_empty())),
        };

        let link = self.store.update(link_id, ctx.owner_id, patch).await?;

        info!(
            owner_id = %ctx.owner_id,
            link_id = %link_id,
            "Link updated"
        );

        Ok(link)
    }

    /// Hard-deletes a link owned by the calling identity.
    pub async fn delete_link(&self, ctx: &RequestContext, link_id: Uuid) -> Result<(), AppError> {
        self.store.delete(link_id, ctx.owner_id).await?;

        info!(
            owner_id = %ctx.owner_id,
            link_id = %link_id,
            "Link deleted"
        );

        Ok(())
    }
}

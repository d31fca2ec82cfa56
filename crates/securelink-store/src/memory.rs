//! In-memory implementation of the link store.
//!
//! Used by the test suite. Behavior mirrors
//! [`crate::postgres::PgLinkStore`], including the ownership checks and
//! the atomicity of the view counter (here provided by the write lock).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use securelink_core::error::AppError;
use securelink_core::result::AppResult;
use securelink_core::types::pagination::{PageRequest, PageResponse};
use securelink_entity::link::model::validate_fields;
use securelink_entity::link::{CreateLink, Link, LinkPatch};

use crate::store::LinkStore;
use crate::token;

/// Link store backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<Uuid, Link>>,
}

impl MemoryLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, data: CreateLink) -> AppResult<Link> {
        data.validate()?;

        let mut links = self.links.write().await;

        let mut token = token::generate();
        while links.values().any(|l| l.token == token) {
            token = token::generate();
        }

        let now = Utc::now();
        let link = Link {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            name: data.name,
            destination_url: data.destination_url,
            thumbnail_url: data.thumbnail_url,
            secret: data.secret,
            token,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };

        links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn get_by_token(&self, token: &str) -> AppResult<Link> {
        self.links
            .read()
            .await
            .values()
            .find(|l| l.token == token)
            .cloned()
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Link>> {
        let links = self.links.read().await;

        let mut owned: Vec<Link> = links
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn update(&self, id: Uuid, owner_id: Uuid, patch: LinkPatch) -> AppResult<Link> {
        let mut links = self.links.write().await;

        let link = links
            .get(&id)
            .ok_or_else(|| AppError::not_found("Link not found"))?;
        if link.owner_id != owner_id {
            return Err(AppError::forbidden("You can only update your own links"));
        }

        let mut updated = link.clone();
        patch.apply(&mut updated);
        validate_fields(
            &updated.name,
            &updated.destination_url,
            updated.thumbnail_url.as_deref(),
        )?;
        updated.updated_at = Utc::now();

        links.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        let mut links = self.links.write().await;

        let link = links
            .get(&id)
            .ok_or_else(|| AppError::not_found("Link not found"))?;
        if link.owner_id != owner_id {
            return Err(AppError::forbidden("You can only delete your own links"));
        }

        links.remove(&id);
        Ok(())
    }

    async fn increment_view(&self, token: &str) -> AppResult<i64> {
        let mut links = self.links.write().await;

        let link = links
            .values_mut()
            .find(|l| l.token == token)
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        link.view_count += 1;
        link.updated_at = Utc::now();
        Ok(link.view_count)
    }
}

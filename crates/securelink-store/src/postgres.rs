//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use securelink_core::error::{AppError, ErrorKind};
use securelink_core::result::AppResult;
use securelink_core::types::pagination::{PageRequest, PageResponse};
use securelink_entity::link::model::validate_fields;
use securelink_entity::link::{CreateLink, Link, LinkPatch};

use crate::store::LinkStore;
use crate::token;

/// How many token collisions to tolerate before giving up. A collision on
/// 96 bits of entropy is astronomically unlikely, so more than one retry
/// in a row points at something badly wrong.
const MAX_TOKEN_ATTEMPTS: u32 = 4;

/// Link store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgLinkStore {
    pool: PgPool,
}

impl PgLinkStore {
    /// Create a new store over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Link>> {
        sqlx::query_as::<_, Link>("SELECT * FROM links WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find link", e))
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert(&self, data: CreateLink) -> AppResult<Link> {
        data.validate()?;

        // The token column carries a unique index; retry generation on the
        // (astronomically unlikely) collision instead of pre-checking.
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let token = token::generate();
            let result = sqlx::query_as::<_, Link>(
                "INSERT INTO links (owner_id, name, destination_url, thumbnail_url, secret, token) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
            )
            .bind(data.owner_id)
            .bind(&data.name)
            .bind(&data.destination_url)
            .bind(&data.thumbnail_url)
            .bind(&data.secret)
            .bind(&token)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(link) => return Ok(link),
                Err(e) if is_unique_violation(&e) => continue,
                Err(e) => {
                    return Err(AppError::with_source(
                        ErrorKind::Database,
                        "Failed to create link",
                        e,
                    ));
                }
            }
        }

        Err(AppError::conflict("Exhausted link token generation attempts"))
    }

    async fn get_by_token(&self, token: &str) -> AppResult<Link> {
        sqlx::query_as::<_, Link>("SELECT * FROM links WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find link by token", e)
            })?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Link>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count links", e))?;

        let links = sqlx::query_as::<_, Link>(
            "SELECT * FROM links WHERE owner_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(owner_id)
        .bind(page.limit() as i64)
        // An absurd page number must produce an empty page, not a
        // negative OFFSET from a wrapping cast.
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list links", e))?;

        Ok(PageResponse::new(
            links,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn update(&self, id: Uuid, owner_id: Uuid, patch: LinkPatch) -> AppResult<Link> {
        let mut link = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        if link.owner_id != owner_id {
            return Err(AppError::forbidden("You can only update your own links"));
        }

        patch.apply(&mut link);
        validate_fields(
            &link.name,
            &link.destination_url,
            link.thumbnail_url.as_deref(),
        )?;

        sqlx::query_as::<_, Link>(
            "UPDATE links SET name = $1, destination_url = $2, thumbnail_url = $3, secret = $4, \
             updated_at = NOW() WHERE id = $5 RETURNING *",
        )
        .bind(&link.name)
        .bind(&link.destination_url)
        .bind(&link.thumbnail_url)
        .bind(&link.secret)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update link", e))
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        let row_owner: Option<Uuid> = sqlx::query_scalar("SELECT owner_id FROM links WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find link", e))?;

        match row_owner {
            None => Err(AppError::not_found("Link not found")),
            Some(row_owner) if row_owner != owner_id => {
                Err(AppError::forbidden("You can only delete your own links"))
            }
            Some(_) => {
                sqlx::query("DELETE FROM links WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to delete link", e)
                    })?;
                Ok(())
            }
        }
    }

    async fn increment_view(&self, token: &str) -> AppResult<i64> {
        // Single-statement increment; a read-then-write here would lose
        // updates under concurrent resolutions of the same token.
        let row: Option<(i64,)> = sqlx::query_as(
            "UPDATE links SET view_count = view_count + 1, updated_at = NOW() \
             WHERE token = $1 RETURNING view_count",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to increment views", e))?;

        row.map(|(count,)| count)
            .ok_or_else(|| AppError::not_found("Link not found"))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

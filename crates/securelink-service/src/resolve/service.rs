//! Token resolution and secret verification: the public surface.
//!
//! A resolution session lives entirely in the caller: the server holds no
//! state between the initial fetch and a later secret submission. Each
//! call here is one complete step of the session's state machine.

use std::sync::Arc;

use tracing::debug;

use securelink_core::error::AppError;
use securelink_entity::link::Link;
use securelink_store::LinkStore;

/// Handles unauthenticated link resolution.
#[derive(Debug, Clone)]
pub struct ResolveService {
    /// Link store.
    store: Arc<dyn LinkStore>,
}

/// Metadata released for a token lookup.
///
/// The destination is withheld while the link is gated; everything else
/// (name, thumbnail, view count) is public before the secret is entered.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Display name of the link.
    pub name: String,
    /// Thumbnail URL, if any.
    pub thumbnail_url: Option<String>,
    /// Whether the caller must verify a secret before disclosure.
    pub requires_secret: bool,
    /// Current view count.
    pub view_count: i64,
    /// The destination, present only when disclosure happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_url: Option<String>,
}

/// Outcome of a secret verification attempt.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SecretCheck {
    /// Whether the candidate matched.
    pub ok: bool,
    /// The destination, released on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_url: Option<String>,
    /// View count after the disclosure, on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,
}

impl ResolveService {
    /// Creates a new resolve service.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Resolves a token to link metadata.
    ///
    /// An ungated link is disclosed immediately and the view counter
    /// incremented; a gated link comes back with the destination withheld
    /// and no side effect. Unknown tokens fail with `NotFound`, without
    /// distinguishing "never existed" from "deleted".
    pub async fn resolve(&self, token: &str) -> Result<Resolution, AppError> {
        let link = self.store.get_by_token(token).await?;

        if link.requires_secret() {
            debug!(token, "Resolved gated link, destination withheld");
            return Ok(Resolution {
                name: link.name,
                thumbnail_url: link.thumbnail_url,
                requires_secret: true,
                view_count: link.view_count,
                destination_url: None,
            });
        }

        let view_count = self.store.increment_view(token).await?;
        debug!(token, view_count, "Disclosed ungated link");

        Ok(Resolution {
            name: link.name,
            thumbnail_url: link.thumbnail_url,
            requires_secret: false,
            view_count,
            destination_url: Some(link.destination_url),
        })
    }

    /// Verifies a candidate secret against the stored one.
    ///
    /// Comparison is exact plaintext equality, preserved from the source
    /// system; there is no attempt limit. A match discloses the
    /// destination and counts the view exactly once per successful call.
    /// A mismatch is a recoverable outcome, not an error.
    pub async fn check_secret(
        &self,
        token: &str,
        candidate: &str,
    ) -> Result<SecretCheck, AppError> {
        let link = self.store.get_by_token(token).await?;

        if !secret_matches(&link, candidate) {
            debug!(token, "Secret mismatch");
            return Ok(SecretCheck {
                ok: false,
                destination_url: None,
                view_count: None,
            });
        }

        let view_count = self.store.increment_view(token).await?;
        debug!(token, view_count, "Secret verified, link disclosed");

        Ok(SecretCheck {
            ok: true,
            destination_url: Some(link.destination_url),
            view_count: Some(view_count),
        })
    }
}

/// A link without a secret verifies trivially; there is nothing to mismatch.
fn secret_matches(link: &Link, candidate: &str) -> bool {
    match &link.secret {
        Some(secret) => secret == candidate,
        None => true,
    }
}

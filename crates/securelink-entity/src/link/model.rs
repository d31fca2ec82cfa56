//! Link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::ValidateUrl;

use securelink_core::error::AppError;

/// A named, owned reference to a destination URL, resolvable by token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Link {
    /// Unique link identifier.
    pub id: Uuid,
    /// The identity that created the link. Immutable after creation.
    pub owner_id: Uuid,
    /// Display name of the link.
    pub name: String,
    /// The destination this link resolves to.
    pub destination_url: String,
    /// Optional thumbnail image URL shown on the resolution page.
    pub thumbnail_url: Option<String>,
    /// Shared secret gating resolution. Stored in plaintext; presence
    /// toggles gating. Never serialized in API responses.
    #[serde(skip_serializing)]
    pub secret: Option<String>,
    /// Public resolution key. Unique, server-generated, immutable.
    pub token: String,
    /// Number of successful disclosures. Monotonically non-decreasing.
    pub view_count: i64,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// When the link was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Whether resolution requires a secret match before disclosure.
    pub fn requires_secret(&self) -> bool {
        self.secret.is_some()
    }
}

/// Data required to create a new link. The store assigns id, token,
/// view count, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLink {
    /// The identity creating the link.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Destination URL.
    pub destination_url: String,
    /// Optional thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Optional plaintext secret.
    pub secret: Option<String>,
}

impl CreateLink {
    /// Validates the caller-supplied fields.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_fields(
            &self.name,
            &self.destination_url,
            self.thumbnail_url.as_deref(),
        )
    }
}

/// A partial update of a link's mutable fields.
///
/// Outer `None` means "leave unchanged"; for thumbnail and secret the
/// inner `None` means "clear the field". Owner, token, view count, and
/// timestamps are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPatch {
    /// New display name.
    pub name: Option<String>,
    /// New destination URL.
    pub destination_url: Option<String>,
    /// New thumbnail URL, or `Some(None)` to clear it.
    pub thumbnail_url: Option<Option<String>>,
    /// New secret, or `Some(None)` to remove gating.
    pub secret: Option<Option<String>>,
}

impl LinkPatch {
    /// Applies the patch onto a link row, leaving absent fields untouched.
    pub fn apply(&self, link: &mut Link) {
        if let Some(name) = &self.name {
            link.name = name.clone();
        }
        if let Some(destination) = &self.destination_url {
            link.destination_url = destination.clone();
        }
        if let Some(thumbnail) = &self.thumbnail_url {
            link.thumbnail_url = thumbnail.clone();
        }
        if let Some(secret) = &self.secret {
            link.secret = secret.clone();
        }
    }
}

/// Validates the owner-editable fields shared by insert and update.
pub fn validate_fields(
    name: &str,
    destination_url: &str,
    thumbnail_url: Option<&str>,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }
    if !destination_url.validate_url() {
        return Err(AppError::validation(
            "destination_url must be a valid absolute URL",
        ));
    }
    if let Some(thumbnail) = thumbnail_url {
        if !thumbnail.validate_url() {
            return Err(AppError::validation(
                "thumbnail_url must be a valid absolute URL",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use securelink_core::error::ErrorKind;

    fn create(name: &str, destination: &str) -> CreateLink {
        CreateLink {
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            destination_url: destination.to_string(),
            thumbnail_url: None,
            secret: None,
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = create("  ", "https://example.com").validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_rejects_relative_destination() {
        let err = create("Docs", "/relative/path").validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(create("Docs", "not a url").validate().is_err());
    }

    #[test]
    fn test_accepts_absolute_destination() {
        assert!(create("Docs", "https://example.com/page?q=1").validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_thumbnail() {
        let mut req = create("Docs", "https://example.com");
        req.thumbnail_url = Some("thumb.png".to_string());
        assert!(req.validate().is_err());
        req.thumbnail_url = Some("https://example.com/thumb.png".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut link = Link {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Docs".to_string(),
            destination_url: "https://example.com".to_string(),
            thumbnail_url: Some("https://example.com/a.png".to_string()),
            secret: Some("abc".to_string()),
            token: "tok".to_string(),
            view_count: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let patch = LinkPatch {
            name: Some("Wiki".to_string()),
            destination_url: None,
            thumbnail_url: None,
            secret: Some(None),
        };
        patch.apply(&mut link);

        assert_eq!(link.name, "Wiki");
        assert_eq!(link.destination_url, "https://example.com");
        assert_eq!(link.thumbnail_url.as_deref(), Some("https://example.com/a.png"));
        assert!(link.secret.is_none());
        assert_eq!(link.view_count, 3);
    }

    #[test]
    fn test_secret_is_never_serialized() {
        let link = Link {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Docs".to_string(),
            destination_url: "https://example.com".to_string(),
            thumbnail_url: None,
            secret: Some("hunter2".to_string()),
            token: "tok".to_string(),
            view_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&link).unwrap();
        assert!(json.get("secret").is_none());
    }
}

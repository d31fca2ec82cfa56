//! Request body shapes.

use serde::{Deserialize, Serialize};

/// POST /api/links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    /// Display name of the link.
    pub name: String,
    /// Destination URL.
    pub destination_url: String,
    /// Thumbnail URL (optional).
    pub thumbnail_url: Option<String>,
    /// Plaintext secret gating resolution (optional).
    pub secret: Option<String>,
}

/// PUT /api/links/{id}
///
/// Absent fields are left unchanged; an explicit `null` clears the
/// thumbnail or removes the secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLinkRequest {
    /// New display name.
    pub name: Option<String>,
    /// New destination URL.
    pub destination_url: Option<String>,
    /// New thumbnail URL, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    pub thumbnail_url: Option<Option<String>>,
    /// New secret, or `null` to remove gating.
    #[serde(default, deserialize_with = "double_option")]
    pub secret: Option<Option<String>>,
}

/// POST /api/l/{token}/verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifySecretRequest {
    /// Candidate secret supplied by the resolving caller.
    pub secret: String,
}

/// Distinguishes an absent field (outer `None`, leave unchanged) from an
/// explicit `null` (inner `None`, clear the field).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

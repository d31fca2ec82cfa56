//! Identity provider configuration.
//!
//! SecureLink does not issue credentials itself; it validates bearer
//! tokens minted by an external identity provider sharing this secret.

use serde::{Deserialize, Serialize};

/// JWT validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity provider.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes (used when minting tokens in tests).
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    // Overridden in any real deployment via SECURELINK__AUTH__JWT_SECRET.
    "development-secret-change-me".to_string()
}

fn default_access_ttl() -> u64 {
    60
}

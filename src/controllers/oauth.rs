// Persisted YouTube Music OAuth session
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CatalogError;

/// Refresh this long before the catalog would reject the token.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: i64,
    #[serde(default)]
    pub scope: String,
    /// Fields written by other tools, kept so a rewrite does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Body of a successful refresh_token grant.
#[derive(Debug, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
    pub expires_in: i64,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}

impl OAuthToken {
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| token_file_error(path, e))?;
        serde_json::from_str(&raw).map_err(|e| token_file_error(path, e))
    }

    pub async fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let raw = serde_json::to_string_pretty(self).map_err(|e| token_file_error(path, e))?;
        tokio::fs::write(path, raw)
            .await
            .map_err(|e| token_file_error(path, e))
    }

    pub fn is_expiring(&self, now: i64) -> bool {
        self.expires_at.saturating_sub(now) < EXPIRY_MARGIN_SECS
    }

    pub fn merge_refresh(&mut self, refreshed: RefreshedToken, now: i64) {
        self.access_token = refreshed.access_token;
        self.expires_in = refreshed.expires_in;
        self.expires_at = now.saturating_add(refreshed.expires_in);
        // Google only returns a refresh token when it rotates it
        if let Some(refresh_token) = refreshed.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
        if let Some(token_type) = refreshed.token_type {
            self.token_type = token_type;
        }
        if let Some(scope) = refreshed.scope {
            self.scope = scope;
        }
    }

    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

fn token_file_error(path: &Path, e: impl std::fmt::Display) -> CatalogError {
    CatalogError::TokenFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

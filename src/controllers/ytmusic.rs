// YouTube Music catalog client
use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::controllers::catalog::CatalogService;
use crate::controllers::oauth::{OAuthToken, RefreshedToken};
use crate::controllers::parser::parse_search_results;
use crate::errors::CatalogError;
use crate::models::search::{CatalogResult, SearchFilter};
use crate::secrets::SecretManager;

const YTMUSIC_ORIGIN: &str = "https://music.youtube.com";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

#[derive(Clone)]
pub struct YTMusicConfig {
    pub api_url: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub oauth_file: PathBuf,
}

impl YTMusicConfig {
    pub fn from_secrets(secrets: &SecretManager) -> Self {
        Self {
            api_url: secrets.get("YTMUSIC_API_URL"),
            token_url: secrets.get("OAUTH_TOKEN_URL"),
            client_id: secrets.get("CLIENT_ID"),
            client_secret: secrets.get("CLIENT_SECRET"),
            oauth_file: PathBuf::from(secrets.get("OAUTH_FILE")),
        }
    }
}

impl fmt::Debug for YTMusicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YTMusicConfig")
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("oauth_file", &self.oauth_file)
            .finish()
    }
}

pub struct YTMusicClient {
    client: Client,
    config: YTMusicConfig,
    token: RwLock<OAuthToken>,
}

// The session token stays out of debug output
impl fmt::Debug for YTMusicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YTMusicClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl YTMusicClient {
    pub fn new(config: YTMusicConfig, token: OAuthToken) -> Self {
        Self {
            client: Client::new(),
            config,
            token: RwLock::new(token),
        }
    }

    /// Reads the token file and builds the long-lived client.
    pub async fn connect(config: YTMusicConfig) -> Result<Self, CatalogError> {
        let token = OAuthToken::load(&config.oauth_file).await?;
        info!("Loaded YouTube Music session from {}", config.oauth_file.display());
        Ok(Self::new(config, token))
    }

    /// Current `Authorization` header value, refreshing the session first if
    /// it is about to expire.
    async fn authorization(&self) -> Result<String, CatalogError> {
        let now = Utc::now().timestamp();
        {
            let token = self.token.read().await;
            if !token.is_expiring(now) {
                return Ok(token.authorization());
            }
        }

        let mut token = self.token.write().await;
        // Another request may have refreshed while we waited for the lock
        if token.is_expiring(now) {
            self.refresh(&mut token, now).await?;
        }
        Ok(token.authorization())
    }

    async fn refresh(&self, token: &mut OAuthToken, now: i64) -> Result<(), CatalogError> {
        let refresh_token = token
            .refresh_token
            .clone()
            .ok_or_else(|| CatalogError::Auth("No refresh token available".to_string()))?;

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("YouTube Music token refresh failed: {}", error_text);
            return Err(CatalogError::Auth(format!("Token refresh failed: {}", error_text)));
        }

        let refreshed: RefreshedToken = response.json().await?;
        token.merge_refresh(refreshed, now);
        info!("Refreshed YouTube Music access token");

        if let Err(e) = token.save(&self.config.oauth_file).await {
            warn!("Could not persist refreshed token: {}", e);
        }
        Ok(())
    }

    fn search_body(query: &str, filter: Option<SearchFilter>) -> Value {
        let mut body = json!({
            "context": {
                "client": {
                    "clientName": "WEB_REMIX",
                    "clientVersion": format!("1.{}.01.00", Utc::now().format("%Y%m%d")),
                    "hl": "en"
                },
                "user": {}
            },
            "query": query
        });
        if let Some(filter) = filter {
            body["params"] = Value::String(filter.params());
        }
        body
    }
}

#[async_trait]
impl CatalogService for YTMusicClient {
    async fn search(
        &self,
        query: &str,
        filter: Option<SearchFilter>,
    ) -> Result<Vec<CatalogResult>, CatalogError> {
        let authorization = self.authorization().await?;

        let response = self
            .client
            .post(format!("{}/search", self.config.api_url))
            .query(&[("alt", "json")])
            .header("Authorization", authorization)
            .header("X-Goog-AuthUser", "0")
            .header("x-origin", YTMUSIC_ORIGIN)
            .header("User-Agent", USER_AGENT)
            .json(&Self::search_body(query, filter))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        let results = parse_search_results(&data);
        debug!("catalog returned {} results for {:?}", results.len(), query);
        Ok(results)
    }
}

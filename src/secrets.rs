// secrets
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use tracing::info;
pub static SECRET_MANAGER: Lazy<SecretManager> = Lazy::new(|| SecretManager::new());

enum MODE {
    DEV,
    PROD,
}

pub struct SecretManager {
    secrets: HashMap<String, String>,
}
impl SecretManager {
    fn new() -> Self {
        // A missing .env is normal outside local development
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut secrets: HashMap<String, String> = HashMap::new();
        let mode = match lookup("MODE") {
            Some(mode) if mode.to_lowercase() == "prod" => MODE::PROD,
            _ => MODE::DEV,
        };
        match mode {
            MODE::DEV => {
                secrets.insert(
                    "PORT".to_string(),
                    lookup("PORT").unwrap_or("8000".to_string()),
                );
                secrets.insert(
                    "BACKEND_URL".to_string(),
                    lookup("BACKEND_URL").unwrap_or("http://localhost:8000".to_string()),
                );
            }
            MODE::PROD => {
                secrets.insert(
                    "PORT".to_string(),
                    lookup("PORT").unwrap_or("8000".to_string()),
                );
                secrets.insert(
                    "BACKEND_URL".to_string(),
                    lookup("BACKEND_URL").unwrap_or_default(),
                );
            }
        }

        // OAuth client secrets used to refresh the YouTube Music session
        for key in ["CLIENT_ID", "CLIENT_SECRET"] {
            let value = lookup(key).unwrap_or_default();
            if value.is_empty() && matches!(mode, MODE::PROD) {
                panic!("{} must be set in production mode!", key);
            }
            secrets.insert(key.to_string(), value);
        }
        secrets.insert(
            "OAUTH_FILE".to_string(),
            lookup("OAUTH_FILE").unwrap_or("oauth.json".to_string()),
        );

        // YouTube Music
        secrets.insert(
            "YTMUSIC_API_URL".to_string(),
            lookup("YTMUSIC_API_URL")
                .unwrap_or("https://music.youtube.com/youtubei/v1".to_string()),
        );
        secrets.insert(
            "OAUTH_TOKEN_URL".to_string(),
            lookup("OAUTH_TOKEN_URL").unwrap_or("https://oauth2.googleapis.com/token".to_string()),
        );

        // Empty means any origin
        secrets.insert(
            "CORS_ALLOWED_ORIGINS".to_string(),
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
        );

        // Log which secrets are configured (NOT their values!)
        let mut configured: Vec<&str> = secrets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        configured.sort_unstable();
        info!("Secrets configured: {:?}", configured);

        SecretManager { secrets }
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(vars: &[(&str, &str)]) -> SecretManager {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SecretManager::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn dev_mode_fills_defaults() {
        let secrets = manager(&[]);
        assert_eq!(secrets.get("PORT"), "8000");
        assert_eq!(secrets.get("OAUTH_FILE"), "oauth.json");
        assert_eq!(
            secrets.get("YTMUSIC_API_URL"),
            "https://music.youtube.com/youtubei/v1"
        );
        assert_eq!(secrets.get("CLIENT_ID"), "");
        assert_eq!(secrets.get("CORS_ALLOWED_ORIGINS"), "");
    }

    #[test]
    fn environment_overrides_defaults() {
        let secrets = manager(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("OAUTH_FILE", "/etc/ytmusic/oauth.json"),
            ("PORT", "9000"),
        ]);
        assert_eq!(secrets.get("CLIENT_ID"), "id");
        assert_eq!(secrets.get("CLIENT_SECRET"), "secret");
        assert_eq!(secrets.get("OAUTH_FILE"), "/etc/ytmusic/oauth.json");
        assert_eq!(secrets.get("PORT"), "9000");
    }

    #[test]
    #[should_panic(expected = "CLIENT_ID must be set")]
    fn prod_mode_requires_client_credentials() {
        manager(&[("MODE", "prod")]);
    }

    #[test]
    fn prod_mode_keeps_default_port() {
        let secrets = manager(&[
            ("MODE", "prod"),
            ("CLIENT_ID", "a"),
            ("CLIENT_SECRET", "b"),
        ]);
        assert_eq!(secrets.get("PORT"), "8000");
        assert_eq!(secrets.get("CLIENT_ID"), "a");
        assert_eq!(secrets.get("BACKEND_URL"), "");
    }

    #[test]
    fn unknown_key_is_empty() {
        assert_eq!(manager(&[]).get("NOPE"), "");
    }
}

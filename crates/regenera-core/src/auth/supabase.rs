//! GoTrue (Supabase Auth) REST client

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

use super::{AuthEvent, AuthEvents, AuthSubscription, IdentityProvider, Session, SessionStore, User};
use crate::config::AuthConfig;
use crate::{Error, Result};

/// Token grant response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    expires_in: Option<i64>,
    /// Unix timestamp, preferred over `expires_in` when present
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => Utc.timestamp_opt(at, 0).single(),
            (None, Some(secs)) => Some(now + chrono::Duration::seconds(secs)),
            (None, None) => None,
        };
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Error payloads differ between endpoints and versions
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self, status: StatusCode) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| format!("request failed with status {}", status))
    }
}

/// Identity provider backed by a Supabase project
///
/// The session survives restarts in a [`SessionStore`]. An expired session
/// is refreshed with its refresh token when one is available, otherwise it
/// is treated as signed out.
pub struct SupabaseAuth {
    client: Client,
    base: Url,
    anon_key: String,
    store: SessionStore,
    current: RwLock<Option<Session>>,
    events: AuthEvents,
}

impl SupabaseAuth {
    pub fn new(config: &AuthConfig, session_path: PathBuf) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| Error::Config("auth.url is not set".to_string()))?;
        let anon_key = config
            .anon_key
            .clone()
            .ok_or_else(|| Error::Config("auth.anon_key is not set".to_string()))?;

        let base = Self::base_url(url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let store = SessionStore::new(session_path);
        let stored = match store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {}", store.path().display(), e);
                None
            }
        };

        Ok(Self {
            client,
            base,
            anon_key,
            store,
            current: RwLock::new(stored),
            events: AuthEvents::new(),
        })
    }

    /// `https://project.supabase.co` -> `https://project.supabase.co/auth/v1/`
    fn base_url(url: &str) -> Result<Url> {
        let root = format!("{}/", url.trim_end_matches('/'));
        Ok(Url::parse(&root)?.join("auth/v1/")?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn token_endpoint(&self, grant_type: &str) -> Result<Url> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", grant_type);
        Ok(url)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(Error::Auth(body.into_message(status)));
        }
        Ok(response.json().await?)
    }

    async fn store_session(&self, session: &Session) {
        if let Err(e) = self.store.save(session) {
            warn!("Failed to persist session: {}", e);
        }
        *self.current.write().await = Some(session.clone());
    }

    async fn forget_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to remove stored session: {}", e);
        }
        *self.current.write().await = None;
    }

    /// Sign in with email and password and persist the session
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .client
            .post(self.token_endpoint("password")?)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let token: TokenResponse = Self::parse(response).await?;
        let session = token.into_session(Utc::now());
        self.store_session(&session).await;

        info!("Signed in as {}", session.email());
        self.events.emit(AuthEvent::signed_in(session.clone()));
        Ok(session)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        let response = self
            .client
            .post(self.token_endpoint("refresh_token")?)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let token: TokenResponse = Self::parse(response).await?;
        let session = token.into_session(Utc::now());
        self.store_session(&session).await;

        debug!("Session refreshed for {}", session.email());
        self.events.emit(AuthEvent::token_refreshed(session.clone()));
        Ok(session)
    }

    /// Ask the backend who the current session belongs to
    pub async fn current_user(&self) -> Result<User> {
        let session = self.get_session().await?.ok_or(Error::NotSignedIn)?;
        let response = self
            .client
            .get(self.endpoint("user")?)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        Self::parse(response).await
    }
}

#[async_trait::async_trait]
impl IdentityProvider for SupabaseAuth {
    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.current.read().await.clone() else {
            return Ok(None);
        };
        if !session.is_expired(Utc::now()) {
            return Ok(Some(session));
        }

        match session.refresh_token.as_deref() {
            Some(refresh_token) => match self.refresh(refresh_token).await {
                Ok(session) => Ok(Some(session)),
                Err(e) => {
                    warn!("Session refresh failed: {}", e);
                    self.forget_session().await;
                    self.events.emit(AuthEvent::signed_out());
                    Ok(None)
                }
            },
            None => {
                debug!("Stored session expired");
                self.forget_session().await;
                Ok(None)
            }
        }
    }

    async fn sign_out(&self) -> Result<()> {
        let session = self.current.read().await.clone();

        if let Some(session) = session {
            let response = self
                .client
                .post(self.endpoint("logout")?)
                .header("apikey", &self.anon_key)
                .bearer_auth(&session.access_token)
                .send()
                .await?;

            let status = response.status();
            // A token the backend no longer knows is as good as signed out
            let already_gone = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND);
            if !status.is_success() && !already_gone {
                let body: ErrorBody = response.json().await.unwrap_or_default();
                return Err(Error::Auth(body.into_message(status)));
            }
            info!("Signed out {}", session.email());
        }

        self.forget_session().await;
        self.events.emit(AuthEvent::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> AuthSubscription {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> AuthConfig {
        AuthConfig {
            url: Some(url.to_string()),
            anon_key: Some("anon".to_string()),
            ..Default::default()
        }
    }

    fn temp_session_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("regenera-test-{}", uuid::Uuid::new_v4()))
            .join("session.json")
    }

    #[test]
    fn test_base_url() {
        for url in ["https://demo.supabase.co", "https://demo.supabase.co/"] {
            assert_eq!(
                SupabaseAuth::base_url(url).unwrap().as_str(),
                "https://demo.supabase.co/auth/v1/"
            );
        }
        assert_eq!(
            SupabaseAuth::base_url("http://localhost:54321/proxy").unwrap().as_str(),
            "http://localhost:54321/proxy/auth/v1/"
        );
        assert!(SupabaseAuth::base_url("not a url").is_err());
    }

    #[test]
    fn test_token_endpoint() {
        let auth = SupabaseAuth::new(&config("https://demo.supabase.co"), temp_session_path()).unwrap();
        assert_eq!(
            auth.token_endpoint("password").unwrap().as_str(),
            "https://demo.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            auth.endpoint("logout").unwrap().as_str(),
            "https://demo.supabase.co/auth/v1/logout"
        );
    }

    #[test]
    fn test_missing_config_is_rejected() {
        let err = SupabaseAuth::new(&AuthConfig::default(), temp_session_path()).err();
        assert!(matches!(err, Some(Error::Config(_))));
    }

    #[test]
    fn test_token_response_into_session() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "6f1c1f44-8d55-4c1e-9d6b-2a7f0f3f3c11", "email": "nova@aeonregenera.earth" }
        }"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        let now = Utc::now();
        let session = token.into_session(now);

        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(session.expires_at, Some(now + chrono::Duration::seconds(3600)));
        assert_eq!(session.email(), "nova@aeonregenera.earth");
    }

    #[test]
    fn test_absolute_expiry_wins() {
        let token = TokenResponse {
            access_token: "jwt".to_string(),
            refresh_token: None,
            expires_in: Some(10),
            expires_at: Some(1_900_000_000),
            user: User { id: uuid::Uuid::nil(), email: None },
        };
        let session = token.into_session(Utc::now());
        assert_eq!(session.expires_at.map(|at| at.timestamp()), Some(1_900_000_000));
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .unwrap();
        assert_eq!(body.into_message(StatusCode::BAD_REQUEST), "Invalid login credentials");

        let body: ErrorBody = serde_json::from_str(r#"{"code":429,"msg":"Too many requests"}"#).unwrap();
        assert_eq!(body.into_message(StatusCode::TOO_MANY_REQUESTS), "Too many requests");

        assert_eq!(
            ErrorBody::default().into_message(StatusCode::BAD_GATEWAY),
            "request failed with status 502 Bad Gateway"
        );
    }

    #[tokio::test]
    async fn test_no_stored_session() {
        let auth = SupabaseAuth::new(&config("https://demo.supabase.co"), temp_session_path()).unwrap();
        assert!(auth.get_session().await.unwrap().is_none());
        assert!(matches!(auth.current_user().await, Err(Error::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_expired_session_without_refresh_is_cleared() {
        let path = temp_session_path();
        let store = SessionStore::new(path.clone());
        let mut session = crate::auth::MemoryAuth::demo_session();
        session.expires_at = Some(Utc::now() - chrono::Duration::minutes(1));
        store.save(&session).unwrap();

        let auth = SupabaseAuth::new(&config("https://demo.supabase.co"), path.clone()).unwrap();
        assert!(auth.get_session().await.unwrap().is_none());
        assert!(store.load().unwrap().is_none());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}

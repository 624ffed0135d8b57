//! Sign-up and sign-in against Supabase's auth endpoints.
//!
//! Identity itself is the auth service's problem; this client only validates
//! credentials locally before the request goes out and extracts the user's
//! id and email from whatever shape the service answers with.

use serde::Deserialize;
use smartflow_core::{validate_email, validate_password, PasswordIssue};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error(transparent)]
    WeakPassword(#[from] PasswordIssue),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth service returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The authenticated account; `id` is the owner id every process row is
/// scoped by.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    /// Auth client for the given Supabase project URL (no trailing slash).
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Register a new account. Credentials are checked locally first so
    /// obviously bad input never leaves the machine.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !validate_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        validate_password(password)?;

        let url = format!("{}/auth/v1/signup", self.base_url);
        let user = self.request_user(&url, email, password).await?;
        info!(email = %user.email, "account registered");
        Ok(user)
    }

    /// Exchange credentials for the account they belong to.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !validate_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let user = self.request_user(&url, email, password).await?;
        info!(email = %user.email, "signed in");
        Ok(user)
    }

    async fn request_user(
        &self,
        url: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = resp.json().await?;
        Ok(extract_user(value)?)
    }
}

/// The signup endpoint answers with the user object itself, the token
/// endpoint nests it under `user`. Accept both.
fn extract_user(value: serde_json::Value) -> Result<User, serde_json::Error> {
    let user_value = match value.get("user") {
        Some(nested) if nested.is_object() => nested.clone(),
        _ => value,
    };
    serde_json::from_value(user_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_top_level_user() {
        let value = serde_json::json!({
            "id": "uid-1",
            "email": "anna@example.com",
            "role": "authenticated"
        });
        let user = extract_user(value).unwrap();
        assert_eq!(user.id, "uid-1");
        assert_eq!(user.email, "anna@example.com");
    }

    #[test]
    fn extracts_nested_session_user() {
        let value = serde_json::json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "user": { "id": "uid-2", "email": "jan@example.com" }
        });
        let user = extract_user(value).unwrap();
        assert_eq!(user.id, "uid-2");
    }

    #[tokio::test]
    async fn sign_up_rejects_bad_email_locally() {
        let client = AuthClient::new("http://127.0.0.1:9".into(), "key".into());
        let err = client.sign_up("not-an-email", "Password1!").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail));
    }

    #[tokio::test]
    async fn sign_up_rejects_weak_password_locally() {
        let client = AuthClient::new("http://127.0.0.1:9".into(), "key".into());
        let err = client
            .sign_up("anna@example.com", "password")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::WeakPassword(PasswordIssue::NoUppercase)
        ));
    }
}

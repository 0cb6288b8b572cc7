//! HTTP client for the portal backend.
//!
//! All communication with the backend REST API goes through here:
//! JSON serialization, bearer credentials, and normalization of every
//! failure into `ApiError`. Optional response fields are defaulted by
//! the typed models at this boundary, never per view.

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use std::time::Duration;

use crate::common::ApiError;
use crate::models::{
    AuthResponse, CheckoutRequest, ContentPage, Institution, Interest, Job, MatrimonyProfile,
    Member, MembershipPlan, NewsItem, PaymentInit, Person, RegistrationDraft,
};

#[derive(Serialize)]
struct Credentials<'a> {
    phone: &'a str,
    password: &'a str,
}

/// API client for the portal backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    admin_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, admin_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Credential for a request: an explicit session token wins;
    /// privileged `/admin/*` paths fall back to the configured admin
    /// token automatically.
    fn bearer_for<'a>(&'a self, endpoint: &str, token: Option<&'a str>) -> Option<&'a str> {
        token.or_else(|| {
            if endpoint.starts_with("/admin/") {
                self.admin_token.as_deref()
            } else {
                None
            }
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(self.url(endpoint));
        if let Some(bearer) = self.bearer_for(endpoint, token) {
            request = request.bearer_auth(bearer);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.client.post(self.url(endpoint)).json(body);
        if let Some(bearer) = self.bearer_for(endpoint, token) {
            request = request.bearer_auth(bearer);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status != StatusCode::NOT_FOUND {
                tracing::warn!(status = status.as_u16(), "backend request failed");
            }
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Sign in with phone and password.
    ///
    /// The portal presents one login form for two identity domains:
    /// the admin login is attempted first, and only a rejected-credential
    /// failure falls back to the member login with the same credentials.
    /// Any other failure aborts immediately.
    pub async fn login(&self, phone: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let creds = Credentials { phone, password };
        match self.post("/auth/admin/login", &creds, None).await {
            Ok(auth) => Ok(auth),
            Err(err) if err.is_invalid_credentials() => {
                tracing::debug!("admin login rejected, trying member login");
                self.post("/auth/login", &creds, None).await
            }
            Err(err) => Err(err),
        }
    }

    /// Identity of the session token. Never retried: a failed check is
    /// authoritative, not transient.
    pub async fn me(&self, token: &str) -> Result<Member, ApiError> {
        self.get("/auth/me", Some(token)).await
    }

    // ------------------------------------------------------------------
    // Public content
    // ------------------------------------------------------------------

    pub async fn people(&self) -> Result<Vec<Person>, ApiError> {
        self.get("/public/people", None).await
    }

    pub async fn person(&self, id: Uuid) -> Result<Person, ApiError> {
        self.get(&format!("/public/people/{id}"), None).await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.get("/public/news", None).await
    }

    pub async fn news_item(&self, slug: &str) -> Result<NewsItem, ApiError> {
        self.get(&format!("/public/news/{slug}"), None).await
    }

    pub async fn page(&self, slug: &str) -> Result<ContentPage, ApiError> {
        self.get(&format!("/public/pages/{slug}"), None).await
    }

    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get("/public/jobs", None).await
    }

    pub async fn institutions(&self) -> Result<Vec<Institution>, ApiError> {
        self.get("/public/institutions", None).await
    }

    // ------------------------------------------------------------------
    // Matrimony
    // ------------------------------------------------------------------

    pub async fn matrimony_profiles(&self) -> Result<Vec<MatrimonyProfile>, ApiError> {
        self.get("/public/matrimony", None).await
    }

    pub async fn matrimony_profile(&self, id: Uuid) -> Result<MatrimonyProfile, ApiError> {
        self.get(&format!("/public/matrimony/{id}"), None).await
    }

    pub async fn send_interest(&self, token: &str, profile_id: Uuid) -> Result<Interest, ApiError> {
        self.post(
            &format!("/public/matrimony/{profile_id}/interest"),
            &serde_json::json!({}),
            Some(token),
        )
        .await
    }

    /// All interests involving the signed-in member, sent and received.
    pub async fn interests(&self, token: &str) -> Result<Vec<Interest>, ApiError> {
        self.get("/public/interests", Some(token)).await
    }

    pub async fn accept_interest(&self, token: &str, id: Uuid) -> Result<Interest, ApiError> {
        self.post(
            &format!("/public/interests/{id}/accept"),
            &serde_json::json!({}),
            Some(token),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Membership & payments
    // ------------------------------------------------------------------

    pub async fn plans(&self) -> Result<Vec<MembershipPlan>, ApiError> {
        self.get("/public/plans", None).await
    }

    /// Start a gateway checkout for a plan. The caller performs a
    /// full-page redirect to the returned URL.
    pub async fn initiate_payment(
        &self,
        plan_id: Uuid,
        draft: &RegistrationDraft,
    ) -> Result<PaymentInit, ApiError> {
        self.post("/payments/initiate", &CheckoutRequest { plan_id, draft }, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_paths_get_the_configured_token_automatically() {
        let client = ApiClient::new("http://backend", Some("admin-secret".to_string()));

        assert_eq!(client.bearer_for("/admin/members", None), Some("admin-secret"));
        assert_eq!(client.bearer_for("/public/people", None), None);
    }

    #[test]
    fn explicit_session_token_wins_over_admin_token() {
        let client = ApiClient::new("http://backend", Some("admin-secret".to_string()));

        assert_eq!(
            client.bearer_for("/admin/members", Some("session-token")),
            Some("session-token")
        );
        assert_eq!(
            client.bearer_for("/auth/me", Some("session-token")),
            Some("session-token")
        );
    }

    #[test]
    fn admin_paths_without_a_configured_token_stay_anonymous() {
        let client = ApiClient::new("http://backend", None);

        assert_eq!(client.bearer_for("/admin/members", None), None);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://backend/", None);

        assert_eq!(client.url("/public/news"), "http://backend/public/news");
    }
}

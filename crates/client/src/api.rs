//! HTTP client for the marketplace API.
//!
//! Every call maps failures into [`AppError`]: non-2xx responses carry the
//! server's `error` message verbatim, anything that never produced a
//! readable response becomes `Transport`/`Decode`.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use shared_types::{
    AnalyticsSummary, ApiConfig, AppError, ClaimRequest, Listing, ListingDraft, LoginRequest,
    LoginResponse, MutationAck, NgoProfile, RegisterRequest, Role,
};

/// Thin wrapper over a shared `reqwest::Client` rooted at the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the raw status and body.
    async fn execute(&self, request: RequestBuilder) -> Result<(u16, String), AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request failed before a response arrived");
            AppError::transport(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, status, "Failed to read response body");
            AppError::transport(e.to_string())
        })?;
        Ok((status, body))
    }

    /// Send a request, reject non-2xx statuses, decode the body as `T`.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let (status, body) = self.execute(request).await?;
        if !(200..300).contains(&status) {
            let err = AppError::from_response_body(status, &body);
            tracing::warn!(status, message = %err.message, "API rejected request");
            return Err(err);
        }
        decode_body(&body)
    }

    // --- Auth ---

    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<MutationAck, AppError> {
        let ack = self
            .send_json(self.http.post(self.url("/register")).json(request))
            .await?;
        tracing::info!("Registration accepted");
        Ok(ack)
    }

    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let resp: LoginResponse = self
            .send_json(self.http.post(self.url("/login")).json(request))
            .await?;
        tracing::info!(role = %resp.role, "Login accepted");
        Ok(resp)
    }

    // --- Listings ---

    #[tracing::instrument(skip(self))]
    pub async fn list_listings(&self) -> Result<Vec<Listing>, AppError> {
        let listings: Vec<Listing> = self.send_json(self.http.get(self.url("/listings"))).await?;
        tracing::debug!(count = listings.len(), "Listings fetched");
        Ok(listings)
    }

    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_listing(&self, draft: &ListingDraft) -> Result<MutationAck, AppError> {
        self.send_json(self.http.post(self.url("/listings")).json(draft))
            .await
    }

    #[tracing::instrument(skip(self, draft))]
    pub async fn update_listing(&self, id: i64, draft: &ListingDraft) -> Result<MutationAck, AppError> {
        self.send_json(self.http.put(self.url(&format!("/listings/{id}"))).json(draft))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_listing(&self, id: i64) -> Result<MutationAck, AppError> {
        self.send_json(self.http.delete(self.url(&format!("/listings/{id}"))))
            .await
    }

    /// Claim a donation on behalf of `claimed_by`. Concurrent claims are
    /// settled by the server; a losing claim comes back as an HTTP error.
    #[tracing::instrument(skip(self))]
    pub async fn claim_listing(&self, id: i64, claimed_by: &str) -> Result<MutationAck, AppError> {
        let body = ClaimRequest {
            claimed_by: claimed_by.to_string(),
        };
        self.send_json(self.http.post(self.url(&format!("/claim/{id}"))).json(&body))
            .await
    }

    // --- Analytics ---

    #[tracing::instrument(skip(self))]
    pub async fn analytics(&self, role: Role, username: &str) -> Result<AnalyticsSummary, AppError> {
        let path = format!(
            "/analytics/{}/{}",
            role.as_str(),
            urlencoding::encode(username)
        );
        let request = self.http.get(self.url(&path));
        let summary = match role {
            Role::Farmer => AnalyticsSummary::Farmer(self.send_json(request).await?),
            Role::Buyer => AnalyticsSummary::Buyer(self.send_json(request).await?),
            Role::Ngo => AnalyticsSummary::Ngo(self.send_json(request).await?),
        };
        Ok(summary)
    }

    // --- NGO profile ---

    /// Look up an NGO profile. A 404 means "no profile yet", not an error.
    #[tracing::instrument(skip(self))]
    pub async fn ngo_profile(&self, ngo_id: &str) -> Result<Option<NgoProfile>, AppError> {
        let url = self.url(&format!("/ngo/profile?ngo_id={}", urlencoding::encode(ngo_id)));
        let (status, body) = self.execute(self.http.get(url)).await?;
        match status {
            404 => Ok(None),
            200..=299 => decode_body(&body).map(Some),
            _ => Err(AppError::from_response_body(status, &body)),
        }
    }

    #[tracing::instrument(skip(self, profile), fields(ngo_id = %profile.ngo_id))]
    pub async fn save_ngo_profile(&self, profile: &NgoProfile) -> Result<NgoProfile, AppError> {
        let (status, body) = self
            .execute(self.http.post(self.url("/ngo/profile")).json(profile))
            .await?;
        if !(200..300).contains(&status) {
            return Err(AppError::from_response_body(status, &body));
        }
        // Some deployments acknowledge with `{message}` only.
        Ok(serde_json::from_str(&body).unwrap_or_else(|_| profile.clone()))
    }
}

/// Decode a success body; an empty body decodes as `{}`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "Failed to decode response body");
        AppError::decode(e.to_string())
    })
}

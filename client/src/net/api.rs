//! REST client for the support backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call [`ApiClient`] methods from `spawn_local` tasks. Each call reads
//! the token store at send time: a present credential becomes an
//! `Authorization: Bearer` header, an absent one sends the request bare. The
//! client does not decode or validate the credential; the backend decides
//! what an unauthenticated or expired request may do.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers become [`ApiError::Status`] carrying the most specific
//! message the body offers (`detail`, then `detail[0].msg`, then `message`),
//! or the call's own fallback text. There is no retry, backoff or timeout.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::transport::{ApiRequest, ApiResponse, BrowserTransport, FormPart, Method, RequestBody, Transport, UploadFile};
use super::types::{
    ChatReply, ConversationDetail, ConversationList, ConversationSummary, DashboardData, MessageResponse,
    RegisterRequest, RegisterResponse, TokenResponse, UserProfile,
};
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// Agent name sent with batch analyses from the dashboard.
pub const DEFAULT_AGENT: &str = "default";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response: connection failure, CORS rejection or a non-browser build.
    #[error("network error: {0}")]
    Network(String),
    /// Success status but the body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for `Status` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
#[must_use]
pub fn error_message(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback.to_owned();
    };
    let detail = match value.get("detail") {
        Some(Value::String(text)) => Some(text.as_str()),
        Some(Value::Array(items)) => items.first().and_then(|item| item.get("msg")).and_then(Value::as_str),
        _ => None,
    };
    detail
        .or_else(|| value.get("message").and_then(Value::as_str))
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

#[derive(Clone, Debug)]
pub struct ApiClient<S, T> {
    base_url: String,
    store: S,
    transport: T,
}

/// Client used by the running application.
pub type BrowserApi = ApiClient<LocalStorageTokenStore, BrowserTransport>;

impl BrowserApi {
    #[must_use]
    pub fn browser(base_url: &str) -> Self {
        Self::new(base_url, LocalStorageTokenStore::new(), BrowserTransport)
    }
}

impl<S: TokenStore, T: Transport> ApiClient<S, T> {
    pub fn new(base_url: impl Into<String>, store: S, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, store, transport }
    }

    fn request(&self, method: Method, path: &str, body: RequestBody) -> ApiRequest {
        let mut headers = Vec::new();
        if matches!(body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(credential) = self.store.read() {
            headers.push(("Authorization".to_owned(), format!("Bearer {credential}")));
        }
        ApiRequest { method, url: format!("{}{path}", self.base_url), headers, body }
    }

    async fn send(&self, request: ApiRequest, fallback: &str) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await.inspect_err(|e| {
            leptos::logging::warn!("{} {url} failed: {e}", method.as_str());
        })?;
        if response.is_success() {
            return Ok(response);
        }
        let message = error_message(&response.body, fallback);
        leptos::logging::warn!("{} {url} returned {}: {message}", method.as_str(), response.status);
        Err(ApiError::Status { status: response.status, message })
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<R, ApiError> {
        let response = self.send(request, fallback).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    // =============================================================
    // Authentication
    // =============================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the credentials are rejected or the call fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = RequestBody::Json(json!({ "email": email, "password": password }));
        self.fetch(self.request(Method::Post, "/auth/login", body), "Login failed").await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when registration is refused or the call fails.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let body = RequestBody::Json(serde_json::to_value(registration)?);
        let response = self.send(self.request(Method::Post, "/auth/register", body), "Registration failed").await?;
        if response.body.trim().is_empty() {
            return Ok(RegisterResponse::default());
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// `POST /auth/google-login` with a Google Identity Services id token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the token is refused or the call fails.
    pub async fn google_login(&self, id_token: &str) -> Result<TokenResponse, ApiError> {
        let body = RequestBody::Json(json!({ "token": id_token }));
        self.fetch(self.request(Method::Post, "/auth/google-login", body), "Google sign-in failed").await
    }

    /// `GET /auth/profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.fetch(self.request(Method::Get, "/auth/profile", RequestBody::Empty), "Could not load profile").await
    }

    /// `POST /auth/profile/password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn update_password(&self, new_password: &str) -> Result<MessageResponse, ApiError> {
        let body = RequestBody::Json(json!({ "new_password": new_password }));
        self.fetch(self.request(Method::Post, "/auth/profile/password", body), "Could not update password").await
    }

    // =============================================================
    // Chat
    // =============================================================

    /// Ask the assistant. Signed-in callers use `/chatbot/chat` so the exchange
    /// is stored; anonymous callers use `/chatbot/chat-anonymous`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn chat(&self, question: &str, conversation_id: Option<&str>) -> Result<ChatReply, ApiError> {
        let body = RequestBody::Json(json!({ "question": question, "conversation_id": conversation_id }));
        let mut request = self.request(Method::Post, "/chatbot/chat", body);
        if request.header("Authorization").is_none() {
            request.url = format!("{}/chatbot/chat-anonymous", self.base_url);
        }
        self.fetch(request, "The assistant is unavailable").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        let request = self.request(Method::Get, "/chatbot/conversation", RequestBody::Empty);
        let list: ConversationList = self.fetch(request, "Could not load conversations").await?;
        Ok(list.conversations)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn conversation(&self, id: &str) -> Result<ConversationDetail, ApiError> {
        let request = self.request(Method::Get, &format!("/chatbot/conversation/{id}"), RequestBody::Empty);
        self.fetch(request, "Could not load conversation").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn rename_conversation(&self, id: &str, new_name: &str) -> Result<(), ApiError> {
        let body = RequestBody::Json(json!({ "new_name": new_name }));
        let request = self.request(Method::Patch, &format!("/chatbot/conversation/{id}"), body);
        self.send(request, "Could not rename conversation").await.map(drop)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn delete_conversation(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::Delete, &format!("/chatbot/conversation/{id}"), RequestBody::Empty);
        self.send(request, "Could not delete conversation").await.map(drop)
    }

    // =============================================================
    // Documents and analysis
    // =============================================================

    /// `POST /documents/upload` with one `file` part.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn upload_document(&self, file: UploadFile) -> Result<Value, ApiError> {
        let body = RequestBody::Multipart(vec![FormPart::file("file", file)]);
        self.fetch(self.request(Method::Post, "/documents/upload", body), "Upload failed").await
    }

    /// `POST /analyze/analyze` for a single conversation log.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn analyze(&self, file: UploadFile, agent: Option<&str>) -> Result<Value, ApiError> {
        let mut parts = vec![FormPart::file("file", file)];
        if let Some(agent) = agent.filter(|agent| !agent.is_empty()) {
            parts.push(FormPart::text("agent", agent));
        }
        let request = self.request(Method::Post, "/analyze/analyze", RequestBody::Multipart(parts));
        self.fetch(request, "Analysis failed").await
    }

    /// `POST /analyze/analyze/batch-upload`: one `files` part per log plus the agent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn analyze_batch(&self, files: Vec<UploadFile>, agent: &str) -> Result<Value, ApiError> {
        let mut parts: Vec<FormPart> = files.into_iter().map(|file| FormPart::file("files", file)).collect();
        parts.push(FormPart::text("agent", agent));
        let request = self.request(Method::Post, "/analyze/analyze/batch-upload", RequestBody::Multipart(parts));
        self.fetch(request, "Batch analysis failed").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        let request = self.request(Method::Get, "/analyze/dashboard", RequestBody::Empty);
        self.fetch(request, "Could not load dashboard").await
    }
}

use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiResponse, Comment, CommentRequest, LoginRequest, Post, PostRequest, User,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<BoardClient> = OnceCell::new();
}

/// Errors surfaced by the Board API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or decoding failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The body was not the envelope the call expects.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The backend answered with a non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The backend answered 2xx but flagged the envelope as unsuccessful.
    #[error("{message} ({code})")]
    Rejected { code: String, message: String },
    /// A successful envelope arrived without the payload the call returns.
    #[error("response did not include data")]
    MissingData,
}

impl ApiError {
    /// Whether the backend refused the credentials or the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Http(err) => err
                .status()
                .is_some_and(|status| is_auth_status(status.as_u16())),
            Self::Status { status, .. } => is_auth_status(*status),
            Self::Decode(_) | Self::Rejected { .. } | Self::MissingData => false,
        }
    }

    /// Message suitable for showing next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(err) if err.status().is_none() => "Unable to connect to server".to_string(),
            _ if self.is_unauthorized() => "Invalid credentials".to_string(),
            Self::Status { message, .. } | Self::Rejected { message, .. } => message.clone(),
            Self::Http(err) => format!("Request failed: {err}"),
            Self::Decode(_) | Self::MissingData => self.to_string(),
        }
    }
}

fn is_auth_status(status: u16) -> bool {
    status == StatusCode::UNAUTHORIZED.as_u16() || status == StatusCode::FORBIDDEN.as_u16()
}

/// The authentication seam the session store talks to.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a user snapshot carrying a bearer token.
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;

    /// Install (or drop) the bearer token sent with subsequent requests.
    fn authorize(&self, token: Option<&str>);
}

/// Lightweight API client for Board web interactions.
#[derive(Clone, Debug)]
pub struct BoardClient {
    base_url: String,
    client: Client,
    bearer_token: Arc<Mutex<Option<String>>>,
}

impl BoardClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            bearer_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The client shared by every component of the page.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::default();
                let origin = web_sys::window().and_then(|window| window.location().origin().ok());
                Self::new(&config.resolve_api_base(origin.as_deref()))
            })
            .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn current_token(&self) -> Option<String> {
        self.bearer_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.apply_bearer(request).send().await?;
        let envelope = read_envelope::<T>(response).await?;
        envelope.ok_or(ApiError::MissingData)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self.apply_bearer(request).send().await?;
        read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// List every post, newest first as ordered by the backend.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.fetch(self.client.get(self.api_url("posts"))).await
    }

    /// Fetch a single post with its comments.
    pub async fn get_post(&self, post_id: i64) -> Result<Post, ApiError> {
        self.fetch(self.client.get(self.api_url(&format!("posts/{post_id}"))))
            .await
    }

    pub async fn create_post(&self, request: &PostRequest) -> Result<Post, ApiError> {
        self.fetch(self.client.post(self.api_url("posts")).json(request))
            .await
    }

    pub async fn update_post(&self, post_id: i64, request: &PostRequest) -> Result<Post, ApiError> {
        self.fetch(
            self.client
                .put(self.api_url(&format!("posts/{post_id}")))
                .json(request),
        )
        .await
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<(), ApiError> {
        self.execute(self.client.delete(self.api_url(&format!("posts/{post_id}"))))
            .await
    }

    pub async fn create_comment(
        &self,
        post_id: i64,
        request: &CommentRequest,
    ) -> Result<Comment, ApiError> {
        self.fetch(
            self.client
                .post(self.api_url(&format!("posts/{post_id}/comments")))
                .json(request),
        )
        .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.execute(
            self.client
                .delete(self.api_url(&format!("posts/comments/{comment_id}"))),
        )
        .await
    }
}

#[async_trait(?Send)]
impl AuthApi for BoardClient {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(request).send().await?;
        let envelope = read_envelope::<User>(response).await?;
        envelope.ok_or(ApiError::MissingData)
    }

    fn authorize(&self, token: Option<&str>) {
        if let Ok(mut guard) = self.bearer_token.lock() {
            *guard = token.map(str::to_string);
        }
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(status_error(status, serde_json::from_slice(&body).ok()));
    }
    unwrap_envelope(decode_envelope::<T>(&body)?)
}

/// Parse a reply body as the backend envelope around `T`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<ApiResponse<T>, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Map a non-2xx reply to an error, preferring the backend's own message.
pub(crate) fn status_error(
    status: StatusCode,
    body: Option<ApiResponse<serde_json::Value>>,
) -> ApiError {
    let message = body
        .map(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Strip the envelope from a 2xx reply.
pub(crate) fn unwrap_envelope<T>(envelope: ApiResponse<T>) -> Result<Option<T>, ApiError> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(ApiError::Rejected {
            code: envelope.code,
            message: envelope.message,
        })
    }
}

//! HTTP client for the approval backend.
//!
//! # Responsibilities
//! - Build and send JSON requests with a fixed transport deadline
//! - Attach a request ID to every outgoing call
//! - Log requests and responses as structured tracing events
//! - Hand every failure to the classifier before it leaves this module
//!
//! # Design Decisions
//! - The 60s deadline exists because the hosted backend cold-starts; the
//!   deadline is transport-level, so `run` never blocks forever
//! - Endpoint methods return domain types, never raw responses

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{
    Approval, ApprovalDecision, NewWorkflow, StatusChange, Workflow, WorkflowList, WorkflowStatus,
};
use crate::config::schema::ApiConfig;

/// Typed client for the workflow approval REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// The base URL is parsed up front so a typo fails here rather than on
    /// the first request.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let parsed: Url = config.base_url.parse().map_err(|e| {
            ApiError::Unknown(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The configured API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Workflow endpoints

    pub async fn list_workflows(&self) -> ApiResult<Vec<Workflow>> {
        let list: WorkflowList = self.get("/workflows").await?;
        Ok(list.data)
    }

    pub async fn get_workflow(&self, id: &str) -> ApiResult<Workflow> {
        self.get(&format!("/workflows/{}", id)).await
    }

    pub async fn create_workflow(&self, new: &NewWorkflow) -> ApiResult<Workflow> {
        self.send_json(Method::POST, "/workflows", new).await
    }

    pub async fn update_status(&self, id: &str, status: WorkflowStatus) -> ApiResult<Workflow> {
        self.send_json(
            Method::PATCH,
            &format!("/workflows/{}/status", id),
            &StatusChange { status },
        )
        .await
    }

    pub async fn delete_workflow(&self, id: &str) -> ApiResult<()> {
        let path = format!("/workflows/{}", id);
        let resp = self.dispatch(self.request(Method::DELETE, &path), "DELETE", &path).await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.map_err(ApiError::from_transport)?;
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(())
    }

    // Approval endpoints

    pub async fn pending_approvals(&self) -> ApiResult<Vec<Approval>> {
        self.get("/approvals/pending").await
    }

    pub async fn list_approvals(&self) -> ApiResult<Vec<Approval>> {
        self.get("/approvals").await
    }

    pub async fn get_approval(&self, id: &str) -> ApiResult<Approval> {
        self.get(&format!("/approvals/{}", id)).await
    }

    pub async fn approve(&self, id: &str, decision: &ApprovalDecision) -> ApiResult<Approval> {
        self.send_json(Method::POST, &format!("/approvals/{}/approve", id), decision)
            .await
    }

    pub async fn reject(&self, id: &str, decision: &ApprovalDecision) -> ApiResult<Approval> {
        self.send_json(Method::POST, &format!("/approvals/{}/reject", id), decision)
            .await
    }

    // Plumbing

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self.dispatch(self.request(Method::GET, path), "GET", path).await?;
        Self::decode(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let label = method.as_str().to_string();
        let resp = self
            .dispatch(self.request(method, path).json(body), &label, path)
            .await?;
        Self::decode(resp).await
    }

    /// Send one request with logging and transport classification.
    async fn dispatch(
        &self,
        req: reqwest::RequestBuilder,
        method: &str,
        path: &str,
    ) -> ApiResult<reqwest::Response> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, method, path, "API request");

        let resp = req
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        debug!(%request_id, status = resp.status().as_u16(), path, "API response");
        Ok(resp)
    }

    /// Decode a success body, or classify a non-success status.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
        let status = resp.status();
        let body = resp.text().await.map_err(ApiError::from_transport)?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Unknown(format!("Invalid response body: {}", e)))
    }
}

//! REST API Client
//!
//! `ResourceApi` over `reqwest` (fetch-backed in the browser).

mod routes;

pub use routes::export_filename;

use async_trait::async_trait;
use resource_sync::{Record, ResourceApi, SyncError, SyncResult};
use serde_json::Value;

use crate::browser;
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    auth_header: String,
    token_key: String,
}

impl HttpApi {
    pub fn new(config: &AppConfig, origin: &str) -> Self {
        Self {
            base_url: config.resolve_base(origin),
            auth_header: config.auth_header.clone(),
            token_key: config.token_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = reqwest::Client::new().request(method, self.url(path));
        match browser::session_item(&self.token_key) {
            Some(token) => builder.header(self.auth_header.as_str(), format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send and fail on non-2xx, keeping the server's `message`
    async fn send(&self, builder: reqwest::RequestBuilder) -> SyncResult<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = routes::error_message(&body);
        log::warn!("API error {}: {:?}", status, message);
        Err(SyncError::Http { status: status.as_u16(), message })
    }

    async fn get_json(&self, path: &str) -> SyncResult<Value> {
        log::debug!("GET {}", path);
        let response = self.send(self.request(reqwest::Method::GET, path)).await?;
        response.json().await.map_err(|e| SyncError::Decode(e.to_string()))
    }

    async fn send_json(&self, method: reqwest::Method, path: &str, body: &Value) -> SyncResult<Value> {
        log::debug!("{} {}", method, path);
        let response = self.send(self.request(method, path).json(body)).await?;
        let text = response.text().await.map_err(|e| SyncError::Transport(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Spreadsheet bytes for one parent
    pub async fn export(&self, resource: &str, parent_id: &str) -> SyncResult<Vec<u8>> {
        let path = routes::export_path(resource, parent_id);
        log::debug!("GET {}", path);
        let response = self.send(self.request(reqwest::Method::GET, &path)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait(?Send)]
impl<R: Record> ResourceApi<R> for HttpApi {
    async fn fetch_title(&self, parent_id: &str) -> SyncResult<String> {
        let body = self.get_json(&routes::title_path(parent_id)).await?;
        routes::decode_title(&body)
    }

    async fn fetch_records(&self, parent_id: &str) -> SyncResult<Vec<R>> {
        let body = self.get_json(&routes::list_path::<R>(parent_id)).await?;
        routes::decode_list(&body)
    }

    async fn create(&self, body: Value) -> SyncResult<Option<R>> {
        let answer = self
            .send_json(reqwest::Method::POST, &routes::create_path(R::RESOURCE), &body)
            .await?;
        Ok(routes::decode_record(&answer))
    }

    async fn update(&self, id: &str, body: Value) -> SyncResult<Option<R>> {
        let answer = self
            .send_json(reqwest::Method::PATCH, &routes::record_path(R::RESOURCE, id), &body)
            .await?;
        Ok(routes::decode_record(&answer))
    }

    async fn delete(&self, id: &str) -> SyncResult<()> {
        let path = routes::record_path(R::RESOURCE, id);
        log::debug!("DELETE {}", path);
        self.send(self.request(reqwest::Method::DELETE, &path)).await?;
        Ok(())
    }
}

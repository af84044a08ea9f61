//! Thin HTTP wrapper around `reqwest`.
//!
//! One [`ApiClient`] owns a fixed base URL and timeout; every call is a single
//! attempt with no retry.

use log::debug;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dto::api::ApiResponse;
use crate::models::config::ClientConfig;
use crate::repository::errors::{ApiError, ApiResult};

/// HTTP client bound to the backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds the client from configuration, validating the base URL.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ApiError::Configuration(format!("invalid base url {}: {e}", config.api_base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Configuration(format!(
                "base url cannot carry paths: {}",
                config.api_base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build http client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `segments` under the base URL, percent-encoding each one.
    ///
    /// `.` and `..` segments are dropped by URL normalization; lookup keys
    /// reach this point as [`crate::domain::types::OperadoraId`], which
    /// refuses them.
    pub fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET` on a path below the base URL.
    pub async fn get<T>(&self, segments: &[&str]) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(segments);
        debug!("GET {url}");
        self.send(self.client.get(url)).await
    }

    /// `GET` with query-string parameters serialized from `query`.
    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url_for(segments);
        debug!("GET {url} with query");
        self.send(self.client.get(url).query(query)).await
    }

    async fn send<T>(&self, request: RequestBuilder) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("Backend answered with status {status}");
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }

        let data = response.json::<T>().await?;
        Ok(ApiResponse::new(status.as_u16(), data))
    }
}

/// HTTP client configuration and setup

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Result};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = Request::get(&url)
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Self::parse(response).await
    }

    pub async fn post<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Self::parse(response).await
    }

    /// Issue a DELETE; the response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Self::check_status(&response)
    }

    async fn parse<R: DeserializeOwned>(response: Response) -> Result<R> {
        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    fn check_status(response: &Response) -> Result<()> {
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            })
        }
    }
}

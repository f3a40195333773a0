//! Resource service client.

use crate::models::{ProblemDetails, Resource};
use gloo_net::http::Request;

/// Path of the resource listing endpoint.
const RESOURCES_PATH: &str = "/api/resources";

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) async fn fetch_resources(&self) -> anyhow::Result<Vec<Resource>> {
        let response = Request::get(&format!("{}{RESOURCES_PATH}", self.base_url))
            .header("accept", "application/json")
            .send()
            .await?;
        if !response.ok() {
            let status = response.status();
            let summary = match response.json::<ProblemDetails>().await {
                Ok(problem) => problem.detail.unwrap_or(problem.title),
                Err(_) => response.status_text(),
            };
            anyhow::bail!("resource listing failed ({status}): {summary}");
        }
        Ok(response.json::<Vec<Resource>>().await?)
    }
}

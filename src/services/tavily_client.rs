use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::{configuration::SearchSettings, domain::SearchResponse};

const SEARCH_DEPTH: &str = "advanced";
const INCLUDE_ANSWER: &str = "advanced";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search provider unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("Search provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Search provider returned an unreadable body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

pub struct TavilyClient {
    client: Client,
    api_key: String,
    url: String,
    max_results: u8,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    search_depth: &'static str,
    include_answer: &'static str,
    max_results: u8,
}

impl TavilyClient {
    pub fn new(api_key: String, settings: &SearchSettings) -> Self {
        let client = reqwest::Client::new();

        TavilyClient {
            client,
            api_key,
            url: format!("{}/search", settings.base_url.trim_end_matches('/')),
            max_results: settings.max_results,
        }
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        log::info!("Searching tavily for: {}", query);

        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&SearchRequest {
                query,
                search_depth: SEARCH_DEPTH,
                include_answer: INCLUDE_ANSWER,
                max_results: self.max_results,
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            log::error!("Got status {} from tavily: {}", status, body);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: SearchResponse = serde_json::from_str(&body)?;
        log::info!(
            "Tavily returned {} results, answer present? {}",
            response.results.len(),
            response.answer.is_some()
        );

        Ok(response)
    }
}

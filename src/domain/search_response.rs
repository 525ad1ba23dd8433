use serde::Deserialize;

/// Body returned by the Tavily `/search` endpoint. Only `answer` feeds the
/// company record and `results` is only counted for logging. The remaining
/// fields are deserialized but unused.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

#[cfg(test)]
impl SearchResponse {
    pub fn with_answer(answer: &str) -> Self {
        SearchResponse {
            answer: Some(answer.to_string()),
            ..Default::default()
        }
    }
}

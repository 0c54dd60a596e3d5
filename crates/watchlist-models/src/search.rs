use serde::{Deserialize, Serialize};

/// One hit from the server's search proxy. Lives only as long as it
/// takes to render it and maybe submit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// How many hits the provider reported in total, when it says.
    #[serde(default)]
    pub total_results: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_provider_shaped_response() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [
                {"title": "The Matrix", "year": "1999", "media_type": "movie", "imdb_id": "tt0133093"}
            ],
            "total_results": 14
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "The Matrix");
        assert_eq!(response.results[0].poster_url, None);
        assert_eq!(response.total_results, Some(14));
    }

    #[test]
    fn missing_results_field_means_empty() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, None);
    }
}

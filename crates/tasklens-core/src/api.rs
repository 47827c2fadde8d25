use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body shared by both analysis endpoints. Bulk-pasted records are kept
/// as loose JSON values so the backend sees them exactly as pasted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub tasks: Vec<Value>,
    pub strategy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub results: Vec<ScoredTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// One scored entry from the analyze endpoint. The backend also returns
/// per-component breakdowns and a strategy echo; those are ignored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub score: f64,
    #[serde(default)]
    pub raw: Value,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub score: f64,
    pub why: String,
}

impl From<Suggestion> for ScoredTask {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            id: suggestion.id,
            title: suggestion.title,
            score: suggestion.score,
            raw: Value::Object(serde_json::Map::new()),
            explanation: suggestion.why,
        }
    }
}

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A 0–10 score as sent by the service. The value is displayed verbatim, so a
/// fractional or out-of-range number is shown rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Score(serde_json::Number);

impl Score {
    pub fn new(value: i64) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextVerdict {
    pub design_score: Option<Score>,
    pub animation_potential: Option<Score>,
    pub innovation_score: Option<Score>,
    pub technical_execution: Option<Score>,
    pub client_focus: Option<Score>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub style_analysis: Option<String>,
    pub improvement_recommendations: Option<Vec<String>>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageVerdict {
    pub description: Option<String>,
    pub design_score: Option<Score>,
    pub animation_potential: Option<Score>,
    pub visual_style_score: Option<Score>,
    pub visual_style_analysis: Option<String>,
    pub recommendations: Option<Vec<String>>,
}

/// Result of parsing a single competitor site. `analysis` is absent when the
/// service only fetched the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteVerdict {
    pub url: Option<String>,
    pub text_preview: Option<String>,
    pub analysis: Option<TextVerdict>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkResult {
    pub total: Option<u64>,
}

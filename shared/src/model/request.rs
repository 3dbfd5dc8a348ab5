use serde::Serialize;

use crate::input::ImageBlob;

/// Body of `POST /analyze_text`. A missing competitor name is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextAnalysisRequest {
    pub text: String,
    pub competitor_name: Option<String>,
}

/// Body of `POST /parse_demo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseRequest {
    pub url: String,
}

/// One submission to the analysis service.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Text(TextAnalysisRequest),
    Image(ImageBlob),
    Site(ParseRequest),
    SiteBulk,
}

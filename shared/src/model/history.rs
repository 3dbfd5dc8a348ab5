use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use strum_macros::EnumString;

const EN_US_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Kind of request a history entry records. Unknown kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RequestType {
    TextAnalysis,
    ImageAnalysis,
    Parsing,
    #[strum(default)]
    Other(String),
}

impl Default for RequestType {
    fn default() -> Self {
        RequestType::Other(String::new())
    }
}

impl RequestType {
    pub fn label(&self) -> &str {
        match self {
            RequestType::TextAnalysis => "📝 Text analysis",
            RequestType::ImageAnalysis => "🖼️ Image analysis",
            RequestType::Parsing => "🌐 Site parsing",
            RequestType::Other(raw) if raw.trim().is_empty() => "Unknown request",
            RequestType::Other(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for RequestType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(RequestType::from_str(&raw).unwrap_or(RequestType::Other(raw)))
    }
}

/// When a logged request happened. Parsing never fails: anything that is not
/// a recognizable date is kept as raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
    Raw(String),
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Raw(String::new())
    }
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
            return Timestamp::Zoned(zoned);
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Timestamp::Naive)
            .unwrap_or_else(|| Timestamp::Raw(raw.to_string()))
    }

    /// en-US rendering in the viewer's zone. Naive times are assumed to
    /// already be local.
    pub fn localized(&self, zone: FixedOffset) -> String {
        match self {
            Timestamp::Zoned(at) => at.with_timezone(&zone).format(EN_US_FORMAT).to_string(),
            Timestamp::Naive(at) => at.format(EN_US_FORMAT).to_string(),
            Timestamp::Raw(raw) => raw.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Millis(i64),
            Other(serde_json::Value),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(raw) => Timestamp::parse(&raw),
            Wire::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .map(|at| Timestamp::Zoned(at.fixed_offset()))
                .unwrap_or_else(|| Timestamp::Raw(millis.to_string())),
            Wire::Other(serde_json::Value::Null) => Timestamp::default(),
            Wire::Other(value) => Timestamp::Raw(value.to_string()),
        })
    }
}

/// One logged request. Entries are read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub request_type: RequestType,
    pub timestamp: Timestamp,
    #[serde(deserialize_with = "null_as_empty")]
    pub request_summary: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub response_summary: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /history`, in the order the service returns it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryPage {
    pub items: Vec<HistoryEntry>,
    pub total: Option<u64>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthReport {
    pub status: Option<String>,
    pub version: Option<String>,
    pub services: BTreeMap<String, bool>,
}

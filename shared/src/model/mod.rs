//! Wire-level data model: what the client sends and what the service returns.
//!
//! Every response field is optional. Missing data is represented as `None`
//! (or an empty list) and the renderers skip the corresponding block.

mod history;
mod request;
mod verdict;

pub use history::{HealthReport, HistoryEntry, HistoryPage, RequestType, Timestamp};
pub use request::{AnalysisRequest, ParseRequest, TextAnalysisRequest};
pub use verdict::{BulkResult, ImageVerdict, Score, SiteVerdict, TextVerdict};

/// A successful verdict, tagged by the kind of request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Text(TextVerdict),
    Image(ImageVerdict),
    Site(SiteVerdict),
    Bulk(BulkResult),
}

//! Platform-independent core of the competitor analyzer client.
//!
//! Everything that does not touch the DOM lives here: the wire model and codec,
//! the render tree, the input surfaces, the status notifier, and the two
//! drivers (`RequestOrchestrator`, `HistoryManager`) that sequence calls to the
//! analysis service. The WASM frontend supplies a `Transport` and `UiHooks`.

pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod model;
pub mod orchestrator;
pub mod render;
pub mod state;
pub mod status;

pub use api::{ApiCall, ApiClient, Endpoint, RawResponse, RequestBody, Transport};
pub use config::ClientConfig;
pub use error::{ClientError, OperationError, ValidationError};
pub use history::HistoryManager;
pub use input::{ImageBlob, ImageSurface, TextSurface, UrlSurface};
pub use model::{
    AnalysisResult, BulkResult, HealthReport, HistoryEntry, HistoryPage, ImageVerdict, RequestType,
    Score, SiteVerdict, TextVerdict, Timestamp,
};
pub use orchestrator::RequestOrchestrator;
pub use render::{Fragment, HistoryPanel, Node, Tag};
pub use state::{ProgressGuard, Surface, SurfaceLease, Tab, Ui, UiHooks, UiState};
pub use status::{Severity, StatusMessage, StatusNotifier, StatusTicket};

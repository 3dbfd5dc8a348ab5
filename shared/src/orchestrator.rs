//! Request lifecycle for the four analysis operations.
//!
//! Every operation runs the same sequence: claim the surface, validate
//! locally, announce progress, call the service, then render and report.
//! Leases and the progress guard are RAII values, so each exit path releases
//! them.

use std::rc::Rc;

use crate::api::{ApiClient, Transport};
use crate::error::{ClientError, OperationError, ValidationError};
use crate::model::{AnalysisResult, HealthReport};
use crate::render::render_result;
use crate::state::{Surface, SurfaceLease, Ui, UiState};
use crate::status::Severity;

const ANALYSIS_FALLBACK: &str = "Analysis error";
const PARSING_FALLBACK: &str = "Parsing error";
const BULK_FALLBACK: &str = "Bulk parsing error";

pub struct RequestOrchestrator<T> {
    client: Rc<ApiClient<T>>,
    ui: Ui,
}

impl<T> Clone for RequestOrchestrator<T> {
    fn clone(&self) -> Self {
        Self { client: Rc::clone(&self.client), ui: self.ui.clone() }
    }
}

impl<T: Transport> RequestOrchestrator<T> {
    pub fn new(client: Rc<ApiClient<T>>, ui: Ui) -> Self {
        Self { client, ui }
    }

    pub async fn analyze_text(&self) -> Result<(), OperationError> {
        let _lease = self.begin(Surface::Text)?;
        let request = self.validate(|state| state.text.to_request())?;
        log::info!(
            "analyzing text ({} chars, competitor: {:?})",
            request.text.chars().count(),
            request.competitor_name
        );
        self.ui.notify("Analyzing text...", Severity::Info);

        let outcome = self.client.analyze_text(request).await.map(AnalysisResult::Text);
        self.finish(Surface::Text, outcome, ANALYSIS_FALLBACK, |_| "Analysis complete!".into())
    }

    pub async fn analyze_image(&self) -> Result<(), OperationError> {
        let _lease = self.begin(Surface::Image)?;
        let image = self.validate(|state| state.image.to_request())?;
        log::info!("analyzing image {image:?}");
        self.ui.notify("Analyzing image...", Severity::Info);

        let outcome = self.client.analyze_image(image).await.map(AnalysisResult::Image);
        self.finish(Surface::Image, outcome, ANALYSIS_FALLBACK, |_| "Analysis complete!".into())
    }

    pub async fn parse_site(&self) -> Result<(), OperationError> {
        let _lease = self.begin(Surface::Site)?;
        let request = self.validate(|state| state.url.to_request())?;
        let _progress = self.ui.show_progress();
        log::info!("parsing site {}", request.url);
        self.ui.notify("Parsing site...", Severity::Info);

        let outcome = self.client.parse_site(request).await.map(AnalysisResult::Site);
        self.finish(Surface::Site, outcome, PARSING_FALLBACK, |_| "Parsing complete!".into())
    }

    /// Bulk job: only the aggregate count is shown, full results stay on the
    /// server.
    pub async fn parse_all_sites(&self) -> Result<(), OperationError> {
        let _lease = self.begin(Surface::Site)?;
        let _progress = self.ui.show_progress();
        log::info!("starting bulk parsing");
        self.ui.notify("Starting bulk parsing...", Severity::Info);

        let outcome = self.client.parse_all().await.map(AnalysisResult::Bulk);
        self.finish(Surface::Site, outcome, BULK_FALLBACK, |result| match result {
            AnalysisResult::Bulk(bulk) => match bulk.total {
                Some(total) => format!("Successfully analyzed {total} competitors!"),
                None => "Bulk parsing complete!".into(),
            },
            _ => "Bulk parsing complete!".into(),
        })
    }

    /// Fetches service availability for the header. Failures are only logged.
    pub async fn refresh_health(&self) -> Result<HealthReport, ClientError> {
        match self.client.health().await {
            Ok(report) => {
                log::debug!("service health: {report:?}");
                self.ui.update(|state| state.health = Some(report.clone()));
                Ok(report)
            }
            Err(error) => {
                log::warn!("health check failed: {error}");
                Err(error)
            }
        }
    }

    fn begin(&self, surface: Surface) -> Result<SurfaceLease, OperationError> {
        self.ui.lease(surface).ok_or_else(|| {
            log::warn!("{surface:?} request already in flight, ignoring trigger");
            OperationError::Busy(surface)
        })
    }

    fn validate<R>(
        &self,
        read: impl FnOnce(&UiState) -> Result<R, ValidationError>,
    ) -> Result<R, OperationError> {
        let checked = read(&self.ui.state());
        checked.map_err(|error| {
            self.ui.reject(&error);
            error.into()
        })
    }

    fn finish(
        &self,
        surface: Surface,
        outcome: Result<AnalysisResult, ClientError>,
        fallback: &str,
        success_message: impl FnOnce(&AnalysisResult) -> String,
    ) -> Result<(), OperationError> {
        match outcome {
            Ok(result) => {
                let fragment = render_result(&result, self.ui.config());
                self.ui.show_result(surface, fragment);
                self.ui.notify(success_message(&result), Severity::Success);
                Ok(())
            }
            Err(error) => {
                log::error!("{surface:?} request failed: {error}");
                self.ui.notify(format!("Error: {}", error.describe(fallback)), Severity::Error);
                Err(error.into())
            }
        }
    }
}

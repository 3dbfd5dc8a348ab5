//! Typed client for the analysis service.
//!
//! `ApiClient` turns requests into `ApiCall`s, hands them to a platform
//! `Transport`, and decodes the raw reply into a verdict or a `ClientError`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use strum_macros::Display;

use crate::error::ClientError;
use crate::input::ImageBlob;
use crate::model::{
    AnalysisRequest, BulkResult, HealthReport, HistoryPage, ImageVerdict, ParseRequest,
    SiteVerdict, TextAnalysisRequest, TextVerdict,
};

/// Multipart field name the service reads the uploaded image from.
pub const IMAGE_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AnalyzeText,
    AnalyzeImage,
    ParseSite,
    ParseAll,
    History,
    ClearHistory,
    Health,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Endpoint::History | Endpoint::Health => Method::Get,
            Endpoint::ClearHistory => Method::Delete,
            _ => Method::Post,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::AnalyzeText => "/analyze_text",
            Endpoint::AnalyzeImage => "/analyze_image",
            Endpoint::ParseSite => "/parse_demo",
            Endpoint::ParseAll => "/parse_all",
            Endpoint::History | Endpoint::ClearHistory => "/history",
            Endpoint::Health => "/health",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart { field: &'static str, file: ImageBlob },
}

/// A fully-described HTTP call, independent of how it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub endpoint: Endpoint,
    pub body: RequestBody,
}

impl ApiCall {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, body: RequestBody::Empty }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.endpoint.path())
    }
}

impl TryFrom<AnalysisRequest> for ApiCall {
    type Error = ClientError;

    fn try_from(request: AnalysisRequest) -> Result<Self, Self::Error> {
        let encode = |value: Result<serde_json::Value, serde_json::Error>| {
            value.map(RequestBody::Json).map_err(|e| ClientError::Malformed(e.to_string()))
        };
        Ok(match request {
            AnalysisRequest::Text(body) => ApiCall {
                endpoint: Endpoint::AnalyzeText,
                body: encode(serde_json::to_value(body))?,
            },
            AnalysisRequest::Image(file) => ApiCall {
                endpoint: Endpoint::AnalyzeImage,
                body: RequestBody::Multipart { field: IMAGE_FIELD, file },
            },
            AnalysisRequest::Site(body) => ApiCall {
                endpoint: Endpoint::ParseSite,
                body: encode(serde_json::to_value(body))?,
            },
            AnalysisRequest::SiteBulk => ApiCall::new(Endpoint::ParseAll),
        })
    }
}

/// Status code and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends calls to the service. Implementations only report transport
/// faults; decoding and status interpretation happen in `decode_response`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, call: ApiCall) -> Result<RawResponse, ClientError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FailureBody {
    detail: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

impl FailureBody {
    fn message(self) -> Option<String> {
        [self.detail, self.error].into_iter().flatten().find_map(|value| match value {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(flatten)]
    payload: T,
    #[serde(flatten)]
    failure: FailureBody,
}

#[derive(Debug, Deserialize)]
struct Analysis<T> {
    #[serde(default)]
    analysis: Option<T>,
}

#[derive(Debug, Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a reply body, mapping HTTP faults and undecodable payloads to
/// `ClientError`.
pub fn decode_response<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ClientError> {
    if !response.is_success() {
        let detail = serde_json::from_str::<FailureBody>(&response.body)
            .ok()
            .and_then(FailureBody::message);
        return Err(ClientError::Status { status: response.status, detail });
    }
    serde_json::from_str(&response.body).map_err(|e| ClientError::Malformed(e.to_string()))
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ClientError> {
    if envelope.success {
        Ok(envelope.payload)
    } else {
        Err(ClientError::Rejected { detail: envelope.failure.message() })
    }
}

fn require_analysis<T>(analysis: Analysis<T>) -> Result<T, ClientError> {
    analysis
        .analysis
        .ok_or_else(|| ClientError::Malformed("response is missing the analysis".into()))
}

pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(&self, call: ApiCall) -> Result<R, ClientError> {
        let endpoint = call.endpoint;
        let response = self.transport.send(call).await?;
        log::debug!("{} {} -> {}", endpoint.method(), endpoint.path(), response.status);
        decode_response(&response)
    }

    async fn submit<R: DeserializeOwned>(
        &self,
        request: AnalysisRequest,
    ) -> Result<R, ClientError> {
        let envelope: Envelope<R> = self.call(ApiCall::try_from(request)?).await?;
        unwrap_envelope(envelope)
    }

    pub async fn analyze_text(
        &self,
        request: TextAnalysisRequest,
    ) -> Result<TextVerdict, ClientError> {
        require_analysis(self.submit(AnalysisRequest::Text(request)).await?)
    }

    pub async fn analyze_image(&self, image: ImageBlob) -> Result<ImageVerdict, ClientError> {
        require_analysis(self.submit(AnalysisRequest::Image(image)).await?)
    }

    pub async fn parse_site(&self, request: ParseRequest) -> Result<SiteVerdict, ClientError> {
        self.submit(AnalysisRequest::Site(request)).await
    }

    pub async fn parse_all(&self) -> Result<BulkResult, ClientError> {
        self.submit(AnalysisRequest::SiteBulk).await
    }

    pub async fn history(&self) -> Result<HistoryPage, ClientError> {
        self.call(ApiCall::new(Endpoint::History)).await
    }

    pub async fn clear_history(&self) -> Result<(), ClientError> {
        let envelope: Envelope<Acknowledgement> =
            self.call(ApiCall::new(Endpoint::ClearHistory)).await?;
        let ack = unwrap_envelope(envelope)?;
        if let Some(message) = ack.message {
            log::debug!("history cleared: {message}");
        }
        Ok(())
    }

    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        self.call(ApiCall::new(Endpoint::Health)).await
    }
}

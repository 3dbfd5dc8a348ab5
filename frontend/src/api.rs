use std::fmt::Display;

use gloo_file::File as GlooFile;
use gloo_net::http::{Request, RequestBuilder};
use shared::api::Method;
use shared::{ApiCall, ClientError, ImageBlob, RawResponse, RequestBody, Transport};
use web_sys::FormData;

/// Sends `ApiCall`s with the browser's fetch API.
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

fn network(err: impl Display) -> ClientError {
    ClientError::Network(err.to_string())
}

fn multipart(field: &str, image: &ImageBlob) -> Result<FormData, ClientError> {
    let file = GlooFile::new_with_options(
        &image.name,
        image.bytes.as_slice(),
        Some(&image.mime_type),
        None,
    );
    let form = FormData::new().map_err(|e| network(format!("{e:?}")))?;
    form.append_with_blob_and_filename(field, file.as_ref(), &image.name)
        .map_err(|e| network(format!("{e:?}")))?;
    Ok(form)
}

impl Transport for GlooTransport {
    async fn send(&self, call: ApiCall) -> Result<RawResponse, ClientError> {
        let url = call.url(&self.base);
        let builder: RequestBuilder = match call.endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        let request = match call.body {
            RequestBody::Empty => builder.build().map_err(network)?,
            RequestBody::Json(value) => builder.json(&value).map_err(network)?,
            RequestBody::Multipart { field, file } => {
                builder.body(multipart(field, &file)?).map_err(network)?
            }
        };

        let response = request.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(RawResponse::new(status, body))
    }
}

//! HTTP transport seam under the API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`](super::api::ApiClient) builds fully resolved [`ApiRequest`]s
//! (absolute URL, headers, body) and hands them to a [`Transport`]. In the
//! browser that is [`BrowserTransport`] over `gloo-net`; tests substitute a
//! recorder. Transports never interpret status codes.

#![allow(clippy::unused_async)]

use std::future::Future;

use super::api::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// File contents read from a picker, ready for a multipart upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Value of a single multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(UploadFile),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: PartValue::Text(value.into()) }
    }

    pub fn file(name: impl Into<String>, file: UploadFile) -> Self {
        Self { name: name.into(), value: PartValue::File(file) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A request exactly as it goes on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// First header value matching `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code plus the body text (possibly empty).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `fetch`-backed transport. Outside the browser every call fails with a
/// network error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Network(format!("{} {} is only available in the browser", request.method.as_str(), request.url)))
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder};
    use wasm_bindgen::JsValue;

    use super::{ApiRequest, ApiResponse, FormPart, Method, PartValue, RequestBody};
    use crate::net::api::ApiError;

    fn network(err: impl std::fmt::Display) -> ApiError {
        ApiError::Network(err.to_string())
    }

    fn js_network(err: &JsValue) -> ApiError {
        ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    pub(super) async fn send(request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            RequestBody::Empty => builder.build().map_err(network)?,
            RequestBody::Json(value) => builder.json(&value).map_err(network)?,
            RequestBody::Multipart(parts) => builder.body(form_data(&parts)?).map_err(network)?,
        };

        let response = prepared.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| js_network(&e))?;
        for part in parts {
            match &part.value {
                PartValue::Text(text) => form.append_with_str(&part.name, text).map_err(|e| js_network(&e))?,
                PartValue::File(file) => {
                    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                    let sequence = js_sys::Array::of1(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&file.content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                        .map_err(|e| js_network(&e))?;
                    form.append_with_blob_and_filename(&part.name, &blob, &file.name)
                        .map_err(|e| js_network(&e))?;
                }
            }
        }
        Ok(form)
    }
}

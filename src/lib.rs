#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod error;
pub mod event;
pub mod filter;
pub mod pagination;
pub mod product_image;
pub mod resource;
pub(crate) mod serde_helpers;
pub mod types;

pub use client::{Client, Config, RawResponse};
use reqwest::Request;
use serde_json::Value;

use crate::error::{Error, Status};

pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<RawResponse> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();
    let headers = response.headers().clone();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Status::new(status_code, method, path, message)
            .with_headers(&headers)
            .into());
    }

    let text = response.text().await?;
    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)
            .map_err(|e| Error::decode(method.clone(), path.clone(), "body", e.to_string()))?
    };

    Ok(RawResponse {
        method,
        path,
        status: status_code,
        headers,
        body,
    })
}

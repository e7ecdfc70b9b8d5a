use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};

use super::error::SendError;
use super::request::RequestInput;
use super::response::HttpResponse;

pub fn build_client() -> Result<Client, SendError> {
    Client::builder().build().map_err(SendError::Transport)
}

/// POST the payload as a JSON body and return the status and raw body text.
///
/// Connection failures come back as [`SendError::Connect`] so the caller can
/// tell "server not running" apart from other transport errors.
pub async fn post_json(client: &Client, request: &RequestInput) -> Result<HttpResponse, SendError> {
    let body = request.payload.to_json()?;
    log::debug!("POST {} ({} bytes)", request.url, body.len());

    let response = client
        .post(&request.url)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(SendError::Transport)?;
    log::debug!("{} answered {status} ({} bytes)", request.url, bytes.len());

    Ok(HttpResponse {
        status,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

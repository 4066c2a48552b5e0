//! Shared request helpers: status check + strict JSON decode.
//!
//! Every operation funnels through here, so the error contract is uniform:
//! transport errors pass through as [`HawkizError::Http`], a non-2xx status
//! becomes [`HawkizError::Status`] without inspecting the body, and a body
//! that does not match the declared shape fails with [`HawkizError::Json`].

use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{HawkizClient, HawkizError};

/// Drop the query string when no pair was appended, so an operation with all
/// optional parameters omitted never sends a bare `?`.
pub(crate) fn strip_empty_query(url: &mut Url) {
    if url.query() == Some("") {
        url.set_query(None);
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &HawkizClient,
    url: Url,
) -> Result<T, HawkizError> {
    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;
    decode(resp, &url).await
}

/// POST with an empty body: the query string is the whole payload.
pub(crate) async fn post_json<T: DeserializeOwned>(
    client: &HawkizClient,
    url: Url,
) -> Result<T, HawkizError> {
    let resp = client
        .http()
        .post(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;
    decode(resp, &url).await
}

async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    url: &Url,
) -> Result<T, HawkizError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(HawkizError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

//! Service status endpoints (`/` and `/health`), served at the server root
//! rather than under the market-data base path.

use serde::Deserialize;

use crate::core::{HawkizClient, HawkizError, net};

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    /// `"healthy"` when the service is up.
    pub status: String,
}

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerInfo {
    pub message: String,
    pub version: String,
    /// Path of the interactive API docs.
    pub docs: String,
}

/// Check whether the backend is up.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn health(client: &HawkizClient) -> Result<Health, HawkizError> {
    let url = client.endpoint("health")?;
    net::get_json(client, url).await
}

/// Fetch the backend's self-description (name, version, docs path).
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn server_info(client: &HawkizClient) -> Result<ServerInfo, HawkizError> {
    let url = client.endpoint("")?;
    net::get_json(client, url).await
}

//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::HawkizError;

/// Default backend base for local development (the FastAPI dev server).
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

const USER_AGENT: &str = concat!("hawkiz-rs/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP transport for the Hawkiz backend.
///
/// Holds a [`reqwest::Client`] and the backend base URL. The client is an
/// explicit dependency of every operation builder (no global state), so tests
/// can point it at a mock server via [`HawkizClientBuilder::base_url`].
///
/// Cloning is cheap; the underlying HTTP client is internally reference
/// counted.
#[derive(Debug, Clone)]
pub struct HawkizClient {
    http: Client,
    base_url: Url,
}

impl Default for HawkizClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl HawkizClient {
    /// Create a new builder.
    pub fn builder() -> HawkizClientBuilder {
        HawkizClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The backend base URL this client talks to (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join a path relative to the base URL, e.g.
    /// `api/v1/market-data/stocks/SPY`.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, HawkizError> {
        Ok(self.base_url.join(path)?)
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`HawkizClient`].
#[derive(Default)]
pub struct HawkizClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HawkizClientBuilder {
    /// Override the backend base URL (e.g. `https://api.hawkiz.io/`).
    ///
    /// A missing trailing slash is added so that endpoint joins never clobber
    /// the last path segment.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    ///
    /// Timeouts belong to the transport; individual operations add no
    /// deadline handling of their own.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<HawkizClient, HawkizError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(HawkizClient { http, base_url })
    }
}

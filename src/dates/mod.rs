//! Which trading dates the backend has price data for.

use serde::Deserialize;

use crate::core::{HawkizClient, HawkizError, net};

/// Response of `GET /api/v1/market-data/available-dates`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvailableDates {
    /// Echo of the symbol filter; absent when no filter was sent.
    pub symbol: Option<String>,
    pub dates: Vec<String>,
    pub count: usize,
}

/// A builder for listing the dates with stored data, optionally filtered by
/// symbol.
#[derive(Clone)]
pub struct AvailableDatesBuilder {
    client: HawkizClient,
    symbol: Option<String>,
}

impl AvailableDatesBuilder {
    pub fn new(client: &HawkizClient) -> Self {
        Self {
            client: client.clone(),
            symbol: None,
        }
    }

    /// Only report dates for this symbol (`symbol`).
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Executes the request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<AvailableDates, HawkizError> {
        let mut url = self.client.endpoint("api/v1/market-data/available-dates")?;
        {
            let mut qp = url.query_pairs_mut();
            if let Some(s) = &self.symbol {
                qp.append_pair("symbol", s);
            }
        }
        net::strip_empty_query(&mut url);

        net::get_json(&self.client, url).await
    }
}

//! Options chain queries.

mod model;

pub use model::{OptionContractRow, OptionType, OptionsChain};

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::{HawkizClient, HawkizError, net};

/// A builder for fetching the options chain of an underlying symbol.
#[derive(Clone)]
pub struct OptionsChainBuilder {
    client: HawkizClient,
    underlying_symbol: String,
    timestamp: Option<DateTime<Utc>>,
    expiration_date: Option<NaiveDate>,
}

impl OptionsChainBuilder {
    /// Creates a new `OptionsChainBuilder` for a given underlying symbol.
    pub fn new(client: &HawkizClient, underlying_symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            underlying_symbol: underlying_symbol.into(),
            timestamp: None,
            expiration_date: None,
        }
    }

    /// Ask for the chain as of a specific point in time (`timestamp`,
    /// RFC 3339). Without it the backend returns the live chain.
    pub fn timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Restrict the chain to a single expiration date (`expiration_date`).
    pub fn expiration_date(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Executes the request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.underlying_symbol))
    )]
    pub async fn fetch(self) -> Result<OptionsChain, HawkizError> {
        let mut url = self.client.endpoint(&format!(
            "api/v1/market-data/options/{}",
            self.underlying_symbol
        ))?;
        {
            let mut qp = url.query_pairs_mut();
            if let Some(ts) = self.timestamp {
                qp.append_pair("timestamp", &ts.to_rfc3339());
            }
            if let Some(d) = self.expiration_date {
                qp.append_pair("expiration_date", &d.to_string());
            }
        }
        net::strip_empty_query(&mut url);

        net::get_json(&self.client, url).await
    }
}

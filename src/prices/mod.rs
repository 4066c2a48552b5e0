//! Historical stock prices and the fetch-and-store trigger.

mod model;

pub use model::{Interval, StockPrice, StockPriceList};

use chrono::NaiveDate;

use crate::core::{HawkizClient, HawkizError, net};

/// A builder for querying stored price history for a single symbol.
///
/// Optional parameters are sent only when set; an omitted parameter never
/// appears in the query string, since the backend distinguishes an omitted
/// filter from an empty one.
#[derive(Clone)]
pub struct StockPricesBuilder {
    client: HawkizClient,
    symbol: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    limit: Option<u32>,
}

impl StockPricesBuilder {
    /// Creates a new `StockPricesBuilder` for a given symbol.
    pub fn new(client: &HawkizClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            start_date: None,
            end_date: None,
            limit: None,
        }
    }

    /// Only return bars on or after this date (`start_date=YYYY-MM-DD`).
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Only return bars on or before this date (`end_date=YYYY-MM-DD`).
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Maximum number of bars to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Executes the request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.symbol))
    )]
    pub async fn fetch(self) -> Result<StockPriceList, HawkizError> {
        let mut url = self
            .client
            .endpoint(&format!("api/v1/market-data/stocks/{}", self.symbol))?;
        {
            let mut qp = url.query_pairs_mut();
            if let Some(d) = self.start_date {
                qp.append_pair("start_date", &d.to_string());
            }
            if let Some(d) = self.end_date {
                qp.append_pair("end_date", &d.to_string());
            }
            if let Some(n) = self.limit {
                qp.append_pair("limit", &n.to_string());
            }
        }
        net::strip_empty_query(&mut url);

        net::get_json(&self.client, url).await
    }
}

/// A builder for `POST /stocks/{symbol}/fetch`: asks the backend to pull data
/// from its external provider and store it.
///
/// The ingestion happens server-side; this layer only reports success or
/// failure of the HTTP exchange, and the response payload is backend-defined,
/// so it is returned as raw JSON.
#[derive(Clone)]
pub struct FetchStockDataBuilder {
    client: HawkizClient,
    symbol: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    interval: Interval,
}

impl FetchStockDataBuilder {
    /// Creates a new `FetchStockDataBuilder`. The start date is required by
    /// the backend; the end date defaults server-side to today.
    pub fn new(client: &HawkizClient, symbol: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            start_date,
            end_date: None,
            interval: Interval::default(),
        }
    }

    /// Fetch up to this date instead of today.
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Bar interval to request from the provider. (Default: [`Interval::D1`])
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Executes the request. The query string is the whole payload; no
    /// request body is sent.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.symbol))
    )]
    pub async fn send(self) -> Result<serde_json::Value, HawkizError> {
        let mut url = self
            .client
            .endpoint(&format!("api/v1/market-data/stocks/{}/fetch", self.symbol))?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("start_date", &self.start_date.to_string());
            if let Some(d) = self.end_date {
                qp.append_pair("end_date", &d.to_string());
            }
            // always sent, even when left at the default
            qp.append_pair("interval", self.interval.as_str());
        }

        net::post_json(&self.client, url).await
    }
}

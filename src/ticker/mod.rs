//! Symbol-bound convenience facade.

use chrono::NaiveDate;

use crate::core::{HawkizClient, HawkizError};
use crate::options::{OptionsChain, OptionsChainBuilder};
use crate::prices::{FetchStockDataBuilder, StockPriceList, StockPricesBuilder};

/// A high-level handle for a single symbol.
///
/// Bundles a [`HawkizClient`] with a ticker symbol and hands out the
/// operation builders without repeating either.
///
/// # Example
///
/// ```no_run
/// # use hawkiz_rs::{HawkizClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HawkizClient::default();
/// let spy = Ticker::new(&client, "SPY");
///
/// let prices = spy.latest_prices(30).await?;
/// println!("{} bars for {}", prices.count, prices.symbol);
///
/// let chain = spy.full_chain().await?;
/// println!("{} contracts", chain.count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Ticker {
    client: HawkizClient,
    symbol: String,
}

impl Ticker {
    pub fn new(client: &HawkizClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// The symbol this handle is bound to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Start a stored-price-history query.
    pub fn prices(&self) -> StockPricesBuilder {
        StockPricesBuilder::new(&self.client, &self.symbol)
    }

    /// Start a fetch-and-store request covering `start_date` onward.
    pub fn fetch_data(&self, start_date: NaiveDate) -> FetchStockDataBuilder {
        FetchStockDataBuilder::new(&self.client, &self.symbol, start_date)
    }

    /// Start an options chain query.
    pub fn options(&self) -> OptionsChainBuilder {
        OptionsChainBuilder::new(&self.client, &self.symbol)
    }

    /// The most recent `limit` bars.
    pub async fn latest_prices(&self, limit: u32) -> Result<StockPriceList, HawkizError> {
        self.prices().limit(limit).fetch().await
    }

    /// The unfiltered live chain.
    pub async fn full_chain(&self) -> Result<OptionsChain, HawkizError> {
        self.options().fetch().await
    }
}

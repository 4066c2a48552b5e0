//! `hawkiz-rs`: ergonomic Rust client for the Hawkiz options backtesting API.
//!
//! Covers the market-data surface (`/api/v1/market-data`): stored stock price
//! history, the fetch-and-store ingestion trigger, options chains, and the
//! available-dates query, plus the service's `/` and `/health` status
//! endpoints.
//!
//! The design is deliberately thin: each operation is a single HTTP exchange.
//! There are no retries, no caching, and no request coalescing; every failure
//! from the transport propagates to the caller as a [`HawkizError`]. Response
//! bodies are strictly deserialized, so a backend payload that does not match
//! the documented shape fails the call instead of surfacing later as a bad
//! field access.
//!
//! # Example
//!
//! ```no_run
//! use hawkiz_rs::{HawkizClient, StockPricesBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HawkizClient::default();
//!
//! let prices = StockPricesBuilder::new(&client, "AAPL")
//!     .limit(100)
//!     .fetch()
//!     .await?;
//!
//! for bar in &prices.data {
//!     println!("{} close={}", bar.timestamp, bar.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dates;
pub mod options;
pub mod prices;
pub mod status;
pub mod ticker;

pub use crate::core::{HawkizClient, HawkizClientBuilder, HawkizError};
pub use dates::{AvailableDates, AvailableDatesBuilder};
pub use options::{OptionContractRow, OptionType, OptionsChain, OptionsChainBuilder};
pub use prices::{FetchStockDataBuilder, Interval, StockPrice, StockPriceList, StockPricesBuilder};
pub use status::{Health, ServerInfo};
pub use ticker::Ticker;

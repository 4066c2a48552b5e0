use serde::Deserialize;

/// A single OHLCV bar as stored by the backend.
///
/// `timestamp` is echoed as the backend serialized it (ISO-8601 expected) and
/// is not parsed or validated by this layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockPrice {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Response of `GET /api/v1/market-data/stocks/{symbol}`.
///
/// `data` keeps the backend's order (chronological); `count` is reported by
/// the backend and not cross-checked against `data.len()`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockPriceList {
    pub symbol: String,
    pub data: Vec<StockPrice>,
    pub count: usize,
}

/// Bar interval accepted by the backend's fetch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    #[default]
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I2m => "2m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I60m => "60m",
            Interval::I90m => "90m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
            Interval::D5 => "5d",
            Interval::W1 => "1wk",
            Interval::M1 => "1mo",
            Interval::M3 => "3mo",
        }
    }
}

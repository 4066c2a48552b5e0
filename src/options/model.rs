use serde::Deserialize;

/// Side of an options contract. Serialized as `"C"` / `"P"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OptionType {
    #[serde(rename = "C")]
    Call,
    #[serde(rename = "P")]
    Put,
}

/// One row of an options chain.
///
/// Everything past the strike and side is optional: the backend omits fields
/// its provider did not quote, and an absent field means "unknown", not zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionContractRow {
    pub expiration_date: String,
    pub strike: f64,
    pub option_type: OptionType,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub implied_volatility: Option<f64>,
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub theta: Option<f64>,
    pub vega: Option<f64>,
}

/// Response of `GET /api/v1/market-data/options/{underlying_symbol}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionsChain {
    pub underlying_symbol: String,
    pub underlying_price: f64,
    /// Backend-reported snapshot time, echoed verbatim.
    pub timestamp: String,
    /// Distinct expiration dates present in `chains`, in backend order.
    pub expirations: Vec<String>,
    pub chains: Vec<OptionContractRow>,
    pub count: usize,
}

//! Search result records as returned by the search endpoint

use serde::Deserialize;

/// A single security matched by a search
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id", default)]
    pub object_id: String,
    #[serde(default)]
    pub id: String,
    pub ticker: String,
    pub name: String,
    /// ISO 3166 alpha-2 country code, e.g. "US"
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub exchange_score: f64,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub is_actively_trading: bool,
    #[serde(default)]
    pub is_etf: bool,
    #[serde(default)]
    pub is_fund: bool,
    /// 1 when the security is an S&P 500 constituent
    #[serde(rename = "in_SP_500", default)]
    pub in_sp_500: f64,
    #[serde(default)]
    pub market_cap: f64,
}

impl Document {
    pub fn is_sp_500(&self) -> bool {
        self.in_sp_500 != 0.0
    }
}

/// Wrapper the endpoint puts around each document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResults {
    pub document: Document,
}

//! Exchange-rate retrieval.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::currency::CurrencyCode;
use crate::error::RateError;

/// Rates for one base currency at one point in time: 1 base = rate target.
pub type RateTable = HashMap<String, f64>;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, RateError>;
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "cambio/1.0";

/// Fetches rate tables from an exchangerate-api style endpoint
/// (`GET {base_url}/{CODE}` returning a JSON body with a `rates` object).
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct RatesResponse {
    rates: RateTable,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, RateError> {
        let url = format!("{}/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RateError::HttpStatus(response.status()));
        }

        let text = response.text().await?;

        // Decode through an explicit schema so a missing or malformed
        // `rates` field surfaces as a format error, not a panic downstream.
        let data: RatesResponse = serde_json::from_str(&text)?;

        debug!("Received {} rates for base {}", data.rates.len(), base);
        Ok(data.rates)
    }
}

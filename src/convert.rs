//! Currency conversion over a rate provider.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::CurrencyCode;
use crate::error::{ConvertError, ValidationError};
use crate::rates::RateProvider;

/// A validated conversion request. Construction rejects bad input so the
/// conversion itself never sees a negative or non-finite amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: &str, to: &str) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        Ok(ConversionRequest {
            amount,
            from: CurrencyCode::new(from)?,
            to: CurrencyCode::new(to)?,
        })
    }
}

/// Outcome of one conversion, for display only.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub converted: f64,
    pub rate: f64,
    pub timestamp: DateTime<Utc>,
}

pub struct Converter<'a> {
    provider: &'a dyn RateProvider,
}

impl<'a> Converter<'a> {
    pub fn new(provider: &'a dyn RateProvider) -> Self {
        Converter { provider }
    }

    /// Converts the requested amount. Identity conversions return the amount
    /// unchanged without touching the network; everything else costs one
    /// fetch of the source currency's rate table.
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConvertError> {
        if request.from == request.to {
            return Ok(ConversionResult {
                amount: request.amount,
                from: request.from.clone(),
                to: request.to.clone(),
                converted: request.amount,
                rate: 1.0,
                timestamp: Utc::now(),
            });
        }

        let rates = self.provider.fetch_rates(&request.from).await?;
        let rate = *rates
            .get(request.to.as_str())
            .ok_or_else(|| ConvertError::CurrencyNotFound(request.to.to_string()))?;

        Ok(ConversionResult {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
            converted: round2(request.amount * rate),
            rate,
            timestamp: Utc::now(),
        })
    }
}

/// Rounds to 2 decimal places, half-up away from zero (so 10.005 -> 10.01).
fn round2(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

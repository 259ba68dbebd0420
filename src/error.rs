//! Error types for the conversion core.
//!
//! Failures are values the caller can match on: the interactive shell prints
//! a message and keeps going, the one-shot CLI propagates them up to `main`.

use thiserror::Error;

/// Failures while fetching a rate table from the provider.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("Failed to reach the rate provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Rate provider returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Rate provider response is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Caller-side input problems, rejected before any conversion work runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(f64),

    #[error("Amount must be a finite number")]
    NonFiniteAmount,

    #[error("Currency code must be 3 letters: '{0}'")]
    InvalidCurrencyCode(String),
}

/// Failures of a conversion request.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Rate(#[from] RateError),

    #[error("Currency '{0}' not found in exchange rates")]
    CurrencyNotFound(String),

    #[error("Invalid conversion request: {0}")]
    Validation(#[from] ValidationError),
}

//! Static directory of well-known currencies.
//!
//! Display-only configuration data. The live rate table, not this list,
//! decides what can actually be converted.

pub const CURRENCIES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("AUD", "Australian Dollar"),
    ("CAD", "Canadian Dollar"),
    ("CHF", "Swiss Franc"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("PKR", "Pakistani Rupee"),
    ("SAR", "Saudi Riyal"),
    ("AED", "UAE Dirham"),
    ("KRW", "South Korean Won"),
    ("SGD", "Singapore Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("NZD", "New Zealand Dollar"),
    ("SEK", "Swedish Krona"),
    ("NOK", "Norwegian Krone"),
    ("DKK", "Danish Krone"),
    ("RUB", "Russian Ruble"),
];

/// Case-insensitive name lookup; unknown codes yield `None`.
pub fn name_of(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    CURRENCIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    CURRENCIES.iter().copied()
}

//! Deserializes monetary amounts sent either as JSON numbers or as decimal strings.
//!
//! The backend stores amounts as decimals, which it serializes as strings such
//! as `"50.00"`. Older responses and hand-written fixtures use plain numbers.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => Ok(amount),
        RawAmount::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| D::Error::custom(format!("\"{text}\" is not a decimal amount"))),
    }
}

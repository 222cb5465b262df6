//! Numeric codec between caller attributes and stored items.
//!
//! The store only knows exact decimals. Every number is converted through its
//! canonical text form on the way in and parsed back from decimal text on the
//! way out, so a float never picks up binary rounding noise in transit.
//!
//! Integers (decimals with scale 0) come back as JSON integers; anything with a
//! fractional or negative scale comes back as `f64`. A float such as `1.0`
//! keeps its scale of one and therefore comes back as a float.
//!
//! Written numbers must fit the store's number type: at most 38 significant
//! digits, with a magnitude between `1e-130` and `1e126` (exclusive).

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::storage::{Attributes, Item, StoredValue};

/// Most significant digits a stored number may carry.
pub const MAX_SIGNIFICANT_DIGITS: u64 = 38;

/// Smallest decimal exponent of a stored non-zero number.
pub const MIN_EXPONENT: i64 = -130;

/// Largest decimal exponent of a stored number.
pub const MAX_EXPONENT: i64 = 125;

/// Errors raised while converting numbers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("number {0} has no exact decimal representation")]
    Unrepresentable(String),
    #[error("number {0} is outside the storable range")]
    OutOfRange(String),
    #[error("decimal {0} is not a finite number")]
    NonFinite(String),
}

/// Parses decimal text, accepting scientific notation.
///
/// Parsing is exact and unbounded; range limits apply only when encoding.
pub fn parse_decimal(text: &str) -> Result<BigDecimal, CodecError> {
    BigDecimal::from_str(text).map_err(|_| CodecError::Unrepresentable(text.to_string()))
}

/// Converts a JSON number into an exact decimal.
pub fn encode_number(number: &Number) -> Result<BigDecimal, CodecError> {
    let decimal = if let Some(i) = number.as_i64() {
        BigDecimal::from(i)
    } else if let Some(u) = number.as_u64() {
        BigDecimal::from(u)
    } else {
        let text = number.to_string();
        let mut decimal = parse_decimal(&text)?;
        // Keep floats distinguishable from integers.
        if scale(&decimal) == 0 {
            decimal = decimal.with_scale(1);
        }
        // Reject values whose decimal form would decode to a different number.
        if decode_number(&decimal)? != *number {
            return Err(CodecError::Unrepresentable(text));
        }
        decimal
    };

    check_range(&decimal)?;
    Ok(decimal)
}

/// Converts an exact decimal back into a JSON number.
pub fn decode_number(decimal: &BigDecimal) -> Result<Number, CodecError> {
    if scale(decimal) == 0 {
        if let Some(i) = decimal.to_i64() {
            return Ok(Number::from(i));
        }
        if let Some(u) = decimal.to_u64() {
            return Ok(Number::from(u));
        }
    }

    let text = decimal.to_string();
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or(CodecError::NonFinite(text))
}

/// Encodes one attribute value, walking nested lists and maps.
pub fn encode_value(value: &Value) -> Result<StoredValue, CodecError> {
    Ok(match value {
        Value::Null => StoredValue::Null,
        Value::Bool(b) => StoredValue::Bool(*b),
        Value::Number(n) => StoredValue::Number(encode_number(n)?),
        Value::String(s) => StoredValue::String(s.clone()),
        Value::Array(values) => {
            StoredValue::List(values.iter().map(encode_value).collect::<Result<_, _>>()?)
        }
        Value::Object(map) => StoredValue::Map(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), encode_value(v)?)))
                .collect::<Result<_, CodecError>>()?,
        ),
    })
}

/// Decodes one stored value, walking nested lists and maps.
pub fn decode_value(value: &StoredValue) -> Result<Value, CodecError> {
    Ok(match value {
        StoredValue::Null => Value::Null,
        StoredValue::Bool(b) => Value::Bool(*b),
        StoredValue::Number(d) => Value::Number(decode_number(d)?),
        StoredValue::String(s) => Value::String(s.clone()),
        StoredValue::List(values) => {
            Value::Array(values.iter().map(decode_value).collect::<Result<_, _>>()?)
        }
        StoredValue::Map(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), decode_value(v)?)))
                .collect::<Result<_, CodecError>>()?,
        ),
    })
}

/// Encodes a full attribute map into a storable item.
pub fn encode_attributes(attributes: &Attributes) -> Result<Item, CodecError> {
    attributes
        .iter()
        .map(|(k, v)| Ok((k.clone(), encode_value(v)?)))
        .collect()
}

/// Decodes a raw item into an attribute map.
pub fn decode_item(item: &Item) -> Result<Attributes, CodecError> {
    item.iter()
        .map(|(k, v)| Ok((k.clone(), decode_value(v)?)))
        .collect()
}

fn scale(decimal: &BigDecimal) -> i64 {
    decimal.as_bigint_and_exponent().1
}

fn check_range(decimal: &BigDecimal) -> Result<(), CodecError> {
    if *decimal == BigDecimal::from(0) {
        return Ok(());
    }

    let normalized = decimal.normalized();
    let digits = normalized.digits();
    let exponent = digits as i64 - 1 - scale(&normalized);
    if digits > MAX_SIGNIFICANT_DIGITS || !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
        return Err(CodecError::OutOfRange(decimal.to_string()));
    }
    Ok(())
}

//! Check vocabulary applied to captured exchanges.
//!
//! Each check returns `Result<(), CaseError>` so a case composes them with
//! `?` and fails fast on the first mismatch, carrying expected/actual detail
//! for diagnostics.

use std::time::Duration;

use restcheck_domain::response::Exchange;
use restcheck_domain::schema::validate;
use serde_json::Value;

use crate::error::CaseError;
use crate::ports::SchemaRegistry;

/// Checks that the exchange status equals `expected`.
///
/// # Errors
///
/// Returns a mismatch with both status codes on failure.
pub fn status_is(exchange: &Exchange, expected: u16) -> Result<(), CaseError> {
    if exchange.status == expected {
        Ok(())
    } else {
        Err(CaseError::mismatch(
            "unexpected status code",
            expected.to_string(),
            exchange.status.to_string(),
        ))
    }
}

/// Checks that the JSON body field at `pointer` equals `expected`.
///
/// `pointer` is a JSON Pointer (e.g. `/job`, `/data/0/id`).
///
/// # Errors
///
/// Fails on a non-JSON body, a missing field, or a value mismatch.
pub fn field_equals(exchange: &Exchange, pointer: &str, expected: &Value) -> Result<(), CaseError> {
    let document = exchange.json()?;
    let actual = document.pointer(pointer).ok_or_else(|| {
        CaseError::mismatch(
            format!("field '{pointer}' is missing from the response body"),
            expected.to_string(),
            "missing".to_string(),
        )
    })?;

    if actual == expected {
        Ok(())
    } else {
        Err(CaseError::mismatch(
            format!("field '{pointer}' does not match"),
            expected.to_string(),
            actual.to_string(),
        ))
    }
}

/// Checks that the exchange took at least `floor` of wall-clock time.
///
/// # Errors
///
/// Returns a mismatch with both durations on failure.
pub fn elapsed_at_least(exchange: &Exchange, floor: Duration) -> Result<(), CaseError> {
    if exchange.elapsed >= floor {
        Ok(())
    } else {
        Err(CaseError::mismatch(
            "response arrived before the latency floor",
            format!(">= {} ms", floor.as_millis()),
            format!("{} ms", exchange.elapsed.as_millis()),
        ))
    }
}

/// Checks that the exchange body conforms to the named schema.
///
/// # Errors
///
/// Propagates registry resolution errors, body decode errors, and the
/// validator's [`restcheck_domain::schema::Violation`] on mismatch.
pub fn conforms(
    exchange: &Exchange,
    registry: &dyn SchemaRegistry,
    name: &str,
) -> Result<(), CaseError> {
    let schema = registry.resolve(name)?;
    let document = exchange.json()?;
    validate(&document, &schema.definition)?;
    Ok(())
}

/// Extracts the array at `pointer` from a decoded body.
///
/// # Errors
///
/// Fails if the field is absent or not an array.
pub fn require_array<'a>(document: &'a Value, pointer: &str) -> Result<&'a Vec<Value>, CaseError> {
    document
        .pointer(pointer)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CaseError::mismatch(
                format!("field '{pointer}' is missing or not an array"),
                "array".to_string(),
                document
                    .pointer(pointer)
                    .map_or_else(|| "missing".to_string(), ToString::to_string),
            )
        })
}

/// Extracts the non-negative integer at `pointer` from a decoded body.
///
/// # Errors
///
/// Fails if the field is absent or not a non-negative integer.
pub fn require_u64(document: &Value, pointer: &str) -> Result<u64, CaseError> {
    document
        .pointer(pointer)
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            CaseError::mismatch(
                format!("field '{pointer}' is missing or not a non-negative integer"),
                "non-negative integer".to_string(),
                document
                    .pointer(pointer)
                    .map_or_else(|| "missing".to_string(), ToString::to_string),
            )
        })
}

//! Deferred addition over loosely typed values.
//!
//! A small example of an asynchronous computation that either resolves with
//! a value or rejects with a reason. The returned future does nothing until
//! it is awaited.

use serde_json::Value;
use thiserror::Error;

/// Reason a [`lazy_add`] call rejects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LazyAddError {
    /// At least one operand is not a JSON number.
    #[error("a and b must both be numbers")]
    NotNumbers,
}

/// Add `a` and `b` once awaited.
///
/// # Errors
///
/// [`LazyAddError::NotNumbers`] unless both operands are numbers.
pub async fn lazy_add(a: Value, b: Value) -> Result<f64, LazyAddError> {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => Ok(a + b),
        _ => Err(LazyAddError::NotNumbers),
    }
}

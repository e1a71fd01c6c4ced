//! Helpers shared by the domain services.

use serde_json::{Value, json};

use crate::domain::{Error, InvalidGuestCount};

/// Build an `invalid_request` error carrying `{field, code, value}` details.
pub(crate) fn invalid_field(
    field: &str,
    code: &str,
    value: Value,
    message: impl Into<String>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
        "value": value,
    }))
}

/// Reject a guest count that is not a positive 32-bit integer.
pub(crate) fn invalid_guest_count(field: &str, err: InvalidGuestCount) -> Error {
    invalid_field(
        field,
        "invalid_guest_count",
        json!(err.0),
        format!("{field} must be a positive integer"),
    )
}

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs carry raw strings; these helpers turn them into domain types
//! and produce `invalid_request` errors with `{field, code[, value]}` details.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    CustomerDraft, CustomerId, CustomerRef, CustomerValidationError, Error, PhoneNumber,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidDate,
    InvalidTime,
    InvalidNumber,
    InvalidPhoneNumber,
    InvalidEmail,
    EmptyName,
    AmbiguousCustomer,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidTime => "invalid_time",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidPhoneNumber => "invalid_phone_number",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::EmptyName => "empty",
            ErrorCode::AmbiguousCustomer => "ambiguous_customer",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

/// A numeric identifier that chat integrations may send as a JSON number or
/// as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumericId {
    /// JSON number.
    Number(i64),
    /// Decimal digits in a JSON string.
    Text(String),
}

impl NumericId {
    pub(crate) fn parse(self, field: FieldName) -> Result<i64, Error> {
        match self {
            NumericId::Number(value) => Ok(value),
            NumericId::Text(raw) => raw.trim().parse().map_err(|_| {
                let name = field.as_str();
                ValidationError::new(name, format!("{name} must be an integer"))
                    .with_value(ErrorCode::InvalidNumber, raw)
            }),
        }
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

/// Treat absent and whitespace-only optional inputs alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a date formatted YYYY-MM-DD"))
        .with_value(ErrorCode::InvalidDate, value)
}

pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_date_error(field, value))
}

pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    non_blank(value)
        .map(|raw| parse_date(&raw, field))
        .transpose()
}

pub(crate) fn invalid_time_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a time formatted HH:MM or HH:MM:SS"))
        .with_value(ErrorCode::InvalidTime, value)
}

pub(crate) fn parse_time(value: &str, field: FieldName) -> Result<NaiveTime, Error> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| invalid_time_error(field, value))
}

pub(crate) fn parse_optional_time(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveTime>, Error> {
    non_blank(value)
        .map(|raw| parse_time(&raw, field))
        .transpose()
}

/// Map customer validation failures onto the request field that caused them.
pub(crate) fn customer_error(err: &CustomerValidationError, value: &str) -> Error {
    let message = err.to_string();
    match err {
        CustomerValidationError::EmptyPhoneNumber
        | CustomerValidationError::PhoneNumberTooLong { .. }
        | CustomerValidationError::PhoneNumberInvalidCharacters => {
            ValidationError::new("phone_number", message)
                .with_value(ErrorCode::InvalidPhoneNumber, value)
        }
        CustomerValidationError::EmptyName => {
            ValidationError::new("customer_name", message).with_code(ErrorCode::EmptyName)
        }
        CustomerValidationError::InvalidEmail => {
            ValidationError::new("email", message).with_value(ErrorCode::InvalidEmail, value)
        }
    }
}

pub(crate) fn parse_phone_number(value: String) -> Result<PhoneNumber, Error> {
    PhoneNumber::new(value.as_str()).map_err(|err| customer_error(&err, &value))
}

/// Validate optional-name customer details, as `POST /customers/` accepts.
pub(crate) fn parse_customer_draft(
    name: Option<String>,
    phone_number: String,
    email: Option<String>,
) -> Result<CustomerDraft, Error> {
    let phone = parse_phone_number(phone_number)?;
    let email_text = email.clone().unwrap_or_default();
    CustomerDraft::new(name, phone, email).map_err(|err| customer_error(&err, &email_text))
}

/// Raw customer identification fields shared by booking and inquiry bodies.
#[derive(Debug, Default)]
pub(crate) struct CustomerFields {
    pub(crate) customer_id: Option<NumericId>,
    pub(crate) customer_name: Option<String>,
    pub(crate) phone_number: Option<String>,
    pub(crate) email: Option<String>,
}

/// Resolve exactly one of `customer_id` or `customer_name` + `phone_number`.
pub(crate) fn parse_customer_ref(fields: CustomerFields) -> Result<CustomerRef, Error> {
    let CustomerFields {
        customer_id,
        customer_name,
        phone_number,
        email,
    } = fields;

    match (customer_id, customer_name, phone_number) {
        (Some(id), None, None) => {
            let id = id.parse(FieldName::new("customer_id"))?;
            Ok(CustomerRef::Existing(CustomerId::new(id)))
        }
        (Some(_), _, _) => Err(ValidationError::new(
            "customer_id",
            "supply either customer_id or customer_name with phone_number, not both",
        )
        .with_code(ErrorCode::AmbiguousCustomer)),
        (None, Some(name), Some(phone)) => {
            let phone = parse_phone_number(phone)?;
            let email_text = email.clone().unwrap_or_default();
            let draft = CustomerDraft::named(name, phone, email)
                .map_err(|err| customer_error(&err, &email_text))?;
            Ok(CustomerRef::Details(draft))
        }
        (None, None, _) => Err(missing_field_error(FieldName::new("customer_name"))),
        (None, Some(_), None) => Err(missing_field_error(FieldName::new("phone_number"))),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;

    fn detail<'a>(err: &'a Error, key: &str) -> Option<&'a Value> {
        err.details().and_then(|details| details.get(key))
    }

    #[rstest]
    #[case("2026-10-31", NaiveDate::from_ymd_opt(2026, 10, 31))]
    #[case(" 2026-01-02 ", NaiveDate::from_ymd_opt(2026, 1, 2))]
    fn parses_iso_dates(#[case] raw: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(raw, FieldName::new("date_str")).ok(), expected);
    }

    #[rstest]
    #[case("31/10/2026")]
    #[case("2026-02-30")]
    #[case("tomorrow")]
    fn rejects_malformed_dates(#[case] raw: &str) {
        let err = parse_date(raw, FieldName::new("date_str")).expect_err("invalid date");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(detail(&err, "field"), Some(&json!("date_str")));
        assert_eq!(detail(&err, "code"), Some(&json!("invalid_date")));
        assert_eq!(detail(&err, "value"), Some(&json!(raw)));
    }

    #[rstest]
    #[case("18:00", NaiveTime::from_hms_opt(18, 0, 0))]
    #[case("09:30:15", NaiveTime::from_hms_opt(9, 30, 15))]
    fn parses_times_with_optional_seconds(
        #[case] raw: &str,
        #[case] expected: Option<NaiveTime>,
    ) {
        assert_eq!(parse_time(raw, FieldName::new("time")).ok(), expected);
    }

    #[rstest]
    fn rejects_malformed_times() {
        let err = parse_time("6pm", FieldName::new("time")).expect_err("invalid time");
        assert_eq!(detail(&err, "code"), Some(&json!("invalid_time")));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn blank_optional_inputs_are_absent(#[case] raw: Option<String>) {
        assert_eq!(
            parse_optional_date(raw.clone(), FieldName::new("date_str")).ok(),
            Some(None)
        );
        assert_eq!(
            parse_optional_time(raw, FieldName::new("time")).ok(),
            Some(None)
        );
    }

    #[rstest]
    #[case(NumericId::Number(7), Some(7))]
    #[case(NumericId::Text(" 12 ".to_owned()), Some(12))]
    #[case(NumericId::Text("twelve".to_owned()), None)]
    fn numeric_ids_accept_numbers_and_numeric_text(
        #[case] raw: NumericId,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(raw.parse(FieldName::new("slot_id")).ok(), expected);
    }

    #[rstest]
    fn existing_customer_id_resolves() {
        let customer = parse_customer_ref(CustomerFields {
            customer_id: Some(NumericId::Number(42)),
            ..CustomerFields::default()
        })
        .expect("existing customer");
        assert_eq!(customer, CustomerRef::Existing(CustomerId::new(42)));
    }

    #[rstest]
    fn details_build_a_named_draft() {
        let customer = parse_customer_ref(CustomerFields {
            customer_name: Some("Ada".into()),
            phone_number: Some("555-0100".into()),
            email: Some("ada@example.com".into()),
            ..CustomerFields::default()
        })
        .expect("customer details");
        let CustomerRef::Details(draft) = customer else {
            panic!("expected details");
        };
        assert_eq!(draft.name(), Some("Ada"));
        assert_eq!(draft.phone_number().as_str(), "555-0100");
        assert_eq!(draft.email(), Some("ada@example.com"));
    }

    #[rstest]
    fn both_forms_are_ambiguous() {
        let err = parse_customer_ref(CustomerFields {
            customer_id: Some(NumericId::Number(42)),
            customer_name: Some("Ada".into()),
            phone_number: Some("555-0100".into()),
            email: None,
        })
        .expect_err("ambiguous");
        assert_eq!(detail(&err, "code"), Some(&json!("ambiguous_customer")));
    }

    #[rstest]
    #[case(None, None, "customer_name")]
    #[case(None, Some("555-0100"), "customer_name")]
    #[case(Some("Ada"), None, "phone_number")]
    fn incomplete_details_name_the_missing_field(
        #[case] name: Option<&str>,
        #[case] phone: Option<&str>,
        #[case] field: &str,
    ) {
        let err = parse_customer_ref(CustomerFields {
            customer_name: name.map(str::to_owned),
            phone_number: phone.map(str::to_owned),
            ..CustomerFields::default()
        })
        .expect_err("incomplete customer");
        assert_eq!(detail(&err, "field"), Some(&json!(field)));
        assert_eq!(detail(&err, "code"), Some(&json!("missing_field")));
    }

    #[rstest]
    #[case("Ada", "call me", None, "phone_number")]
    #[case("  ", "555-0100", None, "customer_name")]
    #[case("Ada", "555-0100", Some("not-an-email"), "email")]
    fn invalid_details_name_the_offending_field(
        #[case] name: &str,
        #[case] phone: &str,
        #[case] email: Option<&str>,
        #[case] field: &str,
    ) {
        let err = parse_customer_ref(CustomerFields {
            customer_name: Some(name.to_owned()),
            phone_number: Some(phone.to_owned()),
            email: email.map(str::to_owned),
            customer_id: None,
        })
        .expect_err("invalid customer");
        assert_eq!(detail(&err, "field"), Some(&json!(field)));
    }

    #[rstest]
    fn optional_name_drafts_accept_missing_name() {
        let draft = parse_customer_draft(None, "555-0100".into(), None).expect("draft");
        assert_eq!(draft.name(), None);
    }
}

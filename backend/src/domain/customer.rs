//! Customer data model.
//!
//! A customer is identified by phone number. Other attributes may be
//! refreshed whenever the same phone number books or enquires again.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted length of a phone number, in characters.
pub const PHONE_NUMBER_MAX: usize = 32;

/// Validation errors for customer inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerValidationError {
    /// The phone number was blank.
    #[error("phone number must not be empty")]
    EmptyPhoneNumber,
    /// The phone number exceeded [`PHONE_NUMBER_MAX`].
    #[error("phone number must be at most {max} characters")]
    PhoneNumberTooLong {
        /// Maximum length.
        max: usize,
    },
    /// The phone number contained characters other than digits and separators.
    #[error("phone number may only contain digits, spaces, and + - ( ) . characters")]
    PhoneNumberInvalidCharacters,
    /// The customer name was blank.
    #[error("customer name must not be empty")]
    EmptyName,
    /// The email address was not plausibly formed.
    #[error("email must contain a single @ with text on both sides")]
    InvalidEmail,
}

/// Stable customer identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier for persistence adapters.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone number used as the customer's natural key.
///
/// Surrounding whitespace is trimmed; the remaining text is stored as given
/// so lookups match what callers originally sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a phone number.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::PhoneNumber;
    ///
    /// let phone = PhoneNumber::new(" 555-0100 ").expect("valid phone");
    /// assert_eq!(phone.as_str(), "555-0100");
    /// assert!(PhoneNumber::new("call me").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CustomerValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CustomerValidationError::EmptyPhoneNumber);
        }
        if trimmed.chars().count() > PHONE_NUMBER_MAX {
            return Err(CustomerValidationError::PhoneNumberTooLong {
                max: PHONE_NUMBER_MAX,
            });
        }
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.');
        if !trimmed.chars().all(allowed) || !trimmed.chars().any(|c| c.is_ascii_digit()) {
            return Err(CustomerValidationError::PhoneNumberInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the phone number text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CustomerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

fn normalise_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

fn validate_email(value: Option<String>) -> Result<Option<String>, CustomerValidationError> {
    let Some(email) = normalise_optional(value) else {
        return Ok(None);
    };
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(Some(email))
        }
        _ => Err(CustomerValidationError::InvalidEmail),
    }
}

/// Validated customer attributes used for upserts and find-or-create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    name: Option<String>,
    phone_number: PhoneNumber,
    email: Option<String>,
}

impl CustomerDraft {
    /// Build a draft where the name is optional.
    ///
    /// Blank optional values collapse to `None`.
    pub fn new(
        name: Option<String>,
        phone_number: PhoneNumber,
        email: Option<String>,
    ) -> Result<Self, CustomerValidationError> {
        Ok(Self {
            name: normalise_optional(name),
            phone_number,
            email: validate_email(email)?,
        })
    }

    /// Build a draft that must carry a non-blank name, as booking and
    /// inquiry requests do.
    pub fn named(
        name: String,
        phone_number: PhoneNumber,
        email: Option<String>,
    ) -> Result<Self, CustomerValidationError> {
        if name.trim().is_empty() {
            return Err(CustomerValidationError::EmptyName);
        }
        Self::new(Some(name), phone_number, email)
    }

    /// Customer name, if supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Natural key.
    #[must_use]
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Email address, if supplied.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Stored customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: Option<String>,
    phone_number: PhoneNumber,
    email: Option<String>,
}

impl Customer {
    /// Assemble a customer from stored values.
    #[must_use]
    pub fn new(
        id: CustomerId,
        name: Option<String>,
        phone_number: PhoneNumber,
        email: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            email,
        }
    }

    /// Customer identifier.
    #[must_use]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Customer name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Natural key.
    #[must_use]
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Email address, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// How a booking or inquiry identifies its customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerRef {
    /// A customer the caller already resolved.
    Existing(CustomerId),
    /// Raw details to upsert by phone number.
    Details(CustomerDraft),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("555-0100")]
    #[case("+44 (0)20 7946 0958")]
    #[case("555.0100")]
    fn accepts_common_phone_formats(#[case] raw: &str) {
        let phone = PhoneNumber::new(raw).expect("valid phone");
        assert_eq!(phone.as_str(), raw);
    }

    #[rstest]
    #[case("", CustomerValidationError::EmptyPhoneNumber)]
    #[case("   ", CustomerValidationError::EmptyPhoneNumber)]
    #[case("555-CALL-NOW", CustomerValidationError::PhoneNumberInvalidCharacters)]
    #[case("---", CustomerValidationError::PhoneNumberInvalidCharacters)]
    #[case(
        "123456789012345678901234567890123",
        CustomerValidationError::PhoneNumberTooLong { max: PHONE_NUMBER_MAX }
    )]
    fn rejects_bad_phone_numbers(#[case] raw: &str, #[case] expected: CustomerValidationError) {
        assert_eq!(PhoneNumber::new(raw), Err(expected));
    }

    #[rstest]
    fn draft_collapses_blank_optionals() {
        let phone = PhoneNumber::new("555-0100").expect("valid phone");
        let draft =
            CustomerDraft::new(Some("  ".into()), phone, Some(String::new())).expect("valid draft");

        assert!(draft.name().is_none());
        assert!(draft.email().is_none());
    }

    #[rstest]
    #[case("ada@example")]
    #[case("  ada@example.com ")]
    fn draft_accepts_plausible_emails(#[case] email: &str) {
        let phone = PhoneNumber::new("555-0100").expect("valid phone");
        let draft = CustomerDraft::new(None, phone, Some(email.into())).expect("valid draft");
        assert_eq!(draft.email(), Some(email.trim()));
    }

    #[rstest]
    #[case("ada.example.com")]
    #[case("@example.com")]
    #[case("ada@")]
    #[case("a@b@c")]
    fn draft_rejects_malformed_emails(#[case] email: &str) {
        let phone = PhoneNumber::new("555-0100").expect("valid phone");
        let result = CustomerDraft::new(None, phone, Some(email.into()));
        assert_eq!(result, Err(CustomerValidationError::InvalidEmail));
    }

    #[rstest]
    fn named_draft_requires_name() {
        let phone = PhoneNumber::new("555-0100").expect("valid phone");
        let result = CustomerDraft::named(" ".into(), phone, None);
        assert_eq!(result, Err(CustomerValidationError::EmptyName));
    }
}

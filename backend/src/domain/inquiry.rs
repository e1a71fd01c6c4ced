//! Event inquiry data model.
//!
//! Inquiries are sales follow-up records for private events. They never
//! touch slot availability.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::booking::GuestCount;
use super::customer::CustomerRef;

/// Stable inquiry identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InquiryId(i64);

impl InquiryId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for inquiry drafts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryValidationError {
    /// The event type was blank.
    #[error("event type must not be empty")]
    EmptyEventType,
}

/// Validated inquiry ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInquiryDraft {
    customer: CustomerRef,
    event_type: String,
    proposed_date: Option<NaiveDate>,
    guest_count: Option<GuestCount>,
    requirements: Option<String>,
}

impl EventInquiryDraft {
    /// Validate inquiry fields; blank requirements collapse to `None`.
    pub fn new(
        customer: CustomerRef,
        event_type: impl Into<String>,
        proposed_date: Option<NaiveDate>,
        guest_count: Option<GuestCount>,
        requirements: Option<String>,
    ) -> Result<Self, InquiryValidationError> {
        let event_type = event_type.into().trim().to_owned();
        if event_type.is_empty() {
            return Err(InquiryValidationError::EmptyEventType);
        }
        Ok(Self {
            customer,
            event_type,
            proposed_date,
            guest_count,
            requirements: requirements
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
        })
    }

    /// Customer reference to resolve before inserting.
    #[must_use]
    pub fn customer(&self) -> &CustomerRef {
        &self.customer
    }

    /// Kind of event, e.g. `birthday` or `corporate`.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Date the customer has in mind.
    #[must_use]
    pub fn proposed_date(&self) -> Option<NaiveDate> {
        self.proposed_date
    }

    /// Estimated party size.
    #[must_use]
    pub fn guest_count(&self) -> Option<GuestCount> {
        self.guest_count
    }

    /// Free-form requirements.
    #[must_use]
    pub fn requirements(&self) -> Option<&str> {
        self.requirements.as_deref()
    }
}

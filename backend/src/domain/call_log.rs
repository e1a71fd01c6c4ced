//! Call log data model.
//!
//! One row per finished voice conversation. Rows are append-only.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;

/// Inclusive bounds for the caller satisfaction rating.
pub const RATING_RANGE: std::ops::RangeInclusive<i16> = 1..=5;

/// Stable call log identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallLogId(i64);

impl CallLogId {
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

impl fmt::Display for CallLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for call log drafts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallLogValidationError {
    /// A required text field was blank.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Offending field name.
        field: &'static str,
    },
    /// Duration was negative.
    #[error("call duration must not be negative, got {0}")]
    NegativeDuration(i64),
    /// Duration did not fit the stored column.
    #[error("call duration is too large, got {0}")]
    DurationTooLarge(i64),
    /// Rating fell outside [`RATING_RANGE`].
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

/// Outcome flags recorded for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallFlags {
    /// The caller asked for something the assistant does not handle.
    pub was_out_of_scope: bool,
    /// The call was handed over to a human.
    pub was_escalated: bool,
    /// The caller suspected they were talking to an AI.
    pub suspects_ai: bool,
}

/// Raw call log fields as received from the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallLogFields {
    /// Known customer, if the caller was identified.
    pub customer_id: Option<i64>,
    /// Call length in seconds.
    pub call_duration: i64,
    /// Detected caller intent.
    pub call_intent: String,
    /// Conversation summary.
    pub call_summary: String,
    /// Sentiment label.
    pub sentiment: String,
    /// Optional 1–5 satisfaction rating.
    pub rating: Option<i64>,
    /// Outcome flags.
    pub flags: CallFlags,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Voice platform conversation identifier.
    pub conversation_id: String,
}

/// Validated call log ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallLogDraft {
    customer_id: Option<CustomerId>,
    call_duration: i32,
    call_intent: String,
    call_summary: String,
    sentiment: String,
    rating: Option<i16>,
    flags: CallFlags,
    notes: Option<String>,
    conversation_id: String,
}

fn required(field: &'static str, value: String) -> Result<String, CallLogValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CallLogValidationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

impl CallLogDraft {
    /// Validate raw fields.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CallFlags, CallLogDraft, CallLogFields};
    ///
    /// let draft = CallLogDraft::new(CallLogFields {
    ///     call_duration: 95,
    ///     call_intent: "booking".into(),
    ///     call_summary: "Booked the manor for four".into(),
    ///     sentiment: "positive".into(),
    ///     flags: CallFlags { suspects_ai: true, ..CallFlags::default() },
    ///     conversation_id: "conv_123".into(),
    ///     ..CallLogFields::default()
    /// })
    /// .expect("valid call log");
    /// assert!(draft.flags().suspects_ai);
    /// ```
    pub fn new(fields: CallLogFields) -> Result<Self, CallLogValidationError> {
        let CallLogFields {
            customer_id,
            call_duration,
            call_intent,
            call_summary,
            sentiment,
            rating,
            flags,
            notes,
            conversation_id,
        } = fields;

        if call_duration < 0 {
            return Err(CallLogValidationError::NegativeDuration(call_duration));
        }
        let call_duration = i32::try_from(call_duration)
            .map_err(|_| CallLogValidationError::DurationTooLarge(call_duration))?;
        let rating = rating
            .map(|raw| {
                i16::try_from(raw)
                    .ok()
                    .filter(|value| RATING_RANGE.contains(value))
                    .ok_or(CallLogValidationError::RatingOutOfRange(raw))
            })
            .transpose()?;

        Ok(Self {
            customer_id: customer_id.map(CustomerId::new),
            call_duration,
            call_intent: required("call_intent", call_intent)?,
            call_summary: required("call_summary", call_summary)?,
            sentiment: required("sentiment", sentiment)?,
            rating,
            flags,
            notes: notes
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            conversation_id: required("conversation_id", conversation_id)?,
        })
    }

    /// Identified customer.
    #[must_use]
    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    /// Call length in seconds.
    #[must_use]
    pub fn call_duration(&self) -> i32 {
        self.call_duration
    }

    /// Detected caller intent.
    #[must_use]
    pub fn call_intent(&self) -> &str {
        &self.call_intent
    }

    /// Conversation summary.
    #[must_use]
    pub fn call_summary(&self) -> &str {
        &self.call_summary
    }

    /// Sentiment label.
    #[must_use]
    pub fn sentiment(&self) -> &str {
        &self.sentiment
    }

    /// Satisfaction rating.
    #[must_use]
    pub fn rating(&self) -> Option<i16> {
        self.rating
    }

    /// Outcome flags.
    #[must_use]
    pub fn flags(&self) -> CallFlags {
        self.flags
    }

    /// Free-form notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Voice platform conversation identifier.
    #[must_use]
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }
}

/// Identifier and timestamp assigned when a call log is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallLogReceipt {
    /// Generated identifier.
    pub log_id: CallLogId,
    /// Store-assigned creation time.
    pub created_at: DateTime<Utc>,
}

//! Driving port for call log ingestion.

use async_trait::async_trait;

use crate::domain::{CallLogFields, CallLogReceipt, Error};

/// Domain use-case port for recording finished calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallLogCommand: Send + Sync {
    /// Validate and append one call log.
    ///
    /// Blank required text and out-of-range ratings fail with
    /// `invalid_request`; a customer id the store does not know fails with
    /// `not_found`.
    async fn log_call(&self, fields: CallLogFields) -> Result<CallLogReceipt, Error>;
}

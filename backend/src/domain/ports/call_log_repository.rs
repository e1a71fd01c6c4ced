//! Port for appending call logs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{CallLogDraft, CallLogId, CallLogReceipt};

use super::define_port_error;

define_port_error! {
    /// Errors raised by call log repository adapters.
    pub enum CallLogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "call log repository connection failed: {message}",
        /// Insert failed during execution.
        Query { message: String } =>
            "call log repository query failed: {message}",
        /// The referenced customer does not exist.
        UnknownCustomer { customer_id: i64 } =>
            "customer {customer_id} does not exist",
    }
}

/// Port for call log persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallLogRepository: Send + Sync {
    /// Insert one call log and return the generated id and timestamp.
    async fn insert(&self, call_log: &CallLogDraft)
    -> Result<CallLogReceipt, CallLogRepositoryError>;
}

/// Fixture implementation for wiring without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCallLogRepository;

#[async_trait]
impl CallLogRepository for FixtureCallLogRepository {
    async fn insert(
        &self,
        _call_log: &CallLogDraft,
    ) -> Result<CallLogReceipt, CallLogRepositoryError> {
        Ok(CallLogReceipt {
            log_id: CallLogId::new(1),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
    }
}

//! Call log ingestion service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

use crate::domain::ports::{CallLogCommand, CallLogRepository, CallLogRepositoryError};
use crate::domain::service_support::invalid_field;
use crate::domain::{CallLogDraft, CallLogFields, CallLogReceipt, CallLogValidationError, Error};

/// Call log service implementing [`CallLogCommand`].
#[derive(Clone)]
pub struct CallLogService<L> {
    call_logs: Arc<L>,
}

impl<L> CallLogService<L> {
    /// Create a new service backed by `call_logs`.
    pub fn new(call_logs: Arc<L>) -> Self {
        Self { call_logs }
    }
}

fn map_validation_error(error: CallLogValidationError) -> Error {
    let message = error.to_string();
    match error {
        CallLogValidationError::EmptyField { field } => {
            invalid_field(field, "empty", Value::Null, message)
        }
        CallLogValidationError::NegativeDuration(value)
        | CallLogValidationError::DurationTooLarge(value) => {
            invalid_field("call_duration", "out_of_range", json!(value), message)
        }
        CallLogValidationError::RatingOutOfRange(value) => {
            invalid_field("rating", "out_of_range", json!(value), message)
        }
    }
}

fn map_call_log_error(error: CallLogRepositoryError) -> Error {
    match error {
        CallLogRepositoryError::Connection { message } => {
            Error::upstream(format!("call log store unavailable: {message}"))
        }
        CallLogRepositoryError::Query { message } => {
            Error::upstream(format!("call log store error: {message}"))
        }
        CallLogRepositoryError::UnknownCustomer { customer_id } => {
            Error::not_found(format!("customer {customer_id} not found")).with_details(json!({
                "field": "customer_id",
                "code": "not_found",
                "value": customer_id,
            }))
        }
    }
}

#[async_trait]
impl<L> CallLogCommand for CallLogService<L>
where
    L: CallLogRepository,
{
    async fn log_call(&self, fields: CallLogFields) -> Result<CallLogReceipt, Error> {
        let draft = CallLogDraft::new(fields).map_err(map_validation_error)?;
        let receipt = self
            .call_logs
            .insert(&draft)
            .await
            .map_err(map_call_log_error)?;
        info!(
            log_id = receipt.log_id.get(),
            conversation_id = draft.conversation_id(),
            was_escalated = draft.flags().was_escalated,
            "call log recorded"
        );
        Ok(receipt)
    }
}

//! PostgreSQL-backed `CallLogRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CallLogRepository, CallLogRepositoryError};
use crate::domain::{CallLogDraft, CallLogId, CallLogReceipt};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::NewCallLogRow;
use super::pool::{DbPool, PoolError};
use super::schema::call_logs;

/// Diesel-backed implementation of the `CallLogRepository` port.
#[derive(Clone)]
pub struct DieselCallLogRepository {
    pool: DbPool,
}

impl DieselCallLogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CallLogRepositoryError {
    map_basic_pool_error(error, CallLogRepositoryError::connection)
}

/// The only foreign key on `call_logs` is `customer_id`.
fn map_insert_error(error: DieselError, draft: &CallLogDraft) -> CallLogRepositoryError {
    match draft.customer_id() {
        Some(customer_id) if is_foreign_key_violation(&error) => {
            CallLogRepositoryError::unknown_customer(customer_id.get())
        }
        _ => map_basic_diesel_error(
            error,
            CallLogRepositoryError::query,
            CallLogRepositoryError::connection,
        ),
    }
}

#[async_trait]
impl CallLogRepository for DieselCallLogRepository {
    async fn insert(
        &self,
        call_log: &CallLogDraft,
    ) -> Result<CallLogReceipt, CallLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let (log_id, created_at): (i64, DateTime<Utc>) = diesel::insert_into(call_logs::table)
            .values(NewCallLogRow::from(call_log))
            .returning((call_logs::log_id, call_logs::created_at))
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, call_log))?;

        Ok(CallLogReceipt {
            log_id: CallLogId::new(log_id),
            created_at,
        })
    }
}

//! PostgreSQL-backed `InquiryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{InquiryOutcome, InquiryRepository, InquiryRepositoryError};
use crate::domain::{CustomerId, EventInquiryDraft, GuestCount, InquiryId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_customer_repository::resolve_customer;
use super::diesel_transaction::TxAbort;
use super::models::NewInquiryRow;
use super::pool::{DbPool, PoolError};
use super::schema::event_inquiries;

/// Diesel-backed implementation of the `InquiryRepository` port.
#[derive(Clone)]
pub struct DieselInquiryRepository {
    pool: DbPool,
}

impl DieselInquiryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InquiryRepositoryError {
    map_basic_pool_error(error, InquiryRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> InquiryRepositoryError {
    map_basic_diesel_error(
        error,
        InquiryRepositoryError::query,
        InquiryRepositoryError::connection,
    )
}

fn map_inquiry_abort(
    abort: TxAbort<InquiryOutcome>,
) -> Result<InquiryOutcome, InquiryRepositoryError> {
    match abort {
        TxAbort::Rejected(outcome) => Ok(outcome),
        TxAbort::Diesel(error) => Err(map_diesel_error(error)),
    }
}

#[async_trait]
impl InquiryRepository for DieselInquiryRepository {
    async fn create(
        &self,
        inquiry: &EventInquiryDraft,
    ) -> Result<InquiryOutcome, InquiryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Result<InquiryOutcome, TxAbort<InquiryOutcome>> = conn
            .transaction(|conn| {
                async move {
                    let Some(customer_id) = resolve_customer(conn, inquiry.customer()).await?
                    else {
                        return Err(TxAbort::Rejected(InquiryOutcome::CustomerNotFound));
                    };

                    let inquiry_id: i64 = diesel::insert_into(event_inquiries::table)
                        .values(NewInquiryRow {
                            customer_id,
                            event_type: inquiry.event_type(),
                            proposed_date: inquiry.proposed_date(),
                            guest_count: inquiry.guest_count().map(GuestCount::get),
                            requirements: inquiry.requirements(),
                        })
                        .returning(event_inquiries::inquiry_id)
                        .get_result(conn)
                        .await?;

                    Ok(InquiryOutcome::Created {
                        inquiry_id: InquiryId::new(inquiry_id),
                        customer_id: CustomerId::new(customer_id),
                    })
                }
                .scope_boxed()
            })
            .await;

        result.or_else(map_inquiry_abort)
    }
}

//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.
//!
//! A reservation is one transaction: claim the slot with a conditional
//! update, resolve the customer, insert the booking. Any rejection rolls all
//! three back.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{BookingRepository, BookingRepositoryError, ReservationOutcome};
use crate::domain::{
    Booking, BookingDetails, BookingId, CustomerId, NewBooking, Slot, SlotStatus,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_customer_repository::resolve_customer;
use super::diesel_transaction::TxAbort;
use super::models::{BookingRow, NewBookingRow, SlotRow};
use super::pool::{DbPool, PoolError};
use super::schema::{bookings, slots};

/// Diesel-backed implementation of the `BookingRepository` port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(error, BookingRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> BookingRepositoryError {
    map_basic_diesel_error(
        error,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

fn map_reservation_abort(
    abort: TxAbort<ReservationOutcome>,
) -> Result<ReservationOutcome, BookingRepositoryError> {
    match abort {
        TxAbort::Rejected(outcome) => Ok(outcome),
        // The unique index on bookings.slot_id backs up the conditional
        // update.
        TxAbort::Diesel(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info))
            if info.table_name() == Some("bookings") =>
        {
            debug!(
                constraint = info.constraint_name(),
                "booking insert hit unique slot index"
            );
            Ok(ReservationOutcome::SlotUnavailable)
        }
        TxAbort::Diesel(error) => Err(map_diesel_error(error)),
    }
}

fn row_to_details(
    (booking, slot): (BookingRow, SlotRow),
) -> Result<BookingDetails, BookingRepositoryError> {
    Ok(BookingDetails {
        booking: Booking::try_from(booking).map_err(BookingRepositoryError::query)?,
        slot: Slot::try_from(slot).map_err(BookingRepositoryError::query)?,
    })
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn reserve(
        &self,
        booking: &NewBooking,
    ) -> Result<ReservationOutcome, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let slot_id = booking.slot_id.get();
        let guest_count = booking.guest_count.get();
        let customer = &booking.customer;

        let result: Result<ReservationOutcome, TxAbort<ReservationOutcome>> = conn
            .transaction(|conn| {
                async move {
                    let claimed = diesel::update(
                        slots::table
                            .filter(slots::slot_id.eq(slot_id))
                            .filter(slots::status.eq(SlotStatus::Available.as_str())),
                    )
                    .set(slots::status.eq(SlotStatus::Booked.as_str()))
                    .execute(conn)
                    .await?;

                    if claimed == 0 {
                        let slot_exists: bool = diesel::select(exists(
                            slots::table.filter(slots::slot_id.eq(slot_id)),
                        ))
                        .get_result(conn)
                        .await?;
                        return Err(TxAbort::Rejected(if slot_exists {
                            ReservationOutcome::SlotUnavailable
                        } else {
                            ReservationOutcome::SlotNotFound
                        }));
                    }

                    let Some(customer_id) = resolve_customer(conn, customer).await? else {
                        return Err(TxAbort::Rejected(ReservationOutcome::CustomerNotFound));
                    };

                    let booking_id: i64 = diesel::insert_into(bookings::table)
                        .values(NewBookingRow {
                            slot_id,
                            customer_id,
                            guest_count,
                        })
                        .returning(bookings::booking_id)
                        .get_result(conn)
                        .await?;

                    Ok(ReservationOutcome::Reserved {
                        booking_id: BookingId::new(booking_id),
                        customer_id: CustomerId::new(customer_id),
                    })
                }
                .scope_boxed()
            })
            .await;

        result.or_else(map_reservation_abort)
    }

    async fn list_upcoming_for_customer(
        &self,
        customer_id: CustomerId,
        from: NaiveDate,
    ) -> Result<Vec<BookingDetails>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(BookingRow, SlotRow)> = bookings::table
            .inner_join(slots::table)
            .filter(bookings::customer_id.eq(customer_id.get()))
            .filter(slots::slot_date.ge(from))
            .order_by((
                slots::slot_date.asc(),
                slots::slot_time.asc(),
                bookings::booking_id.asc(),
            ))
            .select((BookingRow::as_select(), SlotRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_details).collect()
    }
}

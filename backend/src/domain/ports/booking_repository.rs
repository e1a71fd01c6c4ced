//! Port for claiming slots and reading bookings.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{BookingDetails, BookingId, CustomerId, NewBooking};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
    }
}

/// Result of a reservation attempt.
///
/// Every variant other than `Reserved` leaves the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationOutcome {
    /// The slot was claimed and a booking row inserted.
    Reserved {
        /// New booking.
        booking_id: BookingId,
        /// Customer the booking belongs to.
        customer_id: CustomerId,
    },
    /// No slot has the requested id.
    SlotNotFound,
    /// The slot exists but is no longer `Available`.
    SlotUnavailable,
    /// The request referenced a customer id that does not exist.
    CustomerNotFound,
}

/// Port for booking persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically claim the slot, resolve the customer, and insert the
    /// booking. The slot claim must be a conditional write so two concurrent
    /// requests for one slot cannot both succeed.
    async fn reserve(
        &self,
        booking: &NewBooking,
    ) -> Result<ReservationOutcome, BookingRepositoryError>;

    /// List a customer's bookings whose slot date is on or after `from`,
    /// joined with their slot and ordered by slot date and time.
    async fn list_upcoming_for_customer(
        &self,
        customer_id: CustomerId,
        from: NaiveDate,
    ) -> Result<Vec<BookingDetails>, BookingRepositoryError>;
}

/// Fixture implementation for wiring without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingRepository;

#[async_trait]
impl BookingRepository for FixtureBookingRepository {
    async fn reserve(
        &self,
        _booking: &NewBooking,
    ) -> Result<ReservationOutcome, BookingRepositoryError> {
        Ok(ReservationOutcome::SlotNotFound)
    }

    async fn list_upcoming_for_customer(
        &self,
        _customer_id: CustomerId,
        _from: NaiveDate,
    ) -> Result<Vec<BookingDetails>, BookingRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::{CustomerRef, GuestCount, SlotId};

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_missing_slot() {
        let booking = NewBooking {
            slot_id: SlotId::new(42),
            customer: CustomerRef::Existing(CustomerId::new(1)),
            guest_count: GuestCount::new(2).expect("valid count"),
        };
        let outcome = FixtureBookingRepository
            .reserve(&booking)
            .await
            .expect("fixture reserve succeeds");
        assert_eq!(outcome, ReservationOutcome::SlotNotFound);
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = BookingRepositoryError::connection("timed out");
        assert_eq!(
            err.to_string(),
            "booking repository connection failed: timed out"
        );
    }
}

//! Booking domain services.
//!
//! Implements booking creation and the phone-number lookup on top of the
//! booking and customer repositories. Reservation atomicity lives in the
//! repository; this layer validates input and maps outcomes onto the error
//! taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    BookingCommand, BookingDetailsQuery, BookingRepository, BookingRepositoryError,
    CreateBookingRequest, CreateBookingResponse, CustomerRepository, CustomerRepositoryError,
    ReservationOutcome,
};
use crate::domain::service_support::invalid_guest_count;
use crate::domain::{
    BookingDetails, CustomerId, CustomerRef, Error, GuestCount, NewBooking, PhoneNumber, SlotId,
};

/// Booking service implementing the booking driving ports.
#[derive(Clone)]
pub struct BookingService<B, C> {
    bookings: Arc<B>,
    customers: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<B, C> BookingService<B, C> {
    /// Create a new service with the given repositories.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use backend::domain::BookingService;
    /// # use backend::domain::ports::{FixtureBookingRepository, FixtureCustomerRepository};
    /// # use mockable::DefaultClock;
    /// let service = BookingService::new(
    ///     Arc::new(FixtureBookingRepository),
    ///     Arc::new(FixtureCustomerRepository),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(bookings: Arc<B>, customers: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            bookings,
            customers,
            clock,
        }
    }
}

pub(crate) fn map_booking_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::upstream(format!("booking store unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::upstream(format!("booking store error: {message}"))
        }
    }
}

pub(crate) fn map_customer_error(error: CustomerRepositoryError) -> Error {
    match error {
        CustomerRepositoryError::Connection { message } => {
            Error::upstream(format!("customer store unavailable: {message}"))
        }
        CustomerRepositoryError::Query { message } => {
            Error::upstream(format!("customer store error: {message}"))
        }
    }
}

pub(crate) fn customer_not_found(customer: &CustomerRef) -> Error {
    match customer {
        CustomerRef::Existing(id) => Error::not_found(format!("customer {id} not found"))
            .with_details(json!({ "field": "customer_id", "code": "not_found", "value": id.get() })),
        CustomerRef::Details(draft) => Error::not_found(format!(
            "customer with phone number {} not found",
            draft.phone_number()
        )),
    }
}

fn slot_not_found(slot_id: SlotId) -> Error {
    Error::not_found(format!("slot {} not found", slot_id.get())).with_details(json!({
        "field": "slot_id",
        "code": "not_found",
        "value": slot_id.get(),
    }))
}

fn slot_unavailable(slot_id: SlotId) -> Error {
    Error::conflict(format!("slot {} is no longer available", slot_id.get())).with_details(json!({
        "field": "slot_id",
        "code": "slot_unavailable",
        "value": slot_id.get(),
    }))
}

#[async_trait]
impl<B, C> BookingCommand for BookingService<B, C>
where
    B: BookingRepository,
    C: CustomerRepository,
{
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error> {
        let guest_count = GuestCount::new(request.guest_count)
            .map_err(|err| invalid_guest_count("guest_count", err))?;
        let booking = NewBooking {
            slot_id: request.slot_id,
            customer: request.customer,
            guest_count,
        };

        match self
            .bookings
            .reserve(&booking)
            .await
            .map_err(map_booking_error)?
        {
            ReservationOutcome::Reserved {
                booking_id,
                customer_id,
            } => {
                info!(
                    booking_id = booking_id.get(),
                    slot_id = booking.slot_id.get(),
                    customer_id = customer_id.get(),
                    guest_count = guest_count.get(),
                    "booking created"
                );
                Ok(CreateBookingResponse {
                    booking_id,
                    customer_id,
                })
            }
            ReservationOutcome::SlotNotFound => Err(slot_not_found(booking.slot_id)),
            ReservationOutcome::SlotUnavailable => Err(slot_unavailable(booking.slot_id)),
            ReservationOutcome::CustomerNotFound => Err(customer_not_found(&booking.customer)),
        }
    }
}

impl<B, C> BookingService<B, C>
where
    B: BookingRepository,
    C: CustomerRepository,
{
    async fn upcoming_for(&self, customer_id: CustomerId) -> Result<Vec<BookingDetails>, Error> {
        let today = self.clock.utc().date_naive();
        self.bookings
            .list_upcoming_for_customer(customer_id, today)
            .await
            .map_err(map_booking_error)
    }
}

#[async_trait]
impl<B, C> BookingDetailsQuery for BookingService<B, C>
where
    B: BookingRepository,
    C: CustomerRepository,
{
    async fn booking_details(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Vec<BookingDetails>, Error> {
        let Some(customer) = self
            .customers
            .find_by_phone(phone_number)
            .await
            .map_err(map_customer_error)?
        else {
            debug!("no customer for phone number; returning empty booking list");
            return Ok(Vec::new());
        };
        self.upcoming_for(customer.id()).await
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;

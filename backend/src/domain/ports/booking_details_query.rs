//! Driving port for looking up a caller's upcoming bookings.

use async_trait::async_trait;

use crate::domain::{BookingDetails, Error, PhoneNumber};

/// Domain use-case port for booking lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingDetailsQuery: Send + Sync {
    /// List bookings for the customer owning `phone_number` whose slot is
    /// today or later. An unknown phone number yields an empty list.
    async fn booking_details(&self, phone_number: &PhoneNumber)
    -> Result<Vec<BookingDetails>, Error>;
}

//! Driving port for booking creation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BookingId, CustomerId, CustomerRef, Error, SlotId};

/// Request to book a slot.
///
/// `guest_count` is carried raw so the use-case can reject non-positive
/// values before touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// Slot to claim.
    pub slot_id: SlotId,
    /// Existing customer or details to upsert.
    pub customer: CustomerRef,
    /// Party size as supplied by the caller.
    pub guest_count: i64,
}

/// Identifiers produced by a successful booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// New booking.
    pub booking_id: BookingId,
    /// Customer the booking belongs to.
    pub customer_id: CustomerId,
}

/// Domain use-case port for booking writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Claim the slot and record the booking.
    ///
    /// Fails with `invalid_request` for a non-positive guest count,
    /// `not_found` for an unknown slot or customer id, and `conflict` when the
    /// slot is no longer available. A failed call leaves no partial writes.
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error>;
}

//! Booking data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::{CustomerId, CustomerRef};
use super::slot::{Slot, SlotId};

/// Stable booking identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier for persistence adapters.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned for non-positive guest counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("guest count must be a positive integer, got {0}")]
pub struct InvalidGuestCount(pub i64);

/// Number of guests attending; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct GuestCount(i32);

impl GuestCount {
    /// Validate a raw guest count.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::GuestCount;
    ///
    /// assert_eq!(GuestCount::new(4).map(GuestCount::get), Ok(4));
    /// assert!(GuestCount::new(0).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, InvalidGuestCount> {
        match i32::try_from(value) {
            Ok(count) if count > 0 => Ok(Self(count)),
            _ => Err(InvalidGuestCount(value)),
        }
    }

    /// Raw count for persistence adapters.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for GuestCount {
    type Error = InvalidGuestCount;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuestCount> for i32 {
    fn from(value: GuestCount) -> Self {
        value.0
    }
}

/// Validated request to claim a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    /// Slot to claim.
    pub slot_id: SlotId,
    /// Customer to attach, upserted when given as raw details.
    pub customer: CustomerRef,
    /// Party size.
    pub guest_count: GuestCount,
}

/// Stored booking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    slot_id: SlotId,
    customer_id: CustomerId,
    guest_count: GuestCount,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// Assemble a booking from stored values.
    #[must_use]
    pub fn new(
        id: BookingId,
        slot_id: SlotId,
        customer_id: CustomerId,
        guest_count: GuestCount,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slot_id,
            customer_id,
            guest_count,
            created_at,
        }
    }

    /// Booking identifier.
    #[must_use]
    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Claimed slot.
    #[must_use]
    pub fn slot_id(&self) -> SlotId {
        self.slot_id
    }

    /// Owning customer.
    #[must_use]
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Party size.
    #[must_use]
    pub fn guest_count(&self) -> GuestCount {
        self.guest_count
    }

    /// Creation timestamp assigned by the store.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A booking joined with the slot it claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// The booking row.
    pub booking: Booking,
    /// The claimed slot.
    pub slot: Slot,
}

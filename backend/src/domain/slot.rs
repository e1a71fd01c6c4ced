//! Bookable slot model.
//!
//! Slots are provisioned outside this service. The only transition the
//! service performs is `Available` to `booked`, exactly once per booking.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Stable slot identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(i64);

impl SlotId {
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

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability state of a slot.
///
/// The stored literals are `Available` and `booked`; the asymmetric casing
/// matches the live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    /// Open for booking.
    #[serde(rename = "Available")]
    Available,
    /// Claimed by exactly one booking.
    #[serde(rename = "booked")]
    Booked,
}

impl SlotStatus {
    /// Literal persisted in the `status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "booked",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status literal is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown slot status: {0}")]
pub struct UnknownSlotStatus(pub String);

impl FromStr for SlotStatus {
    type Err = UnknownSlotStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            other => Err(UnknownSlotStatus(other.to_owned())),
        }
    }
}

/// A themed room time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    room_theme: String,
    date: NaiveDate,
    time: NaiveTime,
    status: SlotStatus,
}

impl Slot {
    /// Assemble a slot from stored values.
    #[must_use]
    pub fn new(
        id: SlotId,
        room_theme: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        status: SlotStatus,
    ) -> Self {
        Self {
            id,
            room_theme: room_theme.into(),
            date,
            time,
            status,
        }
    }

    /// Slot identifier.
    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Room theme label, e.g. `Haunted Manor`.
    #[must_use]
    pub fn room_theme(&self) -> &str {
        &self.room_theme
    }

    /// Calendar date of the slot.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Start time of the slot.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Current availability.
    #[must_use]
    pub fn status(&self) -> SlotStatus {
        self.status
    }

    /// Whether the slot can still be booked.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// Maximum number of slots returned by an availability search.
pub const AVAILABILITY_LIMIT: i64 = 5;

/// How the availability search constrains the slot date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Only slots on exactly this date.
    On(NaiveDate),
    /// Slots on this date or later.
    From(NaiveDate),
}

/// Resolved filter handed to the slot repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityFilter {
    /// Exact room theme match.
    pub theme: Option<String>,
    /// Date constraint; always present once resolved.
    pub date: DateFilter,
    /// Inclusive lower bound on the slot start time.
    pub earliest_time: Option<NaiveTime>,
    /// Maximum rows to return.
    pub limit: i64,
}

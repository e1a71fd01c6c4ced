//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types validate
//! stored values and report mismatches as messages for the caller's query
//! error.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    Booking, BookingId, CallLogDraft, Customer, CustomerDraft, CustomerId, GuestCount,
    PhoneNumber, Slot, SlotId, SlotStatus,
};

use super::schema::{bookings, call_logs, customers, event_inquiries, slots};

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// Row struct for reading from the slots table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = slots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SlotRow {
    pub slot_id: i64,
    pub room_theme: String,
    pub slot_date: NaiveDate,
    pub slot_time: NaiveTime,
    pub status: String,
}

impl TryFrom<SlotRow> for Slot {
    type Error = String;

    fn try_from(row: SlotRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<SlotStatus>()
            .map_err(|err| format!("slot {}: {err}", row.slot_id))?;
        Ok(Slot::new(
            SlotId::new(row.slot_id),
            row.room_theme,
            row.slot_date,
            row.slot_time,
            status,
        ))
    }
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

/// Row struct for reading from the customers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerRow {
    pub customer_id: i64,
    pub customer_name: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = String;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let phone_number = PhoneNumber::new(row.phone_number)
            .map_err(|err| format!("customer {}: {err}", row.customer_id))?;
        Ok(Customer::new(
            CustomerId::new(row.customer_id),
            row.customer_name,
            phone_number,
            row.email,
        ))
    }
}

/// Insertable struct for creating customer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customers)]
pub(crate) struct NewCustomerRow<'a> {
    pub customer_name: Option<&'a str>,
    pub phone_number: &'a str,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a CustomerDraft> for NewCustomerRow<'a> {
    fn from(draft: &'a CustomerDraft) -> Self {
        Self {
            customer_name: draft.name(),
            phone_number: draft.phone_number().as_str(),
            email: draft.email(),
        }
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// Row struct for reading from the bookings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub booking_id: i64,
    pub slot_id: i64,
    pub customer_id: i64,
    pub guest_count: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = String;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let guest_count = GuestCount::new(i64::from(row.guest_count))
            .map_err(|err| format!("booking {}: {err}", row.booking_id))?;
        Ok(Booking::new(
            BookingId::new(row.booking_id),
            SlotId::new(row.slot_id),
            CustomerId::new(row.customer_id),
            guest_count,
            row.created_at,
        ))
    }
}

/// Insertable struct for creating booking records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow {
    pub slot_id: i64,
    pub customer_id: i64,
    pub guest_count: i32,
}

// ---------------------------------------------------------------------------
// Event inquiries
// ---------------------------------------------------------------------------

/// Insertable struct for creating inquiry records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = event_inquiries)]
pub(crate) struct NewInquiryRow<'a> {
    pub customer_id: i64,
    pub event_type: &'a str,
    pub proposed_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub requirements: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Call logs
// ---------------------------------------------------------------------------

/// Insertable struct for appending call logs.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = call_logs)]
pub(crate) struct NewCallLogRow<'a> {
    pub customer_id: Option<i64>,
    pub call_duration: i32,
    pub call_intent: &'a str,
    pub call_summary: &'a str,
    pub sentiment: &'a str,
    pub rating: Option<i16>,
    pub was_out_of_scope: bool,
    pub was_escalated: bool,
    pub suspects_ai: bool,
    pub notes: Option<&'a str>,
    pub conversation_id: &'a str,
}

impl<'a> From<&'a CallLogDraft> for NewCallLogRow<'a> {
    fn from(draft: &'a CallLogDraft) -> Self {
        let flags = draft.flags();
        Self {
            customer_id: draft.customer_id().map(CustomerId::get),
            call_duration: draft.call_duration(),
            call_intent: draft.call_intent(),
            call_summary: draft.call_summary(),
            sentiment: draft.sentiment(),
            rating: draft.rating(),
            was_out_of_scope: flags.was_out_of_scope,
            was_escalated: flags.was_escalated,
            suspects_ai: flags.suspects_ai,
            notes: draft.notes(),
            conversation_id: draft.conversation_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn slot_row(status: &str) -> SlotRow {
        SlotRow {
            slot_id: 7,
            room_theme: "Haunted Manor".into(),
            slot_date: NaiveDate::from_ymd_opt(2026, 10, 31).expect("valid date"),
            slot_time: NaiveTime::from_hms_opt(20, 0, 0).expect("valid time"),
            status: status.into(),
        }
    }

    #[rstest]
    #[case("Available", true)]
    #[case("booked", false)]
    fn slot_rows_convert(#[case] status: &str, #[case] available: bool) {
        let slot = Slot::try_from(slot_row(status)).expect("known status");
        assert_eq!(slot.is_available(), available);
        assert_eq!(slot.id(), SlotId::new(7));
    }

    #[rstest]
    fn unknown_slot_status_is_reported() {
        let err = Slot::try_from(slot_row("held")).expect_err("unknown status");
        assert!(err.starts_with("slot 7:"));
    }

    #[rstest]
    fn stored_zero_guest_count_is_reported() {
        let row = BookingRow {
            booking_id: 3,
            slot_id: 7,
            customer_id: 1,
            guest_count: 0,
            created_at: Utc
                .with_ymd_and_hms(2026, 10, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
        };
        let err = Booking::try_from(row).expect_err("zero guests rejected");
        assert!(err.starts_with("booking 3:"));
    }

    #[rstest]
    fn customer_draft_maps_to_insert_row() {
        let phone = PhoneNumber::new("555-0100").expect("valid phone");
        let draft = CustomerDraft::new(None, phone, Some("x@example.com".into()))
            .expect("valid draft");
        let row = NewCustomerRow::from(&draft);
        assert_eq!(row.customer_name, None);
        assert_eq!(row.phone_number, "555-0100");
        assert_eq!(row.email, Some("x@example.com"));
    }
}

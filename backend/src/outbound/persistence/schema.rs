//! Diesel table definitions for the booking schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Bookable room slots, provisioned outside this service.
    slots (slot_id) {
        slot_id -> Int8,
        room_theme -> Text,
        slot_date -> Date,
        slot_time -> Time,
        /// `Available` or `booked`.
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Customers keyed naturally by phone number (unique).
    customers (customer_id) {
        customer_id -> Int8,
        customer_name -> Nullable<Text>,
        phone_number -> Text,
        email -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Confirmed bookings; `slot_id` is unique.
    bookings (booking_id) {
        booking_id -> Int8,
        slot_id -> Int8,
        customer_id -> Int8,
        guest_count -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Event inquiries awaiting sales follow-up.
    event_inquiries (inquiry_id) {
        inquiry_id -> Int8,
        customer_id -> Int8,
        event_type -> Text,
        proposed_date -> Nullable<Date>,
        guest_count -> Nullable<Int4>,
        requirements -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only voice call audit records.
    call_logs (log_id) {
        log_id -> Int8,
        customer_id -> Nullable<Int8>,
        call_duration -> Int4,
        call_intent -> Text,
        call_summary -> Text,
        sentiment -> Text,
        rating -> Nullable<Int2>,
        was_out_of_scope -> Bool,
        was_escalated -> Bool,
        suspects_ai -> Bool,
        notes -> Nullable<Text>,
        conversation_id -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(bookings -> slots (slot_id));
diesel::joinable!(bookings -> customers (customer_id));
diesel::joinable!(event_inquiries -> customers (customer_id));
diesel::joinable!(call_logs -> customers (customer_id));

diesel::allow_tables_to_appear_in_same_query!(
    slots,
    customers,
    bookings,
    event_inquiries,
    call_logs,
);

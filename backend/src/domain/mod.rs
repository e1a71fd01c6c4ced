//! Domain primitives, ports, and services.
//!
//! Purpose: define strongly typed booking entities used by the HTTP and
//! persistence layers, plus the services that implement the driving ports.
//! Types validate their invariants on construction and stay immutable.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Slot, Customer, Booking, EventInquiryDraft, CallLogDraft: entities and
//!   validated drafts.
//! - `*Service`: driving port implementations over repository ports.

pub mod error;
pub mod ports;
pub mod trace_id;

mod availability_service;
mod booking;
mod booking_service;
mod call_log;
mod call_log_service;
mod customer;
mod customer_service;
mod inquiry;
mod inquiry_service;
mod service_support;
mod slot;
#[cfg(test)]
pub(crate) mod test_clock;

pub use self::availability_service::AvailabilityService;
pub use self::booking::{
    Booking, BookingDetails, BookingId, GuestCount, InvalidGuestCount, NewBooking,
};
pub use self::booking_service::BookingService;
pub use self::call_log::{
    CallFlags, CallLogDraft, CallLogFields, CallLogId, CallLogReceipt, CallLogValidationError,
    RATING_RANGE,
};
pub use self::call_log_service::CallLogService;
pub use self::customer::{
    Customer, CustomerDraft, CustomerId, CustomerRef, CustomerValidationError, PHONE_NUMBER_MAX,
    PhoneNumber,
};
pub use self::customer_service::CustomerService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::inquiry::{EventInquiryDraft, InquiryId, InquiryValidationError};
pub use self::inquiry_service::InquiryService;
pub use self::slot::{
    AVAILABILITY_LIMIT, AvailabilityFilter, DateFilter, Slot, SlotId, SlotStatus,
    UnknownSlotStatus,
};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::conflict("slot already booked"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

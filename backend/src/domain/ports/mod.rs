//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are called by inbound adapters and
//! return the domain [`Error`](crate::domain::Error). Driven ports
//! (`*Repository`) are implemented by outbound adapters and return typed
//! errors declared with `define_port_error!`.

mod macros;
pub(crate) use macros::define_port_error;

mod availability_query;
mod booking_command;
mod booking_details_query;
mod booking_repository;
mod call_log_command;
mod call_log_repository;
mod customer_command;
mod customer_repository;
mod inquiry_command;
mod inquiry_repository;
mod slot_repository;

#[cfg(test)]
pub use availability_query::MockAvailabilityQuery;
pub use availability_query::{AvailabilityQuery, AvailabilityRequest};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::{BookingCommand, CreateBookingRequest, CreateBookingResponse};
pub use booking_details_query::BookingDetailsQuery;
#[cfg(test)]
pub use booking_details_query::MockBookingDetailsQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{
    BookingRepository, BookingRepositoryError, FixtureBookingRepository, ReservationOutcome,
};
pub use call_log_command::CallLogCommand;
#[cfg(test)]
pub use call_log_command::MockCallLogCommand;
#[cfg(test)]
pub use call_log_repository::MockCallLogRepository;
pub use call_log_repository::{
    CallLogRepository, CallLogRepositoryError, FixtureCallLogRepository,
};
#[cfg(test)]
pub use customer_command::MockCustomerCommand;
pub use customer_command::{CustomerCommand, FindOrCreateCustomerResponse};
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{
    CustomerLookup, CustomerRepository, CustomerRepositoryError, FIXTURE_CUSTOMER_PHONE,
    FixtureCustomerRepository,
};
#[cfg(test)]
pub use inquiry_command::MockInquiryCommand;
pub use inquiry_command::{CreateInquiryRequest, CreateInquiryResponse, InquiryCommand};
#[cfg(test)]
pub use inquiry_repository::MockInquiryRepository;
pub use inquiry_repository::{
    FixtureInquiryRepository, InquiryOutcome, InquiryRepository, InquiryRepositoryError,
};
#[cfg(test)]
pub use slot_repository::MockSlotRepository;
pub use slot_repository::{FixtureSlotRepository, SlotRepository, SlotRepositoryError};

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AvailabilityQuery, BookingCommand, BookingDetailsQuery, CallLogCommand, CustomerCommand,
    InquiryCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Slot availability search.
    pub availability: Arc<dyn AvailabilityQuery>,
    /// Slot reservation.
    pub bookings: Arc<dyn BookingCommand>,
    /// Upcoming bookings by phone number.
    pub booking_details: Arc<dyn BookingDetailsQuery>,
    /// Event inquiry intake.
    pub inquiries: Arc<dyn InquiryCommand>,
    /// Call transcript summaries.
    pub call_logs: Arc<dyn CallLogCommand>,
    /// Customer find-or-create.
    pub customers: Arc<dyn CustomerCommand>,
}

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// See [`HttpState::availability`].
    pub availability: Arc<dyn AvailabilityQuery>,
    /// See [`HttpState::bookings`].
    pub bookings: Arc<dyn BookingCommand>,
    /// See [`HttpState::booking_details`].
    pub booking_details: Arc<dyn BookingDetailsQuery>,
    /// See [`HttpState::inquiries`].
    pub inquiries: Arc<dyn InquiryCommand>,
    /// See [`HttpState::call_logs`].
    pub call_logs: Arc<dyn CallLogCommand>,
    /// See [`HttpState::customers`].
    pub customers: Arc<dyn CustomerCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     FixtureBookingRepository, FixtureCallLogRepository, FixtureCustomerRepository,
    ///     FixtureInquiryRepository, FixtureSlotRepository,
    /// };
    /// use backend::domain::{
    ///     AvailabilityService, BookingService, CallLogService, CustomerService,
    ///     InquiryService,
    /// };
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use mockable::DefaultClock;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let bookings = Arc::new(BookingService::new(
    ///     Arc::new(FixtureBookingRepository),
    ///     Arc::new(FixtureCustomerRepository),
    ///     clock.clone(),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     availability: Arc::new(AvailabilityService::new(
    ///         Arc::new(FixtureSlotRepository),
    ///         clock,
    ///     )),
    ///     bookings: bookings.clone(),
    ///     booking_details: bookings,
    ///     inquiries: Arc::new(InquiryService::new(Arc::new(FixtureInquiryRepository))),
    ///     call_logs: Arc::new(CallLogService::new(Arc::new(FixtureCallLogRepository))),
    ///     customers: Arc::new(CustomerService::new(Arc::new(FixtureCustomerRepository))),
    /// });
    /// let _availability = state.availability.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            availability,
            bookings,
            booking_details,
            inquiries,
            call_logs,
            customers,
        } = ports;
        Self {
            availability,
            bookings,
            booking_details,
            inquiries,
            call_logs,
            customers,
        }
    }
}

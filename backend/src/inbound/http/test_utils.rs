//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    FixtureBookingRepository, FixtureCallLogRepository, FixtureCustomerRepository,
    FixtureInquiryRepository, FixtureSlotRepository,
};
use crate::domain::test_clock::fixture_clock;
use crate::domain::{
    AvailabilityService, BookingService, CallLogService, CustomerService, InquiryService,
};
use crate::inbound::http::error::{json_config, query_config};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Services over fixture repositories; tests swap single ports for mocks.
pub(crate) fn fixture_ports() -> HttpStatePorts {
    let clock = fixture_clock();
    let bookings = Arc::new(BookingService::new(
        Arc::new(FixtureBookingRepository),
        Arc::new(FixtureCustomerRepository),
        clock.clone(),
    ));
    HttpStatePorts {
        availability: Arc::new(AvailabilityService::new(
            Arc::new(FixtureSlotRepository),
            clock,
        )),
        bookings: bookings.clone(),
        booking_details: bookings,
        inquiries: Arc::new(InquiryService::new(Arc::new(FixtureInquiryRepository))),
        call_logs: Arc::new(CallLogService::new(Arc::new(FixtureCallLogRepository))),
        customers: Arc::new(CustomerService::new(Arc::new(FixtureCustomerRepository))),
    }
}

/// App with every booking endpoint and the shared extractor error handlers.
pub(crate) fn test_app(
    ports: HttpStatePorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(ports)))
        .app_data(json_config())
        .app_data(query_config())
        .configure(super::configure)
}

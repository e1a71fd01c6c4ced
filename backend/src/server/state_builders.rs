//! Builders wiring domain services to repositories for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use backend::domain::ports::{
    BookingRepository, CallLogRepository, CustomerRepository, FixtureBookingRepository,
    FixtureCallLogRepository, FixtureCustomerRepository, FixtureInquiryRepository,
    FixtureSlotRepository, InquiryRepository, SlotRepository,
};
use backend::domain::{
    AvailabilityService, BookingService, CallLogService, CustomerService, InquiryService,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::persistence::{
    DbPool, DieselBookingRepository, DieselCallLogRepository, DieselCustomerRepository,
    DieselInquiryRepository, DieselSlotRepository,
};

use super::ServerConfig;

/// Repositories backing one server instance.
struct Repositories<S, B, C, I, L> {
    slots: Arc<S>,
    bookings: Arc<B>,
    customers: Arc<C>,
    inquiries: Arc<I>,
    call_logs: Arc<L>,
}

fn diesel_repositories(
    pool: &DbPool,
) -> Repositories<
    DieselSlotRepository,
    DieselBookingRepository,
    DieselCustomerRepository,
    DieselInquiryRepository,
    DieselCallLogRepository,
> {
    Repositories {
        slots: Arc::new(DieselSlotRepository::new(pool.clone())),
        bookings: Arc::new(DieselBookingRepository::new(pool.clone())),
        customers: Arc::new(DieselCustomerRepository::new(pool.clone())),
        inquiries: Arc::new(DieselInquiryRepository::new(pool.clone())),
        call_logs: Arc::new(DieselCallLogRepository::new(pool.clone())),
    }
}

fn fixture_repositories() -> Repositories<
    FixtureSlotRepository,
    FixtureBookingRepository,
    FixtureCustomerRepository,
    FixtureInquiryRepository,
    FixtureCallLogRepository,
> {
    Repositories {
        slots: Arc::new(FixtureSlotRepository),
        bookings: Arc::new(FixtureBookingRepository),
        customers: Arc::new(FixtureCustomerRepository),
        inquiries: Arc::new(FixtureInquiryRepository),
        call_logs: Arc::new(FixtureCallLogRepository),
    }
}

/// Wrap each repository in its domain service.
///
/// The booking service answers both the booking command and the booking
/// details query.
fn build_ports<S, B, C, I, L>(
    repos: Repositories<S, B, C, I, L>,
    clock: &Arc<dyn Clock>,
) -> HttpStatePorts
where
    S: SlotRepository + 'static,
    B: BookingRepository + 'static,
    C: CustomerRepository + 'static,
    I: InquiryRepository + 'static,
    L: CallLogRepository + 'static,
{
    let Repositories {
        slots,
        bookings,
        customers,
        inquiries,
        call_logs,
    } = repos;
    let booking_service = Arc::new(BookingService::new(
        bookings,
        Arc::clone(&customers),
        Arc::clone(clock),
    ));
    HttpStatePorts {
        availability: Arc::new(AvailabilityService::new(slots, Arc::clone(clock))),
        bookings: booking_service.clone(),
        booking_details: booking_service,
        inquiries: Arc::new(InquiryService::new(inquiries)),
        call_logs: Arc::new(CallLogService::new(call_logs)),
        customers: Arc::new(CustomerService::new(customers)),
    }
}

/// Build HTTP state ports, using Diesel adapters when a pool is configured
/// and fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match &config.db_pool {
        Some(pool) => build_ports(diesel_repositories(pool), &clock),
        None => build_ports(fixture_repositories(), &clock),
    };
    web::Data::new(HttpState::new(ports))
}

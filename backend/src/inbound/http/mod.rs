//! HTTP inbound adapter exposing the booking REST endpoints.

use actix_web::web;

pub mod availability;
pub mod bookings;
pub mod call_logs;
pub mod customers;
pub mod error;
pub mod health;
pub mod inquiries;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register every booking endpoint on an app or scope.
///
/// Health checks are registered separately because they read
/// [`health::HealthState`] rather than [`state::HttpState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(availability::check_availability)
        .service(bookings::create_booking)
        .service(bookings::booking_details)
        .service(inquiries::create_inquiry)
        .service(call_logs::log_call)
        .service(customers::find_or_create_customer);
}

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every booking endpoint and the health checks, plus the
//! shared error schema wrappers from the inbound layer. The generated document
//! backs Swagger UI in debug builds and is exported by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Venue booking backend API",
        description = "Availability, bookings, inquiries, customers, and call logs for the \
                       booking assistant."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::availability::check_availability,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::booking_details,
        crate::inbound::http::inquiries::create_inquiry,
        crate::inbound::http::call_logs::log_call,
        crate::inbound::http::customers::find_or_create_customer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "availability", description = "Open slot search"),
        (name = "bookings", description = "Slot reservations and lookups"),
        (name = "inquiries", description = "Event inquiries for sales follow-up"),
        (name = "customers", description = "Customer registration"),
        (name = "call_logs", description = "Voice call summaries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

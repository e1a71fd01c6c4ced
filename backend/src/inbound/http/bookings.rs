//! Booking HTTP handlers.
//!
//! ```text
//! POST /create-booking/
//! GET  /booking-details/?phone_number=
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CreateBookingRequest;
use crate::domain::{BookingDetails, SlotId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::availability::AvailableSlot;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CustomerFields, FieldName, NumericId, parse_customer_ref, parse_phone_number,
};

/// Request payload for booking a slot.
///
/// Supply either `customer_id` or `customer_name` with `phone_number`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBookingBody {
    /// Slot to book, as a number or numeric string.
    #[schema(value_type = i64, example = 7)]
    pub slot_id: NumericId,
    /// Existing customer identifier.
    #[schema(value_type = Option<i64>)]
    #[serde(default)]
    pub customer_id: Option<NumericId>,
    /// Customer name, required with `phone_number`.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Customer phone number, the natural key for upserts.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Optional email; omitting it keeps any stored email.
    #[serde(default)]
    pub email: Option<String>,
    /// Party size; must be positive.
    #[schema(example = 6)]
    pub guest_count: i64,
}

/// Response payload for a successful booking.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBookingResponseBody {
    /// Always `success`.
    #[schema(example = "success")]
    pub status: String,
    /// New booking.
    pub booking_id: i64,
    /// Customer the booking was recorded against.
    pub customer_id: i64,
}

fn parse_booking_body(body: CreateBookingBody) -> ApiResult<CreateBookingRequest> {
    let CreateBookingBody {
        slot_id,
        customer_id,
        customer_name,
        phone_number,
        email,
        guest_count,
    } = body;
    Ok(CreateBookingRequest {
        slot_id: SlotId::new(slot_id.parse(FieldName::new("slot_id"))?),
        customer: parse_customer_ref(CustomerFields {
            customer_id,
            customer_name,
            phone_number,
            email,
        })?,
        guest_count,
    })
}

/// Book an open slot.
#[utoipa::path(
    post,
    path = "/create-booking/",
    request_body = CreateBookingBody,
    responses(
        (status = 200, description = "Booking recorded", body = CreateBookingResponseBody),
        (status = 404, description = "Unknown slot or customer", body = ErrorSchema),
        (status = 409, description = "Slot already booked", body = ErrorSchema),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/create-booking/")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingBody>,
) -> ApiResult<web::Json<CreateBookingResponseBody>> {
    let request = parse_booking_body(payload.into_inner())?;
    let created = state.bookings.create_booking(request).await?;
    Ok(web::Json(CreateBookingResponseBody {
        status: "success".to_owned(),
        booking_id: created.booking_id.get(),
        customer_id: created.customer_id.get(),
    }))
}

/// Query string for the booking lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct BookingDetailsParams {
    /// Phone number the bookings were made with.
    pub phone_number: String,
}

/// One upcoming booking with its slot.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDetailsBody {
    /// Booking identifier.
    pub booking_id: i64,
    /// Booked slot identifier.
    pub slot_id: i64,
    /// Owning customer.
    pub customer_id: i64,
    /// Party size.
    pub guest_count: i32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// The booked slot.
    pub slot: AvailableSlot,
}

impl From<&BookingDetails> for BookingDetailsBody {
    fn from(details: &BookingDetails) -> Self {
        let booking = &details.booking;
        Self {
            booking_id: booking.id().get(),
            slot_id: booking.slot_id().get(),
            customer_id: booking.customer_id().get(),
            guest_count: booking.guest_count().get(),
            created_at: booking.created_at().to_rfc3339(),
            slot: AvailableSlot::from(&details.slot),
        }
    }
}

/// List today's and future bookings for a phone number.
#[utoipa::path(
    get,
    path = "/booking-details/",
    params(BookingDetailsParams),
    responses(
        (status = 200, description = "Upcoming bookings; empty for unknown numbers", body = [BookingDetailsBody]),
        (status = 422, description = "Invalid phone number", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "bookingDetails"
)]
#[get("/booking-details/")]
pub async fn booking_details(
    state: web::Data<HttpState>,
    params: web::Query<BookingDetailsParams>,
) -> ApiResult<web::Json<Vec<BookingDetailsBody>>> {
    let phone = parse_phone_number(params.into_inner().phone_number)?;
    let bookings = state.booking_details.booking_details(&phone).await?;
    Ok(web::Json(
        bookings.iter().map(BookingDetailsBody::from).collect(),
    ))
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;

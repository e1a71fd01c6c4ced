//! Slot availability HTTP handler.
//!
//! ```text
//! GET /check-availability/?theme=&date_str=YYYY-MM-DD&time=HH:MM[:SS]
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Slot;
use crate::domain::ports::AvailabilityRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, non_blank, parse_optional_date, parse_optional_time,
};

/// Query string accepted by the availability search.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityParams {
    /// Exact room theme.
    pub theme: Option<String>,
    /// Exact slot date, `YYYY-MM-DD`. Defaults to today onwards.
    pub date_str: Option<String>,
    /// Earliest start time, `HH:MM` or `HH:MM:SS`, inclusive.
    pub time: Option<String>,
}

/// One open slot.
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableSlot {
    /// Slot identifier to pass to `POST /create-booking/`.
    pub slot_id: i64,
    /// Room theme.
    #[schema(example = "Haunted Library")]
    pub room_theme: String,
    /// Slot date.
    #[schema(example = "2026-10-31")]
    pub slot_date: String,
    /// Slot start time.
    #[schema(example = "18:00:00")]
    pub slot_time: String,
}

impl From<&Slot> for AvailableSlot {
    fn from(slot: &Slot) -> Self {
        Self {
            slot_id: slot.id().get(),
            room_theme: slot.room_theme().to_owned(),
            slot_date: slot.date().format("%Y-%m-%d").to_string(),
            slot_time: slot.time().format("%H:%M:%S").to_string(),
        }
    }
}

fn parse_params(params: AvailabilityParams) -> ApiResult<AvailabilityRequest> {
    Ok(AvailabilityRequest {
        theme: non_blank(params.theme).map(|theme| theme.trim().to_owned()),
        date: parse_optional_date(params.date_str, FieldName::new("date_str"))?,
        earliest_time: parse_optional_time(params.time, FieldName::new("time"))?,
    })
}

/// Find up to five open slots, soonest first.
#[utoipa::path(
    get,
    path = "/check-availability/",
    params(AvailabilityParams),
    responses(
        (status = 200, description = "Open slots", body = [AvailableSlot]),
        (status = 422, description = "Invalid date or time", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["availability"],
    operation_id = "checkAvailability"
)]
#[get("/check-availability/")]
pub async fn check_availability(
    state: web::Data<HttpState>,
    params: web::Query<AvailabilityParams>,
) -> ApiResult<web::Json<Vec<AvailableSlot>>> {
    let request = parse_params(params.into_inner())?;
    let slots = state.availability.check_availability(request).await?;
    Ok(web::Json(slots.iter().map(AvailableSlot::from).collect()))
}

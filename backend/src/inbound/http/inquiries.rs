//! Event inquiry HTTP handler.
//!
//! ```text
//! POST /create-inquiry/
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateInquiryRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CustomerFields, FieldName, NumericId, non_blank, parse_customer_ref, parse_optional_date,
};

/// Request payload for an event inquiry.
///
/// Supply either `customer_id` or `customer_name` with `phone_number`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateInquiryBody {
    /// Existing customer identifier.
    #[schema(value_type = Option<i64>)]
    #[serde(default)]
    pub customer_id: Option<NumericId>,
    /// Customer name, required with `phone_number`.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Customer phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Optional email; omitting it keeps any stored email.
    #[serde(default)]
    pub email: Option<String>,
    /// Kind of event.
    #[schema(example = "birthday party")]
    pub event_type: String,
    /// Preferred date, `YYYY-MM-DD`.
    #[serde(default)]
    pub proposed_date: Option<String>,
    /// Estimated headcount; must be positive when present.
    #[serde(default, alias = "guest_count_estimate")]
    pub guest_count: Option<i64>,
    /// Free-text requirements.
    #[serde(default)]
    pub requirements: Option<String>,
}

/// Response payload for a recorded inquiry.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateInquiryResponseBody {
    /// Always `success`.
    #[schema(example = "success")]
    pub status: String,
    /// New inquiry.
    pub inquiry_id: i64,
    /// Customer the inquiry was recorded against.
    pub customer_id: i64,
}

fn parse_inquiry_body(body: CreateInquiryBody) -> ApiResult<CreateInquiryRequest> {
    let CreateInquiryBody {
        customer_id,
        customer_name,
        phone_number,
        email,
        event_type,
        proposed_date,
        guest_count,
        requirements,
    } = body;
    Ok(CreateInquiryRequest {
        customer: parse_customer_ref(CustomerFields {
            customer_id,
            customer_name,
            phone_number,
            email,
        })?,
        event_type,
        proposed_date: parse_optional_date(proposed_date, FieldName::new("proposed_date"))?,
        guest_count,
        requirements: non_blank(requirements),
    })
}

/// Record an event inquiry for sales follow-up.
#[utoipa::path(
    post,
    path = "/create-inquiry/",
    request_body = CreateInquiryBody,
    responses(
        (status = 200, description = "Inquiry recorded", body = CreateInquiryResponseBody),
        (status = 404, description = "Unknown customer id", body = ErrorSchema),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["inquiries"],
    operation_id = "createInquiry"
)]
#[post("/create-inquiry/")]
pub async fn create_inquiry(
    state: web::Data<HttpState>,
    payload: web::Json<CreateInquiryBody>,
) -> ApiResult<web::Json<CreateInquiryResponseBody>> {
    let request = parse_inquiry_body(payload.into_inner())?;
    let created = state.inquiries.create_inquiry(request).await?;
    Ok(web::Json(CreateInquiryResponseBody {
        status: "success".to_owned(),
        inquiry_id: created.inquiry_id.get(),
        customer_id: created.customer_id.get(),
    }))
}

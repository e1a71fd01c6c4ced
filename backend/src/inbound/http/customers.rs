//! Customer registration HTTP handler.
//!
//! ```text
//! POST /customers/
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Customer;
use crate::domain::ports::CustomerLookup;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_customer_draft;

/// Request payload for finding or creating a customer.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FindOrCreateCustomerBody {
    /// Customer name; only used when the customer is new.
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number identifying the customer.
    #[schema(example = "555-0100")]
    pub phone_number: String,
    /// Email; only used when the customer is new.
    #[serde(default)]
    pub email: Option<String>,
}

/// Stored customer attributes.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerBody {
    /// Customer identifier for later booking requests.
    pub customer_id: i64,
    /// Stored name.
    pub customer_name: Option<String>,
    /// Stored phone number.
    pub phone_number: String,
    /// Stored email.
    pub email: Option<String>,
}

impl From<&Customer> for CustomerBody {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id().get(),
            customer_name: customer.name().map(str::to_owned),
            phone_number: customer.phone_number().as_str().to_owned(),
            email: customer.email().map(str::to_owned),
        }
    }
}

/// Response payload for find-or-create.
#[derive(Debug, Serialize, ToSchema)]
pub struct FindOrCreateCustomerResponseBody {
    /// Human-readable outcome.
    #[schema(example = "Customer created")]
    pub message: String,
    /// `found` or `created`.
    #[schema(example = "created")]
    pub status: String,
    /// The stored customer.
    pub data: CustomerBody,
}

/// Return the customer for a phone number, creating it if needed.
///
/// Responds 201 when a customer was created and 200 when one already
/// existed.
#[utoipa::path(
    post,
    path = "/customers/",
    request_body = FindOrCreateCustomerBody,
    responses(
        (status = 200, description = "Existing customer", body = FindOrCreateCustomerResponseBody),
        (status = 201, description = "Customer created", body = FindOrCreateCustomerResponseBody),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "findOrCreateCustomer"
)]
#[post("/customers/")]
pub async fn find_or_create_customer(
    state: web::Data<HttpState>,
    payload: web::Json<FindOrCreateCustomerBody>,
) -> ApiResult<HttpResponse> {
    let FindOrCreateCustomerBody {
        name,
        phone_number,
        email,
    } = payload.into_inner();
    let draft = parse_customer_draft(name, phone_number, email)?;
    let response = state.customers.find_or_create(draft).await?;

    let (mut builder, message, status) = match response.lookup {
        CustomerLookup::Found => (HttpResponse::Ok(), "Customer found", "found"),
        CustomerLookup::Created => (HttpResponse::Created(), "Customer created", "created"),
    };
    Ok(builder.json(FindOrCreateCustomerResponseBody {
        message: message.to_owned(),
        status: status.to_owned(),
        data: CustomerBody::from(&response.customer),
    }))
}

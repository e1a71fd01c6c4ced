//! Call log HTTP handler.
//!
//! ```text
//! POST /call_logs
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CallFlags, CallLogFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, NumericId};

/// Summary of one finished call, as posted by the voice platform.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CallLogBody {
    /// Identified customer, if any.
    #[schema(value_type = Option<i64>)]
    #[serde(default)]
    pub customer_id: Option<NumericId>,
    /// Call length in seconds.
    #[schema(example = 185)]
    pub call_duration: i64,
    /// Detected caller intent.
    #[schema(example = "booking")]
    pub call_intent: String,
    /// Conversation summary.
    pub call_summary: String,
    /// Sentiment label.
    #[schema(example = "positive")]
    pub sentiment: String,
    /// The caller asked for something out of scope.
    pub was_out_of_scope: bool,
    /// The call was escalated to a human.
    pub was_escalated: bool,
    /// The caller suspected an AI.
    pub suspects_ai: bool,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Satisfaction rating from 1 to 5.
    #[serde(default)]
    pub rating: Option<i64>,
    /// Voice platform conversation identifier.
    #[schema(example = "conv_01J9")]
    pub conversation_id: String,
}

fn parse_call_log_body(body: CallLogBody) -> ApiResult<CallLogFields> {
    let customer_id = body
        .customer_id
        .map(|id| id.parse(FieldName::new("customer_id")))
        .transpose()?;
    Ok(CallLogFields {
        customer_id,
        call_duration: body.call_duration,
        call_intent: body.call_intent,
        call_summary: body.call_summary,
        sentiment: body.sentiment,
        rating: body.rating,
        flags: CallFlags {
            was_out_of_scope: body.was_out_of_scope,
            was_escalated: body.was_escalated,
            suspects_ai: body.suspects_ai,
        },
        notes: body.notes,
        conversation_id: body.conversation_id,
    })
}

/// Response payload for a stored call log.
#[derive(Debug, Serialize, ToSchema)]
pub struct CallLogResponseBody {
    /// Always `success`.
    #[schema(example = "success")]
    pub status: String,
    /// Generated log identifier.
    pub log_id: i64,
    /// RFC 3339 timestamp assigned by the store.
    pub created_at: String,
}

/// Append a call log.
#[utoipa::path(
    post,
    path = "/call_logs",
    request_body = CallLogBody,
    responses(
        (status = 200, description = "Call log stored", body = CallLogResponseBody),
        (status = 404, description = "Unknown customer id", body = ErrorSchema),
        (status = 422, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["call_logs"],
    operation_id = "logCall"
)]
#[post("/call_logs")]
pub async fn log_call(
    state: web::Data<HttpState>,
    payload: web::Json<CallLogBody>,
) -> ApiResult<web::Json<CallLogResponseBody>> {
    let fields = parse_call_log_body(payload.into_inner())?;
    let receipt = state.call_logs.log_call(fields).await?;
    Ok(web::Json(CallLogResponseBody {
        status: "success".to_owned(),
        log_id: receipt.log_id.get(),
        created_at: receipt.created_at.to_rfc3339(),
    }))
}

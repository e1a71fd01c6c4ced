//! Driving port for event inquiries.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{CustomerId, CustomerRef, Error, InquiryId};

/// Request to record an event inquiry for sales follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInquiryRequest {
    /// Existing customer or details to upsert.
    pub customer: CustomerRef,
    /// Kind of event, e.g. a birthday party.
    pub event_type: String,
    /// Preferred event date.
    pub proposed_date: Option<NaiveDate>,
    /// Estimated headcount as supplied by the caller.
    pub guest_count: Option<i64>,
    /// Free-text requirements.
    pub requirements: Option<String>,
}

/// Identifiers produced by a recorded inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInquiryResponse {
    /// New inquiry.
    pub inquiry_id: InquiryId,
    /// Customer the inquiry belongs to.
    pub customer_id: CustomerId,
}

/// Domain use-case port for inquiry writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryCommand: Send + Sync {
    /// Resolve the customer and store the inquiry.
    async fn create_inquiry(
        &self,
        request: CreateInquiryRequest,
    ) -> Result<CreateInquiryResponse, Error>;
}

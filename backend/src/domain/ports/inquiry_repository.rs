//! Port for persisting event inquiries.

use async_trait::async_trait;

use crate::domain::{CustomerId, EventInquiryDraft, InquiryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by inquiry repository adapters.
    pub enum InquiryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "inquiry repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "inquiry repository query failed: {message}",
    }
}

/// Result of an inquiry insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryOutcome {
    /// The inquiry row was inserted.
    Created {
        /// New inquiry.
        inquiry_id: InquiryId,
        /// Customer the inquiry belongs to.
        customer_id: CustomerId,
    },
    /// The request referenced a customer id that does not exist.
    CustomerNotFound,
}

/// Port for inquiry persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Resolve the draft's customer (upsert by phone or verify the id) and
    /// insert the inquiry in one transaction.
    async fn create(
        &self,
        inquiry: &EventInquiryDraft,
    ) -> Result<InquiryOutcome, InquiryRepositoryError>;
}

/// Fixture implementation for wiring without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInquiryRepository;

#[async_trait]
impl InquiryRepository for FixtureInquiryRepository {
    async fn create(
        &self,
        _inquiry: &EventInquiryDraft,
    ) -> Result<InquiryOutcome, InquiryRepositoryError> {
        Ok(InquiryOutcome::Created {
            inquiry_id: InquiryId::new(1),
            customer_id: CustomerId::new(1),
        })
    }
}

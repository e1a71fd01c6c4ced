//! Driving port for idempotent customer registration.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerDraft, Error};

use super::CustomerLookup;

/// Customer plus whether it already existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOrCreateCustomerResponse {
    /// Stored customer record.
    pub customer: Customer,
    /// Whether the record already existed.
    pub lookup: CustomerLookup,
}

/// Domain use-case port for customer registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerCommand: Send + Sync {
    /// Return the customer owning the draft's phone number, creating it when
    /// absent. Repeated calls with one phone number never create duplicates.
    async fn find_or_create(
        &self,
        draft: CustomerDraft,
    ) -> Result<FindOrCreateCustomerResponse, Error>;
}

//! Port for reading bookable slots.

use async_trait::async_trait;

use crate::domain::{AvailabilityFilter, Slot};

use super::define_port_error;

define_port_error! {
    /// Errors raised by slot repository adapters.
    pub enum SlotRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "slot repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "slot repository query failed: {message}",
    }
}

/// Port for searching open slots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Return `Available` slots matching every filter, ordered by date then
    /// time, capped at `filter.limit` rows.
    async fn find_available(
        &self,
        filter: &AvailabilityFilter,
    ) -> Result<Vec<Slot>, SlotRepositoryError>;
}

/// Fixture implementation for wiring without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSlotRepository;

#[async_trait]
impl SlotRepository for FixtureSlotRepository {
    async fn find_available(
        &self,
        _filter: &AvailabilityFilter,
    ) -> Result<Vec<Slot>, SlotRepositoryError> {
        Ok(Vec::new())
    }
}

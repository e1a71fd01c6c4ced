//! Availability search service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    AvailabilityQuery, AvailabilityRequest, SlotRepository, SlotRepositoryError,
};
use crate::domain::{AVAILABILITY_LIMIT, AvailabilityFilter, DateFilter, Error, Slot};

/// Resolves availability requests against the slot repository.
#[derive(Clone)]
pub struct AvailabilityService<S> {
    slots: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> AvailabilityService<S> {
    /// Create a service reading slots from `slots` and "today" from `clock`.
    pub fn new(slots: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { slots, clock }
    }

    fn resolve_filter(&self, request: AvailabilityRequest) -> AvailabilityFilter {
        let date = match request.date {
            Some(date) => DateFilter::On(date),
            None => DateFilter::From(self.clock.utc().date_naive()),
        };
        AvailabilityFilter {
            theme: request.theme,
            date,
            earliest_time: request.earliest_time,
            limit: AVAILABILITY_LIMIT,
        }
    }
}

fn map_slot_error(error: SlotRepositoryError) -> Error {
    match error {
        SlotRepositoryError::Connection { message } => {
            Error::upstream(format!("slot store unavailable: {message}"))
        }
        SlotRepositoryError::Query { message } => {
            Error::upstream(format!("slot lookup failed: {message}"))
        }
    }
}

#[async_trait]
impl<S> AvailabilityQuery for AvailabilityService<S>
where
    S: SlotRepository,
{
    async fn check_availability(&self, request: AvailabilityRequest) -> Result<Vec<Slot>, Error> {
        let filter = self.resolve_filter(request);
        let mut slots = self
            .slots
            .find_available(&filter)
            .await
            .map_err(map_slot_error)?;
        slots.truncate(usize::try_from(AVAILABILITY_LIMIT).unwrap_or(usize::MAX));
        debug!(count = slots.len(), "availability search complete");
        Ok(slots)
    }
}

//! Driving port for slot availability searches.
//!
//! HTTP handlers parse the query string into an [`AvailabilityRequest`];
//! implementations resolve the default date floor and call the slot
//! repository.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::domain::{Error, Slot};

/// Parsed availability filters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityRequest {
    /// Exact room theme.
    pub theme: Option<String>,
    /// Exact slot date. When absent, only slots from today onwards match.
    pub date: Option<NaiveDate>,
    /// Inclusive lower bound on the slot start time.
    pub earliest_time: Option<NaiveTime>,
}

/// Domain use-case port for availability searches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityQuery: Send + Sync {
    /// Return up to five open slots ordered by date and time.
    async fn check_availability(&self, request: AvailabilityRequest) -> Result<Vec<Slot>, Error>;
}

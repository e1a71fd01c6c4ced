//! PostgreSQL-backed `SlotRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SlotRepository, SlotRepositoryError};
use crate::domain::{AvailabilityFilter, DateFilter, Slot, SlotStatus};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::SlotRow;
use super::pool::{DbPool, PoolError};
use super::schema::slots;

/// Diesel-backed implementation of the `SlotRepository` port.
#[derive(Clone)]
pub struct DieselSlotRepository {
    pool: DbPool,
}

impl DieselSlotRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SlotRepositoryError {
    map_basic_pool_error(error, SlotRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SlotRepositoryError {
    map_basic_diesel_error(
        error,
        SlotRepositoryError::query,
        SlotRepositoryError::connection,
    )
}

#[async_trait]
impl SlotRepository for DieselSlotRepository {
    async fn find_available(
        &self,
        filter: &AvailabilityFilter,
    ) -> Result<Vec<Slot>, SlotRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = slots::table
            .filter(slots::status.eq(SlotStatus::Available.as_str()))
            .select(SlotRow::as_select())
            .order_by((
                slots::slot_date.asc(),
                slots::slot_time.asc(),
                slots::slot_id.asc(),
            ))
            .limit(filter.limit)
            .into_boxed();

        if let Some(theme) = &filter.theme {
            query = query.filter(slots::room_theme.eq(theme));
        }
        query = match filter.date {
            DateFilter::On(date) => query.filter(slots::slot_date.eq(date)),
            DateFilter::From(date) => query.filter(slots::slot_date.ge(date)),
        };
        if let Some(earliest) = filter.earliest_time {
            query = query.filter(slots::slot_time.ge(earliest));
        }

        let rows: Vec<SlotRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter()
            .map(Slot::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SlotRepositoryError::query)
    }
}

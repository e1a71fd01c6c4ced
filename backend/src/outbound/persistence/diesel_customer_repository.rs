//! PostgreSQL-backed `CustomerRepository` implementation using Diesel ORM.
//!
//! Also hosts the customer resolution step shared by the booking and inquiry
//! transactions.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use diesel::upsert::excluded;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{CustomerLookup, CustomerRepository, CustomerRepositoryError};
use crate::domain::{Customer, CustomerDraft, CustomerRef, PhoneNumber};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CustomerRow, NewCustomerRow};
use super::pool::{DbPool, PoolError};
use super::schema::customers;

diesel::define_sql_function! {
    /// SQL `COALESCE` over nullable text.
    fn coalesce(value: Nullable<Text>, fallback: Nullable<Text>) -> Nullable<Text>;
}

/// Diesel-backed implementation of the `CustomerRepository` port.
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CustomerRepositoryError {
    map_basic_pool_error(error, CustomerRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CustomerRepositoryError {
    map_basic_diesel_error(
        error,
        CustomerRepositoryError::query,
        CustomerRepositoryError::connection,
    )
}

fn row_to_customer(row: CustomerRow) -> Result<Customer, CustomerRepositoryError> {
    Customer::try_from(row).map_err(CustomerRepositoryError::query)
}

/// Upsert a customer by phone number and return its id.
///
/// The name is overwritten; a missing email keeps the stored one.
pub(crate) async fn upsert_customer<C>(conn: &mut C, draft: &CustomerDraft) -> QueryResult<i64>
where
    C: AsyncConnection<Backend = Pg> + Send,
{
    diesel::insert_into(customers::table)
        .values(NewCustomerRow::from(draft))
        .on_conflict(customers::phone_number)
        .do_update()
        .set((
            customers::customer_name.eq(excluded(customers::customer_name)),
            customers::email.eq(coalesce(excluded(customers::email), customers::email)),
        ))
        .returning(customers::customer_id)
        .get_result(conn)
        .await
}

/// Resolve a customer reference inside an open transaction.
///
/// Returns `None` when an explicit customer id does not exist.
pub(crate) async fn resolve_customer<C>(
    conn: &mut C,
    customer: &CustomerRef,
) -> QueryResult<Option<i64>>
where
    C: AsyncConnection<Backend = Pg> + Send,
{
    match customer {
        CustomerRef::Existing(id) => {
            let found: bool = diesel::select(exists(
                customers::table.filter(customers::customer_id.eq(id.get())),
            ))
            .get_result(conn)
            .await?;
            Ok(found.then_some(id.get()))
        }
        CustomerRef::Details(draft) => upsert_customer(conn, draft).await.map(Some),
    }
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn find_by_phone(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<Customer>, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CustomerRow> = customers::table
            .filter(customers::phone_number.eq(phone_number.as_str()))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_customer).transpose()
    }

    async fn find_or_create(
        &self,
        draft: &CustomerDraft,
    ) -> Result<(Customer, CustomerLookup), CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted: Option<CustomerRow> = diesel::insert_into(customers::table)
            .values(NewCustomerRow::from(draft))
            .on_conflict(customers::phone_number)
            .do_nothing()
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        if let Some(row) = inserted {
            return Ok((row_to_customer(row)?, CustomerLookup::Created));
        }

        let existing: CustomerRow = customers::table
            .filter(customers::phone_number.eq(draft.phone_number().as_str()))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok((row_to_customer(existing)?, CustomerLookup::Found))
    }
}

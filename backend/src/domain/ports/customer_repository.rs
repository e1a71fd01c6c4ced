//! Port for customer lookups and idempotent creation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Customer, CustomerDraft, CustomerId, PhoneNumber};

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer repository adapters.
    pub enum CustomerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "customer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "customer repository query failed: {message}",
    }
}

/// Whether find-or-create returned an existing row or inserted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerLookup {
    /// The phone number was already registered.
    Found,
    /// A new customer row was inserted.
    Created,
}

/// Port for customer persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by natural key.
    async fn find_by_phone(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<Customer>, CustomerRepositoryError>;

    /// Return the customer for the draft's phone number, inserting it when
    /// absent. Existing rows are returned unchanged.
    ///
    /// Adapters must rely on the store's uniqueness constraint so concurrent
    /// callers never create duplicates.
    async fn find_or_create(
        &self,
        draft: &CustomerDraft,
    ) -> Result<(Customer, CustomerLookup), CustomerRepositoryError>;
}

/// Phone number of the customer seeded into [`FixtureCustomerRepository`].
pub const FIXTURE_CUSTOMER_PHONE: &str = "555-0123";

/// Fixture implementation for wiring without a database.
///
/// One customer (id `1`, phone [`FIXTURE_CUSTOMER_PHONE`]) is seeded and
/// reported as `Found`. Any other phone number is echoed back as newly
/// created with id `2`; nothing is stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCustomerRepository;

impl FixtureCustomerRepository {
    fn seeded(phone_number: &PhoneNumber) -> Option<Customer> {
        (phone_number.as_str() == FIXTURE_CUSTOMER_PHONE).then(|| {
            Customer::new(
                CustomerId::new(1),
                Some("Fixture Guest".to_owned()),
                phone_number.clone(),
                None,
            )
        })
    }
}

#[async_trait]
impl CustomerRepository for FixtureCustomerRepository {
    async fn find_by_phone(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<Customer>, CustomerRepositoryError> {
        Ok(Self::seeded(phone_number))
    }

    async fn find_or_create(
        &self,
        draft: &CustomerDraft,
    ) -> Result<(Customer, CustomerLookup), CustomerRepositoryError> {
        if let Some(existing) = Self::seeded(draft.phone_number()) {
            return Ok((existing, CustomerLookup::Found));
        }
        let customer = Customer::new(
            CustomerId::new(2),
            draft.name().map(str::to_owned),
            draft.phone_number().clone(),
            draft.email().map(str::to_owned),
        );
        Ok((customer, CustomerLookup::Created))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_echoes_draft_as_created() {
        let phone = PhoneNumber::new("555-0100").expect("valid phone");
        let draft = CustomerDraft::new(Some("Ada".into()), phone.clone(), None).expect("valid draft");

        let (customer, lookup) = FixtureCustomerRepository
            .find_or_create(&draft)
            .await
            .expect("fixture create succeeds");

        assert_eq!(lookup, CustomerLookup::Created);
        assert_eq!(customer.id(), CustomerId::new(2));
        assert_eq!(customer.phone_number(), &phone);
        assert_eq!(customer.name(), Some("Ada"));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_seeded_phone_as_found_on_every_call() {
        let phone = PhoneNumber::new(FIXTURE_CUSTOMER_PHONE).expect("valid phone");
        let draft = CustomerDraft::new(Some("Someone Else".into()), phone.clone(), None)
            .expect("valid draft");

        for _ in 0..2 {
            let (customer, lookup) = FixtureCustomerRepository
                .find_or_create(&draft)
                .await
                .expect("fixture lookup succeeds");
            assert_eq!(lookup, CustomerLookup::Found);
            assert_eq!(customer.id(), CustomerId::new(1));
            assert_eq!(customer.name(), Some("Fixture Guest"));
        }

        let found = FixtureCustomerRepository
            .find_by_phone(&phone)
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_some());
    }

    #[rstest]
    fn lookup_serialises_as_snake_case() {
        let value = serde_json::to_value(CustomerLookup::Found).expect("serialise lookup");
        assert_eq!(value, serde_json::json!("found"));
    }
}

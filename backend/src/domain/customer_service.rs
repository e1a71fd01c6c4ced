//! Customer registration service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::booking_service::map_customer_error;
use crate::domain::ports::{
    CustomerCommand, CustomerLookup, CustomerRepository, FindOrCreateCustomerResponse,
};
use crate::domain::{CustomerDraft, Error};

/// Customer service implementing [`CustomerCommand`].
#[derive(Clone)]
pub struct CustomerService<C> {
    customers: Arc<C>,
}

impl<C> CustomerService<C> {
    /// Create a new service backed by `customers`.
    pub fn new(customers: Arc<C>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl<C> CustomerCommand for CustomerService<C>
where
    C: CustomerRepository,
{
    async fn find_or_create(
        &self,
        draft: CustomerDraft,
    ) -> Result<FindOrCreateCustomerResponse, Error> {
        let (customer, lookup) = self
            .customers
            .find_or_create(&draft)
            .await
            .map_err(map_customer_error)?;
        if lookup == CustomerLookup::Created {
            info!(customer_id = customer.id().get(), "customer created");
        }
        Ok(FindOrCreateCustomerResponse { customer, lookup })
    }
}

//! Event inquiry service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::booking_service::customer_not_found;
use crate::domain::ports::{
    CreateInquiryRequest, CreateInquiryResponse, InquiryCommand, InquiryOutcome,
    InquiryRepository, InquiryRepositoryError,
};
use crate::domain::service_support::{invalid_field, invalid_guest_count};
use crate::domain::{Error, EventInquiryDraft, GuestCount, InquiryValidationError};

/// Inquiry service implementing [`InquiryCommand`].
#[derive(Clone)]
pub struct InquiryService<I> {
    inquiries: Arc<I>,
}

impl<I> InquiryService<I> {
    /// Create a new service backed by `inquiries`.
    pub fn new(inquiries: Arc<I>) -> Self {
        Self { inquiries }
    }
}

fn map_inquiry_error(error: InquiryRepositoryError) -> Error {
    match error {
        InquiryRepositoryError::Connection { message } => {
            Error::upstream(format!("inquiry store unavailable: {message}"))
        }
        InquiryRepositoryError::Query { message } => {
            Error::upstream(format!("inquiry store error: {message}"))
        }
    }
}

fn build_draft(request: CreateInquiryRequest) -> Result<EventInquiryDraft, Error> {
    let guest_count = request
        .guest_count
        .map(GuestCount::new)
        .transpose()
        .map_err(|err| invalid_guest_count("guest_count", err))?;
    EventInquiryDraft::new(
        request.customer,
        request.event_type,
        request.proposed_date,
        guest_count,
        request.requirements,
    )
    .map_err(|err| match err {
        InquiryValidationError::EmptyEventType => invalid_field(
            "event_type",
            "empty",
            serde_json::Value::Null,
            err.to_string(),
        ),
    })
}

#[async_trait]
impl<I> InquiryCommand for InquiryService<I>
where
    I: InquiryRepository,
{
    async fn create_inquiry(
        &self,
        request: CreateInquiryRequest,
    ) -> Result<CreateInquiryResponse, Error> {
        let draft = build_draft(request)?;
        match self
            .inquiries
            .create(&draft)
            .await
            .map_err(map_inquiry_error)?
        {
            InquiryOutcome::Created {
                inquiry_id,
                customer_id,
            } => {
                info!(
                    inquiry_id = inquiry_id.get(),
                    customer_id = customer_id.get(),
                    event_type = draft.event_type(),
                    "event inquiry recorded"
                );
                Ok(CreateInquiryResponse {
                    inquiry_id,
                    customer_id,
                })
            }
            InquiryOutcome::CustomerNotFound => Err(customer_not_found(draft.customer())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockInquiryRepository;
    use crate::domain::{CustomerDraft, CustomerId, CustomerRef, ErrorCode, InquiryId, PhoneNumber};

    fn request(guest_count: Option<i64>) -> CreateInquiryRequest {
        let phone = PhoneNumber::new("555-0142").expect("valid phone");
        let draft = CustomerDraft::named("Wednesday".to_owned(), phone, None).expect("valid draft");
        CreateInquiryRequest {
            customer: CustomerRef::Details(draft),
            event_type: "Corporate party".to_owned(),
            proposed_date: NaiveDate::from_ymd_opt(2026, 12, 12),
            guest_count,
            requirements: Some("  vegetarian catering  ".to_owned()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn new_phone_creates_inquiry() {
        let mut repo = MockInquiryRepository::new();
        repo.expect_create()
            .withf(|draft| {
                draft.guest_count().map(GuestCount::get) == Some(40)
                    && draft.requirements() == Some("vegetarian catering")
                    && matches!(draft.customer(), CustomerRef::Details(_))
            })
            .times(1)
            .return_once(|_| {
                Ok(InquiryOutcome::Created {
                    inquiry_id: InquiryId::new(12),
                    customer_id: CustomerId::new(5),
                })
            });

        let service = InquiryService::new(Arc::new(repo));
        let response = service
            .create_inquiry(request(Some(40)))
            .await
            .expect("inquiry succeeds");

        assert_eq!(response.inquiry_id, InquiryId::new(12));
        assert_eq!(response.customer_id, CustomerId::new(5));
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-5))]
    #[tokio::test]
    async fn rejects_non_positive_guest_count(#[case] guest_count: Option<i64>) {
        let mut repo = MockInquiryRepository::new();
        repo.expect_create().never();

        let service = InquiryService::new(Arc::new(repo));
        let err = service
            .create_inquiry(request(guest_count))
            .await
            .expect_err("guest count rejected");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_blank_event_type() {
        let mut repo = MockInquiryRepository::new();
        repo.expect_create().never();
        let mut blank = request(None);
        blank.event_type = "   ".to_owned();

        let service = InquiryService::new(Arc::new(repo));
        let err = service
            .create_inquiry(blank)
            .await
            .expect_err("event type rejected");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details attached");
        assert_eq!(details["field"], "event_type");
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_customer_id_is_not_found() {
        let mut repo = MockInquiryRepository::new();
        repo.expect_create()
            .times(1)
            .return_once(|_| Ok(InquiryOutcome::CustomerNotFound));
        let mut existing = request(None);
        existing.customer = CustomerRef::Existing(CustomerId::new(77));

        let service = InquiryService::new(Arc::new(repo));
        let err = service
            .create_inquiry(existing)
            .await
            .expect_err("customer rejected");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}

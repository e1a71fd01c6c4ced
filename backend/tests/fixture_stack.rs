//! End-to-end checks of the booking endpoints over the fixture repositories.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{App, web};
use backend::domain::ports::{
    FIXTURE_CUSTOMER_PHONE, FixtureBookingRepository, FixtureCallLogRepository, FixtureCustomerRepository,
    FixtureInquiryRepository, FixtureSlotRepository,
};
use backend::domain::{
    AvailabilityService, BookingService, CallLogService, CustomerService, InquiryService,
    TRACE_ID_HEADER,
};
use backend::inbound::http::configure;
use backend::inbound::http::error::{json_config, query_config};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::{ApiDoc, Trace};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use utoipa::OpenApi;

#[fixture]
fn state() -> web::Data<HttpState> {
    let bookings = Arc::new(BookingService::new(
        Arc::new(FixtureBookingRepository),
        Arc::new(FixtureCustomerRepository),
        Arc::new(DefaultClock),
    ));
    web::Data::new(HttpState::new(HttpStatePorts {
        availability: Arc::new(AvailabilityService::new(
            Arc::new(FixtureSlotRepository),
            Arc::new(DefaultClock),
        )),
        bookings: bookings.clone(),
        booking_details: bookings,
        inquiries: Arc::new(InquiryService::new(Arc::new(FixtureInquiryRepository))),
        call_logs: Arc::new(CallLogService::new(Arc::new(FixtureCallLogRepository))),
        customers: Arc::new(CustomerService::new(Arc::new(FixtureCustomerRepository))),
    }))
}

macro_rules! app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data($state)
                .app_data(json_config())
                .app_data(query_config())
                .wrap(Trace)
                .configure(configure),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn customer_registration_creates_on_first_call(state: web::Data<HttpState>) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/customers/")
        .set_json(json!({"name": "Ada", "phone_number": "555-0100"}))
        .to_request();

    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["status"], json!("created"));
    assert_eq!(body["data"]["customer_id"], json!(2));
}

#[rstest]
#[actix_web::test]
async fn customer_registration_finds_the_seeded_customer_repeatedly(
    state: web::Data<HttpState>,
) {
    let app = app!(state);

    for _ in 0..2 {
        let req = actix_test::TestRequest::post()
            .uri("/customers/")
            .set_json(json!({"name": "Grace", "phone_number": FIXTURE_CUSTOMER_PHONE}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["status"], json!("found"));
        assert_eq!(body["message"], json!("Customer found"));
        assert_eq!(body["data"]["customer_id"], json!(1));
        assert_eq!(body["data"]["customer_name"], json!("Fixture Guest"));
    }
}

#[rstest]
#[actix_web::test]
async fn booking_an_unknown_slot_is_not_found(state: web::Data<HttpState>) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/create-booking/")
        .set_json(json!({
            "slot_id": 7,
            "customer_name": "Ada",
            "phone_number": "555-0100",
            "guest_count": 4
        }))
        .to_request();

    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], json!("not_found"));
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn call_logs_are_acknowledged(state: web::Data<HttpState>) {
    let app = app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/call_logs")
        .set_json(json!({
            "call_duration": 42,
            "call_intent": "inquiry",
            "call_summary": "Asked about corporate packages",
            "sentiment": "neutral",
            "was_out_of_scope": false,
            "was_escalated": false,
            "suspects_ai": false,
            "rating": 4,
            "conversation_id": "conv_42"
        }))
        .to_request();

    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["status"], json!("success"));
    assert_eq!(body["log_id"], json!(1));
}

#[rstest]
fn openapi_operation_ids_are_stable() {
    let doc = serde_json::to_value(ApiDoc::openapi()).expect("serialisable document");
    let ids: Vec<&str> = [
        ("/check-availability/", "get"),
        ("/create-booking/", "post"),
        ("/booking-details/", "get"),
        ("/create-inquiry/", "post"),
        ("/call_logs", "post"),
        ("/customers/", "post"),
    ]
    .iter()
    .filter_map(|(path, method)| doc["paths"][*path][*method]["operationId"].as_str())
    .collect();

    assert_eq!(
        ids,
        [
            "checkAvailability",
            "createBooking",
            "bookingDetails",
            "createInquiry",
            "logCall",
            "findOrCreateCustomer"
        ]
    );
}

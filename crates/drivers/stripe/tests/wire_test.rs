use serde_json::json;
use stripe_seed_driver_stripe::StripeGateway;
use stripe_seed_types::{
    CaptureMethod, ClientConfig, IntentStatus, NewCustomer, NewPaymentIntent, PaymentGateway,
    SeedError,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> StripeGateway {
    StripeGateway::new(&ClientConfig::new("sk_test_wire").with_api_base(server.uri()))
}

fn payment_intent_body(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "object": "payment_intent",
        "amount": 2500,
        "amount_capturable": 0,
        "amount_received": 0,
        "capture_method": "manual",
        "confirmation_method": "automatic",
        "created": 1_700_000_000,
        "currency": "usd",
        "customer": "cus_wire",
        "livemode": false,
        "metadata": {},
        "payment_method_types": ["card"],
        "status": status,
    })
}

/// Decoded form fields of every request the server received on `route`
async fn form_fields(server: &MockServer, route: &str) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap_or_default();
    let request = requests
        .iter()
        .find(|r| r.url.path() == route)
        .unwrap_or_else(|| panic!("no request to {}", route));
    url::form_urlencoded::parse(&request.body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn has_field(fields: &[(String, String)], key: &str, value: &str) -> bool {
    fields.iter().any(|(k, v)| k == key && v == value)
}

#[tokio::test]
async fn test_create_customer_sends_profile_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_wire",
            "object": "customer",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "description": "seeded",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customer = gateway(&server)
        .create_customer(&NewCustomer {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            description: "seeded".to_string(),
        })
        .await
        .expect("customer should be created");

    assert_eq!(customer.id, "cus_wire");
    assert_eq!(customer.email.as_deref(), Some("ada@example.com"));

    let fields = form_fields(&server, "/v1/customers").await;
    assert!(has_field(&fields, "name", "Ada Lovelace"));
    assert!(has_field(&fields, "email", "ada@example.com"));
}

#[tokio::test]
async fn test_create_payment_intent_sends_manual_card_usd() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(payment_intent_body("pi_wire", "requires_payment_method")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let intent = gateway(&server)
        .create_payment_intent(&NewPaymentIntent::manual_card(2500, "cus_wire"))
        .await
        .expect("intent should be created");

    assert_eq!(intent.id, "pi_wire");
    assert_eq!(intent.capture_method, CaptureMethod::Manual);
    assert_eq!(intent.customer_id.as_deref(), Some("cus_wire"));

    let fields = form_fields(&server, "/v1/payment_intents").await;
    assert!(has_field(&fields, "amount", "2500"));
    assert!(has_field(&fields, "currency", "usd"));
    assert!(has_field(&fields, "customer", "cus_wire"));
    assert!(has_field(&fields, "capture_method", "manual"));
    assert!(
        fields
            .iter()
            .any(|(k, v)| k.starts_with("payment_method_types") && v == "card"),
        "payment_method_types missing from {:?}",
        fields
    );
}

#[tokio::test]
async fn test_confirm_sends_payment_method() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents/pi_wire/confirm"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(payment_intent_body("pi_wire", "requires_capture")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let intent = gateway(&server)
        .confirm_payment_intent("pi_wire", "pm_card_visa")
        .await
        .expect("intent should be confirmed");

    assert_eq!(intent.status, IntentStatus::RequiresCapture);

    let fields = form_fields(&server, "/v1/payment_intents/pi_wire/confirm").await;
    assert_eq!(
        fields,
        vec![("payment_method".to_string(), "pm_card_visa".to_string())]
    );
}

#[tokio::test]
async fn test_capture_returns_final_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents/pi_wire/capture"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payment_intent_body("pi_wire", "succeeded")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let intent = gateway(&server)
        .capture_payment_intent("pi_wire")
        .await
        .expect("intent should be captured");

    assert_eq!(intent.status, IntentStatus::Succeeded);
    assert_eq!(intent.amount, 2500);
}

#[tokio::test]
async fn test_api_rejection_maps_to_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents/pi_wire/confirm"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": {
                "type": "card_error",
                "code": "card_declined",
                "message": "Your card was declined.",
            }
        })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .confirm_payment_intent("pi_wire", "pm_card_visa")
        .await
        .expect_err("confirm should be rejected");

    assert_eq!(
        err,
        SeedError::remote("card_declined", "Your card was declined.")
    );
}

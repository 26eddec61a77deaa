// Integration tests for the restaurant onboarding wizard
// These drive the real HTTP client against a local mock server

use mockito::{Matcher, Server};
use serde_json::json;

use restaurant_onboarding::messaging::{CommandExecutor, EventBus};
use restaurant_onboarding::terminal::TerminalSession;
use restaurant_onboarding::{
    Field, FieldInput, HttpRestaurantApi, RegistrationDraft, RegistrationWizard, SubmitError,
};

const ENDPOINT: &str = "/api/restaurant/create-restaurant";

/// Helper to build a wizard on the last step with every field filled in
fn filled_wizard(base_url: &str) -> RegistrationWizard<HttpRestaurantApi> {
    let mut wizard = RegistrationWizard::new(HttpRestaurantApi::new(base_url));
    let values = [
        (Field::Name, "Spice Route"),
        (Field::Type, "Casual Dining"),
        (Field::Description, "South Indian classics"),
        (Field::Image, "https://img.example.com/spice.jpg"),
        (Field::Email, "owner@spiceroute.in"),
        (Field::Password, "s3cretpass"),
        (Field::PhoneNumber, "9876543210"),
        (Field::Address, "12 MG Road, Bengaluru"),
        (Field::Cgst, "2.5"),
        (Field::Sgst, "2.5"),
        (Field::Discount, "10"),
        (Field::OpeningTime, "09:00"),
        (Field::ClosingTime, "22:30"),
        (Field::FoodCategories, "Pizza, Pasta, Salads"),
    ];
    for (field, value) in values {
        wizard.update(field, FieldInput::text(value)).unwrap();
    }
    wizard.update(Field::VegOnly, FieldInput::Toggle(true)).unwrap();

    wizard.advance();
    wizard.advance();
    wizard
}

#[test]
fn test_successful_submission_posts_normalized_json() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "restaurant_name": "Spice Route",
            "restaurant_phone_number": "9876543210",
            "restaurant_cgst": "2.5",
            "restaurant_sgst": "2.5",
            "restaurant_discount": "10",
            "food_categories": ["Pizza", "Pasta", "Salads"],
            "isVegOnly": true,
            "isCashOnly": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true}"#)
        .expect(1)
        .create();

    let mut wizard = filled_wizard(&server.url());
    let receipt = wizard.submit().expect("submission should succeed");

    mock.assert();
    assert_eq!(receipt.message, "Restaurant created successfully!");
    assert!(receipt.restaurant_uuid.starts_with("REST_"));
    assert!(receipt.restaurant_uuid[5..].bytes().all(|b| b.is_ascii_digit()));

    // Back to the start with a blank draft
    assert_eq!(wizard.active_step(), 0);
    assert_eq!(wizard.draft(), &RegistrationDraft::default());
}

#[test]
fn test_generated_uuid_is_sent() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_body(Matcher::Regex(r#""restaurant_uuid":"REST_\d+""#.to_string()))
        .with_status(200)
        .create();

    let mut wizard = filled_wizard(&server.url());
    wizard.submit().unwrap();
    mock.assert();
}

#[test]
fn test_server_error_field_is_reported_verbatim() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Email already registered"}"#)
        .create();

    let mut wizard = filled_wizard(&server.url());
    let before = wizard.draft().clone();

    let err = wizard.submit().unwrap_err();

    mock.assert();
    assert!(matches!(err, SubmitError::Rejected { status: 400, .. }));
    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(wizard.active_step(), 2);
    assert_eq!(wizard.draft(), &before);
}

#[test]
fn test_server_message_field_fallback() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(422)
        .with_body(r#"{"message": "Invalid GST rate"}"#)
        .create();

    let mut wizard = filled_wizard(&server.url());
    let err = wizard.submit().unwrap_err();
    assert_eq!(err.to_string(), "Invalid GST rate");
}

#[test]
fn test_unparseable_error_body_uses_generic_message() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let mut wizard = filled_wizard(&server.url());
    let err = wizard.submit().unwrap_err();
    assert_eq!(err.to_string(), "Failed to create restaurant");
    assert_eq!(wizard.active_step(), 2);
}

#[test]
fn test_invalid_draft_never_hits_server() {
    let mut server = Server::new();
    let mock = server.mock("POST", ENDPOINT).expect(0).create();

    let mut wizard = filled_wizard(&server.url());
    wizard
        .update(Field::Email, FieldInput::text("not-an-email"))
        .unwrap();

    let err = wizard.submit().unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid email address");
    mock.assert();
}

#[test]
fn test_transport_error_keeps_state() {
    // Nothing listens on port 1
    let mut wizard = filled_wizard("http://127.0.0.1:1");
    let before = wizard.draft().clone();

    let err = wizard.submit().unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(err.to_string().starts_with("Network error"));
    assert_eq!(wizard.draft(), &before);
    assert_eq!(wizard.active_step(), 2);
}

#[test]
fn test_terminal_session_end_to_end() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_body(Matcher::PartialJson(json!({
            "restaurant_name": "Trattoria Roma",
            "restaurant_email": "hello@roma.it",
            "food_categories": ["Pizza", "Pasta"],
            "isVegOnly": false,
            "isCashOnly": false
        })))
        .with_status(200)
        .with_body("{}")
        .create();

    let script = [
        // Basic information
        "Trattoria Roma",
        "Fine Dining",
        "Wood-fired pizza",
        "https://img.example.com/roma.png",
        "c",
        // Contact details
        "hello@roma.it",
        "margherita",
        "9123456780",
        "4 Via Appia",
        "c",
        // Business details
        "9",
        "9",
        "0",
        "11:00",
        "23:00",
        "Pizza, Pasta",
        "n",
        "n",
        "s",
        // Fresh wizard after success
        "",
        "",
        "",
        "",
        "q",
    ]
    .join("\n")
        + "\n";

    let bus = EventBus::new();
    let mut executor = CommandExecutor::new(
        RegistrationWizard::new(HttpRestaurantApi::new(&server.url())),
        bus,
    );
    let mut output = Vec::new();
    let summary = TerminalSession::new(script.as_bytes(), &mut output)
        .run(&mut executor)
        .unwrap();

    mock.assert();
    let output = String::from_utf8(output).unwrap();
    assert!(summary.quit);
    assert_eq!(summary.submitted.len(), 1);
    assert!(output.contains("✓ Restaurant created successfully!"));
    assert_eq!(executor.wizard().draft(), &RegistrationDraft::default());
    assert_eq!(executor.wizard().active_step(), 0);
}

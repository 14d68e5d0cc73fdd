use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

use crate::helpers::{assert_is_redirect_to, spawn_app};

fn member_exists_body() -> serde_json::Value {
    json!({
        "title": "Member Exists",
        "status": 400,
        "detail": "jane@example.com is already a list member.",
    })
}

#[tokio::test]
async fn subscribe_redirects_home_for_valid_form_data() {
    let app = spawn_app().await;
    let body = "email=jane%40example.com&first_name=Jane&last_name=Doe";

    Mock::given(path("/lists/afrigem-audience/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let response = app.post_subscription(body.into()).await;

    assert_is_redirect_to(&response, "/");
}

#[tokio::test]
async fn successful_signup_shows_banner_and_clears_the_form() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.mailing_list_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    app.post_subscription("email=jane%40example.com".into())
        .await;
    let html = app.get_home_html().await;

    assert!(html.contains("Thank you for subscribing! Check your email for confirmation."));
    assert!(html.contains("subscription-confirmed"));
    assert!(!html.contains("jane@example.com"));
}

#[tokio::test]
async fn invalid_email_is_reported_inline_without_any_provider_call() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("email=not-an-email", "an address with no at symbol"),
        ("email=jane%40example", "a domain without a dot"),
        ("email=", "an empty email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscription(body.into()).await;

        assert_eq!(response.status().as_u16(), 200);
        let html = response.text().await.unwrap();
        assert!(
            html.contains("Invalid email address"),
            "No inline error was rendered for {}.",
            description
        );
    }

    assert!(
        app.mailing_list_server
            .received_requests()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn invalid_email_keeps_the_entered_value() {
    let app = spawn_app().await;

    let response = app.post_subscription("email=jane%40example".into()).await;

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"value="jane@example""#));
}

#[tokio::test]
async fn subscribe_returns_400_when_the_email_field_is_missing() {
    let app = spawn_app().await;

    let response = app.post_subscription("first_name=Jane".into()).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn already_subscribed_email_gets_a_warning_and_keeps_the_entered_values() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(member_exists_body()))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscription("email=jane%40example.com".into())
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("This email is already subscribed to our newsletter."));
    assert!(html.contains(r#"value="jane@example.com""#));
    assert!(
        app.email_server.received_requests().await.unwrap().is_empty(),
        "A welcome email was sent for a duplicate subscriber."
    );
}

#[tokio::test]
async fn provider_failure_gets_the_generic_error_message() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app
        .post_subscription("email=jane%40example.com".into())
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Failed to subscribe. Please try again later."));
    assert!(html.contains(r#"value="jane@example.com""#));
}

#[tokio::test]
async fn successful_signup_sends_one_welcome_email_to_the_subscriber() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.mailing_list_server)
        .await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_subscription("email=jane%40example.com".into())
        .await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["to"], "jane@example.com");
    assert_eq!(body["subject"], "Welcome to Afrigem Beauty!");
}

#[tokio::test]
async fn welcome_email_bodies_link_to_the_same_place() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.mailing_list_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    app.post_subscription("email=jane%40example.com".into())
        .await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let (html_link, text_link) = app.get_welcome_links(email_request);

    assert_eq!(html_link, text_link);
}

#[tokio::test]
async fn welcome_email_failure_does_not_demote_the_success_outcome() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscription("email=jane%40example.com".into())
        .await;

    assert_is_redirect_to(&response, "/");
    let html = app.get_home_html().await;
    assert!(html.contains("Thank you for subscribing! Check your email for confirmation."));
    assert!(html.contains("subscription-confirmed"));
}

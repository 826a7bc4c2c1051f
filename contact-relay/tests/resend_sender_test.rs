//! Tests for the Resend API sender against a mock HTTP server

use contact_relay::email::{ResendConfig, ResendEmailSender};
use contact_relay::{ContactRequest, EmailSender, Submission};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submission() -> Submission {
    Submission::try_from(ContactRequest {
        name: Some("Jane".to_string()),
        email: Some("jane@x.com".to_string()),
        message: Some("Hi".to_string()),
        target_email: Some("owner@y.com".to_string()),
    })
    .unwrap()
}

fn config(api_url: String) -> ResendConfig {
    ResendConfig {
        api_key: "re_test_key".to_string(),
        sender_email: "noreply@example.com".to_string(),
        sender_name: "Contact Form".to_string(),
        api_url,
    }
}

/// The sender uses a blocking client, so drive it from the blocking pool
async fn send_via(config: ResendConfig) -> bool {
    tokio::task::spawn_blocking(move || {
        let sender = ResendEmailSender::new(config).expect("Failed to build sender");
        sender.send(&submission())
    })
    .await
    .expect("Blocking task panicked")
}

/// Test: a 200 response counts as delivered
#[tokio::test]
async fn test_resend_posts_authorized_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!({
            "from": "Contact Form <noreply@example.com>",
            "to": ["owner@y.com"],
            "subject": "Jane",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_123" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sent = send_via(config(format!("{}/emails", mock_server.uri()))).await;

    assert!(sent);
}

/// Test: the text body embeds the submission
#[tokio::test]
async fn test_resend_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    assert!(send_via(config(format!("{}/emails", mock_server.uri()))).await);

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("Contact Form Submission\n\nFrom: Jane\nEmail: jane@x.com\nMessage:\nHi\n\n---\nSent at: "));
}

/// Test: any status other than 200 is a failure
#[tokio::test]
async fn test_resend_non_200_is_failure() {
    for status in [202, 401, 422, 500] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "message": "nope" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let sent = send_via(config(format!("{}/emails", mock_server.uri()))).await;

        assert!(!sent, "status {} should not count as delivered", status);
    }
}

/// Test: network failures are reported as a failed send
#[tokio::test]
async fn test_resend_unreachable_is_failure() {
    // Nothing listens on the TCP port multiplexer port
    let url = "http://127.0.0.1:1/emails".to_string();

    assert!(!send_via(config(url)).await);
}

/// Test: missing credentials are detected
#[test]
fn test_resend_is_configured() {
    let mut empty_key = config("http://localhost/emails".to_string());
    empty_key.api_key.clear();

    let configured = ResendEmailSender::new(config("http://localhost/emails".to_string())).unwrap();
    let unconfigured = ResendEmailSender::new(empty_key).unwrap();

    assert!(configured.is_configured());
    assert!(!unconfigured.is_configured());
    assert_eq!(configured.service_name(), "Resend");
}

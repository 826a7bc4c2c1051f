//! Common test utilities for relay integration tests

#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum_test::TestServer;
use contact_relay::{routes, AppState, EmailSender, Submission};
use serde_json::{json, Value};

/// How the mock transport responds to a send
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Deliver,
    Fail,
    Panic,
}

/// Mock email sender that captures submissions
#[derive(Clone)]
pub struct MockEmailSender {
    /// Captured submissions, in arrival order
    pub sent: Arc<RwLock<Vec<Submission>>>,
    outcome: Outcome,
    configured: bool,
}

impl MockEmailSender {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            outcome,
            configured: true,
        }
    }

    /// A sender whose credentials are missing
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(Outcome::Deliver)
        }
    }

    pub fn sent(&self) -> Vec<Submission> {
        self.sent.read().unwrap().clone()
    }
}

impl EmailSender for MockEmailSender {
    fn service_name(&self) -> &'static str {
        "Mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn send(&self, submission: &Submission) -> bool {
        self.sent.write().unwrap().push(submission.clone());
        match self.outcome {
            Outcome::Deliver => true,
            Outcome::Fail => false,
            Outcome::Panic => panic!("mock transport exploded"),
        }
    }
}

/// Create a test server backed by the given mock sender
pub fn create_test_server_with(email_sender: MockEmailSender) -> TestServer {
    let state = Arc::new(AppState::new(email_sender));
    let app = routes::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Create a test server whose transport always delivers
pub fn create_test_server() -> (TestServer, MockEmailSender) {
    let email_sender = MockEmailSender::new(Outcome::Deliver);
    let server = create_test_server_with(email_sender.clone());
    (server, email_sender)
}

/// A submission body that passes validation
pub fn valid_body() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@x.com",
        "message": "Hi",
        "target_email": "owner@y.com",
    })
}

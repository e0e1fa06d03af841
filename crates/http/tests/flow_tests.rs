//! End-to-end tests for the flow services against a mock API

#![cfg(feature = "client")]

use passage_core::tests::fixtures::token_with_exp;
use passage_core::validation::{
    ForgotPasswordForm, LoginForm, PasswordChangeForm, RegistrationForm, ResetPasswordForm,
};
use passage_core::{FixedClock, GuardState, MemoryTokenStore, SessionGuard, SessionManager};
use passage_http::{AuthApiService, ClientBuilder, ProfileApiService};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOW: i64 = 1_700_000_000;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("passage_http=debug,passage_core=debug")
        .with_test_writer()
        .try_init();
}

fn services(
    server: &MockServer,
    access: Option<&str>,
    refresh: Option<&str>,
) -> (AuthApiService, ProfileApiService, SessionManager) {
    let session = SessionManager::new(Arc::new(MemoryTokenStore::with_tokens(access, refresh)));
    let builder = ClientBuilder::new().base_url(server.uri());
    let public = builder.clone().build_public().unwrap();
    let authed = builder.build_session(session.clone()).unwrap();
    (
        AuthApiService::new(public, session.clone()),
        ProfileApiService::new(authed),
        session,
    )
}

async fn assert_no_requests(server: &MockServer) {
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "unexpected requests: {received:?}");
}

#[tokio::test]
async fn login_stores_credential_pair() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "alice@example.com", "password": "pw" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access": "A1", "refresh": "R1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (auth, _, session) = services(&server, None, None);
    auth.login(&LoginForm {
        username: " alice@example.com ".into(),
        password: "pw".into(),
    })
    .await
    .unwrap();

    assert_eq!(session.access_token().as_deref(), Some("A1"));
    assert_eq!(session.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn login_failure_shows_server_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let (auth, _, session) = services(&server, None, None);
    let err = auth
        .login(&LoginForm {
            username: "alice".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No active account found with the given credentials"
    );
    assert!(!session.is_established());
}

#[tokio::test]
async fn login_unreachable_server_shows_generic_message() {
    let server = MockServer::start().await;
    let (auth, _, _) = services(&server, None, None);
    drop(server);

    let err = auth
        .login(&LoginForm {
            username: "alice".into(),
            password: "pw".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "An error occurred. Please try again.");
}

#[tokio::test]
async fn register_mismatch_sends_nothing() {
    let server = MockServer::start().await;
    let (auth, _, _) = services(&server, None, None);

    let err = auth
        .register(&RegistrationForm {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret124".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_local());
    assert_eq!(err.to_string(), "Passwords don't match!");
    assert_no_requests(&server).await;
}

#[tokio::test]
async fn register_does_not_sign_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "username": "alice",
            "email": "alice@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (auth, _, session) = services(&server, None, None);
    auth.register(&RegistrationForm {
        username: "alice".into(),
        email: "alice@example.com".into(),
        password: "secret123".into(),
        confirm_password: "secret123".into(),
    })
    .await
    .unwrap();

    assert!(!session.is_established());
}

#[tokio::test]
async fn register_field_errors_are_flattened() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "username": ["A user with that username already exists."]
        })))
        .mount(&server)
        .await;

    let (auth, _, _) = services(&server, None, None);
    let err = auth
        .register(&RegistrationForm {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "A user with that username already exists.");
}

#[tokio::test]
async fn forgot_password_never_reveals_unknown_email() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "No user found with this email address."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (auth, _, _) = services(&server, None, None);
    let message = auth
        .request_password_reset(&ForgotPasswordForm {
            email: "nobody@example.com".into(),
        })
        .await
        .unwrap();

    assert_eq!(message, "Password reset instructions sent to your email");
}

#[tokio::test]
async fn forgot_password_server_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (auth, _, _) = services(&server, None, None);
    let err = auth
        .request_password_reset(&ForgotPasswordForm {
            email: "alice@example.com".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "An error occurred. Please try again.");
}

#[tokio::test]
async fn reset_password_passes_link_parts_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password/"))
        .and(body_json(json!({
            "uidb64": "MQ",
            "token": "c0ffee-1234abcd",
            "password": "new-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Password has been reset successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (auth, _, _) = services(&server, None, None);
    let message = auth
        .reset_password(&ResetPasswordForm {
            uidb64: "MQ".into(),
            token: "c0ffee-1234abcd".into(),
            password: "new-secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(message, "Password has been reset successfully");
}

#[tokio::test]
async fn reset_password_invalid_link_shows_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Invalid reset link"
        })))
        .mount(&server)
        .await;

    let (auth, _, _) = services(&server, None, None);
    let err = auth
        .reset_password(&ResetPasswordForm {
            uidb64: "MQ".into(),
            token: "used".into(),
            password: "new-secret".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid reset link");
}

#[tokio::test]
async fn logout_clears_credentials() {
    let server = MockServer::start().await;
    let (auth, _, session) = services(&server, Some("A"), Some("R"));

    auth.logout().unwrap();
    assert!(!session.is_established());
    auth.logout().unwrap();
    assert_no_requests(&server).await;
}

#[tokio::test]
async fn load_profile_parses_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "alice",
            "email": "alice@example.com",
            "date_joined": "2024-01-15T10:30:00Z",
            "last_updated": "2024-03-02T08:00:00Z"
        })))
        .mount(&server)
        .await;

    let (_, profile, _) = services(&server, Some("A"), Some("R"));
    let user = profile.load_profile().await.unwrap();

    assert_eq!(user.id, Some(7));
    assert_eq!(user.username, "alice");
    assert_eq!(user.date_joined.to_rfc3339(), "2024-01-15T10:30:00+00:00");
}

#[tokio::test]
async fn load_profile_failure_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_, profile, _) = services(&server, Some("A"), Some("R"));
    let err = profile.load_profile().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to load profile data");
    assert!(!err.is_session_expired());
}

#[tokio::test]
async fn load_profile_after_refresh_failure_is_session_expired() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (_, profile, session) = services(&server, Some("A"), Some("R"));
    let err = profile.load_profile().await.unwrap_err();

    assert!(err.is_session_expired());
    assert!(!session.is_established());
}

#[tokio::test]
async fn short_new_password_sends_nothing() {
    let server = MockServer::start().await;
    let (_, profile, _) = services(&server, Some("A"), Some("R"));

    let err = profile
        .change_password(&PasswordChangeForm {
            old_password: "old-secret".into(),
            new_password: "short".into(),
            confirm_password: "short".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "New password must be at least 8 characters long"
    );
    assert_no_requests(&server).await;
}

#[tokio::test]
async fn change_password_omits_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/change-password/"))
        .and(body_json(json!({
            "old_password": "old-secret",
            "new_password": "new-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Password updated successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_, profile, _) = services(&server, Some("A"), Some("R"));
    let message = profile
        .change_password(&PasswordChangeForm {
            old_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "new-secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(message, "Password changed successfully!");
}

#[tokio::test]
async fn change_password_wrong_old_password() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/change-password/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "old_password": ["Wrong password."]
        })))
        .mount(&server)
        .await;

    let (_, profile, session) = services(&server, Some("A"), Some("R"));
    let err = profile
        .change_password(&PasswordChangeForm {
            old_password: "not-it".into(),
            new_password: "new-secret".into(),
            confirm_password: "new-secret".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Wrong password.");
    assert!(session.is_established());
}

#[tokio::test]
async fn guard_refreshes_expired_access_over_http() {
    init_tracing();
    let server = MockServer::start().await;
    let fresh = token_with_exp(NOW + 300);

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({ "refresh": "R" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": fresh.as_str() })))
        .expect(1)
        .mount(&server)
        .await;

    let expired = token_with_exp(NOW - 10);
    let (_, _, session) = services(&server, Some(expired.as_str()), Some("R"));
    let refresher = ClientBuilder::new()
        .base_url(server.uri())
        .build_public()
        .unwrap();

    let mut guard = SessionGuard::new(session.clone(), FixedClock(NOW));
    let mut seen = Vec::new();
    let state = guard
        .evaluate_observed(&refresher, |s| seen.push(s))
        .await;

    assert_eq!(state, GuardState::Authorized);
    assert_eq!(
        seen,
        vec![GuardState::Checking, GuardState::Refreshing, GuardState::Authorized]
    );
    assert_eq!(session.access_token(), Some(fresh));
}

#[tokio::test]
async fn guard_rejected_refresh_over_http_denies_access() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token is blacklisted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let expired = token_with_exp(NOW - 10);
    let (_, _, session) = services(&server, Some(expired.as_str()), Some("R"));
    let refresher = ClientBuilder::new()
        .base_url(server.uri())
        .build_public()
        .unwrap();

    let mut guard = SessionGuard::new(session.clone(), FixedClock(NOW));
    assert_eq!(guard.evaluate(&refresher).await, GuardState::Unauthorized);
    assert!(!session.is_established());
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use actix_web::{http::StatusCode, test};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::json;
use skykip_logger::log_init;

use crate::{
    error::SkError,
    tests::test_utils::{TEST_ISSUER, TEST_KID, TestIdp, test_app, valid_claims},
};

#[tokio::test]
async fn denies_request_without_authorization_header() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();
    let app = test_app(idp.jwt_config.clone()).await;

    let response = test::TestRequest::get().uri("/").send_request(&app).await;

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
    let body: serde_json::Value = test::read_body_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn denies_bad_bearer_scheme() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();
    let token = idp.issue_token(&valid_claims());
    let app = test_app(idp.jwt_config.clone()).await;

    // a valid token under the wrong scheme must not pass
    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Basic {token}")))
        .send_request(&app)
        .await;

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn denies_garbage_token() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();
    let app = test_app(idp.jwt_config.clone()).await;

    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .send_request(&app)
        .await;

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());

    assert!(matches!(
        idp.jwt_config.decode_authentication_token("not-a-jwt"),
        Err(SkError::TokenMalformed(_))
    ));
    assert!(matches!(
        idp.jwt_config.decode_authentication_token(""),
        Err(SkError::TokenMalformed(_))
    ));
}

#[tokio::test]
async fn denies_forged_token() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();
    // another provider generates its own key pair but reuses the same `kid`,
    // so its tokens reach signature verification and fail there
    let forger = TestIdp::new();
    let forged = forger.issue_token(&valid_claims());

    assert!(matches!(
        idp.jwt_config.decode_authentication_token(&forged),
        Err(SkError::TokenSignatureInvalid(_))
    ));

    let app = test_app(idp.jwt_config.clone()).await;
    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {forged}")))
        .send_request(&app)
        .await;
    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn denies_unsigned_token() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();

    // a syntactically valid token with `alg: none` and no signature
    let header = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(&json!({"alg": "none", "typ": "JWT", "kid": TEST_KID})).unwrap(),
    );
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&valid_claims()).unwrap());
    let unsigned = format!("{header}.{payload}.");

    assert!(idp.jwt_config.decode_authentication_token(&unsigned).is_err());

    let app = test_app(idp.jwt_config.clone()).await;
    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {unsigned}")))
        .send_request(&app)
        .await;
    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn denies_audience_mismatch() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();

    let mut claims = valid_claims();
    claims["aud"] = json!("another.api");
    let token = idp.issue_token(&claims);

    assert_eq!(
        Err(SkError::TokenAudienceMismatch),
        idp.jwt_config
            .decode_authentication_token(&token)
            .map(|_| ())
    );

    let app = test_app(idp.jwt_config.clone()).await;
    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .send_request(&app)
        .await;
    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn denies_expired_token() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();

    let now = jsonwebtoken::get_current_timestamp();
    let mut claims = valid_claims();
    claims["iat"] = json!(now - 7200);
    // beyond the default validation leeway
    claims["exp"] = json!(now - 3600);
    let token = idp.issue_token(&claims);

    assert_eq!(
        Err(SkError::TokenExpired),
        idp.jwt_config
            .decode_authentication_token(&token)
            .map(|_| ())
    );
}

#[tokio::test]
async fn denies_wrong_issuer() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();

    let mut claims = valid_claims();
    claims["iss"] = json!("https://evil-tenant.eu.auth0.com/");
    let token = idp.issue_token(&claims);

    assert!(matches!(
        idp.jwt_config.decode_authentication_token(&token),
        Err(SkError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn allows_valid_token_and_returns_private_message() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();
    let token = idp.issue_token(&valid_claims());

    let user_claim = idp
        .jwt_config
        .decode_authentication_token(&token)
        .expect("a valid token must be accepted");
    assert_eq!(Some(TEST_ISSUER.to_owned()), user_claim.iss);
    assert_eq!(Some("client-credentials".to_owned()), user_claim.gty);

    let app = test_app(idp.jwt_config.clone()).await;

    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .send_request(&app)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(json!({"message": "This is private"}), body);

    // two identical authorized requests produce identical responses
    let response = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .send_request(&app)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    let second_body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, second_body);
}

#[tokio::test]
async fn audience_is_not_checked_when_not_configured() {
    log_init(option_env!("RUST_LOG"));
    let idp = TestIdp::new();
    let mut jwt_config = (*idp.jwt_config).clone();
    jwt_config.jwt_audience = None;

    let mut claims = valid_claims();
    claims["aud"] = json!("another.api");
    let token = idp.issue_token(&claims);

    assert!(jwt_config.decode_authentication_token(&token).is_ok());
}

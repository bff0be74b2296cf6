use crate::auth::jwt::JwtService;
use crate::constants::{SESSION_TTL_MINUTES, USER_LOGGED_IN, USER_REGISTERED};
use crate::core::errors::SplitsheetError;
use crate::tests::{TEST_SECRET, create_test_service, register};

#[tokio::test]
async fn test_register_user() {
    let service = create_test_service();
    let user = service
        .register_user(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "hunter22".to_string(),
        )
        .await
        .unwrap();

    assert!(!user.id.is_empty());
    assert_eq!(user.email, "test@example.com");
    assert_ne!(user.password_hash, "hunter22");

    let stored = service.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Test User");

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, USER_REGISTERED);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let service = create_test_service();
    register(&service, "Alice").await;

    let result = service
        .register_user(
            "Other Alice".to_string(),
            "alice@example.com".to_string(),
            "password".to_string(),
        )
        .await;

    assert!(matches!(result, Err(SplitsheetError::EmailAlreadyRegistered(_))));
}

#[tokio::test]
async fn test_register_invalid_input() {
    let service = create_test_service();

    let missing = service
        .register_user("Name".to_string(), String::new(), "pw".to_string())
        .await;
    assert!(matches!(missing, Err(SplitsheetError::MissingEmail)));

    let invalid = service
        .register_user("Name".to_string(), "invalid".to_string(), "pw".to_string())
        .await;
    assert!(matches!(invalid, Err(SplitsheetError::InvalidEmail(_))));

    let no_password = service
        .register_user("Name".to_string(), "name@example.com".to_string(), String::new())
        .await;
    assert!(matches!(no_password, Err(SplitsheetError::InvalidInput(field, _)) if field == "password"));

    let bad_name = service
        .register_user("   ".to_string(), "name@example.com".to_string(), "pw".to_string())
        .await;
    assert!(matches!(bad_name, Err(SplitsheetError::InvalidInput(field, _)) if field == "name"));
}

#[tokio::test]
async fn test_authenticate_issues_valid_token() {
    let service = create_test_service();
    let alice = register(&service, "Alice").await;

    let token = service.authenticate("alice@example.com", "password123").await.unwrap();
    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, alice.id);
    assert_eq!(claims.exp - claims.iat, SESSION_TTL_MINUTES * 60);
    assert!(claims.exp > chrono::Utc::now().timestamp());

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.last().unwrap().action, USER_LOGGED_IN);
}

#[tokio::test]
async fn test_authenticate_rejects_bad_credentials() {
    let service = create_test_service();
    register(&service, "Alice").await;

    let wrong_password = service.authenticate("alice@example.com", "nope").await;
    assert!(matches!(wrong_password, Err(SplitsheetError::InvalidCredentials)));

    let unknown = service.authenticate("nobody@example.com", "password123").await;
    assert!(matches!(unknown, Err(SplitsheetError::InvalidCredentials)));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let other = JwtService::new("another-secret".to_string());
    let token = other.generate_token("user-1").unwrap();

    let ours = JwtService::new(TEST_SECRET.to_string());
    assert!(matches!(ours.validate_token(&token), Err(SplitsheetError::Unauthorized(_))));
    assert!(matches!(ours.validate_token("garbage"), Err(SplitsheetError::Unauthorized(_))));
    assert_eq!(other.validate_token(&token).unwrap().sub, "user-1");
}

#[test]
fn test_expired_token_is_rejected() {
    use crate::auth::jwt::Claims;
    use jsonwebtoken::{EncodingKey, Header, encode};

    let issued_at = chrono::Utc::now().timestamp() - 7200;
    let claims = Claims {
        sub: "user-1".to_string(),
        iat: issued_at,
        exp: issued_at + 3600,
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes())).unwrap();

    let service = JwtService::new(TEST_SECRET.to_string());
    assert!(matches!(service.validate_token(&token), Err(SplitsheetError::Unauthorized(_))));
}

///! Tests for JWT claim extraction.
///!
///! Signature verification happens against the live Supabase JWKS and is not
///! reproducible offline, so these tests exercise the claim helpers that the
///! auth extractor relies on to build a local user row.
///!
///! Run with: `cargo test --test auth_test`
use uuid::Uuid;

use neovogue_backend::auth::jwt::{Claims, UserMetadata};

fn metadata() -> UserMetadata {
    UserMetadata {
        full_name: Some("Alice Smith".to_string()),
        name: Some("alice".to_string()),
        avatar_url: Some("https://example.com/avatar.png".to_string()),
        picture: Some("https://example.com/picture.png".to_string()),
        email: Some("alice@example.com".to_string()),
        email_verified: Some(true),
    }
}

fn claims(sub: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        exp: 2_000_000_000,
        iat: None,
        iss: Some("https://example.supabase.co/auth/v1".to_string()),
        email: None,
        role: Some("authenticated".to_string()),
        user_metadata: Some(metadata()),
    }
}

#[test]
fn user_id_parses_the_sub_claim() {
    let user_id = Uuid::new_v4();
    let claims = claims(&user_id.to_string());
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn user_id_rejects_a_malformed_sub() {
    let claims = claims("not-a-uuid");
    assert!(claims.user_id().is_err());
}

#[test]
fn display_name_prefers_full_name_over_name() {
    let claims = claims(&Uuid::new_v4().to_string());
    assert_eq!(claims.display_name().unwrap(), "Alice Smith");
}

#[test]
fn display_name_falls_back_to_name() {
    let mut claims = claims(&Uuid::new_v4().to_string());
    claims.user_metadata.as_mut().unwrap().full_name = None;
    assert_eq!(claims.display_name().unwrap(), "alice");
}

#[test]
fn avatar_url_falls_back_to_picture() {
    let mut claims = claims(&Uuid::new_v4().to_string());
    claims.user_metadata.as_mut().unwrap().avatar_url = None;
    assert_eq!(
        claims.avatar_url().unwrap(),
        "https://example.com/picture.png"
    );
}

#[test]
fn user_email_prefers_top_level_then_metadata() {
    let mut claims = claims(&Uuid::new_v4().to_string());
    assert_eq!(claims.user_email().unwrap(), "alice@example.com");

    claims.email = Some("top@example.com".to_string());
    assert_eq!(claims.user_email().unwrap(), "top@example.com");
}

#[test]
fn helpers_handle_missing_metadata() {
    let mut claims = claims(&Uuid::new_v4().to_string());
    claims.user_metadata = None;
    assert!(claims.display_name().is_none());
    assert!(claims.avatar_url().is_none());
    assert!(claims.user_email().is_none());
}

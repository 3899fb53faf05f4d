///! Tests for the request-body validation rules.
///!
///! Every write endpoint validates its JSON body before touching the
///! database; these tests pin the bounds the API enforces.
///!
///! Run with: `cargo test --test validation_test`
use uuid::Uuid;
use validator::Validate;

use neovogue_backend::models::dress_images::ImageType;
use neovogue_backend::models::designer_profiles::UpsertDesignerProfile;
use neovogue_backend::models::portfolio::CreatePortfolioItem;
use neovogue_backend::models::quotations::CreateQuotation;
use neovogue_backend::models::requests::{CreateRequest, NewDressImage};

fn image() -> NewDressImage {
    NewDressImage {
        image_url: "https://example.com/dress.jpg".to_string(),
        image_type: ImageType::Original,
    }
}

fn valid_request() -> CreateRequest {
    CreateRequest {
        title: "Restyle my grandmother's saree".to_string(),
        description: Some("Turn it into a modern lehenga".to_string()),
        style_preference: Some("traditional fusion".to_string()),
        budget_min: Some(2000),
        budget_max: Some(8000),
        timeline_weeks: Some(4),
        pickup_address: "12 MG Road, Bengaluru".to_string(),
        delivery_address: "12 MG Road, Bengaluru".to_string(),
        images: vec![image()],
    }
}

fn valid_quotation() -> CreateQuotation {
    CreateQuotation {
        request_id: Uuid::new_v4(),
        amount: 4500,
        estimated_days: 14,
        description: Some("Full restyle with new embroidery".to_string()),
    }
}

#[test]
fn well_formed_request_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn request_title_must_be_at_least_three_chars() {
    let mut req = valid_request();
    req.title = "ab".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn request_requires_at_least_one_image() {
    let mut req = valid_request();
    req.images.clear();
    assert!(req.validate().is_err());
}

#[test]
fn request_rejects_a_malformed_image_url() {
    let mut req = valid_request();
    req.images[0].image_url = "not a url".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn request_addresses_have_a_minimum_length() {
    let mut req = valid_request();
    req.pickup_address = "x".to_string();
    assert!(req.validate().is_err());
}

#[test]
fn request_timeline_is_capped_at_a_year() {
    let mut req = valid_request();
    req.timeline_weeks = Some(60);
    assert!(req.validate().is_err());
}

#[test]
fn quotation_amount_bounds() {
    let mut q = valid_quotation();
    assert!(q.validate().is_ok());

    q.amount = 99;
    assert!(q.validate().is_err());

    q.amount = 100;
    assert!(q.validate().is_ok());

    q.amount = 10_000_001;
    assert!(q.validate().is_err());
}

#[test]
fn quotation_estimated_days_bounds() {
    let mut q = valid_quotation();
    q.estimated_days = 0;
    assert!(q.validate().is_err());

    q.estimated_days = 365;
    assert!(q.validate().is_ok());

    q.estimated_days = 366;
    assert!(q.validate().is_err());
}

#[test]
fn designer_profile_bounds() {
    let mut profile = UpsertDesignerProfile {
        bio: Some("Ten years of couture experience".to_string()),
        specialties: Some(vec!["bridal".to_string(), "upcycling".to_string()]),
        is_available: Some(true),
        price_range_min: Some(1000),
        price_range_max: Some(20000),
        experience_years: Some(10),
        portfolio_url: Some("https://example.com/portfolio".to_string()),
    };
    assert!(profile.validate().is_ok());

    profile.experience_years = Some(101);
    assert!(profile.validate().is_err());

    profile.experience_years = Some(10);
    profile.bio = Some("x".repeat(2001));
    assert!(profile.validate().is_err());
}

#[test]
fn portfolio_item_requires_a_valid_after_image() {
    let mut item = CreatePortfolioItem {
        title: "Denim jacket rework".to_string(),
        description: None,
        before_image_url: None,
        after_image_url: "https://example.com/after.jpg".to_string(),
        category: Some("outerwear".to_string()),
        tags: None,
        is_featured: None,
    };
    assert!(item.validate().is_ok());

    item.after_image_url = "nope".to_string();
    assert!(item.validate().is_err());

    item.after_image_url = "https://example.com/after.jpg".to_string();
    item.title = "x".to_string();
    assert!(item.validate().is_err());
}

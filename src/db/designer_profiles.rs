use sea_orm::*;
use uuid::Uuid;

use crate::models::designer_profiles::{self, UpsertDesignerProfile};

fn specialties_json(list: Vec<String>) -> serde_json::Value {
    serde_json::Value::Array(list.into_iter().map(serde_json::Value::String).collect())
}

/// Fetch a designer profile by the owning user's id.
pub async fn get_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<designer_profiles::Model>, DbErr> {
    designer_profiles::Entity::find()
        .filter(designer_profiles::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Public designer browse: available profiles, best rated first.
pub async fn list_available(
    db: &DatabaseConnection,
) -> Result<Vec<designer_profiles::Model>, DbErr> {
    designer_profiles::Entity::find()
        .filter(designer_profiles::Column::IsAvailable.eq(true))
        .order_by_desc(designer_profiles::Column::Rating)
        .order_by_desc(designer_profiles::Column::TotalProjects)
        .all(db)
        .await
}

/// Create or update a designer's own profile.
pub async fn upsert(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpsertDesignerProfile,
) -> Result<designer_profiles::Model, DbErr> {
    match get_by_user_id(db, user_id).await? {
        Some(existing) => {
            let mut active: designer_profiles::ActiveModel = existing.into();
            if let Some(bio) = input.bio {
                active.bio = Set(Some(bio));
            }
            if let Some(specialties) = input.specialties {
                active.specialties = Set(Some(specialties_json(specialties)));
            }
            if let Some(is_available) = input.is_available {
                active.is_available = Set(is_available);
            }
            if let Some(min) = input.price_range_min {
                active.price_range_min = Set(Some(min));
            }
            if let Some(max) = input.price_range_max {
                active.price_range_max = Set(Some(max));
            }
            if let Some(years) = input.experience_years {
                active.experience_years = Set(Some(years));
            }
            if let Some(url) = input.portfolio_url {
                active.portfolio_url = Set(Some(url));
            }
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(db).await
        }
        None => {
            designer_profiles::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                bio: Set(input.bio),
                specialties: Set(input.specialties.map(specialties_json)),
                rating: Set(None),
                is_verified: Set(false),
                is_available: Set(input.is_available.unwrap_or(true)),
                price_range_min: Set(input.price_range_min),
                price_range_max: Set(input.price_range_max),
                experience_years: Set(input.experience_years),
                total_projects: Set(0),
                portfolio_url: Set(input.portfolio_url),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(None),
            }
            .insert(db)
            .await
        }
    }
}

/// Flip the admin verification flag.
pub async fn set_verified(
    db: &DatabaseConnection,
    user_id: Uuid,
    is_verified: bool,
) -> Result<designer_profiles::Model, DbErr> {
    let profile = get_by_user_id(db, user_id)
        .await?
        .ok_or(DbErr::RecordNotFound("Designer profile not found".to_string()))?;

    let mut active: designer_profiles::ActiveModel = profile.into();
    active.is_verified = Set(is_verified);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, CompleteProfile, CreateUserFromAuth, UpdateUser};

/// Create a local user row from Supabase Auth JWT claims (called by the auth
/// middleware on first sight of a token).
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    if let Some(existing) = users::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_user = users::ActiveModel {
        id: Set(input.id),
        email: Set(input.email),
        full_name: Set(input.full_name),
        phone: Set(None),
        city: Set(None),
        address: Set(None),
        avatar_url: Set(input.avatar_url),
        role: Set(input.role),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

/// Fetch users with page-based pagination (admin listing).
pub async fn get_users_paginated(
    db: &DatabaseConnection,
    page: u64,
    limit: u64,
) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::CreatedAt)
        .paginate(db, limit)
        .fetch_page(page.saturating_sub(1))
        .await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Complete a user's profile after first login (role, name, contact details).
pub async fn complete_profile(
    db: &DatabaseConnection,
    id: Uuid,
    input: CompleteProfile,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("User not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(role) = input.role {
        active.role = Set(role);
    }
    if let Some(full_name) = input.full_name {
        active.full_name = Set(Some(full_name));
    }
    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(city) = input.city {
        active.city = Set(Some(city));
    }
    if let Some(address) = input.address {
        active.address = Set(Some(address));
    }
    if let Some(avatar_url) = input.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Update a user's own profile fields.
pub async fn update_user(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateUser,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("User not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(full_name) = input.full_name {
        active.full_name = Set(Some(full_name));
    }
    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(city) = input.city {
        active.city = Set(Some(city));
    }
    if let Some(address) = input.address {
        active.address = Set(Some(address));
    }
    if let Some(avatar_url) = input.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a user by ID.
pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    users::Entity::delete_by_id(id).exec(db).await
}

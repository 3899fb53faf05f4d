use sea_orm::*;
use uuid::Uuid;

use crate::models::portfolio::{self, CreatePortfolioItem, UpdatePortfolioItem};

fn tags_json(list: Vec<String>) -> serde_json::Value {
    serde_json::Value::Array(list.into_iter().map(serde_json::Value::String).collect())
}

/// Insert a new portfolio item for a designer.
pub async fn insert_item(
    db: &DatabaseConnection,
    designer_id: Uuid,
    input: CreatePortfolioItem,
) -> Result<portfolio::Model, DbErr> {
    portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        designer_id: Set(designer_id),
        title: Set(input.title),
        description: Set(input.description),
        before_image_url: Set(input.before_image_url),
        after_image_url: Set(input.after_image_url),
        category: Set(input.category),
        tags: Set(input.tags.map(tags_json)),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    }
    .insert(db)
    .await
}

/// Fetch a single item by ID.
pub async fn get_item_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find_by_id(id).one(db).await
}

/// A designer's showcase, featured items first, then newest.
pub async fn get_items_by_designer(
    db: &DatabaseConnection,
    designer_id: Uuid,
) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::DesignerId.eq(designer_id))
        .order_by_desc(portfolio::Column::IsFeatured)
        .order_by_desc(portfolio::Column::CreatedAt)
        .all(db)
        .await
}

/// Update an existing item.
pub async fn update_item(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePortfolioItem,
) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio item not found".to_string()))?;

    let mut active: portfolio::ActiveModel = item.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(url) = input.before_image_url {
        active.before_image_url = Set(Some(url));
    }
    if let Some(url) = input.after_image_url {
        active.after_image_url = Set(url);
    }
    if let Some(category) = input.category {
        active.category = Set(Some(category));
    }
    if let Some(tags) = input.tags {
        active.tags = Set(Some(tags_json(tags)));
    }
    if let Some(is_featured) = input.is_featured {
        active.is_featured = Set(is_featured);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete an item by ID.
pub async fn delete_item(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}

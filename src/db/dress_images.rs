use sea_orm::*;
use uuid::Uuid;

use crate::models::dress_images::{self, AddImage};

/// Append an image to a request.
pub async fn insert_image(
    db: &DatabaseConnection,
    request_id: Uuid,
    input: AddImage,
) -> Result<dress_images::Model, DbErr> {
    dress_images::ActiveModel {
        id: Set(Uuid::new_v4()),
        request_id: Set(request_id),
        image_url: Set(input.image_url),
        image_type: Set(input.image_type),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

/// Fetch all images for a request, oldest first.
pub async fn get_images_by_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Vec<dress_images::Model>, DbErr> {
    dress_images::Entity::find()
        .filter(dress_images::Column::RequestId.eq(request_id))
        .order_by_asc(dress_images::Column::CreatedAt)
        .all(db)
        .await
}

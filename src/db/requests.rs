use sea_orm::*;
use uuid::Uuid;

use crate::models::assignments;
use crate::models::designer_profiles;
use crate::models::dress_images;
use crate::models::requests::{self, CreateRequest, Status};

/// Insert a new redesign request together with its images, in one transaction.
/// The caller has already validated that at least one image is present.
pub async fn insert_request_with_images(
    db: &DatabaseConnection,
    customer_id: Uuid,
    input: CreateRequest,
) -> Result<requests::Model, DbErr> {
    let txn = db.begin().await?;

    let request = requests::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        style_preference: Set(input.style_preference),
        budget_min: Set(input.budget_min),
        budget_max: Set(input.budget_max),
        timeline_weeks: Set(input.timeline_weeks),
        pickup_address: Set(Some(input.pickup_address)),
        delivery_address: Set(Some(input.delivery_address)),
        pickup_confirmed: Set(false),
        pickup_date: Set(None),
        delivery_confirmed: Set(false),
        delivery_date: Set(None),
        customer_id: Set(customer_id),
        designer_id: Set(None),
        delivery_partner_id: Set(None),
        status: Set(Status::Pending),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    }
    .insert(&txn)
    .await?;

    for image in input.images {
        dress_images::ActiveModel {
            id: Set(Uuid::new_v4()),
            request_id: Set(request.id),
            image_url: Set(image.image_url),
            image_type: Set(image.image_type),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(request)
}

/// Fetch a single request by ID.
pub async fn get_request_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<requests::Model>, DbErr> {
    requests::Entity::find_by_id(id).one(db).await
}

/// Fetch a customer's own requests, newest first.
pub async fn get_requests_by_customer(
    db: &DatabaseConnection,
    customer_id: Uuid,
) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::CustomerId.eq(customer_id))
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch requests assigned to a designer, newest first.
pub async fn get_requests_by_designer(
    db: &DatabaseConnection,
    designer_id: Uuid,
) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::DesignerId.eq(designer_id))
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch requests still open for quoting (pending or quoted), newest first.
pub async fn get_open_requests(db: &DatabaseConnection) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::Status.is_in([Status::Pending, Status::Quoted]))
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

/// Admin listing: all requests, optionally filtered by status.
pub async fn get_requests_paginated(
    db: &DatabaseConnection,
    status: Option<Status>,
    page: u64,
    limit: u64,
) -> Result<Vec<requests::Model>, DbErr> {
    let mut query = requests::Entity::find();
    if let Some(status) = status {
        query = query.filter(requests::Column::Status.eq(status));
    }
    query
        .order_by_desc(requests::Column::CreatedAt)
        .paginate(db, limit)
        .fetch_page(page.saturating_sub(1))
        .await
}

/// Write a new status computed by `workflow::transition`. Used for the
/// transitions without further side effects (start work, cancel).
pub async fn set_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: Status,
) -> Result<requests::Model, DbErr> {
    let request = requests::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Request not found".to_string()))?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(status);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Complete the redesign: mark the request completed, open the drop-off
/// assignment, and bump the designer's project counter — one transaction.
pub async fn complete_work(
    db: &DatabaseConnection,
    request: requests::Model,
) -> Result<requests::Model, DbErr> {
    let txn = db.begin().await?;

    let designer_id = request.designer_id;
    let request_id = request.id;
    let has_delivery_address = request.delivery_address.is_some();

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(Status::Completed);
    active.updated_at = Set(Some(chrono::Utc::now()));
    let updated = active.update(&txn).await?;

    if has_delivery_address {
        assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            request_id: Set(request_id),
            assignment_type: Set(assignments::AssignmentType::Delivery),
            delivery_partner_id: Set(None),
            status: Set(assignments::Status::Pending),
            scheduled_date: Set(None),
            completed_date: Set(None),
            notes: Set(None),
            created_at: Set(chrono::Utc::now()),
            updated_at: Set(None),
        }
        .insert(&txn)
        .await?;
    }

    if let Some(designer_id) = designer_id {
        if let Some(profile) = designer_profiles::Entity::find()
            .filter(designer_profiles::Column::UserId.eq(designer_id))
            .one(&txn)
            .await?
        {
            let total = profile.total_projects + 1;
            let mut active: designer_profiles::ActiveModel = profile.into();
            active.total_projects = Set(total);
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(&txn).await?;
        }
    }

    txn.commit().await?;
    Ok(updated)
}

use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::assignments::{self, AssignmentType, Status};
use crate::models::requests;

/// Unclaimed pending assignments, oldest first so the backlog drains in order.
pub async fn get_open_assignments(
    db: &DatabaseConnection,
) -> Result<Vec<assignments::Model>, DbErr> {
    assignments::Entity::find()
        .filter(assignments::Column::Status.eq(Status::Pending))
        .filter(assignments::Column::DeliveryPartnerId.is_null())
        .order_by_asc(assignments::Column::CreatedAt)
        .all(db)
        .await
}

/// A partner's own live and past assignments, newest first.
pub async fn get_assignments_by_partner(
    db: &DatabaseConnection,
    partner_id: Uuid,
) -> Result<Vec<assignments::Model>, DbErr> {
    assignments::Entity::find()
        .filter(assignments::Column::DeliveryPartnerId.eq(partner_id))
        .order_by_desc(assignments::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single assignment by ID.
pub async fn get_assignment_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<assignments::Model>, DbErr> {
    assignments::Entity::find_by_id(id).one(db).await
}

fn claim_update(id: Uuid, partner_id: Uuid) -> UpdateMany<assignments::Entity> {
    assignments::Entity::update_many()
        .col_expr(assignments::Column::Status, Expr::value(Status::InTransit))
        .col_expr(
            assignments::Column::DeliveryPartnerId,
            Expr::value(Some(partner_id)),
        )
        .col_expr(
            assignments::Column::UpdatedAt,
            Expr::value(Some(chrono::Utc::now())),
        )
        .filter(assignments::Column::Id.eq(id))
        .filter(assignments::Column::Status.eq(Status::Pending))
        .filter(assignments::Column::DeliveryPartnerId.is_null())
}

/// Claim a pending assignment with a conditional update: the row is only
/// touched if it is still pending and unclaimed, so of two partners racing on
/// the same id exactly one sees `rows_affected == 1`.
pub async fn claim_assignment(
    db: &DatabaseConnection,
    id: Uuid,
    partner_id: Uuid,
) -> Result<bool, DbErr> {
    let result = claim_update(id, partner_id).exec(db).await?;
    Ok(result.rows_affected == 1)
}

/// Complete an in-transit assignment and mirror the confirmation onto the
/// request row (pickup_confirmed/pickup_date or the delivery pair), in one
/// transaction. The caller has verified the partner owns the assignment.
pub async fn complete_assignment(
    db: &DatabaseConnection,
    assignment: assignments::Model,
    notes: Option<String>,
) -> Result<assignments::Model, DbErr> {
    let txn = db.begin().await?;

    let now = chrono::Utc::now();
    let request_id = assignment.request_id;
    let assignment_type = assignment.assignment_type;
    let partner_id = assignment.delivery_partner_id;

    let mut active: assignments::ActiveModel = assignment.into();
    active.status = Set(Status::Completed);
    active.completed_date = Set(Some(now));
    if let Some(notes) = notes {
        active.notes = Set(Some(notes));
    }
    active.updated_at = Set(Some(now));
    let completed = active.update(&txn).await?;

    let request = requests::Entity::find_by_id(request_id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Request not found".to_string()))?;

    let mut active: requests::ActiveModel = request.into();
    match assignment_type {
        AssignmentType::Pickup => {
            active.pickup_confirmed = Set(true);
            active.pickup_date = Set(Some(now));
        }
        AssignmentType::Delivery => {
            active.delivery_confirmed = Set(true);
            active.delivery_date = Set(Some(now));
        }
    }
    active.delivery_partner_id = Set(partner_id);
    active.updated_at = Set(Some(now));
    active.update(&txn).await?;

    txn.commit().await?;
    Ok(completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_only_touches_unclaimed_pending_rows() {
        let sql = claim_update(Uuid::new_v4(), Uuid::new_v4())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""status" = 'in_transit'"#), "{sql}");
        assert!(sql.contains(r#""status" = 'pending'"#), "{sql}");
        assert!(sql.contains(r#""delivery_partner_id" IS NULL"#), "{sql}");
    }
}

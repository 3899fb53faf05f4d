use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::earnings::{self, split_amount};
use crate::models::quotations::{self, CreateQuotation, Status};
use crate::models::requests;
use crate::models::assignments;

/// Insert a quotation and move the request to its new status (from
/// `workflow::transition`) in the same transaction. The old client inserted
/// the quotation and never touched the request row.
pub async fn submit_quotation(
    db: &DatabaseConnection,
    designer_id: Uuid,
    input: CreateQuotation,
    new_request_status: requests::Status,
) -> Result<quotations::Model, DbErr> {
    let txn = db.begin().await?;

    let quotation = quotations::ActiveModel {
        id: Set(Uuid::new_v4()),
        request_id: Set(input.request_id),
        designer_id: Set(designer_id),
        amount: Set(input.amount),
        estimated_days: Set(input.estimated_days),
        description: Set(input.description),
        status: Set(Status::Pending),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(&txn)
    .await?;

    let request = requests::Entity::find_by_id(input.request_id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Request not found".to_string()))?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(new_request_status);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(&txn).await?;

    txn.commit().await?;
    Ok(quotation)
}

/// Conditional accept of a single quotation. Filtering on `pending` makes a
/// second accept of the same quotation (or one already rejected by a sibling
/// accept) a no-op instead of a silent overwrite.
fn accept_quotation_update(quotation_id: Uuid) -> UpdateMany<quotations::Entity> {
    quotations::Entity::update_many()
        .col_expr(quotations::Column::Status, Expr::value(Status::Accepted))
        .filter(quotations::Column::Id.eq(quotation_id))
        .filter(quotations::Column::Status.eq(Status::Pending))
}

/// Conditional designer assignment. The request must still be `quoted`; a
/// concurrent accept that already moved it on leaves this touching zero rows.
fn assign_designer_update(
    request_id: Uuid,
    designer_id: Uuid,
    new_status: requests::Status,
) -> UpdateMany<requests::Entity> {
    requests::Entity::update_many()
        .col_expr(
            requests::Column::DesignerId,
            Expr::value(Some(designer_id)),
        )
        .col_expr(requests::Column::Status, Expr::value(new_status))
        .col_expr(
            requests::Column::UpdatedAt,
            Expr::value(Some(chrono::Utc::now())),
        )
        .filter(requests::Column::Id.eq(request_id))
        .filter(requests::Column::Status.eq(requests::Status::Quoted))
}

/// Accept a quotation. One transaction covers every side effect the old
/// client scattered across pages (or skipped entirely):
/// - the chosen quotation becomes `accepted`, all siblings `rejected`;
/// - the request gets its designer and the `accepted` status;
/// - the earnings ledger row is written with a server-computed fee split;
/// - a pickup assignment is opened when the request has a pickup address.
///
/// The quotation and request writes follow the same conditional-update shape
/// as `assignments::claim_assignment`: of two racing accepts exactly one sees
/// its rows change; the loser rolls back and gets `Ok(None)`.
pub async fn accept_quotation(
    db: &DatabaseConnection,
    quotation: quotations::Model,
    request: requests::Model,
    new_request_status: requests::Status,
) -> Result<Option<quotations::Model>, DbErr> {
    let txn = db.begin().await?;

    let quotation_id = quotation.id;
    let request_id = request.id;
    let designer_id = quotation.designer_id;
    let amount = quotation.amount;
    let has_pickup_address = request.pickup_address.is_some();

    let result = accept_quotation_update(quotation_id).exec(&txn).await?;
    if result.rows_affected != 1 {
        txn.rollback().await?;
        return Ok(None);
    }

    let result = assign_designer_update(request_id, designer_id, new_request_status)
        .exec(&txn)
        .await?;
    if result.rows_affected != 1 {
        txn.rollback().await?;
        return Ok(None);
    }

    quotations::Entity::update_many()
        .col_expr(quotations::Column::Status, Expr::value(Status::Rejected))
        .filter(quotations::Column::RequestId.eq(request_id))
        .filter(quotations::Column::Id.ne(quotation_id))
        .filter(quotations::Column::Status.eq(Status::Pending))
        .exec(&txn)
        .await?;

    let (platform_fee, net_amount) = split_amount(amount);
    earnings::ActiveModel {
        id: Set(Uuid::new_v4()),
        quotation_id: Set(quotation_id),
        request_id: Set(request_id),
        designer_id: Set(designer_id),
        amount: Set(amount),
        platform_fee: Set(platform_fee),
        net_amount: Set(net_amount),
        status: Set(earnings::Status::Pending),
        paid_at: Set(None),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(&txn)
    .await?;

    if has_pickup_address {
        assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            request_id: Set(request_id),
            assignment_type: Set(assignments::AssignmentType::Pickup),
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

    let accepted = quotations::Entity::find_by_id(quotation_id).one(&txn).await?;

    txn.commit().await?;
    Ok(accepted)
}

/// Fetch a single quotation by ID.
pub async fn get_quotation_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<quotations::Model>, DbErr> {
    quotations::Entity::find_by_id(id).one(db).await
}

/// Fetch all quotations on a request, newest first.
pub async fn get_quotations_by_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Vec<quotations::Model>, DbErr> {
    quotations::Entity::find()
        .filter(quotations::Column::RequestId.eq(request_id))
        .order_by_desc(quotations::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch all quotations a designer has submitted, newest first.
pub async fn get_quotations_by_designer(
    db: &DatabaseConnection,
    designer_id: Uuid,
) -> Result<Vec<quotations::Model>, DbErr> {
    quotations::Entity::find()
        .filter(quotations::Column::DesignerId.eq(designer_id))
        .order_by_desc(quotations::Column::CreatedAt)
        .all(db)
        .await
}

/// Check whether a designer has already quoted on a request. The unique index
/// on (request_id, designer_id) is the real guard; this keeps the common case
/// a friendly 409 instead of a constraint violation.
pub async fn quotation_exists(
    db: &DatabaseConnection,
    request_id: Uuid,
    designer_id: Uuid,
) -> Result<bool, DbErr> {
    let count = quotations::Entity::find()
        .filter(quotations::Column::RequestId.eq(request_id))
        .filter(quotations::Column::DesignerId.eq(designer_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_only_touches_a_pending_quotation() {
        let sql = accept_quotation_update(Uuid::new_v4())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""status" = 'accepted'"#), "{sql}");
        assert!(sql.contains(r#""status" = 'pending'"#), "{sql}");
    }

    #[test]
    fn designer_assignment_requires_a_quoted_request() {
        let sql = assign_designer_update(
            Uuid::new_v4(),
            Uuid::new_v4(),
            requests::Status::Accepted,
        )
        .build(DbBackend::Postgres)
        .to_string();
        assert!(sql.contains(r#""status" = 'quoted'"#), "{sql}");
        assert!(sql.contains(r#""status" = 'accepted'"#), "{sql}");
    }
}

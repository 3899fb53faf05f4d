use sea_orm::*;
use serde::Serialize;

use crate::models::assignments;
use crate::models::earnings;
use crate::models::quotations;
use crate::models::requests;
use crate::models::users::{self, Roles};

/// Counters for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformStats {
    pub total_users: u64,
    pub total_designers: u64,
    pub total_requests: u64,
    pub active_requests: u64,
    pub completed_requests: u64,
    pub total_quotations: u64,
    pub open_assignments: u64,
    pub pending_payouts: u64,
}

pub async fn platform_stats(db: &DatabaseConnection) -> Result<PlatformStats, DbErr> {
    let total_users = users::Entity::find().count(db).await?;

    let total_designers = users::Entity::find()
        .filter(users::Column::Role.eq(Roles::Designer))
        .count(db)
        .await?;

    let total_requests = requests::Entity::find().count(db).await?;

    let active_requests = requests::Entity::find()
        .filter(requests::Column::Status.is_in([
            requests::Status::Pending,
            requests::Status::Quoted,
            requests::Status::Accepted,
            requests::Status::InProgress,
        ]))
        .count(db)
        .await?;

    let completed_requests = requests::Entity::find()
        .filter(requests::Column::Status.eq(requests::Status::Completed))
        .count(db)
        .await?;

    let total_quotations = quotations::Entity::find().count(db).await?;

    let open_assignments = assignments::Entity::find()
        .filter(assignments::Column::Status.eq(assignments::Status::Pending))
        .count(db)
        .await?;

    let pending_payouts = earnings::Entity::find()
        .filter(earnings::Column::Status.eq(earnings::Status::Pending))
        .count(db)
        .await?;

    Ok(PlatformStats {
        total_users,
        total_designers,
        total_requests,
        active_requests,
        completed_requests,
        total_quotations,
        open_assignments,
        pending_payouts,
    })
}

use sea_orm::*;
use uuid::Uuid;

use crate::models::earnings::{self, EarningsSummary, Status};

/// A designer's full ledger, newest first.
pub async fn get_earnings_by_designer(
    db: &DatabaseConnection,
    designer_id: Uuid,
) -> Result<Vec<earnings::Model>, DbErr> {
    earnings::Entity::find()
        .filter(earnings::Column::DesignerId.eq(designer_id))
        .order_by_desc(earnings::Column::CreatedAt)
        .all(db)
        .await
}

/// Totals over a ledger. Net amounts only — the platform fee is not the
/// designer's money.
pub fn summarize(rows: &[earnings::Model]) -> EarningsSummary {
    let mut summary = EarningsSummary {
        total_earned: 0,
        pending: 0,
        paid: 0,
    };
    for row in rows {
        summary.total_earned += row.net_amount;
        match row.status {
            Status::Pending => summary.pending += row.net_amount,
            Status::Paid => summary.paid += row.net_amount,
        }
    }
    summary
}

/// Fetch a single earning row by ID.
pub async fn get_earning_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<earnings::Model>, DbErr> {
    earnings::Entity::find_by_id(id).one(db).await
}

/// Mark an earning as paid out (admin action).
pub async fn mark_paid(db: &DatabaseConnection, id: Uuid) -> Result<earnings::Model, DbErr> {
    let earning = earnings::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Earning not found".to_string()))?;

    let mut active: earnings::ActiveModel = earning.into();
    active.status = Set(Status::Paid);
    active.paid_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(net: i64, status: Status) -> earnings::Model {
        earnings::Model {
            id: Uuid::new_v4(),
            quotation_id: Uuid::new_v4(),
            request_id: Uuid::new_v4(),
            designer_id: Uuid::new_v4(),
            amount: net * 10 / 9,
            platform_fee: net / 9,
            net_amount: net,
            status,
            paid_at: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn summary_splits_pending_and_paid() {
        let rows = vec![
            row(1800, Status::Pending),
            row(900, Status::Paid),
            row(450, Status::Paid),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_earned, 3150);
        assert_eq!(summary.pending, 1800);
        assert_eq!(summary.paid, 1350);
    }

    #[test]
    fn empty_ledger_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_earned, 0);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.paid, 0);
    }
}

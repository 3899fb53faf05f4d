use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform commission, percent of the quoted amount.
pub const PLATFORM_FEE_PERCENT: i64 = 10;

/// Split a gross amount into (platform_fee, net_amount).
///
/// `net_amount` is always `amount - platform_fee`; the server computes the
/// split and never accepts it from a client.
pub fn split_amount(amount: i64) -> (i64, i64) {
    let fee = amount * PLATFORM_FEE_PERCENT / 100;
    (fee, amount - fee)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "paid")]
    Paid,
}

/// SeaORM entity for the `designer_earnings` ledger. One row per accepted
/// quotation, inserted in the same transaction as the acceptance.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designer_earnings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub quotation_id: Uuid,
    pub request_id: Uuid,
    pub designer_id: Uuid,
    pub amount: i64,
    pub platform_fee: i64,
    pub net_amount: i64,
    pub status: Status,
    pub paid_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quotations::Entity",
        from = "Column::QuotationId",
        to = "super::quotations::Column::Id"
    )]
    Quotation,
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
}

impl Related<super::quotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotation.def()
    }
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Totals shown on the designer earnings page.
#[derive(Debug, Clone, Serialize)]
pub struct EarningsSummary {
    pub total_earned: i64,
    pub pending: i64,
    pub paid: i64,
}

/// GET /api/earnings/mine response: the ledger plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct EarningsResponse {
    pub summary: EarningsSummary,
    pub earnings: Vec<Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_ten_percent() {
        let (fee, net) = split_amount(2000);
        assert_eq!(fee, 200);
        assert_eq!(net, 1800);
    }

    #[test]
    fn net_plus_fee_equals_amount() {
        for amount in [100, 999, 2001, 10_000_000] {
            let (fee, net) = split_amount(amount);
            assert_eq!(fee + net, amount);
        }
    }
}

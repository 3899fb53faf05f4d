use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum RedesignRequests {
    Table,
    CustomerId,
    DesignerId,
    Status,
}

#[derive(DeriveIden)]
enum Quotations {
    Table,
    DesignerId,
}

#[derive(DeriveIden)]
enum DeliveryAssignments {
    Table,
    DeliveryPartnerId,
    Status,
}

#[derive(DeriveIden)]
enum DesignerEarnings {
    Table,
    DesignerId,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    RequestId,
    CreatedAt,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on redesign_requests.customer_id for the customer dashboard
        manager
            .create_index(
                Index::create()
                    .name("idx_redesign_requests_customer_id")
                    .table(RedesignRequests::Table)
                    .col(RedesignRequests::CustomerId)
                    .to_owned(),
            )
            .await?;

        // Index on redesign_requests.designer_id for the designer dashboard
        manager
            .create_index(
                Index::create()
                    .name("idx_redesign_requests_designer_id")
                    .table(RedesignRequests::Table)
                    .col(RedesignRequests::DesignerId)
                    .to_owned(),
            )
            .await?;

        // Index on redesign_requests.status for the open-requests browse list
        manager
            .create_index(
                Index::create()
                    .name("idx_redesign_requests_status")
                    .table(RedesignRequests::Table)
                    .col(RedesignRequests::Status)
                    .to_owned(),
            )
            .await?;

        // Index on quotations.designer_id for "my quotations"
        manager
            .create_index(
                Index::create()
                    .name("idx_quotations_designer_id")
                    .table(Quotations::Table)
                    .col(Quotations::DesignerId)
                    .to_owned(),
            )
            .await?;

        // Index on delivery_assignments (status, delivery_partner_id) for the
        // open-assignments board and "my assignments"
        manager
            .create_index(
                Index::create()
                    .name("idx_delivery_assignments_status_partner")
                    .table(DeliveryAssignments::Table)
                    .col(DeliveryAssignments::Status)
                    .col(DeliveryAssignments::DeliveryPartnerId)
                    .to_owned(),
            )
            .await?;

        // Index on designer_earnings.designer_id for the earnings ledger
        manager
            .create_index(
                Index::create()
                    .name("idx_designer_earnings_designer_id")
                    .table(DesignerEarnings::Table)
                    .col(DesignerEarnings::DesignerId)
                    .to_owned(),
            )
            .await?;

        // Composite index matching the (created_at, id) message cursor
        manager
            .create_index(
                Index::create()
                    .name("idx_messages_request_created_id")
                    .table(Messages::Table)
                    .col(Messages::RequestId)
                    .col(Messages::CreatedAt)
                    .col(Messages::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_redesign_requests_customer_id")
                    .table(RedesignRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_redesign_requests_designer_id")
                    .table(RedesignRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_redesign_requests_status")
                    .table(RedesignRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_quotations_designer_id")
                    .table(Quotations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_delivery_assignments_status_partner")
                    .table(DeliveryAssignments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_designer_earnings_designer_id")
                    .table(DesignerEarnings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_messages_request_created_id")
                    .table(Messages::Table)
                    .to_owned(),
            )
            .await
    }
}

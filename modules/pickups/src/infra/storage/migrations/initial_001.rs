use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PickupRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PickupRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PickupRequests::ResidentId).uuid().not_null())
                    .col(
                        ColumnDef::new(PickupRequests::ResidentName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PickupRequests::OperatorId).uuid().null())
                    .col(ColumnDef::new(PickupRequests::OperatorName).string().null())
                    .col(ColumnDef::new(PickupRequests::Zone).string().not_null())
                    .col(
                        ColumnDef::new(PickupRequests::HouseNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PickupRequests::StreetName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PickupRequests::Landmark).string().not_null())
                    .col(
                        ColumnDef::new(PickupRequests::ContactPhone)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PickupRequests::Lat).double().null())
                    .col(ColumnDef::new(PickupRequests::Lng).double().null())
                    .col(
                        ColumnDef::new(PickupRequests::WasteType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PickupRequests::Priority).string().not_null())
                    .col(
                        ColumnDef::new(PickupRequests::ScheduledDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PickupRequests::Status).string().not_null())
                    .col(ColumnDef::new(PickupRequests::Notes).text().null())
                    .col(
                        ColumnDef::new(PickupRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PickupRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pickup_requests_resident_id")
                    .table(PickupRequests::Table)
                    .col(PickupRequests::ResidentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pickup_requests_operator_id")
                    .table(PickupRequests::Table)
                    .col(PickupRequests::OperatorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PickupRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PickupRequests {
    Table,
    Id,
    ResidentId,
    ResidentName,
    OperatorId,
    OperatorName,
    Zone,
    HouseNumber,
    StreetName,
    Landmark,
    ContactPhone,
    Lat,
    Lng,
    WasteType,
    Priority,
    ScheduledDate,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}

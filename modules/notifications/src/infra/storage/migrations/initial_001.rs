use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NotificationRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NotificationRecords::UserId).uuid().not_null())
                    .col(ColumnDef::new(NotificationRecords::Kind).string().not_null())
                    .col(
                        ColumnDef::new(NotificationRecords::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationRecords::Medium)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationRecords::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationRecords::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notification_records_user_id")
                    .table(NotificationRecords::Table)
                    .col(NotificationRecords::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NotificationRecords {
    Table,
    Id,
    UserId,
    Kind,
    Message,
    Medium,
    Timestamp,
    IsRead,
}

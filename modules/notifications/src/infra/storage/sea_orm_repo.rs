//! SeaORM-backed repository implementation for the domain port.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::contract::model::NotificationRecord;
use crate::domain::repo::NotificationsRepository;
use crate::infra::storage::entity::{
    ActiveModel as NotificationAM, Column, Entity as NotificationEntity,
};
use crate::infra::storage::mapper::entity_to_contract;

/// SeaORM repository impl.
pub struct SeaOrmNotificationsRepository {
    conn: DatabaseConnection,
}

impl SeaOrmNotificationsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl NotificationsRepository for SeaOrmNotificationsRepository {
    async fn insert(&self, record: NotificationRecord) -> anyhow::Result<()> {
        let model = NotificationAM {
            id: Set(record.id),
            user_id: Set(record.user_id),
            kind: Set(record.kind.to_string()),
            message: Set(record.message),
            medium: Set(record.medium.to_string()),
            timestamp: Set(record.timestamp),
            is_read: Set(record.is_read),
        };
        let _ = model.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<NotificationRecord>> {
        let rows = NotificationEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Timestamp)
            .all(&self.conn)
            .await
            .context("list_for_user failed")?;
        rows.into_iter().map(entity_to_contract).collect()
    }

    async fn delete_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = NotificationEntity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await
            .context("delete_for_user failed")?;
        Ok(res.rows_affected)
    }
}

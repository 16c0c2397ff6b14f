//! SeaORM-backed repository implementation for the domain port.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::contract::model::ActivityEntry;
use crate::domain::repo::ActivityLogRepository;
use crate::infra::storage::entity::{ActiveModel, Column, Entity as ActivityLogEntity};

/// Append one entry on an arbitrary connection.
///
/// Other modules' repositories call this inside their own transactions so a
/// record mutation and its log entry commit or fail together.
pub async fn insert_within<C>(conn: &C, entry: &ActivityEntry) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let model = ActiveModel {
        id: Set(entry.id),
        user_id: Set(entry.user_id),
        action: Set(entry.action.clone()),
        details: Set(entry.details.clone()),
        timestamp: Set(entry.timestamp),
    };
    ActivityLogEntity::insert(model).exec(conn).await?;
    Ok(())
}

/// SeaORM repository impl.
pub struct SeaOrmActivityLogRepository {
    conn: DatabaseConnection,
}

impl SeaOrmActivityLogRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ActivityLogRepository for SeaOrmActivityLogRepository {
    async fn insert(&self, entry: ActivityEntry) -> anyhow::Result<()> {
        insert_within(&self.conn, &entry)
            .await
            .context("activity log insert failed")?;
        Ok(())
    }

    async fn list(
        &self,
        user_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<ActivityEntry>> {
        let mut query = ActivityLogEntity::find().order_by_desc(Column::Timestamp);
        if let Some(user_id) = user_id {
            query = query.filter(Column::UserId.eq(user_id));
        }
        let rows = query
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
            .context("activity log list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

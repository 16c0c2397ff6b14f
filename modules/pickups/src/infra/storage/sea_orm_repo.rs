//! SeaORM-backed repository implementation for the lifecycle engine's port.
//!
//! Both mutations run inside a transaction together with their activity-log
//! append, so a lifecycle write without its log entry cannot happen. The
//! status transition is a compare-and-swap on the stored status column;
//! losing the race writes nothing and reports `Raced`.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use activity_log::contract::model::ActivityEntry;
use activity_log::infra::storage::insert_within;

use crate::contract::model::{PickupRequest, PickupStatus, RequestScope};
use crate::domain::repo::{PickupsRepository, TransitionOutcome};
use crate::infra::storage::entity::{Column, Entity as RequestEntity};
use crate::infra::storage::mapper::{contract_to_active_model, entity_to_contract};

/// SeaORM repository impl.
pub struct SeaOrmPickupsRepository {
    conn: DatabaseConnection,
}

impl SeaOrmPickupsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PickupsRepository for SeaOrmPickupsRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<PickupRequest>> {
        let found = RequestEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(entity_to_contract).transpose()
    }

    async fn insert_with_log(
        &self,
        request: PickupRequest,
        log: ActivityEntry,
    ) -> anyhow::Result<()> {
        let txn = self.conn.begin().await.context("begin failed")?;

        RequestEntity::insert(contract_to_active_model(request))
            .exec(&txn)
            .await
            .context("insert failed")?;
        insert_within(&txn, &log)
            .await
            .context("activity append failed")?;

        txn.commit().await.context("commit failed")?;
        Ok(())
    }

    async fn transition_with_log(
        &self,
        id: Uuid,
        from: PickupStatus,
        to: PickupStatus,
        updated_at: DateTime<Utc>,
        log: ActivityEntry,
    ) -> anyhow::Result<TransitionOutcome> {
        let txn = self.conn.begin().await.context("begin failed")?;

        // Compare-and-swap: only the writer who still sees `from` wins.
        let update = RequestEntity::update_many()
            .col_expr(Column::Status, Expr::value(to.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(updated_at))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(from.to_string()))
            .exec(&txn)
            .await
            .context("status update failed")?;

        if update.rows_affected == 0 {
            txn.rollback().await.context("rollback failed")?;
            return Ok(TransitionOutcome::Raced);
        }

        insert_within(&txn, &log)
            .await
            .context("activity append failed")?;

        let updated = RequestEntity::find_by_id(id)
            .one(&txn)
            .await
            .context("reload failed")?
            .context("request vanished mid-transaction")?;

        txn.commit().await.context("commit failed")?;
        Ok(TransitionOutcome::Applied(entity_to_contract(updated)?))
    }

    async fn list(
        &self,
        scope: RequestScope,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<PickupRequest>> {
        let mut query = RequestEntity::find().order_by_desc(Column::CreatedAt);
        match scope {
            RequestScope::All => {}
            RequestScope::Resident(id) => query = query.filter(Column::ResidentId.eq(id)),
            RequestScope::Operator(id) => query = query.filter(Column::OperatorId.eq(id)),
        }
        let rows = query
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
            .context("list failed")?;
        rows.into_iter().map(entity_to_contract).collect()
    }
}

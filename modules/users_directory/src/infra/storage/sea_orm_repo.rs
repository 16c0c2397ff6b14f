//! SeaORM-backed repository implementation for the domain port.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::contract::model::{User, UserRole};
use crate::domain::repo::UsersRepository;
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};
use crate::infra::storage::mapper::entity_to_contract;

/// SeaORM repository impl.
pub struct SeaOrmUsersRepository {
    conn: DatabaseConnection,
}

impl SeaOrmUsersRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn to_active_model(user: User) -> UserAM {
        UserAM {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            phone: Set(user.phone),
            role: Set(user.role.to_string()),
            zone: Set(user.zone),
            availability: Set(user.availability),
            preferred_operator_id: Set(user.preferred_operator_id),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(entity_to_contract).transpose()
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email.to_lowercase()))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        found.map(entity_to_contract).transpose()
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email.to_lowercase()))
            .count(&self.conn)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, mut user: User) -> anyhow::Result<()> {
        user.email = user.email.to_lowercase();
        let model = Self::to_active_model(user);
        let _ = model.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn update(&self, mut user: User) -> anyhow::Result<()> {
        user.email = user.email.to_lowercase();
        let model = Self::to_active_model(user);
        let _ = model.update(&self.conn).await.context("update failed")?;
        Ok(())
    }

    async fn list(
        &self,
        role: Option<UserRole>,
        zone: Option<String>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<User>> {
        let mut query = UserEntity::find().order_by_asc(Column::CreatedAt);
        if let Some(role) = role {
            query = query.filter(Column::Role.eq(role.to_string()));
        }
        if let Some(zone) = zone {
            query = query.filter(Column::Zone.eq(zone));
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

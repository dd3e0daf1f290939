use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod seaorm;

/// Generic persistence gateway, parameterized by entity and identity type.
/// Implemented once per entity by a thin SeaORM adapter.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Entity: Send + Sync;
    type Id: Send + Sync + Copy;

    /// Insert when the identity is absent, otherwise upsert by identity.
    async fn save(&self, entity: Self::Entity) -> Result<Self::Entity, ServiceError>;

    async fn find_all(&self) -> Result<Vec<Self::Entity>, ServiceError>;

    /// Absence is `None`, never an error.
    async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Entity>, ServiceError>;

    async fn exists_by_id(&self, id: Self::Id) -> Result<bool, ServiceError>;

    /// Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: Self::Id) -> Result<(), ServiceError>;

    /// Force the identity field of `entity` to `id`.
    fn assign_id(entity: Self::Entity, id: Self::Id) -> Self::Entity;
}

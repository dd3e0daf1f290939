use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// Generic CRUD service shared by every resource, specialized per entity
/// through its repository.
pub struct CrudService<R: CrudRepository> {
    repo: R,
}

impl<R: CrudRepository> CrudService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn save(&self, entity: R::Entity) -> Result<R::Entity, ServiceError> {
        self.repo.save(entity).await
    }

    pub async fn find_all(&self) -> Result<Vec<R::Entity>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: R::Id) -> Result<Option<R::Entity>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Update only an existing row. A missing id returns `None` without
    /// writing anything; the path id always overrides any identity carried
    /// in the payload.
    pub async fn update(&self, id: R::Id, entity: R::Entity) -> Result<Option<R::Entity>, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(None);
        }
        let entity = R::assign_id(entity, id);
        Ok(Some(self.repo.save(entity).await?))
    }

    /// Idempotent; deleting an absent id is not an error.
    pub async fn delete(&self, id: R::Id) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}

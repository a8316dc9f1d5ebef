use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for whole-entity CRUD.
///
/// `save` is insert-or-update keyed on the entity's identity: an entity
/// without an id is inserted and gets a store-assigned one, an entity with
/// an id replaces (or creates) the row with that id.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// List every stored entity, in store order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Insert or update the entity, returning it as persisted
    async fn save(&self, entity: T) -> Result<T>;

    /// Delete by id. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: ID) -> Result<()>;
}

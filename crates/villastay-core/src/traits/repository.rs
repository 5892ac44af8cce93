//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::filter::FilterField;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. `New` is the insert
/// payload (the entity minus store-assigned columns). Entity-specific
/// operations such as full-replace update are defined on the concrete
/// repository structs.
#[async_trait]
pub trait Repository<Entity, New, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    New: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Find all entities matching the given filters, in store order.
    /// An empty filter slice returns everything.
    async fn find_all(&self, filters: &[FilterField]) -> AppResult<Vec<Entity>>;

    /// Create a new entity and return the stored version.
    async fn create(&self, data: &New) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: &Id) -> AppResult<bool>;
}

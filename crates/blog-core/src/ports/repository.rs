use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Blog post store.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// Store a validated draft; the store assigns `id` and `created`.
    async fn create(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        self.insert(draft.into_post()).await
    }

    /// Bulk insert, used for seeding.
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Replace the supplied fields of an existing post and return the result.
    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges)
    -> Result<BlogPost, RepoError>;

    /// Remove every post, returning how many were deleted.
    async fn drop_all(&self) -> Result<u64, RepoError>;
}

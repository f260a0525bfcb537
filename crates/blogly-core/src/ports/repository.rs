use async_trait::async_trait;

use crate::domain::{Post, PostDraft, Record, Tag, TagDraft, User, UserDraft};
use crate::error::RepoError;

/// Generic read operations shared by every record type.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync
where
    T: Record + Send + 'static,
{
    /// Find a record by its ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Fetch a record that must exist.
    async fn get(&self, id: i32) -> Result<T, RepoError> {
        self.find_by_id(id).await?.ok_or(RepoError::NotFound {
            entity_type: T::KIND,
            id,
        })
    }
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {
    async fn create(&self, draft: UserDraft) -> Result<User, RepoError>;

    /// Overwrite every editable field of an existing user.
    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError>;

    /// Fails with [`RepoError::ReferentialIntegrity`] while the user still owns posts.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Post repository, including the post-tag associations.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    /// Insert a post stamped with the current time and attach the draft's tags.
    async fn create(&self, user_id: i32, draft: PostDraft) -> Result<Post, RepoError>;

    /// Overwrite title and content and replace the tag set.
    async fn update(&self, id: i32, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove the post together with its tag links.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;

    /// Newest posts first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn find_by_tag(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn tags_of(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Make `tag_ids` the exact tag set of the post. Ids that match no tag
    /// are ignored.
    async fn set_tags(&self, post_id: i32, tag_ids: &[i32]) -> Result<Vec<Tag>, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag> {
    async fn create(&self, draft: TagDraft) -> Result<Tag, RepoError>;

    async fn update(&self, id: i32, draft: TagDraft) -> Result<Tag, RepoError>;

    /// Remove the tag together with its post links.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

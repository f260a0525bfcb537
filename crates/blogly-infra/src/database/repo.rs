//! SQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use blogly_core::RepoError;
use blogly_core::domain::{Post, PostDraft, Record, Tag, TagDraft, User, UserDraft};
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::base::SqlRepository;
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::errors::map_db_err;
use super::links;

/// SQL user repository.
pub type SqlUserRepository = SqlRepository<UserEntity>;

/// SQL post repository.
pub type SqlPostRepository = SqlRepository<PostEntity>;

/// SQL tag repository.
pub type SqlTagRepository = SqlRepository<TagEntity>;

fn not_found<T: Record>(id: i32) -> RepoError {
    RepoError::NotFound {
        entity_type: T::KIND,
        id,
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, draft: UserDraft) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(draft)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(user_id = model.id, "User created");
        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| not_found::<User>(id))?;

        let model = user::ActiveModel::from(existing)
            .apply(draft)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(user_id = id, "User updated");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(not_found::<User>(id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, user_id: i32, draft: PostDraft) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = post::ActiveModel::new_for(user_id, &draft)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
        let tags = links::replace_post_tags(&txn, model.id, &draft.tag_ids)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(post_id = model.id, user_id, tags = tags.len(), "Post created");
        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: PostDraft) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| not_found::<Post>(id))?;
        let model = post::ActiveModel::from(existing)
            .apply(&draft)
            .update(&txn)
            .await
            .map_err(map_db_err)?;
        links::replace_post_tags(&txn, id, &draft.tag_ids)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(post_id = id, "Post updated");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let unlinked = links::unlink_post(&txn, id).await.map_err(map_db_err)?;
        let result = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found::<Post>(id));
        }

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(post_id = id, unlinked, "Post deleted");
        Ok(())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(user_id, "Finding posts by user");

        let rows = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_tag(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(tag_id, "Finding posts by tag");

        let rows = PostEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn tags_of(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let rows = TagEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn set_tags(&self, post_id: i32, tag_ids: &[i32]) -> Result<Vec<Tag>, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        PostEntity::find_by_id(post_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| not_found::<Post>(post_id))?;
        let tags = links::replace_post_tags(&txn, post_id, tag_ids)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(tags.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TagRepository for SqlTagRepository {
    async fn create(&self, draft: TagDraft) -> Result<Tag, RepoError> {
        let model = tag::ActiveModel::from(draft)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(tag_id = model.id, name = %model.name, "Tag created");
        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: TagDraft) -> Result<Tag, RepoError> {
        let existing = TagEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| not_found::<Tag>(id))?;

        let model = tag::ActiveModel::from(existing)
            .apply(draft)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(tag_id = id, name = %model.name, "Tag renamed");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let unlinked = links::unlink_tag(&txn, id).await.map_err(map_db_err)?;
        let result = TagEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found::<Tag>(id));
        }

        txn.commit().await.map_err(map_db_err)?;

        tracing::info!(tag_id = id, unlinked, "Tag deleted");
        Ok(())
    }
}

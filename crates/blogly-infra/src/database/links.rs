//! Post-tag association maintenance.

use std::collections::BTreeSet;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};

/// Make `tag_ids` the exact set of tags linked to `post_id`.
///
/// Ids without a matching tag and duplicates are dropped. Links already in
/// place are left untouched. Returns the tags now attached, ordered by id.
pub(crate) async fn replace_post_tags<C>(
    conn: &C,
    post_id: i32,
    tag_ids: &[i32],
) -> Result<Vec<tag::Model>, DbErr>
where
    C: ConnectionTrait,
{
    let requested: BTreeSet<i32> = tag_ids.iter().copied().collect();
    let known = if requested.is_empty() {
        Vec::new()
    } else {
        TagEntity::find()
            .filter(tag::Column::Id.is_in(requested.iter().copied()))
            .order_by_asc(tag::Column::Id)
            .all(conn)
            .await?
    };

    let wanted: BTreeSet<i32> = known.iter().map(|t| t.id).collect();
    if wanted.len() < requested.len() {
        let ignored: Vec<i32> = requested.difference(&wanted).copied().collect();
        tracing::debug!(post_id, ?ignored, "Ignoring unknown tag ids");
    }

    let current: BTreeSet<i32> = PostTagEntity::find()
        .filter(post_tag::Column::PostId.eq(post_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.tag_id)
        .collect();

    let stale: Vec<i32> = current.difference(&wanted).copied().collect();
    if !stale.is_empty() {
        PostTagEntity::delete_many()
            .filter(post_tag::Column::PostId.eq(post_id))
            .filter(post_tag::Column::TagId.is_in(stale))
            .exec(conn)
            .await?;
    }

    let fresh: Vec<post_tag::ActiveModel> = wanted
        .difference(&current)
        .map(|&tag_id| post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        })
        .collect();
    if !fresh.is_empty() {
        PostTagEntity::insert_many(fresh)
            .exec_without_returning(conn)
            .await?;
    }

    Ok(known)
}

/// Drop every link that points at `post_id`.
pub(crate) async fn unlink_post<C>(conn: &C, post_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = PostTagEntity::delete_many()
        .filter(post_tag::Column::PostId.eq(post_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Drop every link that points at `tag_id`.
pub(crate) async fn unlink_tag<C>(conn: &C, tag_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = PostTagEntity::delete_many()
        .filter(post_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

use blogly_core::RepoError;
use blogly_core::domain::{DEFAULT_IMAGE_URL, Post, PostDraft, Tag, TagDraft, User, UserDraft};
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository, UserRepository};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, Database, DbConn, EntityTrait, PaginatorTrait,
    QueryFilter, Schema,
};

use crate::database::entity::{post, post_tag, tag, user};
use crate::database::repo::{SqlPostRepository, SqlTagRepository, SqlUserRepository};

async fn setup_db() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    for stmt in [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(tag::Entity),
        schema.create_table_from_entity(post::Entity),
        schema.create_table_from_entity(post_tag::Entity),
    ] {
        db.execute(backend.build(&stmt)).await.unwrap();
    }

    db
}

struct Repos {
    db: DbConn,
    users: SqlUserRepository,
    posts: SqlPostRepository,
    tags: SqlTagRepository,
}

async fn setup() -> Repos {
    let db = setup_db().await;
    Repos {
        users: SqlUserRepository::new(db.clone()),
        posts: SqlPostRepository::new(db.clone()),
        tags: SqlTagRepository::new(db.clone()),
        db,
    }
}

async fn john(repos: &Repos) -> User {
    repos
        .users
        .create(UserDraft::new("John", "Smith", None).unwrap())
        .await
        .unwrap()
}

async fn tag_named(repos: &Repos, name: &str) -> Tag {
    repos.tags.create(TagDraft::new(name).unwrap()).await.unwrap()
}

fn tag_ids(tags: &[Tag]) -> Vec<i32> {
    tags.iter().map(|t| t.id).collect()
}

async fn links_for_post(db: &DbConn, post_id: i32) -> u64 {
    post_tag::Entity::find()
        .filter(post_tag::Column::PostId.eq(post_id))
        .count(db)
        .await
        .unwrap()
}

#[test]
fn test_drafts_become_fresh_active_models() {
    let model = user::ActiveModel::from(UserDraft::new("John", "Smith", None).unwrap());
    assert_eq!(model.id, ActiveValue::NotSet);
    assert_eq!(model.first_name, ActiveValue::Set("John".to_string()));
    assert_eq!(model.image_url, ActiveValue::Set(DEFAULT_IMAGE_URL.to_string()));

    let model = tag::ActiveModel::from(TagDraft::new("python").unwrap());
    assert_eq!(model.id, ActiveValue::NotSet);
    assert_eq!(model.name, ActiveValue::Set("python".to_string()));
}

#[tokio::test]
async fn test_repositories_share_one_connection() {
    let repos = setup().await;
    let user = john(&repos).await;
    let post = repos
        .posts
        .create(user.id, PostDraft::new("Hello", "Body", vec![]).unwrap())
        .await
        .unwrap();

    let found: Option<Post> = repos.posts.find_by_id(post.id).await.unwrap();
    assert_eq!(found.map(|p| (p.id, p.user_id)), Some((post.id, user.id)));

    let missing: Option<Post> = repos.posts.find_by_id(post.id + 1).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_user_round_trip() {
    let repos = setup().await;

    let created = repos
        .users
        .create(UserDraft::new("Ada", "Lovelace", Some("https://img.example/ada.png".into())).unwrap())
        .await
        .unwrap();
    let fetched: User = repos.users.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Lovelace");
    assert_eq!(fetched.image_url, "https://img.example/ada.png");

    let defaulted = john(&repos).await;
    assert_eq!(defaulted.image_url, DEFAULT_IMAGE_URL);

    let all: Vec<User> = repos.users.find_all().await.unwrap();
    assert_eq!(
        all.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![created.id, defaulted.id]
    );
}

#[tokio::test]
async fn test_user_update_overwrites_fields() {
    let repos = setup().await;
    let user = john(&repos).await;

    let updated = repos
        .users
        .update(user.id, UserDraft::new("Jane", "Doe", None).unwrap())
        .await
        .unwrap();
    assert_eq!(updated.full_name(), "Jane Doe");

    let err = repos
        .users
        .update(999, UserDraft::new("Jane", "Doe", None).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity_type: "User", id: 999 }));
}

#[tokio::test]
async fn test_delete_user_without_posts() {
    let repos = setup().await;
    let user = john(&repos).await;

    repos.users.delete(user.id).await.unwrap();

    let err = BaseRepository::<User>::get(&repos.users, user.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_user_with_posts_is_rejected() {
    let repos = setup().await;
    let user = john(&repos).await;
    repos
        .posts
        .create(user.id, PostDraft::new("Hello", "Hello Everyone", vec![]).unwrap())
        .await
        .unwrap();

    let err = repos.users.delete(user.id).await.unwrap_err();
    assert!(matches!(err, RepoError::ReferentialIntegrity(_)));

    let still_there: Option<User> = repos.users.find_by_id(user.id).await.unwrap();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn test_post_round_trip_with_tags() {
    let repos = setup().await;
    let user = john(&repos).await;
    let python = tag_named(&repos, "python").await;

    let created = repos
        .posts
        .create(
            user.id,
            PostDraft::new("Hello", "Hello Everyone", vec![python.id]).unwrap(),
        )
        .await
        .unwrap();
    let fetched: Post = repos.posts.get(created.id).await.unwrap();

    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.content, "Hello Everyone");
    assert_eq!(fetched.user_id, user.id);
    assert_eq!(repos.posts.tags_of(created.id).await.unwrap(), vec![python]);
    assert_eq!(
        repos.posts.find_by_user(user.id).await.unwrap(),
        vec![fetched]
    );
}

#[tokio::test]
async fn test_set_tags_replaces_association_set() {
    let repos = setup().await;
    let user = john(&repos).await;
    let t1 = tag_named(&repos, "one").await;
    let t2 = tag_named(&repos, "two").await;
    let t3 = tag_named(&repos, "three").await;
    let post = repos
        .posts
        .create(user.id, PostDraft::new("Hello", "Body", vec![]).unwrap())
        .await
        .unwrap();

    let attached = repos.posts.set_tags(post.id, &[t1.id, t2.id]).await.unwrap();
    assert_eq!(tag_ids(&attached), vec![t1.id, t2.id]);

    let attached = repos.posts.set_tags(post.id, &[t2.id, t3.id]).await.unwrap();
    assert_eq!(tag_ids(&attached), vec![t2.id, t3.id]);
    assert_eq!(
        tag_ids(&repos.posts.tags_of(post.id).await.unwrap()),
        vec![t2.id, t3.id]
    );

    // Same set again is a no-op.
    repos.posts.set_tags(post.id, &[t3.id, t2.id, t2.id]).await.unwrap();
    assert_eq!(links_for_post(&repos.db, post.id).await, 2);
}

#[tokio::test]
async fn test_set_tags_ignores_unknown_ids() {
    let repos = setup().await;
    let user = john(&repos).await;
    let rust = tag_named(&repos, "rust").await;
    let post = repos
        .posts
        .create(user.id, PostDraft::new("Hello", "Body", vec![rust.id, 404]).unwrap())
        .await
        .unwrap();

    assert_eq!(repos.posts.tags_of(post.id).await.unwrap(), vec![rust.clone()]);

    let attached = repos.posts.set_tags(post.id, &[405]).await.unwrap();
    assert!(attached.is_empty());
    assert_eq!(links_for_post(&repos.db, post.id).await, 0);

    let err = repos.posts.set_tags(999, &[rust.id]).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity_type: "Post", .. }));
}

#[tokio::test]
async fn test_update_post_replaces_fields_and_tags() {
    let repos = setup().await;
    let user = john(&repos).await;
    let a = tag_named(&repos, "a").await;
    let b = tag_named(&repos, "b").await;
    let post = repos
        .posts
        .create(user.id, PostDraft::new("Draft", "First", vec![a.id]).unwrap())
        .await
        .unwrap();

    let updated = repos
        .posts
        .update(post.id, PostDraft::new("Final", "Second", vec![b.id]).unwrap())
        .await
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "Second");
    assert_eq!(updated.created_at, post.created_at);
    assert_eq!(repos.posts.tags_of(post.id).await.unwrap(), vec![b]);
}

#[tokio::test]
async fn test_delete_post_removes_links() {
    let repos = setup().await;
    let user = john(&repos).await;
    let tag = tag_named(&repos, "python").await;
    let post = repos
        .posts
        .create(user.id, PostDraft::new("Hello", "Body", vec![tag.id]).unwrap())
        .await
        .unwrap();
    assert_eq!(links_for_post(&repos.db, post.id).await, 1);

    repos.posts.delete(post.id).await.unwrap();

    assert_eq!(links_for_post(&repos.db, post.id).await, 0);
    let gone: Option<Post> = repos.posts.find_by_id(post.id).await.unwrap();
    assert!(gone.is_none());

    let err = repos.posts.delete(post.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));

    // Once its posts are gone the user can be deleted.
    repos.users.delete(user.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_tag_keeps_posts() {
    let repos = setup().await;
    let user = john(&repos).await;
    let tag = tag_named(&repos, "python").await;
    let post = repos
        .posts
        .create(user.id, PostDraft::new("Hello", "Body", vec![tag.id]).unwrap())
        .await
        .unwrap();

    repos.tags.delete(tag.id).await.unwrap();

    let gone: Option<Tag> = repos.tags.find_by_id(tag.id).await.unwrap();
    assert!(gone.is_none());
    assert!(repos.posts.tags_of(post.id).await.unwrap().is_empty());
    let survivor: Option<Post> = repos.posts.find_by_id(post.id).await.unwrap();
    assert!(survivor.is_some());
}

#[tokio::test]
async fn test_duplicate_tag_name_is_a_constraint_violation() {
    let repos = setup().await;
    tag_named(&repos, "python").await;
    let rust = tag_named(&repos, "rust").await;

    let err = repos
        .tags
        .create(TagDraft::new("python").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));

    let err = repos
        .tags
        .update(rust.id, TagDraft::new("python").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_list_recent_returns_newest_first() {
    let repos = setup().await;
    let user = john(&repos).await;

    let mut created = Vec::new();
    for n in 0..6 {
        let post = repos
            .posts
            .create(
                user.id,
                PostDraft::new(format!("Post {n}"), "Body", vec![]).unwrap(),
            )
            .await
            .unwrap();
        created.push(post.id);
    }

    let recent = repos.posts.list_recent(5).await.unwrap();

    assert_eq!(recent.len(), 5);
    assert!(
        recent
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
    assert!(!recent.iter().any(|p| p.id == created[0]));
}

#[tokio::test]
async fn test_find_by_tag_lists_tagged_posts() {
    let repos = setup().await;
    let user = john(&repos).await;
    let python = tag_named(&repos, "python").await;
    let tagged = repos
        .posts
        .create(user.id, PostDraft::new("Tagged", "Body", vec![python.id]).unwrap())
        .await
        .unwrap();
    repos
        .posts
        .create(user.id, PostDraft::new("Plain", "Body", vec![]).unwrap())
        .await
        .unwrap();

    let posts = repos.posts.find_by_tag(python.id).await.unwrap();
    assert_eq!(posts, vec![tagged]);
}

#[tokio::test]
async fn test_list_recent_breaks_timestamp_ties_by_id() {
    let repos = setup().await;
    let user = john(&repos).await;

    for n in 0..7 {
        repos
            .posts
            .create(user.id, PostDraft::new(format!("Post {n}"), "Body", vec![]).unwrap())
            .await
            .unwrap();
    }
    // Force every post onto the same instant.
    let stamp: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();
    post::Entity::update_many()
        .col_expr(post::Column::CreatedAt, sea_orm::sea_query::Expr::value(stamp))
        .exec(&repos.db)
        .await
        .unwrap();

    let recent = repos.posts.list_recent(5).await.unwrap();
    assert_eq!(
        recent.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![7, 6, 5, 4, 3]
    );
}

#[tokio::test]
async fn test_create_post_for_unknown_user_is_rejected() {
    let repos = setup().await;

    let err = repos
        .posts
        .create(404, PostDraft::new("Orphan", "Body", vec![]).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::ReferentialIntegrity(_)));

    let all: Vec<Post> = repos.posts.find_all().await.unwrap();
    assert!(all.is_empty());
}

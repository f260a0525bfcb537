//! Post pages, including creation under a user.

use actix_web::{HttpResponse, web};
use blogly_core::domain::PostDraft;
use blogly_shared::FormFields;
use blogly_shared::dto::PostForm;
use tera::Context;

use super::redirect;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{self, PostView, TagChoice, UserView};

fn draft_from(body: &[u8]) -> AppResult<PostDraft> {
    let form = PostForm::try_from(&FormFields::parse(body))?;
    Ok(PostDraft::new(form.title, form.content, form.tags)?)
}

/// GET /users/{id}/posts/new
pub async fn new_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;
    let tags = state.tags.find_all().await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    ctx.insert("tags", &TagChoice::list(tags, &[]));
    views::render(&state.templates, "post_new.html", &ctx)
}

/// POST /users/{id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    // Unknown authors are a 404.
    state.users.get(user_id).await?;

    let draft = draft_from(&body)?;
    state.posts.create(user_id, draft).await?;

    Ok(redirect(format!("/users/{user_id}")))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(id).await?;
    let author = state.users.get(post.user_id).await?;
    let tags = state.posts.tags_of(id).await?;

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::from(post));
    ctx.insert("author", &UserView::from(author));
    ctx.insert("tags", &tags);
    views::render(&state.templates, "post.html", &ctx)
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(id).await?;
    let attached = state.posts.tags_of(id).await?;
    let tags = state.tags.find_all().await?;

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::from(post));
    ctx.insert("tags", &TagChoice::list(tags, &attached));
    views::render(&state.templates, "post_edit.html", &ctx)
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = draft_from(&body)?;
    state.posts.update(id, draft).await?;

    Ok(redirect(format!("/posts/{id}")))
}

/// POST /posts/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(redirect("/"))
}

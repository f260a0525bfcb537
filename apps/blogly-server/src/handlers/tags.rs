//! Tag pages.

use actix_web::{HttpResponse, web};
use blogly_core::domain::TagDraft;
use blogly_shared::FormFields;
use blogly_shared::dto::TagForm;
use tera::Context;

use super::redirect;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

fn draft_from(body: &[u8]) -> AppResult<TagDraft> {
    let form = TagForm::try_from(&FormFields::parse(body))?;
    Ok(TagDraft::new(form.name)?)
}

/// GET /tags
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.find_all().await?;

    let mut ctx = Context::new();
    ctx.insert("tags", &tags);
    views::render(&state.templates, "tags.html", &ctx)
}

/// GET /tags/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let tag = state.tags.get(id).await?;
    let posts = state.posts.find_by_tag(id).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &tag);
    ctx.insert("posts", &views::posts(posts));
    views::render(&state.templates, "tag.html", &ctx)
}

/// GET /tags/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    views::render(&state.templates, "tag_new.html", &Context::new())
}

/// POST /tags/new
pub async fn create(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let draft = draft_from(&body)?;
    state.tags.create(draft).await?;

    Ok(redirect("/tags"))
}

/// GET /tags/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = state.tags.get(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &tag);
    views::render(&state.templates, "tag_edit.html", &ctx)
}

/// POST /tags/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let draft = draft_from(&body)?;
    state.tags.update(path.into_inner(), draft).await?;

    Ok(redirect("/tags"))
}

/// POST /tags/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.tags.delete(path.into_inner()).await?;

    Ok(redirect("/tags"))
}

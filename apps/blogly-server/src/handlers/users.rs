//! User pages.

use actix_web::{HttpResponse, web};
use blogly_core::domain::UserDraft;
use blogly_shared::FormFields;
use blogly_shared::dto::UserForm;
use tera::Context;

use super::redirect;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{self, UserView};

fn draft_from(body: &[u8]) -> AppResult<UserDraft> {
    let form = UserForm::try_from(&FormFields::parse(body))?;
    Ok(UserDraft::new(
        form.first_name,
        form.last_name,
        form.image_url,
    )?)
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let mut ctx = Context::new();
    ctx.insert("users", &views::users(users));
    views::render(&state.templates, "users.html", &ctx)
}

/// GET /users/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state.users.get(id).await?;
    let posts = state.posts.find_by_user(id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    ctx.insert("posts", &views::posts(posts));
    views::render(&state.templates, "user.html", &ctx)
}

/// GET /users/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    views::render(&state.templates, "user_new.html", &Context::new())
}

/// POST /users/new
pub async fn create(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let draft = draft_from(&body)?;
    state.users.create(draft).await?;

    Ok(redirect("/users"))
}

/// GET /users/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    views::render(&state.templates, "user_edit.html", &ctx)
}

/// POST /users/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let draft = draft_from(&body)?;
    state.users.update(path.into_inner(), draft).await?;

    Ok(redirect("/users"))
}

/// POST /users/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.users.delete(path.into_inner()).await?;

    Ok(redirect("/users"))
}

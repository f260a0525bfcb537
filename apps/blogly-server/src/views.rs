//! Template loading and the view models handed to Tera.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use blogly_core::domain::{Post, Tag, User};
use serde::Serialize;
use tera::{Context, Tera};

use crate::middleware::error::AppResult;

pub const DEFAULT_TEMPLATES_GLOB: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*");

/// Compile every template matching `glob`.
///
/// Templates use the `.html` suffix so Tera auto-escapes their output.
pub fn load_templates(glob: &str) -> Result<Tera, tera::Error> {
    let tera = Tera::new(glob)?;
    tracing::debug!(
        templates = tera.get_template_names().count(),
        "Templates loaded"
    );
    Ok(tera)
}

/// Render `template` into a 200 HTML response.
pub fn render(tera: &Tera, template: &str, ctx: &Context) -> AppResult<HttpResponse> {
    let body = tera.render(template, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
    pub full_name: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    /// Display form, e.g. "Mon Jan 1 2024, 9:30 AM".
    pub created_at: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at.format("%a %b %-d %Y, %-I:%M %p").to_string(),
        }
    }
}

/// A post together with its author, as listed on the home page.
#[derive(Debug, Serialize)]
pub struct PostCard {
    pub post: PostView,
    pub author: UserView,
}

/// A tag offered in the post form, flagged when already attached.
#[derive(Debug, Serialize)]
pub struct TagChoice {
    pub id: i32,
    pub name: String,
    pub checked: bool,
}

impl TagChoice {
    pub fn list(all: Vec<Tag>, attached: &[Tag]) -> Vec<Self> {
        all.into_iter()
            .map(|tag| Self {
                checked: attached.iter().any(|t| t.id == tag.id),
                id: tag.id,
                name: tag.name,
            })
            .collect()
    }
}

pub fn users(users: Vec<User>) -> Vec<UserView> {
    users.into_iter().map(UserView::from).collect()
}

pub fn posts(posts: Vec<Post>) -> Vec<PostView> {
    posts.into_iter().map(PostView::from).collect()
}

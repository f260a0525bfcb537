//! Home page.

use actix_web::{HttpResponse, web};
use tera::Context;

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{self, PostCard};

const RECENT_POSTS: u64 = 5;

/// GET /
pub async fn recent_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let recent = state.posts.list_recent(RECENT_POSTS).await?;

    let mut cards = Vec::with_capacity(recent.len());
    for post in recent {
        let author = state.users.get(post.user_id).await?;
        cards.push(PostCard {
            post: post.into(),
            author: author.into(),
        });
    }

    let mut ctx = Context::new();
    ctx.insert("posts", &cards);
    views::render(&state.templates, "home.html", &ctx)
}

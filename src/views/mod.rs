//! Server-rendered HTML views.
//!
//! Templates live in `templates/` and are compiled in by `askama`. Every
//! page extends `layout.html`.

use std::time::Duration;

use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::persistence::Post;

/// `GET /` dashboard.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct DashboardView {
    /// Number of stored posts.
    pub post_count: u64,
    /// Number of recorded visits, including the one that rendered this page.
    pub visit_count: u64,
    /// Human-readable process uptime.
    pub uptime: String,
    /// Whether `/api/ai` will reach a real model.
    pub ai_configured: bool,
}

/// `GET /posts` listing.
#[derive(Debug, Template)]
#[template(path = "posts.html")]
pub struct PostsView {
    /// Posts, newest first.
    pub posts: Vec<PostView>,
}

/// Display-ready fields of one post.
#[derive(Debug, Clone)]
pub struct PostView {
    /// Post title.
    pub title: String,
    /// Author, or `Anonymous`.
    pub author: String,
    /// Post body.
    pub content: String,
    /// Creation time, `YYYY-MM-DD HH:MM UTC`.
    pub created_at: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post
                .author
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
            content: post.content.clone(),
            created_at: post.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

impl PostsView {
    /// Builds the listing from posts already in display order.
    #[must_use]
    pub fn new(posts: &[Post]) -> Self {
        Self {
            posts: posts.iter().map(PostView::from).collect(),
        }
    }
}

/// Renders a template into an HTML response body.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn render<T: Template>(view: &T) -> Result<Html<String>, AppError> {
    view.render()
        .map(Html)
        .map_err(|e| AppError::Render(e.to_string()))
}

/// Formats an uptime as `1d 2h 3m 4s`, dropping leading zero units.
#[must_use]
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let units = [
        (total / 86_400, "d"),
        (total % 86_400 / 3_600, "h"),
        (total % 3_600 / 60, "m"),
    ];

    let mut parts: Vec<String> = units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();
    parts.push(format!("{}s", total % 60));
    parts.join(" ")
}

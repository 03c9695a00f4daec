//! Persistence layer: the storage client behind posts and visits.
//!
//! [`Store`] is the seam between the HTTP layer and the database. The
//! production implementation is [`postgres::PostgresStore`] (one
//! `sqlx::PgPool` shared by every request); [`memory::MemoryStore`] keeps
//! everything in process and stands in for it in tests.

pub mod memory;
pub mod models;
pub mod postgres;

use futures_util::future::BoxFuture;

pub use memory::MemoryStore;
pub use models::{NewPost, Post, Visit};
pub use postgres::PostgresStore;

use crate::error::AppError;

/// Storage client over the `posts` and `visits` collections.
///
/// Implementations assign identifiers and timestamps on insert and must
/// be safe for concurrent use. Every method is one round trip to the
/// backing store; nothing is retried.
pub trait Store: Send + Sync + std::fmt::Debug {
    /// Inserts a post, returning it with its assigned id and `created_at`.
    fn insert_post(&self, post: NewPost) -> BoxFuture<'_, Result<Post, AppError>>;

    /// Returns every post ordered by `created_at`, newest first.
    fn find_posts_newest_first(&self) -> BoxFuture<'_, Result<Vec<Post>, AppError>>;

    /// Counts stored posts.
    fn count_posts(&self) -> BoxFuture<'_, Result<u64, AppError>>;

    /// Records one visit at the current time.
    fn insert_visit(&self) -> BoxFuture<'_, Result<Visit, AppError>>;

    /// Counts recorded visits.
    fn count_visits(&self) -> BoxFuture<'_, Result<u64, AppError>>;
}

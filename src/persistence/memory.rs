//! In-process store, used as the storage double in tests.

use chrono::Utc;
use futures_util::future::BoxFuture;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Store;
use super::models::{NewPost, Post, Visit};
use crate::error::AppError;

/// [`Store`] backed by two `Vec`s behind a [`RwLock`].
///
/// Nothing survives the process. Ordering matches the database store:
/// newest `created_at` first, later inserts first on equal timestamps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<Post>>,
    visits: RwLock<Vec<Visit>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully built post as-is, keeping its id and timestamp.
    ///
    /// Lets callers set up histories with arbitrary creation times.
    pub async fn seed_post(&self, post: Post) {
        self.posts.write().await.push(post);
    }
}

impl Store for MemoryStore {
    fn insert_post(&self, post: NewPost) -> BoxFuture<'_, Result<Post, AppError>> {
        Box::pin(async move {
            let stored = post.into_post(Uuid::new_v4(), Utc::now());
            self.posts.write().await.push(stored.clone());
            Ok(stored)
        })
    }

    fn find_posts_newest_first(&self) -> BoxFuture<'_, Result<Vec<Post>, AppError>> {
        Box::pin(async move {
            let posts = self.posts.read().await;
            let mut sorted: Vec<Post> = posts.iter().rev().cloned().collect();
            // Stable sort keeps later inserts ahead on ties.
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(sorted)
        })
    }

    fn count_posts(&self) -> BoxFuture<'_, Result<u64, AppError>> {
        Box::pin(async move { Ok(self.posts.read().await.len() as u64) })
    }

    fn insert_visit(&self) -> BoxFuture<'_, Result<Visit, AppError>> {
        Box::pin(async move {
            let visit = Visit {
                id: Uuid::new_v4(),
                at: Utc::now(),
            };
            self.visits.write().await.push(visit);
            Ok(visit)
        })
    }

    fn count_visits(&self) -> BoxFuture<'_, Result<u64, AppError>> {
        Box::pin(async move { Ok(self.visits.read().await.len() as u64) })
    }
}

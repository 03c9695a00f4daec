//! Post service: typed accessor over the `posts` collection.

use std::sync::Arc;

use crate::error::AppError;
use crate::persistence::{NewPost, Post, Store};

/// Validates and stores posts, and reads them back newest first.
#[derive(Debug, Clone)]
pub struct PostService {
    store: Arc<dyn Store>,
}

impl PostService {
    /// Creates a new `PostService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validates the raw fields and stores a new post.
    ///
    /// Validation happens before the store is touched, so a rejected
    /// request has no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if `title` or `content` is
    /// absent or empty, and [`AppError::Persistence`] if the insert fails.
    pub async fn create(
        &self,
        title: Option<String>,
        author: Option<String>,
        content: Option<String>,
    ) -> Result<Post, AppError> {
        let new_post = NewPost::new(title, author, content).inspect_err(|_| {
            tracing::warn!("post rejected: missing title or content");
        })?;

        let post = self.store.insert_post(new_post).await?;
        tracing::info!(post_id = %post.id, title = %post.title, "post created");
        Ok(post)
    }

    /// Returns every post, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage failure.
    pub async fn list(&self) -> Result<Vec<Post>, AppError> {
        self.store.find_posts_newest_first().await
    }

    /// Returns the number of stored posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage failure.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count_posts().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn make_service() -> (PostService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = PostService::new(Arc::clone(&store) as Arc<dyn Store>);
        (service, store)
    }

    #[tokio::test]
    async fn create_then_list_puts_new_post_first() {
        let (service, _) = make_service();
        let _ = service
            .create(Some("old".into()), None, Some("a".into()))
            .await;
        let Ok(created) = service
            .create(Some("new".into()), Some("ada".into()), Some("b".into()))
            .await
        else {
            panic!("create failed");
        };

        let Ok(posts) = service.list().await else {
            panic!("list failed");
        };
        assert_eq!(posts.len(), 2);
        assert_eq!(posts.first().map(|p| p.id), Some(created.id));
        assert_eq!(created.author.as_deref(), Some("ada"));
    }

    #[tokio::test]
    async fn invalid_post_is_not_persisted() {
        let (service, store) = make_service();
        let result = service.create(Some("title".into()), None, None).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        assert_eq!(store.count_posts().await.ok(), Some(0));
    }
}

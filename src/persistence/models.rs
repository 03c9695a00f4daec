//! Stored entities: posts and visits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, MISSING_POST_FIELDS};

/// A stored blog post.
///
/// Identity and `created_at` are assigned by the store on insertion.
/// Posts are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Post title (never empty).
    pub title: String,
    /// Optional author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Post body (never empty).
    pub content: String,
    /// Insertion timestamp; the only sort key.
    pub created_at: DateTime<Utc>,
}

/// A validated post that has not been stored yet.
///
/// The only way to build one is [`NewPost::new`], which rejects empty
/// titles and contents, so every stored [`Post`] satisfies that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    author: Option<String>,
    content: String,
}

impl NewPost {
    /// Validates raw post fields.
    ///
    /// A blank `author` is normalised to `None`. Whitespace-only titles and
    /// contents count as present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] when `title` or `content` is
    /// absent or empty.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        content: Option<String>,
    ) -> Result<Self, AppError> {
        let (Some(title), Some(content)) = (
            title.filter(|t| !t.is_empty()),
            content.filter(|c| !c.is_empty()),
        ) else {
            return Err(AppError::InvalidRequest(MISSING_POST_FIELDS.to_string()));
        };
        let author = author.filter(|a| !a.trim().is_empty());
        Ok(Self {
            title,
            author,
            content,
        })
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional author.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Post body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Attaches store-assigned identity and timestamp.
    #[must_use]
    pub fn into_post(self, id: Uuid, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            author: self.author,
            content: self.content,
            created_at,
        }
    }
}

/// A recorded visit. Only ever counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// When the visit happened.
    pub at: DateTime<Utc>,
}

//! PostgreSQL implementation of the storage client.

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::Store;
use super::models::{NewPost, Post, Visit};
use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Collection bootstrap. Idempotent; runs on every connect.
const ENSURE_COLLECTIONS: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS posts (\
        id UUID PRIMARY KEY, \
        title TEXT NOT NULL, \
        author TEXT, \
        content TEXT NOT NULL, \
        created_at TIMESTAMPTZ NOT NULL)",
    "CREATE INDEX IF NOT EXISTS posts_created_at_idx ON posts (created_at DESC)",
    "CREATE TABLE IF NOT EXISTS visits (id UUID PRIMARY KEY, at TIMESTAMPTZ NOT NULL)",
];

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool and makes sure both collections exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the database is unreachable or
    /// the bootstrap statements fail.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await
            .map_err(persistence)?;

        let store = Self::new(pool);
        store.ensure_collections().await?;
        tracing::info!("connected to database");
        Ok(store)
    }

    async fn ensure_collections(&self) -> Result<(), AppError> {
        for statement in ENSURE_COLLECTIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(persistence)?;
        }
        Ok(())
    }

    async fn count(&self, sql: &'static str) -> Result<u64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(persistence)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

impl Store for PostgresStore {
    fn insert_post(&self, post: NewPost) -> BoxFuture<'_, Result<Post, AppError>> {
        Box::pin(async move {
            let id = Uuid::new_v4();
            let created_at = sqlx::query_scalar::<_, DateTime<Utc>>(
                "INSERT INTO posts (id, title, author, content, created_at) \
                 VALUES ($1, $2, $3, $4, now()) RETURNING created_at",
            )
            .bind(id)
            .bind(post.title())
            .bind(post.author())
            .bind(post.content())
            .fetch_one(&self.pool)
            .await
            .map_err(persistence)?;

            Ok(post.into_post(id, created_at))
        })
    }

    fn find_posts_newest_first(&self) -> BoxFuture<'_, Result<Vec<Post>, AppError>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, String, DateTime<Utc>)>(
                "SELECT id, title, author, content, created_at FROM posts \
                 ORDER BY created_at DESC",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

            Ok(rows
                .into_iter()
                .map(|(id, title, author, content, created_at)| Post {
                    id,
                    title,
                    author,
                    content,
                    created_at,
                })
                .collect())
        })
    }

    fn count_posts(&self) -> BoxFuture<'_, Result<u64, AppError>> {
        Box::pin(self.count("SELECT COUNT(*) FROM posts"))
    }

    fn insert_visit(&self) -> BoxFuture<'_, Result<Visit, AppError>> {
        Box::pin(async move {
            let id = Uuid::new_v4();
            let at = sqlx::query_scalar::<_, DateTime<Utc>>(
                "INSERT INTO visits (id, at) VALUES ($1, now()) RETURNING at",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(persistence)?;

            Ok(Visit { id, at })
        })
    }

    fn count_visits(&self) -> BoxFuture<'_, Result<u64, AppError>> {
        Box::pin(self.count("SELECT COUNT(*) FROM visits"))
    }
}

fn persistence(err: sqlx::Error) -> AppError {
    AppError::Persistence(err.to_string())
}

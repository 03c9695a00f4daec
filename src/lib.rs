//! # mini-blog
//!
//! A minimal blogging dashboard: records page visits, stores and lists
//! blog posts, and proxies prompts to an external chat completion API.
//!
//! Every request is one round trip to the store or one outbound HTTP
//! call. The store is built once at startup and passed into the router;
//! there is no other shared state apart from the `/api` rate limiter.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML pages, ai-handler.js)
//!     │
//!     ├── Middleware (middleware/): security headers, access log,
//!     │                             /api rate limiter (production)
//!     ├── Handlers (api/) + Views (views/)
//!     │
//!     ├── PostService / VisitService / AssistantService (service/)
//!     │
//!     ├── Store trait (persistence/) ── PostgreSQL
//!     └── CompletionClient (ai/) ────── chat completion API
//! ```

pub mod ai;
pub mod api;
pub mod app;
pub mod app_state;
pub mod config;
pub mod error;
pub mod middleware;
pub mod persistence;
pub mod service;
pub mod views;

//! Cross-cutting HTTP middleware: security headers and `/api` rate limiting.
//!
//! Access logging is `tower_http::trace::TraceLayer`, wired in
//! [`crate::app::build_app`].

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::{RateLimiter, rate_limit};
pub use security_headers::security_headers;

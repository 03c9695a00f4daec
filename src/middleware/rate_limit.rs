//! Fixed-window, per-client rate limiting for the `/api` routes.
//!
//! Each client IP gets `max_requests` per window. The window opens on the
//! client's first request and resets once it has fully elapsed. Over-quota
//! requests are answered with [`AppError::RateLimited`] (429).

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use crate::config::RateLimitConfig;
use crate::error::AppError;

/// Expired windows are swept once the table grows past this many clients.
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    opened_at: Instant,
    hits: u32,
}

/// Per-client request counter.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `window` per client.
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a limiter from the configured quota.
    #[must_use]
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, config.window)
    }

    /// Counts one request from `client` at the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimited`] when the client is over quota.
    pub async fn check(&self, client: IpAddr) -> Result<(), AppError> {
        self.check_at(client, Instant::now()).await
    }

    /// Counts one request from `client` at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimited`] when the client is over quota.
    pub async fn check_at(&self, client: IpAddr, now: Instant) -> Result<(), AppError> {
        let mut clients = self.clients.lock().await;

        if clients.len() >= PRUNE_THRESHOLD {
            let window = self.window;
            clients.retain(|_, w| now.saturating_duration_since(w.opened_at) < window);
        }

        let entry = clients.entry(client).or_insert(Window {
            opened_at: now,
            hits: 0,
        });
        if now.saturating_duration_since(entry.opened_at) >= self.window {
            *entry = Window {
                opened_at: now,
                hits: 0,
            };
        }

        if entry.hits >= self.max_requests {
            let elapsed = now.saturating_duration_since(entry.opened_at);
            let remaining = self.window.saturating_sub(elapsed);
            let retry_after_ms = u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX);
            return Err(AppError::RateLimited { retry_after_ms });
        }

        entry.hits = entry.hits.saturating_add(1);
        Ok(())
    }
}

/// Whether `path` falls under the limited `/api` prefix, routed or not.
#[must_use]
pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Axum middleware enforcing the [`RateLimiter`] on `/api` paths.
///
/// Layered over the whole router so unrouted `/api` paths are counted
/// too; everything else passes straight through. The client is identified
/// by the peer address from [`ConnectInfo`]; requests without one share a
/// single bucket.
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    if !is_api_path(request.uri().path()) {
        return next.run(request).await;
    }

    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |ConnectInfo(addr)| {
            addr.ip()
        });

    match limiter.check(client).await {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!(%client, path = %request.uri().path(), "rate limit exceeded");
            err.into_response()
        }
    }
}

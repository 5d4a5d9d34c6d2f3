use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use nonzero_ext::nonzero;
use serde_json::Value;
use tracing::{debug, warn};

use crate::handlers::lead_handlers::LeadError;
use crate::AppState;

pub type IpRateLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// Five submissions per minute per client address.
pub fn lead_rate_limiter() -> IpRateLimiter {
    RateLimiter::keyed(Quota::per_minute(nonzero!(5u32)))
}

/// Drops idle per-address state once a minute.
pub fn spawn_cleanup(limiter: Arc<IpRateLimiter>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            limiter.retain_recent();
            debug!("Rate limiter tracks {} addresses", limiter.len());
        }
    });
}

/// The last `X-Forwarded-For` hop wins over the socket address. The reverse
/// proxy appends the address it saw, so earlier hops are client-supplied.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> IpAddr {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.rsplit(',').next())
        .and_then(|ip| ip.trim().parse::<IpAddr>().ok())
        .unwrap_or_else(|| peer.ip())
}

pub async fn limit_by_ip(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let ip = client_ip(request.headers(), peer);
    if state.limiter.check_key(&ip).is_err() {
        warn!("Rate limit exceeded for {}", ip);
        return Err(LeadError::RateLimited.into());
    }
    Ok(next.run(request).await)
}

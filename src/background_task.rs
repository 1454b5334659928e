use actix_web::web;
use tokio::time::{interval, Duration};

use crate::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drops expired session revocations and idle rate-limit buckets.
pub async fn start_purge_task(state: web::Data<AppState>) {
    let mut interval = interval(SWEEP_INTERVAL);

    loop {
        interval.tick().await;
        purge_once(&state);
    }
}

pub fn purge_once(state: &AppState) {
    let sessions = state.sessions.purge_expired();
    let buckets = state.login_limiter.evict_idle() + state.message_limiter.evict_idle();

    if sessions > 0 || buckets > 0 {
        tracing::debug!(sessions, buckets, "Purged expired session revocations and idle rate-limit buckets");
    }
}

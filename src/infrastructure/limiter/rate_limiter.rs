use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;
use parking_lot::Mutex;

/// A token bucket which allows fractional tokens for precise refill
#[derive(Debug)]
struct TokenBucket {
    capacity: f64,
    tokens: f64,
    refill_per_sec: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn new(capacity: f64, refill_per_sec: f64) -> Self {
        Self {
            capacity,
            tokens: capacity,
            refill_per_sec,
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        if elapsed > 0.0 {
            self.tokens = (self.tokens + elapsed * self.refill_per_sec).min(self.capacity);
            self.last_refill = now;
        }
    }

    /// Consumes one token, or returns the whole seconds until one is available.
    fn try_consume(&mut self, now: Instant) -> Result<(), u64> {
        self.refill(now);
        // Small epsilon to avoid fp surprises
        if self.tokens + 1e-12 >= 1.0 {
            self.tokens -= 1.0;
            Ok(())
        } else {
            let tokens_needed = 1.0 - self.tokens;
            Err(((tokens_needed / self.refill_per_sec).ceil() as u64).max(1))
        }
    }
}

/// Per-key token buckets, e.g. one per client IP.
///
/// `limit` requests are allowed per `period`, refilled continuously. A limit
/// of zero disables the check.
#[derive(Clone)]
pub struct RateLimiterStore {
    map: Arc<DashMap<String, Arc<Mutex<TokenBucket>>>>,
    capacity: f64,
    refill_per_sec: f64,
    idle_ttl: Duration,
}

impl RateLimiterStore {
    pub fn new(limit: u32, period: Duration) -> Self {
        let capacity = f64::from(limit);
        Self {
            map: Arc::new(DashMap::new()),
            capacity,
            refill_per_sec: capacity / period.as_secs_f64().max(1.0),
            idle_ttl: period,
        }
    }

    pub fn per_minute(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(60))
    }

    pub fn per_hour(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(60 * 60))
    }

    fn get_bucket(&self, key: &str) -> Arc<Mutex<TokenBucket>> {
        if let Some(existing) = self.map.get(key) {
            return existing.clone();
        }
        self.map
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(TokenBucket::new(self.capacity, self.refill_per_sec))))
            .clone()
    }

    /// `Err(retry_after_secs)` when `key` has used up its allowance.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        if self.capacity <= 0.0 {
            return Ok(());
        }
        let bucket = self.get_bucket(key);
        let mut bucket = bucket.lock();
        bucket.try_consume(Instant::now())
    }

    /// Drops buckets untouched for a whole period. Such a bucket has refilled
    /// completely, so dropping it loses nothing. Returns how many went.
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let before = self.map.len();
        self.map.retain(|_, bucket| now.duration_since(bucket.lock().last_refill) <= self.idle_ttl);
        before - self.map.len()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

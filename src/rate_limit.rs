use std::collections::HashMap;
use std::future::{ready, Ready};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use actix_web::{dev, web, FromRequest, HttpRequest};

use crate::error::RestError;

/// Maximum admitted requests per address within one window
const MAX_REQUESTS: u32 = 5;
/// Fixed window length
const WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug)]
struct Window {
    count: u32,
    started_at: Instant,
}

/// Fixed-window request counter keyed by client address.
///
/// Constructed once at startup and shared through app data. Known trade-offs
/// at this scale: a burst straddling a window boundary can admit up to twice
/// the per-window maximum, counts are lost on restart and not shared across
/// processes, and entries for addresses that go quiet are never evicted.
#[derive(Debug, Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit or deny a request from `addr`.
    ///
    /// The whole read-modify-write runs under one lock acquisition so two
    /// concurrent requests from the same address cannot race the counter.
    pub fn admit(&self, addr: &str) -> bool {
        self.admit_at(addr, Instant::now())
    }

    fn admit_at(&self, addr: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter lock poisoned");

        match windows.get_mut(addr) {
            Some(window) if now.duration_since(window.started_at) <= WINDOW => {
                window.count += 1;
                window.count <= MAX_REQUESTS
            }
            _ => {
                windows.insert(
                    addr.to_string(),
                    Window {
                        count: 1,
                        started_at: now,
                    },
                );
                true
            }
        }
    }
}

/// Admission guard for the public intake endpoints.
///
/// Resolves the client address, consults the shared [`RateLimiter`] and
/// rejects the request before the handler body runs when the address has
/// exhausted its window. Carries the resolved address so the handler can
/// record it on the persisted row.
#[derive(Debug)]
pub struct Throttled(String);

impl Throttled {
    pub fn addr(&self) -> &str {
        &self.0
    }

    pub fn into_addr(self) -> String {
        self.0
    }
}

impl FromRequest for Throttled {
    type Error = RestError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        // NOTE: Must be registered with the application at startup
        let limiter = req
            .app_data::<web::Data<RateLimiter>>()
            .expect("RateLimiter not registered for application");

        let addr = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default();

        let result = if limiter.admit(&addr) {
            Ok(Throttled(addr))
        } else {
            tracing::warn!(client.addr = %addr, "Rate limit exceeded");
            Err(RestError::RateLimited)
        };

        ready(result)
    }
}

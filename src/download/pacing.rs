//! Fixed-delay request pacing.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

/// Sleeps a fixed delay plus random jitter between successive network calls.
///
/// The first call through a limiter is not delayed. No feedback from
/// observed rate limiting.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    delay: Duration,
    jitter: Duration,
    primed: bool,
}

impl RateLimiter {
    pub fn new(delay: Duration, jitter: Duration) -> Self {
        Self {
            delay,
            jitter,
            primed: false,
        }
    }

    pub fn from_millis(delay_ms: u64, jitter_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(delay_ms),
            Duration::from_millis(jitter_ms),
        )
    }

    /// A limiter that never sleeps.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Delay the next call would wait, jitter included.
    ///
    /// A zero base delay turns pacing off, jitter and all.
    pub fn next_delay(&self) -> Duration {
        if self.delay.is_zero() {
            return Duration::ZERO;
        }

        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = if jitter_ms > 0 {
            rand::thread_rng().gen_range(0..=jitter_ms)
        } else {
            0
        };
        self.delay + Duration::from_millis(extra)
    }

    /// Wait before a network call.
    pub async fn wait(&mut self) {
        if !self.primed {
            self.primed = true;
            return;
        }

        let delay = self.next_delay();
        if !delay.is_zero() {
            tracing::debug!("Pacing: sleeping {} ms", delay.as_millis());
            sleep(delay).await;
        }
    }
}

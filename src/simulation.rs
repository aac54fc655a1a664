use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Probability that a single `/api/message` call fails.
pub const FAILURE_RATE: f64 = 0.1;

pub const MIN_DELAY: Duration = Duration::from_millis(100);
pub const MAX_DELAY: Duration = Duration::from_millis(500);

/// # Fault Injection Source
///
/// Supplies the artificial latency and the failure decision for
/// `/api/message`. Handlers only see this trait, so tests can swap in a
/// seeded generator or a mock.
#[cfg_attr(test, mockall::automock)]
pub trait FaultInjector: Send + Sync {
    /// Delay to apply before answering, within [`MIN_DELAY`, `MAX_DELAY`].
    fn processing_delay(&self) -> Duration;

    /// `true` when this request should fail.
    fn should_fail(&self) -> bool;
}

/// Production injector backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngInjector;

impl FaultInjector for ThreadRngInjector {
    fn processing_delay(&self) -> Duration {
        draw_delay(&mut rand::thread_rng())
    }

    fn should_fail(&self) -> bool {
        rand::thread_rng().gen_bool(FAILURE_RATE)
    }
}

/// Deterministic injector: the same seed yields the same sequence of draws.
pub struct SeededInjector {
    rng: Mutex<StdRng>,
}

impl SeededInjector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable generator.
        let mut guard = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw(&mut guard)
    }
}

impl FaultInjector for SeededInjector {
    fn processing_delay(&self) -> Duration {
        self.with_rng(draw_delay)
    }

    fn should_fail(&self) -> bool {
        self.with_rng(|rng| rng.gen_bool(FAILURE_RATE))
    }
}

fn draw_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let secs = rng.gen_range(MIN_DELAY.as_secs_f64()..=MAX_DELAY.as_secs_f64());
    Duration::from_secs_f64(secs)
}

/// Rounds a duration to milliseconds with two decimal places.
pub fn millis_rounded(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_stays_in_window() {
        let injector = SeededInjector::new(7);
        for _ in 0..5_000 {
            let delay = injector.processing_delay();
            assert!(delay >= MIN_DELAY && delay <= MAX_DELAY, "{delay:?}");
        }
    }

    #[test]
    fn test_thread_rng_delay_stays_in_window() {
        let injector = ThreadRngInjector;
        for _ in 0..1_000 {
            let delay = injector.processing_delay();
            assert!(delay >= MIN_DELAY && delay <= MAX_DELAY, "{delay:?}");
        }
    }

    #[test]
    fn test_failure_rate_converges_to_ten_percent() {
        let injector = SeededInjector::new(42);
        let samples = 20_000;
        let failures = (0..samples).filter(|_| injector.should_fail()).count();
        let rate = failures as f64 / samples as f64;
        assert!((0.08..=0.12).contains(&rate), "observed failure rate {rate}");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SeededInjector::new(1234);
        let b = SeededInjector::new(1234);
        for _ in 0..100 {
            assert_eq!(a.processing_delay(), b.processing_delay());
            assert_eq!(a.should_fail(), b.should_fail());
        }
    }

    #[test]
    fn test_millis_rounded() {
        assert_eq!(millis_rounded(Duration::from_micros(123_456)), 123.46);
        assert_eq!(millis_rounded(Duration::from_millis(100)), 100.0);
        assert_eq!(millis_rounded(Duration::ZERO), 0.0);
    }
}

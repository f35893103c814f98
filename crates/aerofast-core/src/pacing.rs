//! Injectable latency for simulated "thinking" and acknowledgment delays.
//!
//! Components that model a deliberate pause (the concierge typing
//! indicator, the contact form's submit spinner) wait through a [`Pacer`]
//! instead of calling the timer directly, so tests can run the whole
//! sequence synchronously.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Upper bound for any deadline, roughly thirty years out.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `delay` from now on the tokio clock. Delays too large to represent are
/// clamped to a far-future deadline instead of overflowing.
pub fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay.min(FAR_FUTURE))
        .unwrap_or_else(|| now + Duration::from_secs(86_400))
}

/// Waits until a deadline on the tokio clock (so paused test time applies).
#[async_trait]
pub trait Pacer: Send + Sync + 'static {
    /// Resolve once `deadline` has passed.
    async fn wait_until(&self, deadline: Instant);

    /// Resolve after `delay` measured from now.
    async fn wait(&self, delay: Duration) {
        self.wait_until(deadline_after(delay)).await;
    }
}

/// Wall-clock pacer backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn wait_until(&self, deadline: Instant) {
        tokio::time::sleep_until(deadline).await;
    }
}

/// Pacer that never waits. Only yields so queued work still interleaves
/// the way it would with real delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediatePacer;

#[async_trait]
impl Pacer for ImmediatePacer {
    async fn wait_until(&self, _deadline: Instant) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_pacer_waits_for_delay() {
        let start = Instant::now();
        TokioPacer.wait(Duration::from_millis(1200)).await;
        assert!(start.elapsed() >= Duration::from_millis(1200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_delay_is_clamped() {
        let now = Instant::now();
        let deadline = deadline_after(Duration::from_millis(u64::MAX));
        assert!(deadline > now + Duration::from_secs(86_400 * 365));
        assert_eq!(deadline_after(Duration::MAX), deadline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_after_small_delay_is_exact() {
        let now = Instant::now();
        assert_eq!(deadline_after(Duration::from_millis(1200)), now + Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn test_immediate_pacer_does_not_wait() {
        let start = Instant::now();
        ImmediatePacer.wait(Duration::from_secs(3600)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_pacer_is_object_safe() {
        let pacers: Vec<Box<dyn Pacer>> = vec![Box::new(ImmediatePacer), Box::new(TokioPacer)];
        for pacer in &pacers {
            pacer.wait(Duration::ZERO).await;
        }
    }
}

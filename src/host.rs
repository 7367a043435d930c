//! Host Signals Module
//!
//! Read-only capabilities the surrounding runtime may expose: page
//! visibility, connection quality, battery state, and idle scheduling.
//! Each is an injectable seam with a conservative default, so the interval
//! calculator and the preloader work unchanged when a signal is missing.

use std::time::Duration;

use async_trait::async_trait;

// == Connection Type ==
/// Effective connection classification, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    /// Anything at 3G or better, or unknown
    Fast,
    /// Effective 2G
    TwoG,
    /// Effective slow-2G
    SlowTwoG,
}

impl ConnectionType {
    /// True for the classes that should slow polling down.
    pub fn is_slow(self) -> bool {
        matches!(self, ConnectionType::TwoG | ConnectionType::SlowTwoG)
    }
}

// == Host Signals ==
/// Ambient read-only signals. Defaults assume the most permissive state:
/// visible page, fast network, no data saver, healthy battery.
pub trait HostSignals: Send + Sync {
    /// Whether the hosting page/tab is currently visible.
    fn is_visible(&self) -> bool {
        true
    }

    /// Effective connection classification.
    fn connection(&self) -> ConnectionType {
        ConnectionType::Fast
    }

    /// Whether the user asked for reduced data usage.
    fn data_saver(&self) -> bool {
        false
    }

    /// Whether the device reports low battery.
    fn battery_low(&self) -> bool {
        false
    }
}

// == Default Host ==
/// Host with no signals wired up; every accessor returns its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHost;

impl HostSignals for DefaultHost {}

// == Idle Scheduler ==
/// Waits until the host reports idle. Implementations resolve when no
/// higher-priority work is pending; callers bound the wait with their own
/// timeout.
#[async_trait]
pub trait IdleScheduler: Send + Sync {
    async fn wait_for_idle(&self);
}

// == Fallback Idle ==
/// Idle scheduler for hosts without an idle hook: a short fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct FallbackIdle {
    /// Fixed delay standing in for "the host became idle"
    pub delay: Duration,
}

impl Default for FallbackIdle {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
        }
    }
}

#[async_trait]
impl IdleScheduler for FallbackIdle {
    async fn wait_for_idle(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_default_host_is_permissive() {
        let host = DefaultHost;
        assert!(host.is_visible());
        assert_eq!(host.connection(), ConnectionType::Fast);
        assert!(!host.data_saver());
        assert!(!host.battery_low());
    }

    #[test]
    fn test_connection_slowness() {
        assert!(!ConnectionType::Fast.is_slow());
        assert!(ConnectionType::TwoG.is_slow());
        assert!(ConnectionType::SlowTwoG.is_slow());
    }

    #[tokio::test]
    async fn test_fallback_idle_waits_its_delay() {
        let scheduler = FallbackIdle {
            delay: Duration::from_millis(50),
        };

        let started = Instant::now();
        scheduler.wait_for_idle().await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}

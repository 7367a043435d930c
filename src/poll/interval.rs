//! Adaptive Interval Module
//!
//! Computes the delay a polling view should wait before its next read.
//! Pure function of its inputs, so every input combination is directly
//! unit-testable.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::host::{ConnectionType, HostSignals};
use crate::poll::session::is_session_open_at;

/// Minimum interval while the market is closed.
pub const SESSION_IDLE_FLOOR: Duration = Duration::from_millis(60_000);
/// Minimum interval while the page is hidden.
pub const HIDDEN_FLOOR: Duration = Duration::from_millis(120_000);
/// Interval multiplier applied to hidden pages.
pub const HIDDEN_MULTIPLIER: u32 = 4;

// == Poll Context ==
/// Host-derived inputs to the interval calculation.
#[derive(Debug, Clone, Copy)]
pub struct PollContext {
    /// Page/tab visibility
    pub visible: bool,
    /// Effective connection classification
    pub connection: ConnectionType,
    /// Data-saver preference
    pub data_saver: bool,
    /// Low-battery report
    pub battery_low: bool,
}

impl Default for PollContext {
    fn default() -> Self {
        Self {
            visible: true,
            connection: ConnectionType::Fast,
            data_saver: false,
            battery_low: false,
        }
    }
}

impl PollContext {
    /// Snapshots the current signals of a host.
    pub fn from_host(host: &dyn HostSignals) -> Self {
        Self {
            visible: host.is_visible(),
            connection: host.connection(),
            data_saver: host.data_saver(),
            battery_low: host.battery_low(),
        }
    }

    fn slow_network(&self) -> bool {
        self.connection.is_slow() || self.data_saver
    }
}

// == Poll Interval ==
/// Delay before the next poll, from a caller baseline and the current
/// context.
///
/// Outside the trading session the interval is floored at
/// [`SESSION_IDLE_FLOOR`]. A hidden page multiplies by
/// [`HIDDEN_MULTIPLIER`] and is floored at [`HIDDEN_FLOOR`]. A slow or
/// data-saving connection doubles the result, and so does low battery.
/// The floors are lower bounds applied before the network and battery
/// doublings, so those always scale the final value exactly.
pub fn poll_interval(base: Duration, at: NaiveDateTime, ctx: &PollContext) -> Duration {
    let mut interval = base;

    if !is_session_open_at(at) {
        interval = interval.max(SESSION_IDLE_FLOOR);
    }

    if !ctx.visible {
        interval = (interval * HIDDEN_MULTIPLIER).max(HIDDEN_FLOOR);
    }

    if ctx.slow_network() {
        interval *= 2;
    }

    if ctx.battery_low {
        interval *= 2;
    }

    interval
}

/// [`poll_interval`] evaluated at the local clock.
pub fn poll_interval_now(base: Duration, ctx: &PollContext) -> Duration {
    poll_interval(base, Local::now().naive_local(), ctx)
}

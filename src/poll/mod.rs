//! Poll Module
//!
//! Polling cadence policy: trading-session calendar plus the adaptive
//! interval calculation long-lived views use to schedule their next read.

mod interval;
mod session;

// Re-export public types
pub use interval::{
    poll_interval, poll_interval_now, PollContext, HIDDEN_FLOOR, HIDDEN_MULTIPLIER,
    SESSION_IDLE_FLOOR,
};
pub use session::{
    is_session_open_at, is_session_open_now, is_trading_day, AFTERNOON_CLOSE_MIN,
    AFTERNOON_OPEN_MIN, MORNING_CLOSE_MIN, MORNING_OPEN_MIN,
};

//! Background Tasks Module
//!
//! Long-running maintenance tasks spawned alongside the request manager.

mod sweep;

pub use sweep::spawn_sweep_task;

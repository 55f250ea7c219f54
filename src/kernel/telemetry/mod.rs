//! Request and selection telemetry.
//!
//! Telemetry is a read-only side-effect layer: nothing in the selection
//! model or the controller reads it back to make a decision.
//!
//! Events carry ids, counts and durations only. Mood names and
//! recommendation contents never enter the buffer.

pub mod event;
pub mod metrics;
pub mod recorder;

//! Platform abstraction layer
//!
//! Turns wall-clock time into the fixed-rate event stream the app loop
//! consumes. The window toolkit only supplies elapsed time and paint calls.

pub mod timer;

pub use timer::{Event, TickTimer};

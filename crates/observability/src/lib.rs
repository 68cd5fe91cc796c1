//! Shared tracing/logging setup for binaries and test harnesses.

mod subscriber;

pub use subscriber::init;

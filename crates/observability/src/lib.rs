//! Logging for the item shop binary.
//!
//! The shop talks to the operator on stdout, so everything here is wired to
//! stderr. Library crates only emit `tracing` events; this crate decides
//! where they go.

/// Install the shop's log subscriber. Repeated calls do nothing.
pub fn init() {
    tracing::init();
}

/// Subscriber setup and the default filter.
pub mod tracing;

//! allowgate proxy library entry.
//!
//! Aggregates independent allow-sources behind one decision point: a directory
//! of registries (each pausable), a blacklist that vetoes everything, and an
//! owner capability guarding every mutation. Consumed by the `allowgate` binary
//! and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod access;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod proxy;

pub use access::Decision;
pub use proxy::{AllowlistRegistryProxy, VERSION};

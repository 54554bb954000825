//! allowgate core: identity type, error surface and the allow-source capability.
//!
//! This crate defines the contracts shared by the proxy, its registries and any
//! tooling. It carries no runtime or configuration dependencies so third-party
//! registries can implement [`AllowRegistry`] without pulling in the proxy.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `AllowGateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod address;
pub mod error;
pub mod registry;

pub use address::Address;
/// Shared result type.
pub use error::{AllowGateError, ErrorKind, Result};
pub use registry::{AllowRegistry, MemoryRegistry};

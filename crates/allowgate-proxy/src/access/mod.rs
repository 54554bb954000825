//! Access layer (registry directory, blacklist, decision).
//!
//! Plain data structures without locking or authorization; the proxy wraps
//! them in its owner guard and snapshot discipline.

pub mod blacklist;
pub mod directory;
pub mod engine;

pub use blacklist::Blacklist;
pub use directory::{Directory, RegistryEntry};
pub use engine::{decide, Decision};

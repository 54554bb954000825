//! Top-level facade crate for allowgate.
//!
//! Re-exports core types and the proxy library so users can depend on a single crate.

pub mod core {
    pub use allowgate_core::*;
}

pub mod proxy {
    pub use allowgate_proxy::*;
}

//! Opaque identity handle shared by accounts, owners and registries.
//!
//! Addresses compare exactly; no case folding or checksum handling is applied.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AllowGateError, Result};

/// Identity of an account, owner, or registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(Arc<str>);

impl Address {
    /// Parse an address. Rejects empty input and any whitespace or control characters.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(AllowGateError::BadRequest("address must not be empty".into()));
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AllowGateError::BadRequest(format!(
                "invalid address: {s:?} (whitespace or control characters)"
            )));
        }
        Ok(Self(Arc::from(s)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = AllowGateError;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AllowGateError;

    fn try_from(s: String) -> Result<Self> {
        Address::parse(&s)
    }
}

impl From<Address> for String {
    fn from(a: Address) -> Self {
        a.0.to_string()
    }
}

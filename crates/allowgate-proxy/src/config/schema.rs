use std::collections::HashSet;

use serde::Deserialize;

use allowgate_core::error::{AllowGateError, Result};
use allowgate_core::Address;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllowGateConfig {
    pub version: u32,

    pub proxy: ProxySection,

    #[serde(default)]
    pub registries: Vec<RegistryConfig>,

    #[serde(default)]
    pub blacklist: Vec<Address>,
}

impl AllowGateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AllowGateError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.proxy.validate()?;

        let mut seen = HashSet::new();
        for r in &self.registries {
            if !seen.insert(&r.address) {
                return Err(AllowGateError::BadRequest(format!(
                    "duplicate registry address: {}",
                    r.address
                )));
            }
        }

        let mut seen = HashSet::new();
        for a in &self.blacklist {
            if !seen.insert(a) {
                return Err(AllowGateError::BadRequest(format!(
                    "duplicate blacklist entry: {a}"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySection {
    pub name: String,
    pub owner: Address,
}

impl ProxySection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AllowGateError::BadRequest("proxy.name must not be empty".into()));
        }
        Ok(())
    }
}

/// In-memory registry seeded at startup.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    pub label: String,
    pub address: Address,

    /// Registry administrator; defaults to `proxy.owner`.
    #[serde(default)]
    pub owner: Option<Address>,

    #[serde(default)]
    pub members: Vec<Address>,

    #[serde(default)]
    pub paused: bool,
}

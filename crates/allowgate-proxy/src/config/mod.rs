//! Proxy config loader (strict parsing).

pub mod schema;

use std::fs;

use allowgate_core::error::{AllowGateError, Result};

pub use schema::{AllowGateConfig, ProxySection, RegistryConfig};

pub fn load_from_file(path: &str) -> Result<AllowGateConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AllowGateError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AllowGateConfig> {
    let cfg: AllowGateConfig = serde_yaml::from_str(s)
        .map_err(|e| AllowGateError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

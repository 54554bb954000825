//! Shared application state: a proxy seeded from config.
//!
//! Seeding goes through the proxy's public owner-guarded API so the same
//! invariants hold for configured and runtime state.

use std::collections::HashMap;
use std::sync::Arc;

use allowgate_core::error::{AllowGateError, Result};
use allowgate_core::{Address, AllowRegistry, MemoryRegistry};

use crate::config::AllowGateConfig;
use crate::proxy::AllowlistRegistryProxy;

#[derive(Clone)]
pub struct AppState {
    proxy: Arc<AllowlistRegistryProxy>,
    registries: Arc<HashMap<Address, Arc<MemoryRegistry>>>,
}

impl AppState {
    /// Build the proxy and its in-memory registries from a validated config.
    pub fn new(cfg: &AllowGateConfig) -> Result<Self> {
        let owner = &cfg.proxy.owner;

        // 1) Proxy identity
        let proxy = AllowlistRegistryProxy::new();
        proxy.initialize(owner, cfg.proxy.name.clone())?;

        // 2) Registries
        let mut registries = HashMap::new();
        for r in &cfg.registries {
            let reg_owner = r.owner.as_ref().unwrap_or(owner);
            let registry = Arc::new(MemoryRegistry::new(r.address.clone(), reg_owner.clone()));
            for m in &r.members {
                registry.add_allowlist(reg_owner, m.clone())?;
            }

            proxy
                .add_registry(owner, r.label.clone(), Arc::clone(&registry) as Arc<dyn AllowRegistry>)
                .map_err(|e| {
                    AllowGateError::BadRequest(format!(
                        "registry seed failed (registry={}): {e}",
                        r.address
                    ))
                })?;
            if r.paused {
                proxy.pause_registry(owner, &r.address)?;
            }

            registries.insert(r.address.clone(), registry);
        }

        // 3) Blacklist
        for a in &cfg.blacklist {
            proxy.add_blacklist(owner, a.clone())?;
        }

        // blacklist <-> registry membership sanity check
        for a in &cfg.blacklist {
            for (addr, reg) in &registries {
                if reg.is_allowlist(a) {
                    tracing::warn!(account = %a, registry = %addr, "blacklisted account is allowlisted; blacklist wins");
                }
            }
        }

        Ok(Self {
            proxy: Arc::new(proxy),
            registries: Arc::new(registries),
        })
    }

    pub fn proxy(&self) -> Arc<AllowlistRegistryProxy> {
        Arc::clone(&self.proxy)
    }

    /// Seeded registry by address (for administering its members).
    pub fn registry(&self, address: &Address) -> Option<Arc<MemoryRegistry>> {
        self.registries.get(address).cloned()
    }
}

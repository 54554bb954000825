//! The allowlist registry proxy.
//!
//! Mutations are serialized by `mutations`, applied to a private copy of the
//! current state, and published by swapping one `Arc`. A failed precondition
//! publishes nothing. Queries grab the current `Arc` and evaluate lock-free, so
//! they never observe a half-applied mutation.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use allowgate_core::error::{AllowGateError, Result};
use allowgate_core::{Address, AllowRegistry};

use crate::access::{decide, Blacklist, Decision, Directory};
use crate::obs::ProxyMetrics;

/// Implementation version reported by [`AllowlistRegistryProxy::version`].
pub const VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Default)]
struct ProxyState {
    initialized: bool,
    name: String,
    owner: Option<Address>,
    directory: Directory,
    blacklist: Blacklist,
}

impl ProxyState {
    fn only_owner(&self, caller: &Address) -> Result<()> {
        match &self.owner {
            Some(owner) if owner == caller => Ok(()),
            _ => Err(AllowGateError::Unauthorized {
                caller: caller.clone(),
            }),
        }
    }
}

pub struct AllowlistRegistryProxy {
    state: RwLock<Arc<ProxyState>>,
    mutations: Mutex<()>,
    metrics: ProxyMetrics,
}

impl Default for AllowlistRegistryProxy {
    fn default() -> Self {
        Self::new()
    }
}

impl AllowlistRegistryProxy {
    /// Uninitialized proxy: empty name, no owner, every mutation is rejected
    /// until [`initialize`](Self::initialize) runs.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Arc::new(ProxyState::default())),
            mutations: Mutex::new(()),
            metrics: ProxyMetrics::default(),
        }
    }

    fn snapshot(&self) -> Arc<ProxyState> {
        // Published snapshots are immutable, so a poisoned lock still guards a consistent value.
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Run one mutation atomically. `guard` is the caller that must hold the owner capability.
    fn apply<T>(
        &self,
        op: &'static str,
        guard: Option<&Address>,
        f: impl FnOnce(&mut ProxyState) -> Result<T>,
    ) -> Result<T> {
        let _serial = self.mutations.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot();

        let res = guard
            .map_or(Ok(()), |caller| current.only_owner(caller))
            .and_then(|()| {
                let mut next = ProxyState::clone(&current);
                let out = f(&mut next)?;
                Ok((next, out))
            });

        match res {
            Ok((next, out)) => {
                *self.state.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
                self.metrics.admin_ops.inc(&[("op", op), ("result", "ok")]);
                Ok(out)
            }
            Err(e) => {
                let kind = e.kind().as_str();
                tracing::warn!(op, kind, error = %e, "mutation rejected");
                self.metrics.admin_ops.inc(&[("op", op), ("result", kind)]);
                Err(e)
            }
        }
    }

    // --------------------
    // Identity / ownership
    // --------------------

    /// One-shot initialization: sets the name and makes `caller` the owner.
    pub fn initialize(&self, caller: &Address, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.apply("initialize", None, |s| {
            if s.initialized {
                return Err(AllowGateError::AlreadyInitialized);
            }
            s.initialized = true;
            s.name = name.clone();
            s.owner = Some(caller.clone());
            Ok(())
        })?;
        tracing::info!(name = %name, owner = %caller, version = VERSION, "proxy initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.snapshot().initialized
    }

    pub fn name(&self) -> String {
        self.snapshot().name.clone()
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn owner(&self) -> Option<Address> {
        self.snapshot().owner.clone()
    }

    pub fn transfer_ownership(&self, caller: &Address, new_owner: Address) -> Result<()> {
        self.apply("transfer_ownership", Some(caller), |s| {
            s.owner = Some(new_owner.clone());
            Ok(())
        })?;
        tracing::info!(previous = %caller, owner = %new_owner, "ownership transferred");
        Ok(())
    }

    /// Drop the owner for good; the proxy becomes read-only.
    pub fn renounce_ownership(&self, caller: &Address) -> Result<()> {
        self.apply("renounce_ownership", Some(caller), |s| {
            s.owner = None;
            Ok(())
        })?;
        tracing::info!(previous = %caller, "ownership renounced");
        Ok(())
    }

    // --------------------
    // Registry directory
    // --------------------

    pub fn add_registry(
        &self,
        caller: &Address,
        label: impl Into<String>,
        registry: Arc<dyn AllowRegistry>,
    ) -> Result<()> {
        let label = label.into();
        let address = registry.address().clone();
        self.apply("add_registry", Some(caller), |s| {
            s.directory.add(label.clone(), registry)
        })?;
        tracing::info!(registry = %address, label = %label, caller = %caller, "registry added");
        Ok(())
    }

    pub fn remove_registry(&self, caller: &Address, registry: &Address) -> Result<()> {
        let removed = self.apply("remove_registry", Some(caller), |s| {
            s.directory.remove(registry)
        })?;
        tracing::info!(registry = %registry, label = %removed.label, caller = %caller, "registry removed");
        Ok(())
    }

    pub fn pause_registry(&self, caller: &Address, registry: &Address) -> Result<()> {
        self.apply("pause_registry", Some(caller), |s| s.directory.pause(registry))?;
        tracing::info!(registry = %registry, caller = %caller, "registry paused");
        Ok(())
    }

    pub fn unpause_registry(&self, caller: &Address, registry: &Address) -> Result<()> {
        self.apply("unpause_registry", Some(caller), |s| s.directory.unpause(registry))?;
        tracing::info!(registry = %registry, caller = %caller, "registry unpaused");
        Ok(())
    }

    /// `(label, paused)`; `("", false)` when the registry is not registered.
    pub fn get_registry_info(&self, registry: &Address) -> (String, bool) {
        self.snapshot()
            .directory
            .get(registry)
            .map(|e| (e.label.clone(), e.paused))
            .unwrap_or_default()
    }

    pub fn registries(&self) -> Vec<Address> {
        self.snapshot().directory.addresses()
    }

    pub fn total_registry(&self) -> usize {
        self.snapshot().directory.len()
    }

    // --------------------
    // Blacklist
    // --------------------

    pub fn add_blacklist(&self, caller: &Address, account: Address) -> Result<()> {
        self.apply("add_blacklist", Some(caller), |s| s.blacklist.add(account.clone()))?;
        tracing::info!(account = %account, caller = %caller, "account blacklisted");
        Ok(())
    }

    pub fn remove_blacklist(&self, caller: &Address, account: &Address) -> Result<()> {
        self.apply("remove_blacklist", Some(caller), |s| s.blacklist.remove(account))?;
        tracing::info!(account = %account, caller = %caller, "account removed from blacklist");
        Ok(())
    }

    pub fn is_blacklist(&self, account: &Address) -> bool {
        self.snapshot().blacklist.contains(account)
    }

    // --------------------
    // Decisions
    // --------------------

    /// Aggregate decision with the reason attached.
    pub fn check(&self, account: &Address) -> Decision {
        let started = Instant::now();
        let snap = self.snapshot();
        let decision = decide(&snap.directory, &snap.blacklist, account);

        let outcome = if decision.is_allowed() { "allow" } else { "deny" };
        self.metrics
            .decisions
            .inc(&[("outcome", outcome), ("reason", decision.reason())]);
        self.metrics.decision_duration.observe(&[], started.elapsed());
        tracing::debug!(account = %account, outcome, reason = decision.reason(), "decision");

        decision
    }

    pub fn is_allowlist(&self, account: &Address) -> bool {
        self.check(account).is_allowed()
    }

    // --------------------
    // Observability
    // --------------------

    pub fn metrics(&self) -> &ProxyMetrics {
        &self.metrics
    }

    /// Prometheus text, with directory/blacklist sizes from the current snapshot.
    pub fn render_metrics(&self) -> String {
        let snap = self.snapshot();
        let paused = snap.directory.entries().iter().filter(|e| e.paused).count();
        self.metrics.render(&[
            ("allowgate_registries", snap.directory.len() as u64),
            ("allowgate_registries_paused", paused as u64),
            ("allowgate_blacklist_size", snap.blacklist.len() as u64),
        ])
    }
}

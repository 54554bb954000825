//! Allow-source capability and the in-memory reference registry.

use dashmap::DashSet;

use crate::address::Address;
use crate::error::{AllowGateError, Result};

/// An allow-source the proxy can consult.
///
/// Implementations must be cheap, deterministic and non-blocking: the proxy calls
/// `is_allowlist` inline while answering a decision.
pub trait AllowRegistry: Send + Sync {
    /// Stable key of this registry (unique within a proxy directory).
    fn address(&self) -> &Address;
    fn is_allowlist(&self, account: &Address) -> bool;
}

/// Owner-administered allowlist held in memory.
pub struct MemoryRegistry {
    address: Address,
    owner: Address,
    members: DashSet<Address>,
}

impl MemoryRegistry {
    pub fn new(address: Address, owner: Address) -> Self {
        Self {
            address,
            owner,
            members: DashSet::new(),
        }
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    fn only_owner(&self, caller: &Address) -> Result<()> {
        if caller != &self.owner {
            return Err(AllowGateError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    /// Allow `account`. Adding an existing member is a no-op.
    pub fn add_allowlist(&self, caller: &Address, account: Address) -> Result<()> {
        self.only_owner(caller)?;
        if self.members.insert(account.clone()) {
            tracing::info!(registry = %self.address, account = %account, "allowlist added");
        }
        Ok(())
    }

    /// Revoke `account`. Removing a non-member is a no-op.
    pub fn remove_allowlist(&self, caller: &Address, account: &Address) -> Result<()> {
        self.only_owner(caller)?;
        if self.members.remove(account).is_some() {
            tracing::info!(registry = %self.address, account = %account, "allowlist removed");
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl AllowRegistry for MemoryRegistry {
    fn address(&self) -> &Address {
        &self.address
    }

    fn is_allowlist(&self, account: &Address) -> bool {
        self.members.contains(account)
    }
}

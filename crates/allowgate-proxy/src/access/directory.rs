//! Registry directory: the proxy's set of registry handles with label/paused metadata.
//!
//! Entries live in a `Vec` (scan order) with an address index on the side.
//! Removal swaps the last entry into the freed slot, so scan order is only
//! insertion order until the first removal.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use allowgate_core::error::{AllowGateError, Result};
use allowgate_core::{Address, AllowRegistry};

/// One registered allow-source.
#[derive(Clone)]
pub struct RegistryEntry {
    pub label: String,
    pub source: Arc<dyn AllowRegistry>,
    pub paused: bool,
}

impl RegistryEntry {
    pub fn address(&self) -> &Address {
        self.source.address()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("label", &self.label)
            .field("address", self.address())
            .field("paused", &self.paused)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<RegistryEntry>,
    index: HashMap<Address, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: String, source: Arc<dyn AllowRegistry>) -> Result<()> {
        let address = source.address().clone();
        if self.index.contains_key(&address) {
            return Err(AllowGateError::ExistRegistry(address));
        }
        self.index.insert(address, self.entries.len());
        self.entries.push(RegistryEntry {
            label,
            source,
            paused: false,
        });
        Ok(())
    }

    /// Remove the entry for `address`, returning it.
    pub fn remove(&mut self, address: &Address) -> Result<RegistryEntry> {
        let pos = self
            .index
            .remove(address)
            .ok_or_else(|| AllowGateError::NotExistRegistry(address.clone()))?;

        let removed = self.entries.swap_remove(pos);
        // The former last entry now sits at `pos`.
        if let Some(moved) = self.entries.get(pos) {
            self.index.insert(moved.address().clone(), pos);
        }
        Ok(removed)
    }

    pub fn pause(&mut self, address: &Address) -> Result<()> {
        let entry = self.get_mut(address)?;
        if entry.paused {
            return Err(AllowGateError::PausedRegistry(address.clone()));
        }
        entry.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, address: &Address) -> Result<()> {
        let entry = self.get_mut(address)?;
        if !entry.paused {
            return Err(AllowGateError::UnpausedRegistry(address.clone()));
        }
        entry.paused = false;
        Ok(())
    }

    pub fn get(&self, address: &Address) -> Option<&RegistryEntry> {
        self.index.get(address).and_then(|&i| self.entries.get(i))
    }

    fn get_mut(&mut self, address: &Address) -> Result<&mut RegistryEntry> {
        let pos = *self
            .index
            .get(address)
            .ok_or_else(|| AllowGateError::NotExistRegistry(address.clone()))?;
        self.entries
            .get_mut(pos)
            .ok_or_else(|| AllowGateError::Internal(format!("directory index out of sync: {address}")))
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.entries.iter().map(|e| e.address().clone()).collect()
    }

    /// Entries in scan order, paused ones included.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entries consulted by a decision.
    pub fn active(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(|e| !e.paused)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use allowgate_core::MemoryRegistry;
    use allowgate_core::ErrorKind;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    fn reg(s: &str) -> Arc<dyn AllowRegistry> {
        Arc::new(MemoryRegistry::new(addr(s), addr("0xowner")))
    }

    #[test]
    fn duplicate_source_rejected_and_label_kept() {
        let mut d = Directory::new();
        d.add("Token X".into(), reg("0xr1")).unwrap();
        let err = d.add("Token Y".into(), reg("0xr1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateState);
        assert_eq!(d.get(&addr("0xr1")).unwrap().label, "Token X");
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn remove_compacts_and_reindexes() {
        let mut d = Directory::new();
        for r in ["0xr1", "0xr2", "0xr3"] {
            d.add(r.into(), reg(r)).unwrap();
        }
        d.remove(&addr("0xr1")).unwrap();

        let mut left = d.addresses();
        left.sort();
        assert_eq!(left, vec![addr("0xr2"), addr("0xr3")]);

        // the moved entry must still be addressable
        d.pause(&addr("0xr3")).unwrap();
        assert!(d.get(&addr("0xr3")).unwrap().paused);
        d.remove(&addr("0xr3")).unwrap();
        d.remove(&addr("0xr2")).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn remove_missing_fails() {
        let mut d = Directory::new();
        let err = d.remove(&addr("0xr1")).unwrap_err();
        assert_eq!(err, AllowGateError::NotExistRegistry(addr("0xr1")));
    }

    #[test]
    fn pause_transitions() {
        let mut d = Directory::new();
        d.add("x".into(), reg("0xr1")).unwrap();

        assert_eq!(d.unpause(&addr("0xr1")).unwrap_err().kind(), ErrorKind::InvalidTransition);
        d.pause(&addr("0xr1")).unwrap();
        assert_eq!(d.pause(&addr("0xr1")).unwrap_err(), AllowGateError::PausedRegistry(addr("0xr1")));
        assert_eq!(d.active().count(), 0);
        d.unpause(&addr("0xr1")).unwrap();
        assert_eq!(d.active().count(), 1);

        assert_eq!(d.pause(&addr("0xnope")).unwrap_err().kind(), ErrorKind::MissingState);
    }
}

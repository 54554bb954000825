use std::collections::HashSet;

use allowgate_core::error::{AllowGateError, Result};
use allowgate_core::Address;

/// Process-wide denylist. Consulted before any registry.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    accounts: HashSet<Address>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, account: Address) -> Result<()> {
        if self.accounts.contains(&account) {
            return Err(AllowGateError::AccountBlacklisted(account));
        }
        self.accounts.insert(account);
        Ok(())
    }

    pub fn remove(&mut self, account: &Address) -> Result<()> {
        if !self.accounts.remove(account) {
            return Err(AllowGateError::AccountNotBlacklisted(account.clone()));
        }
        Ok(())
    }

    pub fn contains(&self, account: &Address) -> bool {
        self.accounts.contains(account)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn set_semantics() {
        let a: Address = "0xa".parse().unwrap();
        let mut b = Blacklist::new();
        b.add(a.clone()).unwrap();
        assert_eq!(b.add(a.clone()).unwrap_err(), AllowGateError::AccountBlacklisted(a.clone()));
        assert_eq!(b.len(), 1);
        b.remove(&a).unwrap();
        assert_eq!(b.remove(&a).unwrap_err(), AllowGateError::AccountNotBlacklisted(a.clone()));
        assert!(!b.contains(&a));
    }
}

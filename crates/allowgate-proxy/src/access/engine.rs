use std::fmt;

use allowgate_core::Address;

use super::blacklist::Blacklist;
use super::directory::Directory;

/// Outcome of an aggregate allow-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// An active registry allows the account.
    Allowed { registry: Address },
    /// Vetoed by the blacklist; registries were not consulted.
    Blacklisted,
    /// No active registry allows the account.
    NoMatch,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed { .. })
    }

    /// Metric/log label.
    pub fn reason(&self) -> &'static str {
        match self {
            Decision::Allowed { .. } => "registry",
            Decision::Blacklisted => "blacklisted",
            Decision::NoMatch => "no_match",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allowed { registry } => write!(f, "allowed (registry {registry})"),
            Decision::Blacklisted => f.write_str("denied (blacklisted)"),
            Decision::NoMatch => f.write_str("denied (no matching registry)"),
        }
    }
}

/// Blacklist veto first, then the first active registry that allows wins.
pub fn decide(directory: &Directory, blacklist: &Blacklist, account: &Address) -> Decision {
    if blacklist.contains(account) {
        return Decision::Blacklisted;
    }

    directory
        .active()
        .find(|e| e.source.is_allowlist(account))
        .map(|e| Decision::Allowed {
            registry: e.address().clone(),
        })
        .unwrap_or(Decision::NoMatch)
}

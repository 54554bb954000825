//! MemoryRegistry behavior tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use allowgate_core::{Address, AllowRegistry, ErrorKind, MemoryRegistry};

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

fn registry() -> MemoryRegistry {
    MemoryRegistry::new(addr("0xregistry"), addr("0xowner"))
}

#[test]
fn add_allowlist_ok() {
    let r = registry();
    r.add_allowlist(&addr("0xowner"), addr("0x0")).unwrap();
    assert!(r.is_allowlist(&addr("0x0")));
    assert_eq!(r.len(), 1);
}

#[test]
fn add_allowlist_requires_owner() {
    let r = registry();
    let err = r.add_allowlist(&addr("0xother"), addr("0x0")).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(!r.is_allowlist(&addr("0x0")));
}

#[test]
fn remove_allowlist_ok() {
    let r = registry();
    r.add_allowlist(&addr("0xowner"), addr("0x0")).unwrap();
    r.remove_allowlist(&addr("0xowner"), &addr("0x0")).unwrap();
    assert!(!r.is_allowlist(&addr("0x0")));
    assert!(r.is_empty());
}

#[test]
fn remove_allowlist_requires_owner() {
    let r = registry();
    r.add_allowlist(&addr("0xowner"), addr("0x0")).unwrap();
    let err = r.remove_allowlist(&addr("0xother"), &addr("0x0")).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(r.is_allowlist(&addr("0x0")));
}

#[test]
fn membership_changes_are_idempotent() {
    let r = registry();
    r.add_allowlist(&addr("0xowner"), addr("0x0")).unwrap();
    r.add_allowlist(&addr("0xowner"), addr("0x0")).unwrap();
    assert_eq!(r.len(), 1);
    r.remove_allowlist(&addr("0xowner"), &addr("0x1")).unwrap();
    assert_eq!(r.len(), 1);
}

#[test]
fn unknown_account_not_allowed() {
    let r = registry();
    assert!(!r.is_allowlist(&addr("0x0")));
}

#[test]
fn address_serde_validates() {
    let ok: Address = serde_json::from_str("\"0xabc\"").unwrap();
    assert_eq!(ok.as_str(), "0xabc");
    assert!(serde_json::from_str::<Address>("\"\"").is_err());
    assert_eq!(serde_json::to_string(&ok).unwrap(), "\"0xabc\"");
}

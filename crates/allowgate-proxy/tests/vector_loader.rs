//! JSON scenario vector loader for proxy tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioVector {
    pub description: String,
    #[serde(default)]
    pub registries: Vec<RegistrySeed>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct RegistrySeed {
    pub address: String,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    pub op: String,
    /// Defaults to the proxy owner.
    #[serde(default)]
    pub caller: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub registry: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    /// Expected `ErrorKind::as_str()`.
    #[serde(default)]
    pub expect_error: Option<String>,
}

pub fn load(name: &str) -> ScenarioVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

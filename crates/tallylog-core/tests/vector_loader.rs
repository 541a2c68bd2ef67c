//! JSON test vector loader for coercion tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CoerceVector {
    pub description: String,
    pub input: serde_json::Value,
    pub expect: i64,
}

pub fn load(name: &str) -> Vec<CoerceVector> {
    let s = fs::read_to_string(format!("tests/vectors/{name}"))
        .unwrap_or_else(|e| panic!("read vector file {name}: {e}"));
    serde_json::from_str(&s).expect("invalid vector json")
}

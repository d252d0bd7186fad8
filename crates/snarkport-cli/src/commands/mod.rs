// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod check;
pub mod compress;
pub mod inspect;
pub mod prove;

use std::path::Path;

use anyhow::{Context, Result};

use crate::output;

/// Read and parse a JSON document, with the path in any error.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        output::fail_with_hint(
            &format!("cannot read {}: {e}", path.display()),
            "pass the files written by `snarkport prove` or by snarkjs",
        )
    })?;
    serde_json::from_str(&data).with_context(|| format!("{} is not valid JSON", path.display()))
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use snarkport_export::{Decoder, DocumentKind, ExportConfig};

use super::read_json;
use crate::output;

pub fn run(config: &ExportConfig, file: &Path) -> Result<()> {
    let value = read_json(file)?;
    let Some(kind) = DocumentKind::detect(&value) else {
        return Err(output::fail_with_hint(
            &format!("{} is not a snarkjs groth16 document", file.display()),
            "expected proof.json, verification_key.json or public.json",
        ));
    };
    let decoder = Decoder::from(config);

    let summary = match kind {
        DocumentKind::Proof => {
            let proof = decoder.decode_proof(&value)?;
            serde_json::json!({
                "kind": kind.file_name(),
                "curve": proof.curve.snarkjs_name(),
                "pi_c_is_identity": proof.c.is_infinity(),
                "embedded_public_signals": value.get("public_signals").is_some(),
            })
        }
        DocumentKind::VerifyingKey => {
            let vk = decoder.decode_verifying_key(&value)?;
            serde_json::json!({
                "kind": kind.file_name(),
                "curve": vk.curve.snarkjs_name(),
                "n_public": vk.n_public,
                "ic": vk.ic.len(),
                "has_alphabeta": vk.alpha_beta.is_some(),
            })
        }
        DocumentKind::PublicSignals => {
            // no curve tag in public.json; range-check against the configured curve
            let inputs = decoder.decode_public_signals(&value, config.curve)?;
            serde_json::json!({
                "kind": kind.file_name(),
                "curve": config.curve.snarkjs_name(),
                "count": inputs.len(),
            })
        }
    };

    if output::is_json() {
        return output::json_output(summary);
    }
    if let serde_json::Value::Object(fields) = summary {
        for (key, val) in fields {
            let text = match val {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            output::label(&key, &text);
        }
    }
    Ok(())
}

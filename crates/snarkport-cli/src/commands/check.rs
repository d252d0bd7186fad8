// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use snarkport_circuit::verify_raw;
use snarkport_export::{Decoder, ExportConfig};
use snarkport_types::CurveId;

use super::read_json;
use crate::output;

pub fn run(config: &ExportConfig, proof: &Path, vk: &Path, public: &Path) -> Result<()> {
    let decoder = Decoder::from(config);

    let proof = decoder.decode_proof(&read_json(proof)?)?;
    let vk = decoder.decode_verifying_key(&read_json(vk)?)?;
    if vk.curve != proof.curve {
        return Err(output::fail_with_hint(
            &format!("proof is on {}, verifying key on {}", proof.curve, vk.curve),
            "both documents must come from the same setup",
        ));
    }
    let inputs = decoder.decode_public_signals(&read_json(public)?, proof.curve)?;
    if inputs.len() != vk.n_public {
        return Err(output::fail_with_hint(
            &format!("{} public signals, verifying key expects {}", inputs.len(), vk.n_public),
            "public.json must come from the same proving run as proof.json",
        ));
    }

    let sp = output::spinner("verifying...");
    let valid = match proof.curve {
        CurveId::Bn254 => verify_raw::<Bn254>(&proof, &vk, &inputs)?,
        CurveId::Bls12_381 => verify_raw::<Bls12_381>(&proof, &vk, &inputs)?,
    };
    sp.finish_and_clear();
    tracing::info!(curve = %proof.curve, valid, "checked proof");

    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": proof.curve.snarkjs_name(),
            "n_public": vk.n_public,
            "valid": valid,
        }))?;
        return Ok(());
    }
    if !valid {
        return Err(output::fail_with_hint(
            "proof does not verify",
            "check that the verifying key matches the proving key used",
        ));
    }
    output::success("proof verifies");
    output::label("curve", proof.curve.snarkjs_name());
    output::label("public inputs", &vk.n_public.to_string());
    Ok(())
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use ark_relations::r1cs::ConstraintSynthesizer;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use snarkport_circuit::{
    constraint_count, prove, raw_proof, raw_public_inputs, raw_verifying_key, setup, verify,
    CubicCircuit, MulCircuit, SnarkjsCurve,
};
use snarkport_export::{sink, ExportBundle, ExportConfig, Exporter};
use snarkport_types::CurveId;

use crate::output;
use crate::CircuitKind;

pub fn run(
    config: &ExportConfig,
    circuit: CircuitKind,
    out: &Path,
    x: u64,
    y: u64,
    seed: Option<u64>,
) -> Result<()> {
    if seed.is_some() {
        output::warn("fixed seed: setup randomness is reproducible, do not use these keys in production");
    }
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(curve = %config.curve, ?circuit, seed, "proving demo circuit");
    match config.curve {
        CurveId::Bn254 => run_on::<Bn254>(config, circuit, out, x, y, seed),
        CurveId::Bls12_381 => run_on::<Bls12_381>(config, circuit, out, x, y, seed),
    }
}

fn run_on<E: SnarkjsCurve>(
    config: &ExportConfig,
    circuit: CircuitKind,
    out: &Path,
    x: u64,
    y: u64,
    seed: u64,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (x, y) = (E::ScalarField::from(x), E::ScalarField::from(y));
    match circuit {
        CircuitKind::Cubic => {
            let assigned = CubicCircuit::with_witness(x);
            let inputs = assigned.public_inputs();
            prove_and_export::<E, _>(config, CubicCircuit::empty(), assigned, inputs, out, &mut rng)
        }
        CircuitKind::Mul => {
            let assigned = MulCircuit::with_witness(x, y);
            let inputs = assigned.public_inputs();
            prove_and_export::<E, _>(config, MulCircuit::empty(), assigned, inputs, out, &mut rng)
        }
    }
}

fn prove_and_export<E, C>(
    config: &ExportConfig,
    empty: C,
    assigned: C,
    inputs: Vec<E::ScalarField>,
    out: &Path,
    rng: &mut StdRng,
) -> Result<()>
where
    E: SnarkjsCurve,
    C: ConstraintSynthesizer<E::ScalarField> + Clone,
{
    let constraints = constraint_count::<E, _>(empty.clone())?;

    let sp = output::spinner(&format!("running setup ({constraints} constraints)..."));
    let (pk, vk) = setup::<E, _, _>(empty, rng)?;
    sp.finish_and_clear();

    let sp = output::spinner("generating proof...");
    let proof = prove(&pk, assigned, rng)?;
    sp.finish_and_clear();

    if !verify(&vk, &proof, &inputs)? {
        return Err(anyhow!("generated proof does not verify against its own key"));
    }

    let exporter = Exporter::new(config.clone());
    let proof = raw_proof(&proof);
    let vk = raw_verifying_key(&vk, inputs.len());
    let inputs = raw_public_inputs::<E>(&inputs);

    let (proof_result, vk_result) = std::thread::scope(|s| {
        let proof_job = s.spawn(|| exporter.export_proof(&proof, &inputs));
        let vk_job = s.spawn(|| exporter.export_verifying_key(&vk));
        (proof_job.join(), vk_job.join())
    });
    let (proof, public_signals) = proof_result.map_err(|_| anyhow!("proof export panicked"))??;
    let verifying_key = vk_result.map_err(|_| anyhow!("verifying key export panicked"))??;
    let bundle = ExportBundle { proof, verifying_key, public_signals };

    std::fs::create_dir_all(out).with_context(|| format!("cannot create {}", out.display()))?;
    let paths = sink::write_bundle(out, &bundle, config.pretty)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": config.curve.snarkjs_name(),
            "constraints": constraints,
            "public_signals": bundle.public_signals,
            "proof": paths.proof,
            "verification_key": paths.verifying_key,
            "public": paths.public_signals,
        }))?;
    } else {
        output::success("proof exported");
        output::label("curve", config.curve.snarkjs_name());
        output::label("public", &bundle.public_signals.0.join(", "));
        output::label("proof", &paths.proof.display().to_string());
        output::label("verification_key", &paths.verifying_key.display().to_string());
        output::label("public.json", &paths.public_signals.display().to_string());
    }
    Ok(())
}

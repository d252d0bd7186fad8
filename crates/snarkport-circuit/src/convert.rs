// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! arkworks Groth16 artifacts ↔ the raw model consumed by the exporter.

use ark_ec::pairing::Pairing;
use ark_groth16::{Proof, VerifyingKey};
use snarkport_types::{PublicInputs, RawProof, RawVerifyingKey};

use crate::curve::SnarkjsCurve;
use crate::error::{CircuitError, CircuitResult};

pub fn raw_proof<E: SnarkjsCurve>(proof: &Proof<E>) -> RawProof {
    RawProof {
        curve: E::CURVE,
        a: E::g1_to_raw(&proof.a),
        b: E::g2_to_raw(&proof.b),
        c: E::g1_to_raw(&proof.c),
    }
}

/// Convert a verifying key, declaring `n_public` public inputs.
///
/// `n_public` is taken as given and not derived from `gamma_abc_g1`, so the
/// exporter can catch a key built for a different circuit.
pub fn raw_verifying_key<E: SnarkjsCurve>(vk: &VerifyingKey<E>, n_public: usize) -> RawVerifyingKey {
    let alpha_beta = E::pairing(vk.alpha_g1, vk.beta_g2);
    RawVerifyingKey {
        curve: E::CURVE,
        n_public,
        alpha: E::g1_to_raw(&vk.alpha_g1),
        beta: E::g2_to_raw(&vk.beta_g2),
        gamma: E::g2_to_raw(&vk.gamma_g2),
        delta: E::g2_to_raw(&vk.delta_g2),
        ic: vk.gamma_abc_g1.iter().map(E::g1_to_raw).collect(),
        alpha_beta: Some(E::target_to_raw(&alpha_beta.0)),
    }
}

pub fn raw_public_inputs<E: SnarkjsCurve>(inputs: &[E::ScalarField]) -> PublicInputs {
    inputs.iter().map(E::scalar_to_raw).collect()
}

pub fn ark_proof<E: SnarkjsCurve>(raw: &RawProof) -> CircuitResult<Proof<E>> {
    CircuitError::check_curve(E::CURVE, raw.curve)?;
    Ok(Proof {
        a: E::g1_from_raw(&raw.a)?,
        b: E::g2_from_raw(&raw.b)?,
        c: E::g1_from_raw(&raw.c)?,
    })
}

pub fn ark_verifying_key<E: SnarkjsCurve>(raw: &RawVerifyingKey) -> CircuitResult<VerifyingKey<E>> {
    CircuitError::check_curve(E::CURVE, raw.curve)?;
    Ok(VerifyingKey {
        alpha_g1: E::g1_from_raw(&raw.alpha)?,
        beta_g2: E::g2_from_raw(&raw.beta)?,
        gamma_g2: E::g2_from_raw(&raw.gamma)?,
        delta_g2: E::g2_from_raw(&raw.delta)?,
        gamma_abc_g1: raw.ic.iter().map(E::g1_from_raw).collect::<CircuitResult<_>>()?,
    })
}

pub fn ark_public_inputs<E: SnarkjsCurve>(raw: &PublicInputs) -> Vec<E::ScalarField> {
    raw.iter().map(E::scalar_from_raw).collect()
}

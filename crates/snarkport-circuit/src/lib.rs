// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks Groth16 backend for snarkport.
//!
//! Runs setup, proving and verification over any [`SnarkjsCurve`], converts
//! the resulting artifacts into the raw model and back, and ships two small
//! demo circuits.

pub mod convert;
pub mod cubic;
pub mod curve;
pub mod error;
pub mod mul;

use ark_groth16::{Groth16, Proof, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, OptimizationGoal, SynthesisMode,
};
use ark_snark::{CircuitSpecificSetupSNARK, SNARK};
use ark_std::rand::{CryptoRng, RngCore};
use snarkport_export::{EncodingResult, ExportBundle, Exporter};
use snarkport_types::{PublicInputs, RawProof, RawVerifyingKey};
use tracing::debug;

pub use convert::{
    ark_proof, ark_public_inputs, ark_verifying_key, raw_proof, raw_public_inputs,
    raw_verifying_key,
};
pub use cubic::CubicCircuit;
pub use curve::SnarkjsCurve;
pub use error::{CircuitError, CircuitResult};
pub use mul::MulCircuit;

/// Run circuit-specific Groth16 setup
pub fn setup<E, C, R>(circuit: C, rng: &mut R) -> CircuitResult<(ProvingKey<E>, VerifyingKey<E>)>
where
    E: SnarkjsCurve,
    C: ConstraintSynthesizer<E::ScalarField>,
    R: RngCore + CryptoRng,
{
    let keys = Groth16::<E>::circuit_specific_setup(circuit, rng)?;
    debug!(curve = %E::CURVE, ic = keys.1.gamma_abc_g1.len(), "groth16 setup");
    Ok(keys)
}

/// Generate a Groth16 proof for a fully assigned circuit
pub fn prove<E, C, R>(pk: &ProvingKey<E>, circuit: C, rng: &mut R) -> CircuitResult<Proof<E>>
where
    E: SnarkjsCurve,
    C: ConstraintSynthesizer<E::ScalarField>,
    R: RngCore + CryptoRng,
{
    Ok(Groth16::<E>::prove(pk, circuit, rng)?)
}

/// Verify a proof off-chain
pub fn verify<E: SnarkjsCurve>(
    vk: &VerifyingKey<E>,
    proof: &Proof<E>,
    public_inputs: &[E::ScalarField],
) -> CircuitResult<bool> {
    let pvk = Groth16::<E>::process_vk(vk)?;
    Ok(Groth16::<E>::verify_with_processed_vk(&pvk, public_inputs, proof)?)
}

/// Verify artifacts held in the raw model, e.g. decoded from snarkjs JSON.
///
/// A key whose IC length does not match the inputs verifies as `false`;
/// points off the curve or outside the prime-order subgroup are an error.
pub fn verify_raw<E: SnarkjsCurve>(
    proof: &RawProof,
    vk: &RawVerifyingKey,
    public_inputs: &PublicInputs,
) -> CircuitResult<bool> {
    let proof = ark_proof::<E>(proof)?;
    let vk = ark_verifying_key::<E>(vk)?;
    if vk.gamma_abc_g1.len() != public_inputs.len() + 1 {
        return Ok(false);
    }
    verify(&vk, &proof, &ark_public_inputs::<E>(public_inputs))
}

/// Synthesize a circuit without a witness and finalize its constraint system
pub fn compile<E, C>(circuit: C) -> CircuitResult<ConstraintSystemRef<E::ScalarField>>
where
    E: SnarkjsCurve,
    C: ConstraintSynthesizer<E::ScalarField>,
{
    let cs = ConstraintSystem::<E::ScalarField>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(SynthesisMode::Setup);
    circuit.generate_constraints(cs.clone())?;
    cs.finalize();
    Ok(cs)
}

/// Count constraints of a circuit
pub fn constraint_count<E, C>(circuit: C) -> CircuitResult<usize>
where
    E: SnarkjsCurve,
    C: ConstraintSynthesizer<E::ScalarField>,
{
    Ok(compile::<E, _>(circuit)?.num_constraints())
}

/// Convert arkworks artifacts and hand them to the exporter in one step.
pub fn export_bundle<E: SnarkjsCurve>(
    exporter: &Exporter,
    proof: &Proof<E>,
    vk: &VerifyingKey<E>,
    public_inputs: &[E::ScalarField],
) -> EncodingResult<ExportBundle> {
    exporter.export_bundle(
        &raw_proof(proof),
        &raw_verifying_key(vk, public_inputs.len()),
        &raw_public_inputs::<E>(public_inputs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_bn254::Bn254;
    use ark_ff::PrimeField;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use snarkport_types::{BigUint, CurveId};

    fn roundtrip<E: SnarkjsCurve>() {
        let mut rng = StdRng::seed_from_u64(42);
        let (pk, vk) = setup::<E, _, _>(CubicCircuit::<E::ScalarField>::empty(), &mut rng).unwrap();

        let circuit = CubicCircuit::with_witness(E::ScalarField::from(3u64));
        let inputs = circuit.public_inputs();
        let proof = prove(&pk, circuit, &mut rng).unwrap();

        assert!(verify(&vk, &proof, &inputs).unwrap());
        assert!(!verify(&vk, &proof, &[E::ScalarField::from(36u64)]).unwrap());
    }

    #[test]
    fn cubic_bls12_381() {
        roundtrip::<Bls12_381>();
    }

    #[test]
    fn cubic_bn254() {
        roundtrip::<Bn254>();
    }

    #[test]
    fn raw_model_verifies() {
        let mut rng = StdRng::seed_from_u64(42);
        let (pk, vk) = setup::<Bn254, _, _>(MulCircuit::<ark_bn254::Fr>::empty(), &mut rng).unwrap();
        let circuit = MulCircuit::with_witness(ark_bn254::Fr::from(6u64), ark_bn254::Fr::from(7u64));
        let inputs = circuit.public_inputs();
        let proof = prove(&pk, circuit, &mut rng).unwrap();

        let raw_vk = raw_verifying_key(&vk, inputs.len());
        let raw_inputs = raw_public_inputs::<Bn254>(&inputs);
        assert_eq!(raw_inputs.0, vec![BigUint::from(42u8)]);
        assert!(verify_raw::<Bn254>(&raw_proof(&proof), &raw_vk, &raw_inputs).unwrap());

        let extra = PublicInputs(vec![BigUint::from(42u8), BigUint::from(1u8)]);
        assert!(!verify_raw::<Bn254>(&raw_proof(&proof), &raw_vk, &extra).unwrap());
    }

    #[test]
    fn raw_points_validated_before_pairing() {
        let mut rng = StdRng::seed_from_u64(11);
        let (pk, vk) = setup::<Bn254, _, _>(CubicCircuit::<ark_bn254::Fr>::empty(), &mut rng).unwrap();
        let proof = prove(&pk, CubicCircuit::with_witness(ark_bn254::Fr::from(3u64)), &mut rng).unwrap();

        let mut forged = raw_proof(&proof);
        forged.a = snarkport_types::G1Point::affine(BigUint::from(1u8), BigUint::from(3u8));
        let inputs = PublicInputs(vec![BigUint::from(35u8)]);
        let err = verify_raw::<Bn254>(&forged, &raw_verifying_key(&vk, 1), &inputs).unwrap_err();
        assert!(matches!(err, CircuitError::InvalidPoint { group: "G1", .. }));
    }

    #[test]
    fn raw_curve_mismatch() {
        let mut rng = StdRng::seed_from_u64(7);
        let (pk, _) = setup::<Bn254, _, _>(CubicCircuit::<ark_bn254::Fr>::empty(), &mut rng).unwrap();
        let proof = prove(&pk, CubicCircuit::with_witness(ark_bn254::Fr::from(3u64)), &mut rng).unwrap();
        let err = ark_proof::<Bls12_381>(&raw_proof(&proof)).unwrap_err();
        assert!(matches!(err, CircuitError::CurveMismatch { .. }));
    }

    #[test]
    fn compiled_system_has_one_public_input() {
        let cs = compile::<Bn254, _>(CubicCircuit::<ark_bn254::Fr>::empty()).unwrap();
        // instance variables include the constant one
        assert_eq!(cs.num_instance_variables(), 2);
        assert!(cs.num_witness_variables() > 0);
    }

    #[test]
    fn constraint_counts() {
        let cubic = constraint_count::<Bls12_381, _>(CubicCircuit::<ark_bls12_381::Fr>::empty()).unwrap();
        let mul = constraint_count::<Bls12_381, _>(MulCircuit::<ark_bls12_381::Fr>::empty()).unwrap();
        assert!(cubic >= 2, "cubic needs two multiplications, got {cubic}");
        assert!(mul >= 1);
        println!("cubic: {cubic} constraints, mul: {mul} constraints");
    }

    #[test]
    fn scalar_modulus_matches_params() {
        let r: BigUint = ark_bn254::Fr::MODULUS.into();
        assert_eq!(r, CurveId::Bn254.params().scalar_modulus);
        let r: BigUint = ark_bls12_381::Fr::MODULUS.into();
        assert_eq!(r, CurveId::Bls12_381.params().scalar_modulus);
    }
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_ff::PrimeField;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar, fields::FieldVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// "I know `x` such that `x^3 + x + 5 == y`"
#[derive(Clone)]
pub struct CubicCircuit<F: PrimeField> {
    pub x: Option<F>,
    pub y: Option<F>,
}

impl<F: PrimeField> CubicCircuit<F> {
    pub const NUM_PUBLIC: usize = 1;

    pub fn empty() -> Self {
        Self { x: None, y: None }
    }

    /// Assignment for witness `x`, with `y` computed natively.
    pub fn with_witness(x: F) -> Self {
        Self { x: Some(x), y: Some(Self::evaluate(x)) }
    }

    pub fn evaluate(x: F) -> F {
        x * x * x + x + F::from(5u64)
    }

    pub fn public_inputs(&self) -> Vec<F> {
        self.y.into_iter().collect()
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for CubicCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        // Public input: y
        let y = FpVar::new_input(cs.clone(), || self.y.ok_or(SynthesisError::AssignmentMissing))?;

        // Witness: x
        let x = FpVar::new_witness(cs, || self.x.ok_or(SynthesisError::AssignmentMissing))?;

        let x3 = &x * &x * &x;
        let lhs = x3 + &x + FpVar::constant(F::from(5u64));
        lhs.enforce_equal(&y)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_relations::r1cs::ConstraintSystem;

    #[test]
    fn three_gives_thirty_five() {
        assert_eq!(CubicCircuit::<Fr>::evaluate(Fr::from(3u64)), Fr::from(35u64));
    }

    #[test]
    fn satisfied_by_valid_witness() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        CubicCircuit::with_witness(Fr::from(3u64)).generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
        assert_eq!(cs.num_instance_variables(), 1 + CubicCircuit::<Fr>::NUM_PUBLIC);
    }

    #[test]
    fn wrong_output_unsatisfied() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let circuit = CubicCircuit { x: Some(Fr::from(3u64)), y: Some(Fr::from(36u64)) };
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap(), "should fail: y != x^3 + x + 5");
    }
}

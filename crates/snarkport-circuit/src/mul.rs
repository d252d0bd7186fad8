// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_ff::PrimeField;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// "I know `x, y` such that `x * y == z`"
#[derive(Clone)]
pub struct MulCircuit<F: PrimeField> {
    pub x: Option<F>,
    pub y: Option<F>,
    pub z: Option<F>,
}

impl<F: PrimeField> MulCircuit<F> {
    pub const NUM_PUBLIC: usize = 1;

    pub fn empty() -> Self {
        Self { x: None, y: None, z: None }
    }

    pub fn with_witness(x: F, y: F) -> Self {
        Self { x: Some(x), y: Some(y), z: Some(x * y) }
    }

    pub fn public_inputs(&self) -> Vec<F> {
        self.z.into_iter().collect()
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for MulCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let z = FpVar::new_input(cs.clone(), || self.z.ok_or(SynthesisError::AssignmentMissing))?;
        let x = FpVar::new_witness(cs.clone(), || self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let y = FpVar::new_witness(cs, || self.y.ok_or(SynthesisError::AssignmentMissing))?;
        (&x * &y).enforce_equal(&z)?;
        Ok(())
    }
}

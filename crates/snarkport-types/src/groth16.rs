// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Source-neutral Groth16 artifacts.
//!
//! Whatever produced the proof (arkworks, gnark, a fixture) hands the
//! exporter these plain values; nothing here knows about a proving library.

use num_bigint::BigUint;

use crate::curve::CurveId;
use crate::field::Fp12;
use crate::point::{G1Point, G2Point};

pub const PROTOCOL_GROTH16: &str = "groth16";

/// Groth16 proof: `A ∈ G1`, `B ∈ G2`, `C ∈ G1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawProof {
    pub curve: CurveId,
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

/// Groth16 verifying key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawVerifyingKey {
    pub curve: CurveId,
    /// Declared number of public inputs.
    pub n_public: usize,
    pub alpha: G1Point,
    pub beta: G2Point,
    pub gamma: G2Point,
    pub delta: G2Point,
    /// `ic[0]` is the constant term, `ic[1..]` one per public input.
    pub ic: Vec<G1Point>,
    /// Precomputed `e(alpha, beta)`, when the source provides it.
    pub alpha_beta: Option<Fp12>,
}

/// Public inputs in circuit declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicInputs(pub Vec<BigUint>);

impl PublicInputs {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BigUint> {
        self.0.iter()
    }
}

impl From<Vec<BigUint>> for PublicInputs {
    fn from(values: Vec<BigUint>) -> Self {
        Self(values)
    }
}

impl FromIterator<BigUint> for PublicInputs {
    fn from_iter<I: IntoIterator<Item = BigUint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

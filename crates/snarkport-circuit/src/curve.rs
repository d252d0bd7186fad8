// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks pairings that have a snarkjs curve name, and how their field
//! elements and points map onto the raw model.

use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use num_bigint::BigUint;
use snarkport_types::{CurveId, Fp12, Fp2, G1Point, G2Point};

use crate::error::{CircuitError, CircuitResult};

/// A pairing-friendly curve the exporter knows how to name.
///
/// arkworks stores Fp2 as `c0 + c1 * u`, the same limb order snarkjs
/// expects, so conversions here pass limbs straight through.
///
/// `*_from_raw` accept only points on the curve and in the prime-order
/// subgroup; decoded documents reach the pairing through them.
pub trait SnarkjsCurve: Pairing {
    const CURVE: CurveId;

    fn g1_to_raw(point: &Self::G1Affine) -> G1Point;
    fn g2_to_raw(point: &Self::G2Affine) -> G2Point;
    fn g1_from_raw(point: &G1Point) -> CircuitResult<Self::G1Affine>;
    fn g2_from_raw(point: &G2Point) -> CircuitResult<Self::G2Affine>;
    fn target_to_raw(value: &Self::TargetField) -> Fp12;

    fn scalar_to_raw(value: &Self::ScalarField) -> BigUint {
        value.into_bigint().into()
    }

    /// Reduces modulo `r`.
    fn scalar_from_raw(value: &BigUint) -> Self::ScalarField {
        Self::ScalarField::from(value.clone())
    }
}

fn check_point(group: &'static str, on_curve: bool, in_subgroup: bool) -> CircuitResult<()> {
    if !on_curve {
        return Err(CircuitError::InvalidPoint { group, reason: "not on the curve" });
    }
    if !in_subgroup {
        return Err(CircuitError::InvalidPoint { group, reason: "outside the prime-order subgroup" });
    }
    Ok(())
}

macro_rules! impl_snarkjs_curve {
    ($engine:ty, $id:expr, $module:ident) => {
        impl SnarkjsCurve for $engine {
            const CURVE: CurveId = $id;

            fn g1_to_raw(point: &$module::G1Affine) -> G1Point {
                if point.infinity {
                    G1Point::Infinity
                } else {
                    G1Point::affine(point.x.into_bigint().into(), point.y.into_bigint().into())
                }
            }

            fn g2_to_raw(point: &$module::G2Affine) -> G2Point {
                if point.infinity {
                    G2Point::Infinity
                } else {
                    let fp2 = |e: &$module::Fq2| {
                        Fp2::new(e.c0.into_bigint().into(), e.c1.into_bigint().into())
                    };
                    G2Point::affine(fp2(&point.x), fp2(&point.y))
                }
            }

            fn g1_from_raw(point: &G1Point) -> CircuitResult<$module::G1Affine> {
                let affine = match point {
                    G1Point::Infinity => $module::G1Affine::identity(),
                    G1Point::Affine { x, y } => $module::G1Affine::new_unchecked(
                        $module::Fq::from(x.clone()),
                        $module::Fq::from(y.clone()),
                    ),
                };
                check_point("G1", affine.is_on_curve(), affine.is_in_correct_subgroup_assuming_on_curve())?;
                Ok(affine)
            }

            fn g2_from_raw(point: &G2Point) -> CircuitResult<$module::G2Affine> {
                let fp2 = |e: &Fp2| {
                    $module::Fq2::new($module::Fq::from(e.c0.clone()), $module::Fq::from(e.c1.clone()))
                };
                let affine = match point {
                    G2Point::Infinity => $module::G2Affine::identity(),
                    G2Point::Affine { x, y } => $module::G2Affine::new_unchecked(fp2(x), fp2(y)),
                };
                check_point("G2", affine.is_on_curve(), affine.is_in_correct_subgroup_assuming_on_curve())?;
                Ok(affine)
            }

            fn target_to_raw(value: &$module::Fq12) -> Fp12 {
                let fp2 = |e: &$module::Fq2| {
                    Fp2::new(e.c0.into_bigint().into(), e.c1.into_bigint().into())
                };
                Fp12 {
                    c0: [fp2(&value.c0.c0), fp2(&value.c0.c1), fp2(&value.c0.c2)],
                    c1: [fp2(&value.c1.c0), fp2(&value.c1.c1), fp2(&value.c1.c2)],
                }
            }
        }
    };
}

impl_snarkjs_curve!(ark_bn254::Bn254, CurveId::Bn254, ark_bn254);
impl_snarkjs_curve!(ark_bls12_381::Bls12_381, CurveId::Bls12_381, ark_bls12_381);

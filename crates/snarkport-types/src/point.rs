// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Affine curve points as raw big integers.
//!
//! G2 points are always held with limbs in `c0, c1` order; sources that
//! store Fp2 limbs the other way round go through [`G2Point::from_limbs`]
//! with [`LimbOrder::C1C0`].

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::curve::CurveParams;
use crate::field::{fp_add, fp_mul, Fp2};

/// Order in which the two limbs of an Fp2 coordinate appear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimbOrder {
    /// `[c0, c1]` (arkworks, gnark, snarkjs JSON).
    #[default]
    C0C1,
    /// `[c1, c0]` (EVM precompiles, zcash compressed encoding).
    C1C0,
}

impl LimbOrder {
    /// Arrange the limbs of `e` in this order.
    pub fn arrange<'a>(self, e: &'a Fp2) -> [&'a BigUint; 2] {
        match self {
            LimbOrder::C0C1 => [&e.c0, &e.c1],
            LimbOrder::C1C0 => [&e.c1, &e.c0],
        }
    }

    /// Inverse of [`arrange`](Self::arrange): read limbs given in this order.
    pub fn read(self, limbs: [BigUint; 2]) -> Fp2 {
        let [first, second] = limbs;
        match self {
            LimbOrder::C0C1 => Fp2::new(first, second),
            LimbOrder::C1C0 => Fp2::new(second, first),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum G1Point {
    Affine { x: BigUint, y: BigUint },
    Infinity,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum G2Point {
    Affine { x: Fp2, y: Fp2 },
    Infinity,
}

impl G1Point {
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        G1Point::Affine { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, G1Point::Infinity)
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &BigUint> {
        let coords = match self {
            G1Point::Affine { x, y } => vec![x, y],
            G1Point::Infinity => vec![],
        };
        coords.into_iter()
    }

    /// `y^2 == x^3 + b` over Fp. The identity is on every curve.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        match self {
            G1Point::Infinity => true,
            G1Point::Affine { x, y } => {
                let p = &params.base_modulus;
                let lhs = fp_mul(y, y, p);
                let x3 = fp_mul(&fp_mul(x, x, p), x, p);
                lhs == fp_add(&x3, &params.g1_b, p)
            }
        }
    }
}

impl G2Point {
    pub fn affine(x: Fp2, y: Fp2) -> Self {
        G2Point::Affine { x, y }
    }

    /// Build from limbs laid out in `order`, transposing to `c0, c1`.
    pub fn from_limbs(x: [BigUint; 2], y: [BigUint; 2], order: LimbOrder) -> Self {
        G2Point::Affine { x: order.read(x), y: order.read(y) }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, G2Point::Infinity)
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &BigUint> {
        let coords = match self {
            G2Point::Affine { x, y } => vec![&x.c0, &x.c1, &y.c0, &y.c1],
            G2Point::Infinity => vec![],
        };
        coords.into_iter()
    }

    /// `y^2 == x^3 + b'` over Fp2. The identity is on every curve.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        match self {
            G2Point::Infinity => true,
            G2Point::Affine { x, y } => {
                let p = &params.base_modulus;
                let lhs = y.square(p);
                let x3 = x.square(p).mul(x, p);
                lhs == x3.add(&params.g2_b, p)
            }
        }
    }
}

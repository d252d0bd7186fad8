// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pairing-friendly curves understood by the snarkjs interchange format.
//!
//! Curve choice is an explicit value threaded through construction; the
//! libraries never assume a default curve.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::field::Fp2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    #[serde(rename = "bn128", alias = "bn254")]
    Bn254,
    #[serde(rename = "bls12381", alias = "bls12-381", alias = "bls12_381")]
    Bls12_381,
}

/// Field moduli and curve-equation coefficients for a [`CurveId`].
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Base field modulus `p` (coordinates of G1 and limbs of G2).
    pub base_modulus: BigUint,
    /// Scalar field modulus `r` (public inputs).
    pub scalar_modulus: BigUint,
    /// `b` in `y^2 = x^3 + b` over Fp.
    pub g1_b: BigUint,
    /// `b'` in `y^2 = x^3 + b'` over Fp2 (the sextic twist).
    pub g2_b: Fp2,
    /// Byte length of a serialized base-field element.
    pub base_field_bytes: usize,
}

impl CurveId {
    pub const ALL: [CurveId; 2] = [CurveId::Bn254, CurveId::Bls12_381];

    /// Curve name as written in the `curve` field of snarkjs documents.
    pub fn snarkjs_name(self) -> &'static str {
        match self {
            CurveId::Bn254 => "bn128",
            CurveId::Bls12_381 => "bls12381",
        }
    }

    pub fn params(self) -> &'static CurveParams {
        static BN254: OnceLock<CurveParams> = OnceLock::new();
        static BLS12_381: OnceLock<CurveParams> = OnceLock::new();
        match self {
            CurveId::Bn254 => BN254.get_or_init(bn254_params),
            CurveId::Bls12_381 => BLS12_381.get_or_init(bls12_381_params),
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.snarkjs_name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown curve `{0}` (expected bn254/bn128 or bls12-381)")]
pub struct UnknownCurve(pub String);

impl FromStr for CurveId {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bn254" | "bn128" => Ok(CurveId::Bn254),
            "bls12-381" | "bls12_381" | "bls12381" => Ok(CurveId::Bls12_381),
            _ => Err(UnknownCurve(s.to_string())),
        }
    }
}

fn dec(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).expect("curve constant is a decimal literal")
}

fn bn254_params() -> CurveParams {
    CurveParams {
        base_modulus: dec(
            "21888242871839275222246405745257275088696311157297823662689037894645226208583",
        ),
        scalar_modulus: dec(
            "21888242871839275222246405745257275088548364400416034343698204186575808495617",
        ),
        g1_b: BigUint::from(3u8),
        // 3 / (9 + u)
        g2_b: Fp2::new(
            dec("19485874751759354771024239261021720505790618469301721065564631296452457478373"),
            dec("266929791119991161246907387137283842545076965332900288569378510910307636690"),
        ),
        base_field_bytes: 32,
    }
}

fn bls12_381_params() -> CurveParams {
    CurveParams {
        base_modulus: dec(
            "4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787",
        ),
        scalar_modulus: dec(
            "52435875175126190479447740508185965837690552500527637822603658699938581184513",
        ),
        g1_b: BigUint::from(4u8),
        // 4 (1 + u)
        g2_b: Fp2::new(BigUint::from(4u8), BigUint::from(4u8)),
        base_field_bytes: 48,
    }
}

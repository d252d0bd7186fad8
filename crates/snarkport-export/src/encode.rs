// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Field-element and curve-point encoding for snarkjs documents.
//!
//! # Conventions
//!
//! - **Field elements**: unsigned base-10 strings, no sign, no leading zeros.
//!   JSON numbers would lose precision past 2^53 in the JavaScript consumer.
//! - **G1**: projective triple `[x, y, "1"]`; identity is `["0", "1", "0"]`.
//! - **G2**: `[[x0, x1], [y0, y1], ["1", "0"]]`; identity is
//!   `[["0", "0"], ["1", "0"], ["0", "0"]]` whatever the limb order.
//!
//! # Limb order
//!
//! snarkjs reads each Fp2 coordinate as `[c0, c1]`. Points are held in that
//! order internally; [`encode_g2`] still takes the target [`LimbOrder`] so the
//! transposition is one explicit step rather than an accident of field
//! layout. Emitting `C1C0` into a snarkjs document produces a well-formed file
//! that fails verification.

use num_bigint::BigUint;
use snarkport_types::field::reduce;
use snarkport_types::{Fp12, Fp2, G1Point, G2Point, LimbOrder};

use crate::error::{EncodingError, EncodingResult};

pub type G1Json = [String; 3];
pub type Fp2Json = [String; 2];
pub type G2Json = [Fp2Json; 3];
pub type Fp12Json = [[Fp2Json; 3]; 2];

/// Canonical decimal form of `e mod p`.
pub fn encode_field_element(e: &BigUint, p: &BigUint) -> String {
    reduce(e, p).to_str_radix(10)
}

/// Parse a canonical decimal string into an element of `[0, p)`.
///
/// Rejects empty strings, signs, non-digits and leading zeros; values
/// `>= p` are [`FieldOutOfRange`](crate::EncodingReason::FieldOutOfRange).
pub fn decode_field_element(s: &str, p: &BigUint) -> EncodingResult<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodingError::malformed(format!("`{s}` is not an unsigned decimal")));
    }
    if s.len() > 1 && s.starts_with('0') {
        return Err(EncodingError::malformed(format!("`{s}` has leading zeros")));
    }
    let value = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| EncodingError::malformed(format!("`{s}` is not an unsigned decimal")))?;
    if &value >= p {
        return Err(EncodingError::out_of_range(format!("{s} >= field modulus")));
    }
    Ok(value)
}

pub fn g1_infinity() -> G1Json {
    ["0".into(), "1".into(), "0".into()]
}

pub fn g2_infinity() -> G2Json {
    [
        ["0".into(), "0".into()],
        ["1".into(), "0".into()],
        ["0".into(), "0".into()],
    ]
}

pub fn encode_g1(point: &G1Point, p: &BigUint) -> G1Json {
    match point {
        G1Point::Infinity => g1_infinity(),
        G1Point::Affine { x, y } => [
            encode_field_element(x, p),
            encode_field_element(y, p),
            "1".into(),
        ],
    }
}

pub fn encode_fp2(e: &Fp2, order: LimbOrder, p: &BigUint) -> Fp2Json {
    order.arrange(e).map(|limb| encode_field_element(limb, p))
}

pub fn encode_g2(point: &G2Point, order: LimbOrder, p: &BigUint) -> G2Json {
    match point {
        G2Point::Infinity => g2_infinity(),
        G2Point::Affine { x, y } => [
            encode_fp2(x, order, p),
            encode_fp2(y, order, p),
            encode_fp2(&Fp2::one(), order, p),
        ],
    }
}

pub fn encode_fp12(e: &Fp12, p: &BigUint) -> Fp12Json {
    let fp6 = |c: &[Fp2; 3]| c.each_ref().map(|fp2| encode_fp2(fp2, LimbOrder::C0C1, p));
    [fp6(&e.c0), fp6(&e.c1)]
}

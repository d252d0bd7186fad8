// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Compressed BLS12-381 points for on-chain verifiers.
//!
//! Follows the zcash serialization that ffjavascript's `toRprCompressed`
//! produces: big-endian x, with the top three bits of the first byte used
//! as flags. G2 writes `x.c1` before `x.c0`.
//!
//! | bit | meaning |
//! |---|---|
//! | `0x80` | compressed form |
//! | `0x40` | point at infinity |
//! | `0x20` | y is the lexicographically larger root |

use num_bigint::BigUint;
use snarkport_types::{CurveId, Fp2, G1Point, G2Point, LimbOrder, PublicInputs, RawProof};

use crate::encode::encode_field_element;
use crate::error::{EncodingError, EncodingReason, EncodingResult};

const FLAG_COMPRESSED: u8 = 0x80;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_LARGEST: u8 = 0x20;

pub const G1_COMPRESSED_BYTES: usize = 48;
pub const G2_COMPRESSED_BYTES: usize = 96;

/// Proof ready for an on-chain verifier: hex points, decimal inputs.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompressedProof {
    pub pi_a: String,
    pub pi_b: String,
    pub pi_c: String,
    pub pub_inputs: Vec<String>,
}

fn ensure_supported(curve: CurveId) -> EncodingResult<()> {
    match curve {
        CurveId::Bls12_381 => Ok(()),
        other => Err(EncodingError::new(
            EncodingReason::UnsupportedCurve,
            format!("compressed encoding is only defined for bls12381, not {other}"),
        )),
    }
}

fn to_be_fixed(value: &BigUint, len: usize) -> EncodingResult<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if bytes.len() > len {
        return Err(EncodingError::out_of_range(format!("{value} does not fit in {len} bytes")));
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}

fn check_below(value: &BigUint, modulus: &BigUint, name: &str) -> EncodingResult<()> {
    if value >= modulus {
        return Err(EncodingError::out_of_range(format!("{name}: {value} >= modulus")));
    }
    Ok(())
}

/// `y > p - y`
fn is_largest(y: &BigUint, p: &BigUint) -> bool {
    y != &BigUint::ZERO && y > &(p - y)
}

fn is_largest_fp2(y: &Fp2, p: &BigUint) -> bool {
    if y.c1 != BigUint::ZERO {
        is_largest(&y.c1, p)
    } else {
        is_largest(&y.c0, p)
    }
}

pub fn compress_g1(point: &G1Point, curve: CurveId) -> EncodingResult<Vec<u8>> {
    ensure_supported(curve)?;
    let p = &curve.params().base_modulus;
    match point {
        G1Point::Infinity => {
            let mut out = vec![0u8; G1_COMPRESSED_BYTES];
            out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
            Ok(out)
        }
        G1Point::Affine { x, y } => {
            check_below(x, p, "G1 x")?;
            check_below(y, p, "G1 y")?;
            let mut out = to_be_fixed(x, G1_COMPRESSED_BYTES)?;
            out[0] |= FLAG_COMPRESSED;
            if is_largest(y, p) {
                out[0] |= FLAG_LARGEST;
            }
            Ok(out)
        }
    }
}

pub fn compress_g2(point: &G2Point, curve: CurveId) -> EncodingResult<Vec<u8>> {
    ensure_supported(curve)?;
    let p = &curve.params().base_modulus;
    match point {
        G2Point::Infinity => {
            let mut out = vec![0u8; G2_COMPRESSED_BYTES];
            out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
            Ok(out)
        }
        G2Point::Affine { x, y } => {
            for limb in [&x.c0, &x.c1, &y.c0, &y.c1] {
                check_below(limb, p, "G2 coordinate")?;
            }
            let mut out = Vec::with_capacity(G2_COMPRESSED_BYTES);
            for limb in LimbOrder::C1C0.arrange(x) {
                out.extend(to_be_fixed(limb, G2_COMPRESSED_BYTES / 2)?);
            }
            out[0] |= FLAG_COMPRESSED;
            if is_largest_fp2(y, p) {
                out[0] |= FLAG_LARGEST;
            }
            Ok(out)
        }
    }
}

pub fn compress_proof(proof: &RawProof, public_inputs: &PublicInputs) -> EncodingResult<CompressedProof> {
    let r = &proof.curve.params().scalar_modulus;
    let pub_inputs = public_inputs
        .iter()
        .enumerate()
        .map(|(i, v)| {
            check_below(v, r, &format!("public input {i}"))?;
            Ok(encode_field_element(v, r))
        })
        .collect::<EncodingResult<Vec<_>>>()?;
    Ok(CompressedProof {
        pi_a: hex::encode(compress_g1(&proof.a, proof.curve)?),
        pi_b: hex::encode(compress_g2(&proof.b, proof.curve)?),
        pi_c: hex::encode(compress_g1(&proof.c, proof.curve)?),
        pub_inputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
    }

    fn g1_generator() -> G1Point {
        G1Point::affine(
            dec("3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507"),
            dec("1339506544944476473020471379941921221584933875938349620426543736416511423956333506472724655353366534992391756441569"),
        )
    }

    fn g2_generator() -> G2Point {
        G2Point::affine(
            Fp2::new(
                dec("352701069587466618187139116011060144890029952792775240219908644239793785735715026873347600343865175952761926303160"),
                dec("3059144344244213709971259814753781636986470325476647558659373206291635324768958432433509563104347017837885763365758"),
            ),
            Fp2::new(
                dec("1985150602287291935568054521177171638300868978215655730859378665066344726373823718423869104263333984641494340347905"),
                dec("927553665492332455747201965776037880757740193453592970025027978793976877002675564980949289727957565575433344219582"),
            ),
        )
    }

    #[test]
    fn g1_generator_golden() {
        let bytes = compress_g1(&g1_generator(), CurveId::Bls12_381).unwrap();
        assert_eq!(
            hex::encode(bytes),
            "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
        );
    }

    #[test]
    fn g1_negated_sets_sign_flag() {
        let p = &CurveId::Bls12_381.params().base_modulus;
        let G1Point::Affine { x, y } = g1_generator() else { unreachable!() };
        let neg = G1Point::affine(x, p - y);
        let bytes = compress_g1(&neg, CurveId::Bls12_381).unwrap();
        assert_eq!(bytes[0], 0x97 | FLAG_LARGEST);
    }

    #[test]
    fn g2_generator_golden() {
        let bytes = compress_g2(&g2_generator(), CurveId::Bls12_381).unwrap();
        assert_eq!(
            hex::encode(bytes),
            "93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"
        );
    }

    #[test]
    fn infinity_encodings() {
        let g1 = compress_g1(&G1Point::Infinity, CurveId::Bls12_381).unwrap();
        assert_eq!(g1.len(), G1_COMPRESSED_BYTES);
        assert_eq!(g1[0], 0xc0);
        assert!(g1[1..].iter().all(|b| *b == 0));

        let g2 = compress_g2(&G2Point::Infinity, CurveId::Bls12_381).unwrap();
        assert_eq!(g2.len(), G2_COMPRESSED_BYTES);
        assert_eq!(g2[0], 0xc0);
    }

    #[test]
    fn bn254_unsupported() {
        let err = compress_g1(&G1Point::Infinity, CurveId::Bn254).unwrap_err();
        assert_eq!(err.reason, EncodingReason::UnsupportedCurve);
    }

    #[test]
    fn unreduced_values_rejected() {
        let params = CurveId::Bls12_381.params();
        let proof = RawProof {
            curve: CurveId::Bls12_381,
            a: g1_generator(),
            b: g2_generator(),
            c: G1Point::Infinity,
        };
        let inputs: PublicInputs = vec![BigUint::from(35u8), params.scalar_modulus.clone()].into();
        let err = compress_proof(&proof, &inputs).unwrap_err();
        assert_eq!(err.reason, EncodingReason::FieldOutOfRange);
        assert!(err.detail.contains("public input 1"), "{}", err.detail);

        // p still fits in 48 bytes, so only the range check catches it
        let point = G1Point::affine(params.base_modulus.clone(), BigUint::from(2u8));
        let err = compress_g1(&point, CurveId::Bls12_381).unwrap_err();
        assert_eq!(err.reason, EncodingReason::FieldOutOfRange);
    }

    #[test]
    fn proof_fields() {
        let proof = RawProof {
            curve: CurveId::Bls12_381,
            a: g1_generator(),
            b: g2_generator(),
            c: G1Point::Infinity,
        };
        let compressed = compress_proof(&proof, &vec![BigUint::from(35u8)].into()).unwrap();
        assert_eq!(compressed.pi_a.len(), 96);
        assert_eq!(compressed.pi_b.len(), 192);
        assert!(compressed.pi_c.starts_with("c0"));
        assert_eq!(compressed.pub_inputs, vec!["35".to_string()]);
    }
}

// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs documents → raw Groth16 artifacts, with schema validation.
//!
//! The inverse of [`Exporter`](crate::Exporter). Works on
//! [`serde_json::Value`] rather than the typed documents so that wrong array
//! lengths, numbers where strings are expected and missing fields all come
//! back as [`EncodingError`]s naming the offending field.

use num_bigint::BigUint;
use serde_json::Value;
use snarkport_types::{
    CurveId, Fp12, Fp2, G1Point, G2Point, LimbOrder, PublicInputs, RawProof, RawVerifyingKey,
    PROTOCOL_GROTH16,
};

use crate::config::ExportConfig;
use crate::encode::{decode_field_element, g2_infinity};
use crate::error::{EncodingError, EncodingReason, EncodingResult, ExportResult};

#[derive(Clone, Copy, Debug)]
pub struct Decoder {
    limb_order: LimbOrder,
    check_points: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self { limb_order: LimbOrder::C0C1, check_points: true }
    }
}

impl From<&ExportConfig> for Decoder {
    fn from(config: &ExportConfig) -> Self {
        Self { limb_order: config.g2_limb_order, check_points: config.check_points }
    }
}

impl Decoder {
    pub fn new(limb_order: LimbOrder) -> Self {
        Self { limb_order, ..Self::default() }
    }

    pub fn with_point_checks(mut self, enabled: bool) -> Self {
        self.check_points = enabled;
        self
    }

    pub fn decode_proof(&self, doc: &Value) -> EncodingResult<RawProof> {
        let (curve, p) = header(doc)?;
        let a = decode_g1(field(doc, "pi_a")?, "pi_a", &p)?;
        let b = decode_g2(field(doc, "pi_b")?, "pi_b", self.limb_order, &p)?;
        let c = decode_g1(field(doc, "pi_c")?, "pi_c", &p)?;
        let proof = RawProof { curve, a, b, c };
        if self.check_points {
            ensure_g1(curve, "pi_a", &proof.a)?;
            ensure_g2(curve, "pi_b", &proof.b)?;
            ensure_g1(curve, "pi_c", &proof.c)?;
        }
        Ok(proof)
    }

    pub fn decode_verifying_key(&self, doc: &Value) -> EncodingResult<RawVerifyingKey> {
        let (curve, p) = header(doc)?;
        let n_public = field(doc, "nPublic")?
            .as_u64()
            .ok_or_else(|| EncodingError::malformed("nPublic is not an unsigned integer"))?;
        let n_public = usize::try_from(n_public)
            .map_err(|_| EncodingError::count_mismatch(format!("nPublic = {n_public} is not addressable")))?;
        let expected_ic = n_public
            .checked_add(1)
            .ok_or_else(|| EncodingError::count_mismatch(format!("nPublic = {n_public} leaves no room for IC[0]")))?;

        let ic = as_array(field(doc, "IC")?, "IC")?
            .iter()
            .enumerate()
            .map(|(i, v)| decode_g1(v, &format!("IC[{i}]"), &p))
            .collect::<EncodingResult<Vec<_>>>()?;
        if ic.len() != expected_ic {
            return Err(EncodingError::count_mismatch(format!(
                "IC has {} points, nPublic = {n_public}",
                ic.len()
            )));
        }

        let alpha_beta = match doc.get("vk_alphabeta_12") {
            None | Some(Value::Null) => None,
            Some(v) => Some(decode_fp12(v, &p)?),
        };

        let vk = RawVerifyingKey {
            curve,
            n_public,
            alpha: decode_g1(field(doc, "vk_alpha_1")?, "vk_alpha_1", &p)?,
            beta: decode_g2(field(doc, "vk_beta_2")?, "vk_beta_2", self.limb_order, &p)?,
            gamma: decode_g2(field(doc, "vk_gamma_2")?, "vk_gamma_2", self.limb_order, &p)?,
            delta: decode_g2(field(doc, "vk_delta_2")?, "vk_delta_2", self.limb_order, &p)?,
            ic,
            alpha_beta,
        };
        if self.check_points {
            ensure_g1(curve, "vk_alpha_1", &vk.alpha)?;
            ensure_g2(curve, "vk_beta_2", &vk.beta)?;
            ensure_g2(curve, "vk_gamma_2", &vk.gamma)?;
            ensure_g2(curve, "vk_delta_2", &vk.delta)?;
            for (i, point) in vk.ic.iter().enumerate() {
                ensure_g1(curve, &format!("IC[{i}]"), point)?;
            }
        }
        Ok(vk)
    }

    /// `public.json` carries no curve tag, so the caller supplies it.
    pub fn decode_public_signals(&self, doc: &Value, curve: CurveId) -> EncodingResult<PublicInputs> {
        let r = &curve.params().scalar_modulus;
        as_array(doc, "public signals")?
            .iter()
            .enumerate()
            .map(|(i, v)| decode_base(v, &format!("public signal {i}"), r))
            .collect()
    }
}

pub fn decode_proof(json: &str) -> ExportResult<RawProof> {
    let value: Value = serde_json::from_str(json)?;
    Ok(Decoder::default().decode_proof(&value)?)
}

pub fn decode_verifying_key(json: &str) -> ExportResult<RawVerifyingKey> {
    let value: Value = serde_json::from_str(json)?;
    Ok(Decoder::default().decode_verifying_key(&value)?)
}

pub fn decode_public_signals(json: &str, curve: CurveId) -> ExportResult<PublicInputs> {
    let value: Value = serde_json::from_str(json)?;
    Ok(Decoder::default().decode_public_signals(&value, curve)?)
}

/// Read `protocol` and `curve`, returning the curve and its base modulus.
fn header(doc: &Value) -> EncodingResult<(CurveId, BigUint)> {
    let protocol = as_str(field(doc, "protocol")?, "protocol")?;
    if protocol != PROTOCOL_GROTH16 {
        return Err(EncodingError::malformed(format!("unsupported protocol `{protocol}`")));
    }
    let name = as_str(field(doc, "curve")?, "curve")?;
    let curve: CurveId = name
        .parse()
        .map_err(|e| EncodingError::new(EncodingReason::UnsupportedCurve, format!("{e}")))?;
    Ok((curve, curve.params().base_modulus.clone()))
}

fn field<'a>(doc: &'a Value, name: &str) -> EncodingResult<&'a Value> {
    doc.get(name)
        .ok_or_else(|| EncodingError::malformed(format!("missing field `{name}`")))
}

fn as_str<'a>(value: &'a Value, name: &str) -> EncodingResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| EncodingError::malformed(format!("{name}: expected a string, got {value}")))
}

fn as_array<'a>(value: &'a Value, name: &str) -> EncodingResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| EncodingError::malformed(format!("{name}: expected an array")))
}

fn as_array_of<'a, const N: usize>(value: &'a Value, name: &str) -> EncodingResult<&'a [Value; N]> {
    let items = as_array(value, name)?;
    items.try_into().map_err(|_| {
        EncodingError::malformed(format!("{name}: expected {N} entries, got {}", items.len()))
    })
}

/// Decode a decimal string into `[0, modulus)`.
fn decode_base(value: &Value, name: &str, p: &BigUint) -> EncodingResult<BigUint> {
    decode_field_element(as_str(value, name)?, p)
        .map_err(|e| EncodingError::new(e.reason, format!("{name}: {}", e.detail)))
}

fn decode_fp2(value: &Value, name: &str, order: LimbOrder, p: &BigUint) -> EncodingResult<Fp2> {
    let [l0, l1] = as_array_of::<2>(value, name)?;
    let limbs = [decode_base(l0, name, p)?, decode_base(l1, name, p)?];
    Ok(order.read(limbs))
}

pub fn decode_g1(value: &Value, name: &str, p: &BigUint) -> EncodingResult<G1Point> {
    let [x, y, z] = as_array_of::<3>(value, name)?;
    let x = decode_base(x, name, p)?;
    let y = decode_base(y, name, p)?;
    match as_str(z, name)? {
        "1" => Ok(G1Point::affine(x, y)),
        "0" if x == BigUint::ZERO && y == BigUint::from(1u8) => Ok(G1Point::Infinity),
        other => Err(EncodingError::malformed(format!(
            "{name}: projective coordinate `{other}` is neither \"1\" nor the identity sentinel"
        ))),
    }
}

/// The identity sentinel is fixed text and is matched before any limb
/// reordering; affine points must carry `["1","0"]` in `order`.
pub fn decode_g2(value: &Value, name: &str, order: LimbOrder, p: &BigUint) -> EncodingResult<G2Point> {
    if is_g2_sentinel(value) {
        return Ok(G2Point::Infinity);
    }
    let [x, y, z] = as_array_of::<3>(value, name)?;
    let x = decode_fp2(x, name, order, p)?;
    let y = decode_fp2(y, name, order, p)?;
    let z = decode_fp2(z, name, order, p)?;
    if z == Fp2::one() {
        Ok(G2Point::affine(x, y))
    } else {
        Err(EncodingError::malformed(format!(
            "{name}: projective coordinate is neither [\"1\",\"0\"] nor the identity sentinel"
        )))
    }
}

fn is_g2_sentinel(value: &Value) -> bool {
    let sentinel = g2_infinity();
    as_array_of::<3>(value, "").is_ok_and(|rows| {
        rows.iter().zip(&sentinel).all(|(row, expected)| {
            row.as_array().is_some_and(|limbs| {
                limbs.len() == 2 && limbs.iter().zip(expected).all(|(l, e)| l.as_str() == Some(e.as_str()))
            })
        })
    })
}

fn decode_fp12(value: &Value, p: &BigUint) -> EncodingResult<Fp12> {
    let name = "vk_alphabeta_12";
    let decode_fp6 = |v: &Value| -> EncodingResult<[Fp2; 3]> {
        let [a, b, c] = as_array_of::<3>(v, name)?;
        Ok([
            decode_fp2(a, name, LimbOrder::C0C1, p)?,
            decode_fp2(b, name, LimbOrder::C0C1, p)?,
            decode_fp2(c, name, LimbOrder::C0C1, p)?,
        ])
    };
    let [c0, c1] = as_array_of::<2>(value, name)?;
    Ok(Fp12 { c0: decode_fp6(c0)?, c1: decode_fp6(c1)? })
}

fn ensure_g1(curve: CurveId, name: &str, point: &G1Point) -> EncodingResult<()> {
    if point.is_on_curve(curve.params()) {
        Ok(())
    } else {
        Err(EncodingError::malformed(format!("{name} is not on the {curve} G1 curve")))
    }
}

fn ensure_g2(curve: CurveId, name: &str, point: &G2Point) -> EncodingResult<()> {
    if point.is_on_curve(curve.params()) {
        Ok(())
    } else {
        Err(EncodingError::malformed(format!("{name} is not on the {curve} G2 twist")))
    }
}

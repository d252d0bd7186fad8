// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Raw Groth16 artifacts → snarkjs documents.
//!
//! Every check runs before any string is produced, so a returned document is
//! always complete and an error means nothing was built.

use num_bigint::BigUint;
use snarkport_types::{
    CurveParams, G1Point, G2Point, PublicInputs, RawProof, RawVerifyingKey, PROTOCOL_GROTH16,
};
use tracing::debug;

use crate::config::ExportConfig;
use crate::document::{ExportBundle, ProofDocument, PublicSignals, VerifyingKeyDocument};
use crate::encode::{encode_field_element, encode_fp12, encode_g1, encode_g2};
use crate::error::{EncodingError, EncodingReason, EncodingResult};

#[derive(Clone, Debug)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    fn params(&self) -> &'static CurveParams {
        self.config.curve.params()
    }

    /// Encode a proof and its public inputs.
    ///
    /// Returns `proof.json` and the side document `public.json`.
    pub fn export_proof(
        &self,
        proof: &RawProof,
        public_inputs: &PublicInputs,
    ) -> EncodingResult<(ProofDocument, PublicSignals)> {
        self.check_curve(proof.curve)?;
        self.check_g1("pi_a", &proof.a)?;
        self.check_g2("pi_b", &proof.b)?;
        self.check_g1("pi_c", &proof.c)?;
        let signals = self.export_public_signals(public_inputs)?;

        let p = &self.params().base_modulus;
        let order = self.config.g2_limb_order;
        let doc = ProofDocument {
            pi_a: encode_g1(&proof.a, p),
            pi_b: encode_g2(&proof.b, order, p),
            pi_c: encode_g1(&proof.c, p),
            protocol: PROTOCOL_GROTH16.into(),
            curve: self.config.curve.snarkjs_name().into(),
            public_signals: self.config.embed_public_signals.then(|| signals.0.clone()),
        };
        debug!(curve = %self.config.curve, ?order, n_public = signals.len(), "encoded proof");
        Ok((doc, signals))
    }

    /// Encode public inputs as ordered decimal strings.
    pub fn export_public_signals(&self, public_inputs: &PublicInputs) -> EncodingResult<PublicSignals> {
        let r = &self.params().scalar_modulus;
        public_inputs
            .iter()
            .enumerate()
            .map(|(i, value)| {
                check_range(&format!("public input {i}"), value, r)?;
                Ok(encode_field_element(value, r))
            })
            .collect::<EncodingResult<Vec<_>>>()
            .map(PublicSignals)
    }

    /// Encode a verifying key.
    ///
    /// `IC` must hold exactly `n_public + 1` points; any other length is
    /// reported, never truncated or padded.
    pub fn export_verifying_key(&self, vk: &RawVerifyingKey) -> EncodingResult<VerifyingKeyDocument> {
        self.check_curve(vk.curve)?;
        let expected_ic = vk.n_public.checked_add(1).ok_or_else(|| {
            EncodingError::count_mismatch(format!("nPublic = {} leaves no room for IC[0]", vk.n_public))
        })?;
        if vk.ic.len() != expected_ic {
            return Err(EncodingError::count_mismatch(format!(
                "IC has {} points, expected {expected_ic} for {} public inputs",
                vk.ic.len(),
                vk.n_public
            )));
        }
        self.check_g1("vk_alpha_1", &vk.alpha)?;
        self.check_g2("vk_beta_2", &vk.beta)?;
        self.check_g2("vk_gamma_2", &vk.gamma)?;
        self.check_g2("vk_delta_2", &vk.delta)?;
        for (i, point) in vk.ic.iter().enumerate() {
            self.check_g1(&format!("IC[{i}]"), point)?;
        }
        if let Some(alpha_beta) = &vk.alpha_beta {
            for value in alpha_beta.coefficients() {
                check_range("vk_alphabeta_12", value, &self.params().base_modulus)?;
            }
        }

        let p = &self.params().base_modulus;
        let order = self.config.g2_limb_order;
        let doc = VerifyingKeyDocument {
            protocol: PROTOCOL_GROTH16.into(),
            curve: self.config.curve.snarkjs_name().into(),
            n_public: vk.n_public,
            vk_alpha_1: encode_g1(&vk.alpha, p),
            vk_beta_2: encode_g2(&vk.beta, order, p),
            vk_gamma_2: encode_g2(&vk.gamma, order, p),
            vk_delta_2: encode_g2(&vk.delta, order, p),
            vk_alphabeta_12: vk.alpha_beta.as_ref().map(|e| encode_fp12(e, p)),
            ic: vk.ic.iter().map(|point| encode_g1(point, p)).collect(),
        };
        debug!(curve = %self.config.curve, n_public = vk.n_public, "encoded verifying key");
        Ok(doc)
    }

    /// Export proof, public signals and verifying key together, checking that
    /// the key expects as many public inputs as were supplied.
    pub fn export_bundle(
        &self,
        proof: &RawProof,
        vk: &RawVerifyingKey,
        public_inputs: &PublicInputs,
    ) -> EncodingResult<ExportBundle> {
        if public_inputs.len() != vk.n_public {
            return Err(EncodingError::count_mismatch(format!(
                "{} public inputs supplied, verifying key declares {}",
                public_inputs.len(),
                vk.n_public
            )));
        }
        let verifying_key = self.export_verifying_key(vk)?;
        let (proof, public_signals) = self.export_proof(proof, public_inputs)?;
        Ok(ExportBundle { proof, verifying_key, public_signals })
    }

    fn check_curve(&self, curve: snarkport_types::CurveId) -> EncodingResult<()> {
        if curve != self.config.curve {
            return Err(EncodingError::new(
                EncodingReason::CurveMismatch,
                format!("artifact is on {curve}, exporter configured for {}", self.config.curve),
            ));
        }
        Ok(())
    }

    fn check_g1(&self, name: &str, point: &G1Point) -> EncodingResult<()> {
        let params = self.params();
        for value in point.coordinates() {
            check_range(name, value, &params.base_modulus)?;
        }
        if self.config.check_points && !point.is_on_curve(params) {
            return Err(EncodingError::malformed(format!("{name} is not on the {} G1 curve", self.config.curve)));
        }
        Ok(())
    }

    fn check_g2(&self, name: &str, point: &G2Point) -> EncodingResult<()> {
        let params = self.params();
        for value in point.coordinates() {
            check_range(name, value, &params.base_modulus)?;
        }
        if self.config.check_points && !point.is_on_curve(params) {
            return Err(EncodingError::malformed(format!("{name} is not on the {} G2 twist", self.config.curve)));
        }
        Ok(())
    }
}

fn check_range(name: &str, value: &BigUint, modulus: &BigUint) -> EncodingResult<()> {
    if value >= modulus {
        return Err(EncodingError::out_of_range(format!("{name}: {value} >= modulus")));
    }
    Ok(())
}

/// [`Exporter::export_proof`] with snarkjs defaults for the proof's curve.
pub fn export_proof(
    proof: &RawProof,
    public_inputs: &PublicInputs,
) -> EncodingResult<(ProofDocument, PublicSignals)> {
    Exporter::new(ExportConfig::new(proof.curve)).export_proof(proof, public_inputs)
}

/// [`Exporter::export_verifying_key`] with snarkjs defaults for the key's curve.
pub fn export_verifying_key(vk: &RawVerifyingKey) -> EncodingResult<VerifyingKeyDocument> {
    Exporter::new(ExportConfig::new(vk.curve)).export_verifying_key(vk)
}

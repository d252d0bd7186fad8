// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs JSON document shapes.
//!
//! Field order in these structs is the field order on the wire; serde keeps
//! declaration order, which is what makes repeated exports byte-identical.

use serde::{Deserialize, Serialize};

use crate::encode::{Fp12Json, G1Json, G2Json};

/// `proof.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDocument {
    pub pi_a: G1Json,
    pub pi_b: G2Json,
    pub pi_c: G1Json,
    pub protocol: String,
    pub curve: String,
    /// Copy of `public.json`, for consumers that read signals from the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_signals: Option<Vec<String>>,
}

/// `verification_key.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKeyDocument {
    pub protocol: String,
    pub curve: String,
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    pub vk_alpha_1: G1Json,
    pub vk_beta_2: G2Json,
    pub vk_gamma_2: G2Json,
    pub vk_delta_2: G2Json,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vk_alphabeta_12: Option<Fp12Json>,
    #[serde(rename = "IC")]
    pub ic: Vec<G1Json>,
}

/// `public.json`: ordered decimal strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicSignals(pub Vec<String>);

impl PublicSignals {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The three documents produced for one proving run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportBundle {
    pub proof: ProofDocument,
    pub verifying_key: VerifyingKeyDocument,
    pub public_signals: PublicSignals,
}

pub const PROOF_FILE: &str = "proof.json";
pub const VERIFYING_KEY_FILE: &str = "verification_key.json";
pub const PUBLIC_FILE: &str = "public.json";

/// Which snarkjs document a JSON value looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Proof,
    VerifyingKey,
    PublicSignals,
}

impl DocumentKind {
    pub fn detect(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Array(_) => Some(DocumentKind::PublicSignals),
            serde_json::Value::Object(map) if map.contains_key("pi_a") => {
                Some(DocumentKind::Proof)
            }
            serde_json::Value::Object(map) if map.contains_key("vk_alpha_1") => {
                Some(DocumentKind::VerifyingKey)
            }
            _ => None,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Proof => PROOF_FILE,
            DocumentKind::VerifyingKey => VERIFYING_KEY_FILE,
            DocumentKind::PublicSignals => PUBLIC_FILE,
        }
    }
}

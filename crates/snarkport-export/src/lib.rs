// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # snarkport-export
//!
//! Exports Groth16 proofs and verifying keys as the JSON documents read by
//! snarkjs (`proof.json`, `verification_key.json`, `public.json`).
//!
//! The exporter works on the source-neutral model in `snarkport-types` and
//! has no proving library in its dependency tree; `snarkport-circuit`
//! converts arkworks artifacts into that model.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`encode`] | Decimal field elements, G1/G2 point arrays, identity sentinels |
//! | [`export`] | [`Exporter`]: validation and document construction |
//! | [`decode`] | Documents back to raw values, with schema checks |
//! | [`document`] | Wire shapes of the three documents |
//! | [`sink`] | Whole-document and atomic file writes |
//! | [`compress`] | Compressed BLS12-381 points for on-chain verifiers |
//!
//! ## Example
//!
//! ```rust,no_run
//! use snarkport_export::{sink, ExportConfig, Exporter};
//! use snarkport_types::{CurveId, PublicInputs, RawProof, RawVerifyingKey};
//!
//! # fn example(proof: RawProof, vk: RawVerifyingKey, inputs: PublicInputs)
//! #     -> snarkport_export::ExportResult<()> {
//! let exporter = Exporter::new(ExportConfig::new(CurveId::Bls12_381));
//! let bundle = exporter.export_bundle(&proof, &vk, &inputs)?;
//! sink::write_bundle("out".as_ref(), &bundle, exporter.config().pretty)?;
//! # Ok(())
//! # }
//! ```

pub mod compress;
pub mod config;
pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod export;
pub mod sink;

pub use config::ExportConfig;
pub use decode::Decoder;
pub use document::{DocumentKind, ExportBundle, ProofDocument, PublicSignals, VerifyingKeyDocument};
pub use encode::{decode_field_element, encode_field_element, encode_g1, encode_g2};
pub use error::{EncodingError, EncodingReason, EncodingResult, ExportError, ExportResult};
pub use export::{export_proof, export_verifying_key, Exporter};

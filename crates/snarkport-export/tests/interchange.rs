// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Exporter behaviour against fixture artifacts, without a prover.
//! The fixture source hands over generator points with Fp2 limbs in either
//! order, the way different proving libraries lay them out.

use snarkport_export::{
    decode, sink, Decoder, EncodingReason, ExportConfig, ExportError, Exporter, ProofDocument,
};
use snarkport_types::{
    BigUint, CurveId, G1Point, G2Point, LimbOrder, PublicInputs, RawProof, RawVerifyingKey,
};

fn dec(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
}

const BN254_G2_X: [&str; 2] = [
    "10857046999023057135944570762232829481370756359578518086990519993285655852781",
    "11559732032986387107991004021392285783925812861821192530917403151452391805634",
];
const BN254_G2_Y: [&str; 2] = [
    "8495653923123431417604973247489272438418190587263600148770280649306958101930",
    "4082367875863433681332203403145435568316851327593401208105741076214120093531",
];

/// Stand-in for a proving library that stores Fp2 limbs in `native` order.
struct FixtureSource {
    native: LimbOrder,
}

impl FixtureSource {
    fn limbs(&self, canonical: [&str; 2]) -> [BigUint; 2] {
        let [c0, c1] = canonical.map(dec);
        match self.native {
            LimbOrder::C0C1 => [c0, c1],
            LimbOrder::C1C0 => [c1, c0],
        }
    }

    fn g1(&self) -> G1Point {
        G1Point::affine(BigUint::from(1u8), BigUint::from(2u8))
    }

    fn g2(&self) -> G2Point {
        G2Point::from_limbs(self.limbs(BN254_G2_X), self.limbs(BN254_G2_Y), self.native)
    }

    fn proof(&self) -> RawProof {
        RawProof { curve: CurveId::Bn254, a: self.g1(), b: self.g2(), c: G1Point::Infinity }
    }

    fn verifying_key(&self, n_public: usize, ic_len: usize) -> RawVerifyingKey {
        RawVerifyingKey {
            curve: CurveId::Bn254,
            n_public,
            alpha: self.g1(),
            beta: self.g2(),
            gamma: self.g2(),
            delta: self.g2(),
            ic: vec![self.g1(); ic_len],
            alpha_beta: None,
        }
    }
}

fn inputs() -> PublicInputs {
    vec![BigUint::from(35u8)].into()
}

fn exporter() -> Exporter {
    Exporter::new(ExportConfig::new(CurveId::Bn254))
}

// ── G2 limb order ──

#[test]
fn g2_generator_matches_snarkjs_layout() {
    // bn128.G2.g as written by snarkjs
    let golden: [[&str; 2]; 3] = [BN254_G2_X, BN254_G2_Y, ["1", "0"]];

    for native in [LimbOrder::C0C1, LimbOrder::C1C0] {
        let source = FixtureSource { native };
        let (doc, _) = exporter().export_proof(&source.proof(), &inputs()).unwrap();
        assert_eq!(doc.pi_b, golden, "source limb order {native:?}");
    }
}

#[test]
fn untransposed_source_is_rejected() {
    // limbs swapped by the source but declared canonical: off the twist
    let [x0, x1] = [dec(BN254_G2_X[0]), dec(BN254_G2_X[1])];
    let [y0, y1] = [dec(BN254_G2_Y[0]), dec(BN254_G2_Y[1])];
    let mut proof = FixtureSource { native: LimbOrder::C0C1 }.proof();
    proof.b = G2Point::from_limbs([x1, x0], [y1, y0], LimbOrder::C0C1);

    let err = exporter().export_proof(&proof, &inputs()).unwrap_err();
    assert_eq!(err.reason, EncodingReason::MalformedPoint);
}

// ── document text ──

#[test]
fn proof_document_golden_text() {
    let source = FixtureSource { native: LimbOrder::C0C1 };
    let exporter = Exporter::new(ExportConfig::new(CurveId::Bn254).with_pretty(false));
    let (doc, signals) = exporter.export_proof(&source.proof(), &inputs()).unwrap();
    let text = String::from_utf8(sink::to_json_bytes(&doc, false).unwrap()).unwrap();
    let expected = format!(
        "{{\"pi_a\":[\"1\",\"2\",\"1\"],\"pi_b\":[[\"{}\",\"{}\"],[\"{}\",\"{}\"],[\"1\",\"0\"]],\"pi_c\":[\"0\",\"1\",\"0\"],\"protocol\":\"groth16\",\"curve\":\"bn128\"}}\n",
        BN254_G2_X[0], BN254_G2_X[1], BN254_G2_Y[0], BN254_G2_Y[1]
    );
    assert_eq!(text, expected);
    assert_eq!(sink::to_json_bytes(&signals, false).unwrap(), b"[\"35\"]\n");
}

#[test]
fn reexport_is_byte_identical() {
    let source = FixtureSource { native: LimbOrder::C1C0 };
    let render = || {
        let bundle = exporter()
            .export_bundle(&source.proof(), &source.verifying_key(1, 2), &inputs())
            .unwrap();
        (
            sink::to_json_bytes(&bundle.proof, true).unwrap(),
            sink::to_json_bytes(&bundle.verifying_key, true).unwrap(),
        )
    };
    assert_eq!(render(), render());
}

// ── verifying key ──

#[test]
fn short_ic_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixtureSource { native: LimbOrder::C0C1 };
    let vk = source.verifying_key(1, 1);

    let result: Result<_, ExportError> = exporter()
        .export_bundle(&source.proof(), &vk, &inputs())
        .map_err(ExportError::from)
        .and_then(|bundle| sink::write_bundle(dir.path(), &bundle, true));

    let err = result.unwrap_err();
    assert_eq!(err.reason(), Some(EncodingReason::PublicInputCountMismatch));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn vk_document_fields() {
    let source = FixtureSource { native: LimbOrder::C0C1 };
    let doc = exporter().export_verifying_key(&source.verifying_key(2, 3)).unwrap();
    assert_eq!(doc.protocol, "groth16");
    assert_eq!(doc.curve, "bn128");
    assert_eq!(doc.n_public, 2);
    assert_eq!(doc.ic.len(), 3);
    assert!(doc.ic.iter().all(|p| p[2] == "1"));
    assert_eq!(doc.vk_gamma_2[2], ["1", "0"]);
}

// ── decode ──

#[test]
fn documents_decode_to_source_values() {
    let source = FixtureSource { native: LimbOrder::C1C0 };
    let proof = source.proof();
    let vk = source.verifying_key(1, 2);
    let bundle = exporter().export_bundle(&proof, &vk, &inputs()).unwrap();

    let proof_json = String::from_utf8(sink::to_json_bytes(&bundle.proof, true).unwrap()).unwrap();
    let vk_json = String::from_utf8(sink::to_json_bytes(&bundle.verifying_key, true).unwrap()).unwrap();
    let public_json =
        String::from_utf8(sink::to_json_bytes(&bundle.public_signals, true).unwrap()).unwrap();

    assert_eq!(decode::decode_proof(&proof_json).unwrap(), proof);
    assert_eq!(decode::decode_verifying_key(&vk_json).unwrap(), vk);
    assert_eq!(decode::decode_public_signals(&public_json, CurveId::Bn254).unwrap(), inputs());
}

#[test]
fn identity_points_read_back_in_either_order() {
    for order in [LimbOrder::C0C1, LimbOrder::C1C0] {
        let config = ExportConfig::new(CurveId::Bn254).with_limb_order(order);
        let source = FixtureSource { native: order };
        let mut vk = source.verifying_key(1, 2);
        vk.beta = G2Point::Infinity;
        let mut proof = source.proof();
        proof.b = G2Point::Infinity;

        let exporter = Exporter::new(config.clone());
        let vk_doc = serde_json::to_value(exporter.export_verifying_key(&vk).unwrap()).unwrap();
        let (proof_doc, _) = exporter.export_proof(&proof, &inputs()).unwrap();
        let proof_doc = serde_json::to_value(proof_doc).unwrap();

        let decoder = Decoder::from(&config);
        assert_eq!(decoder.decode_verifying_key(&vk_doc).unwrap(), vk, "{order:?}");
        assert_eq!(decoder.decode_proof(&proof_doc).unwrap(), proof, "{order:?}");
    }
}

#[test]
fn typed_document_reads_back() {
    let source = FixtureSource { native: LimbOrder::C0C1 };
    let (doc, _) = exporter().export_proof(&source.proof(), &inputs()).unwrap();
    let bytes = sink::to_json_bytes(&doc, true).unwrap();
    let parsed: ProofDocument = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn written_bundle_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixtureSource { native: LimbOrder::C0C1 };
    let bundle = exporter()
        .export_bundle(&source.proof(), &source.verifying_key(1, 2), &inputs())
        .unwrap();
    let paths = sink::write_bundle(dir.path(), &bundle, true).unwrap();

    let public = std::fs::read_to_string(&paths.public_signals).unwrap();
    assert_eq!(decode::decode_public_signals(&public, CurveId::Bn254).unwrap(), inputs());
    let proof = std::fs::read_to_string(&paths.proof).unwrap();
    assert_eq!(decode::decode_proof(&proof).unwrap(), source.proof());
}

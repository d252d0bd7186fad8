// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use snarkport_export::compress::compress_proof;
use snarkport_export::Decoder;
use snarkport_types::CurveId;

use super::read_json;
use crate::output;

pub fn run(proof: &Path, public: &Path) -> Result<()> {
    let decoder = Decoder::default();
    let proof = decoder.decode_proof(&read_json(proof)?)?;
    if proof.curve != CurveId::Bls12_381 {
        return Err(output::fail_with_hint(
            &format!("compressed encoding is not defined for {}", proof.curve),
            "prove with `--curve bls12381`",
        ));
    }
    let inputs = decoder.decode_public_signals(&read_json(public)?, proof.curve)?;
    let compressed = compress_proof(&proof, &inputs)?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&compressed)?)?;
    } else {
        output::label("pi_a", &compressed.pi_a);
        output::label("pi_b", &compressed.pi_b);
        output::label("pi_c", &compressed.pi_c);
        output::label("pub_inputs", &compressed.pub_inputs.join(", "));
    }
    Ok(())
}

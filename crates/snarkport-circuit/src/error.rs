// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_relations::r1cs::SynthesisError;
use snarkport_types::CurveId;

#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    #[error("constraint synthesis: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("artifact is on {found}, backend expects {expected}")]
    CurveMismatch { expected: CurveId, found: CurveId },

    #[error("invalid {group} point: {reason}")]
    InvalidPoint { group: &'static str, reason: &'static str },
}

impl CircuitError {
    pub(crate) fn check_curve(expected: CurveId, found: CurveId) -> CircuitResult<()> {
        if expected == found {
            Ok(())
        } else {
            Err(CircuitError::CurveMismatch { expected, found })
        }
    }
}

pub type CircuitResult<T> = Result<T, CircuitError>;

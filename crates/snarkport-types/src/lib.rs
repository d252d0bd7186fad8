// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared types for snarkport: curve parameters, raw field/point values and
//! the source-neutral Groth16 proof and verifying-key model.

pub mod curve;
pub mod field;
pub mod groth16;
pub mod point;

pub use curve::{CurveId, CurveParams, UnknownCurve};
pub use field::{Fp12, Fp2};
pub use groth16::{PublicInputs, RawProof, RawVerifyingKey, PROTOCOL_GROTH16};
pub use point::{G1Point, G2Point, LimbOrder};

pub use num_bigint::BigUint;

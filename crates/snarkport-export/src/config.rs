// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use snarkport_types::{CurveId, LimbOrder};

/// Settings threaded into an [`Exporter`](crate::Exporter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Curve every exported artifact must belong to.
    pub curve: CurveId,
    /// Limb order for Fp2 coordinates in emitted documents. snarkjs reads
    /// `c0_c1`; anything else is for non-snarkjs consumers.
    #[serde(default)]
    pub g2_limb_order: LimbOrder,
    /// Reject points that do not satisfy the curve equation.
    #[serde(default = "default_true")]
    pub check_points: bool,
    /// Indented JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Also write the public signals into `proof.json`.
    #[serde(default)]
    pub embed_public_signals: bool,
}

fn default_true() -> bool {
    true
}

impl ExportConfig {
    pub fn new(curve: CurveId) -> Self {
        Self {
            curve,
            g2_limb_order: LimbOrder::C0C1,
            check_points: true,
            pretty: true,
            embed_public_signals: false,
        }
    }

    pub fn with_limb_order(mut self, order: LimbOrder) -> Self {
        self.g2_limb_order = order;
        self
    }

    pub fn with_point_checks(mut self, enabled: bool) -> Self {
        self.check_points = enabled;
        self
    }

    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    pub fn with_embedded_signals(mut self, enabled: bool) -> Self {
        self.embed_public_signals = enabled;
        self
    }
}

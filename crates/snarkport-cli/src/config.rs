// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use snarkport_export::ExportConfig;
use snarkport_types::{CurveId, LimbOrder};

/// Optional settings file passed with `--config`. Every field may be
/// omitted; command-line flags win over anything set here.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub curve: Option<CurveId>,
    pub g2_limb_order: Option<LimbOrder>,
    pub check_points: Option<bool>,
    pub pretty: Option<bool>,
    pub embed_public_signals: Option<bool>,
    pub out_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve exporter settings. `curve` is the command-line value, if any;
    /// without either source the curve is bn128, the snarkjs default.
    pub fn export_config(&self, curve: Option<CurveId>) -> ExportConfig {
        let curve = curve.or(self.curve).unwrap_or(CurveId::Bn254);
        let defaults = ExportConfig::new(curve);
        ExportConfig {
            curve,
            g2_limb_order: self.g2_limb_order.unwrap_or(defaults.g2_limb_order),
            check_points: self.check_points.unwrap_or(defaults.check_points),
            pretty: self.pretty.unwrap_or(defaults.pretty),
            embed_public_signals: self.embed_public_signals.unwrap_or(defaults.embed_public_signals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.export_config(None), ExportConfig::new(CurveId::Bn254));
    }

    #[test]
    fn flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snarkport.json");
        std::fs::write(&path, r#"{"curve":"bls12381","pretty":false,"g2_limb_order":"c1_c0"}"#).unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        let from_file = config.export_config(None);
        assert_eq!(from_file.curve, CurveId::Bls12_381);
        assert!(!from_file.pretty);
        assert_eq!(from_file.g2_limb_order, LimbOrder::C1C0);
        assert!(from_file.check_points);

        assert_eq!(config.export_config(Some(CurveId::Bn254)).curve, CurveId::Bn254);
    }

    #[test]
    fn unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"curv":"bn128"}"#).unwrap();
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}

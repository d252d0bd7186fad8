// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Writing documents out.
//!
//! Documents are rendered to bytes in full before the sink is touched. File
//! writes go through a temporary file in the destination directory that is
//! renamed into place, so a reader never sees half a document; the
//! temporary file is removed on every failure path when it drops.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::document::{ExportBundle, PROOF_FILE, PUBLIC_FILE, VERIFYING_KEY_FILE};
use crate::error::ExportResult;

/// Render `doc` as UTF-8 JSON, newline-terminated.
pub fn to_json_bytes<T: Serialize>(doc: &T, pretty: bool) -> ExportResult<Vec<u8>> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(doc)?
    } else {
        serde_json::to_vec(doc)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write one document to any sink. Errors from the sink come back unchanged.
pub fn write_document<W: Write, T: Serialize>(mut sink: W, doc: &T, pretty: bool) -> ExportResult<()> {
    let bytes = to_json_bytes(doc, pretty)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Atomically replace `path` with `bytes`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

pub fn write_document_file<T: Serialize>(path: &Path, doc: &T, pretty: bool) -> ExportResult<()> {
    let bytes = to_json_bytes(doc, pretty)?;
    write_atomic(path, &bytes)
}

/// Paths written by [`write_bundle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundlePaths {
    pub proof: PathBuf,
    pub verifying_key: PathBuf,
    pub public_signals: PathBuf,
}

impl BundlePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            proof: dir.join(PROOF_FILE),
            verifying_key: dir.join(VERIFYING_KEY_FILE),
            public_signals: dir.join(PUBLIC_FILE),
        }
    }
}

/// Write `proof.json`, `verification_key.json` and `public.json` into `dir`.
///
/// All three are rendered before the first file is written.
pub fn write_bundle(dir: &Path, bundle: &ExportBundle, pretty: bool) -> ExportResult<BundlePaths> {
    let proof = to_json_bytes(&bundle.proof, pretty)?;
    let vk = to_json_bytes(&bundle.verifying_key, pretty)?;
    let public = to_json_bytes(&bundle.public_signals, pretty)?;

    let paths = BundlePaths::in_dir(dir);
    write_atomic(&paths.verifying_key, &vk)?;
    write_atomic(&paths.proof, &proof)?;
    write_atomic(&paths.public_signals, &public)?;
    Ok(paths)
}

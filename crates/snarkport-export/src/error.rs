// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for export, decode and sink operations.

/// Why a value could not be encoded (or decoded) in the interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EncodingReason {
    /// Point missing, wrongly shaped, or not on the curve.
    #[error("malformed point")]
    MalformedPoint,
    /// A coordinate or public input is not a canonical element of its field.
    #[error("field element out of range")]
    FieldOutOfRange,
    /// `IC` length disagrees with the declared public-input count.
    #[error("public input count mismatch")]
    PublicInputCountMismatch,
    /// Artifact belongs to a different curve than the exporter was built for.
    #[error("curve mismatch")]
    CurveMismatch,
    /// The requested encoding is not defined for this curve.
    #[error("unsupported curve")]
    UnsupportedCurve,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason}: {detail}")]
pub struct EncodingError {
    pub reason: EncodingReason,
    pub detail: String,
}

impl EncodingError {
    pub fn new(reason: EncodingReason, detail: impl Into<String>) -> Self {
        Self { reason, detail: detail.into() }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::new(EncodingReason::MalformedPoint, detail)
    }

    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::new(EncodingReason::FieldOutOfRange, detail)
    }

    pub fn count_mismatch(detail: impl Into<String>) -> Self {
        Self::new(EncodingReason::PublicInputCountMismatch, detail)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// The encoding reason, if this is an encoding failure.
    pub fn reason(&self) -> Option<EncodingReason> {
        match self {
            ExportError::Encoding(e) => Some(e.reason),
            _ => None,
        }
    }
}

pub type EncodingResult<T> = Result<T, EncodingError>;
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_reason_and_detail() {
        let err = EncodingError::count_mismatch("IC has 1 points, expected 2");
        assert_eq!(err.to_string(), "public input count mismatch: IC has 1 points, expected 2");
        assert_eq!(EncodingReason::FieldOutOfRange.to_string(), "field element out of range");

        let wrapped = ExportError::from(err);
        assert_eq!(wrapped.reason(), Some(EncodingReason::PublicInputCountMismatch));
        assert!(wrapped.to_string().starts_with("public input count mismatch"));
    }
}

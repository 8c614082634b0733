use std::io;
use thiserror::Error;

/// Structural violation of the FASTQ / FASTA / QUAL grammar.
///
/// Line numbers are 1-based physical lines in the input stream. A
/// sequence/quality length mismatch in FASTQ is reported at the line holding
/// the record's header, everything else at the offending line itself.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("wrong formatted sequence at line {line}")]
    BadRecordLine { line: u64 },
    #[error("sequence and quality lengths differ at line {line}")]
    LengthMismatch { line: u64 },
    #[error("wrong sequence format at line {line}")]
    BadSequenceLine { line: u64 },
    #[error("wrong quality format at line {line}")]
    BadQualityLine { line: u64 },
    #[error("sequence id and quality id are not matched: {seq_id} - {qual_id}")]
    IdMismatch { seq_id: String, qual_id: String },
    #[error("sequence length and quality length are different: {seq} - {qual}")]
    CountMismatch { seq: usize, qual: usize },
    #[error("quality file is too short")]
    QualFileTooShort,
    #[error("sequence file is too short")]
    SeqFileTooShort,
    #[error("input looks gzip-compressed but the 'gzip' feature is disabled")]
    GzipDisabled,
}

impl FormatError {
    /// Line the error refers to, when it has one.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::BadRecordLine { line }
            | Self::LengthMismatch { line }
            | Self::BadSequenceLine { line }
            | Self::BadQualityLine { line } => Some(*line),
            _ => None,
        }
    }
}

/// A quality string that does not decode under the active encoding: a
/// character outside the encoding's legal score range, or a non-numeric
/// token in a QUAL file. Carries the raw offending string.
#[derive(Debug, Error)]
#[error("sequence quality is not in the correct format: {quality:?}")]
pub struct QualityError {
    pub quality: String,
}

/// Crate-level error: I/O, structural, or quality decoding.
#[derive(Debug, Error)]
pub enum TrimError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Quality(#[from] QualityError),
}

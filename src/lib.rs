//! Streaming quality trimmer for sequencing reads.
//!
//! - FASTQ (plain and `.gz`, auto-detect) and paired FASTA+QUAL input.
//! - Streaming, record-by-record (no full-file buffering), strict fail-fast
//!   validation with 1-based line numbers in errors.
//! - Phred quality decoding under Sanger / Solexa / Illumina encodings, with
//!   a best-effort encoding auto-detection heuristic.
//! - Trailing-edge (truncating) and windowed (keep/reject) trimming.
//! - A synchronous one-shot pipeline fanning records out to pre- and
//!   post-trim consumers (writers, statistics).

pub mod decoder;
pub mod detect;
pub mod encoding;
pub mod error;
pub mod fasta;
pub mod fastq;
pub mod pipeline;
pub mod record;
pub mod stats;
pub mod trim;
pub mod writer;
mod util;

pub use crate::decoder::{NumericDecoder, PhredDecoder, QualityDecoder};
pub use crate::detect::{SAMPLE_BYTES, detect_encoding, detect_encoding_in_path};
pub use crate::encoding::QualityEncoding;
pub use crate::error::{FormatError, QualityError, TrimError};
pub use crate::fasta::FastaQualReader;
pub use crate::fastq::FastqReader;
pub use crate::pipeline::{Pipeline, RecordSink, RecordSource, SinkKind, Stage};
pub use crate::record::SeqRecord;
pub use crate::stats::{Distribution, GcStats, LengthStats, QualityStats};
pub use crate::trim::{DEFAULT_CUTOFF, DEFAULT_WINDOW, TailTrimmer, Trimmer, WindowTrimmer};
pub use crate::writer::{
    EmptyBehavior, FastaQualWriter, FastaWriter, FastqWriter, RecordWriter, WriterSink,
};

use crate::encoding::QualityEncoding;
use crate::fastq::FastqReader;
use crate::util::open_input;

use std::io::{self, Cursor, Read};
use std::path::Path;

/// Bytes sampled from the head of a stream when guessing the encoding.
pub const SAMPLE_BYTES: usize = 10_000_000;

/// Guess the quality encoding of a FASTQ sample.
///
/// The sample is parsed with a throwaway [`FastqReader`] and every record's
/// raw quality string feeds the running classifier. This is a best-effort
/// heuristic, not authoritative: returns `None` only when the sample never
/// pins down the character offset (empty or pathological input). A parse
/// error inside the sample ends the sample rather than failing detection,
/// since a bounded prefix routinely truncates mid-record.
pub fn detect_encoding(sample: &[u8]) -> Option<QualityEncoding> {
    let mut guess = EncodingGuess::new();
    for rec in FastqReader::from_bufread(Cursor::new(sample.to_vec())) {
        match rec {
            Ok(rec) => guess.observe(&rec.qual),
            Err(e) => {
                log::debug!("encoding sample ended early: {e}");
                break;
            }
        }
    }
    guess.encoding
}

/// Guess the encoding of a FASTQ file by sampling its first
/// [`SAMPLE_BYTES`] of (decompressed) content.
pub fn detect_encoding_in_path<P: AsRef<Path>>(
    path: P,
) -> Result<Option<QualityEncoding>, crate::error::TrimError> {
    let rdr = open_input(path.as_ref())?;
    let sample = sample_prefix(rdr, SAMPLE_BYTES)?;
    Ok(detect_encoding(&sample))
}

/// Read up to `limit` bytes from the head of a stream.
pub fn sample_prefix<R: Read>(reader: R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Incremental classifier state. Offset resolution comes first (a character
/// impossible under one offset hypothesis proves the other), then running
/// score bounds accumulate across the whole sample. Classification is
/// re-evaluated after every record over the cumulative bounds; the
/// Illumina 1.5 `B`-tail test uses the current record only.
struct EncodingGuess {
    encoding: Option<QualityEncoding>,
    offset: Option<i32>,
    lower: i32,
    upper: i32,
}

impl EncodingGuess {
    fn new() -> Self {
        Self {
            encoding: None,
            offset: None,
            lower: 41,
            upper: -5,
        }
    }

    fn observe(&mut self, quality: &str) {
        let b_tail = quality.ends_with('B');

        for c in quality.chars() {
            let q = c as i32;
            if self.offset.is_none() {
                if q - 64 < -5 {
                    self.offset = Some(33);
                } else if q - 33 > 41 {
                    self.offset = Some(64);
                }
            }
            if let Some(offset) = self.offset {
                self.lower = self.lower.min(q - offset);
                self.upper = self.upper.max(q - offset);
            }
        }

        let Some(offset) = self.offset else {
            return;
        };

        use QualityEncoding::*;
        self.encoding = Some(if self.lower < 0 && offset == 64 {
            Solexa
        } else if self.lower == 0 && self.upper == 40 && offset == 33 {
            Sanger
        } else if self.lower == 0 && self.upper == 40 && offset == 64 {
            Illumina13
        } else if self.lower == 2 && b_tail && offset == 64 {
            Illumina15
        } else if self.upper > 40 && offset == 33 {
            Illumina18
        } else if offset == 33 {
            Phred33
        } else {
            Phred64
        });
    }
}

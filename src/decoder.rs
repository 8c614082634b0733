use crate::encoding::QualityEncoding;
use crate::error::QualityError;

/// Capability: turn a raw quality string into one integer score per base.
///
/// Decoding is recomputed on every call; consumers that need the scores more
/// than once (validation, then analysis) simply decode again. Cost is
/// O(length) and the strings are short.
pub trait QualityDecoder {
    fn decode(&self, quality: &str) -> Result<Vec<i32>, QualityError>;
}

/// Decoder for FASTQ quality strings: one character per base,
/// `score = char code - offset`, bounds-checked against the encoding.
#[derive(Debug, Clone, Copy)]
pub struct PhredDecoder {
    encoding: QualityEncoding,
}

impl PhredDecoder {
    pub fn new(encoding: QualityEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> QualityEncoding {
        self.encoding
    }
}

impl Default for PhredDecoder {
    fn default() -> Self {
        Self::new(QualityEncoding::Sanger)
    }
}

impl QualityDecoder for PhredDecoder {
    fn decode(&self, quality: &str) -> Result<Vec<i32>, QualityError> {
        let offset = self.encoding.offset();
        let lo = self.encoding.lower_bound();
        let hi = self.encoding.upper_bound();
        let mut scores = Vec::with_capacity(quality.len());
        for c in quality.chars() {
            let q = c as i32 - offset;
            if q < lo || q > hi {
                return Err(QualityError {
                    quality: quality.to_string(),
                });
            }
            scores.push(q);
        }
        Ok(scores)
    }
}

/// Decoder for QUAL-file quality strings: whitespace-separated integer
/// tokens, one per base. No bounds check beyond parseability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericDecoder;

impl QualityDecoder for NumericDecoder {
    fn decode(&self, quality: &str) -> Result<Vec<i32>, QualityError> {
        quality
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| QualityError {
                    quality: quality.to_string(),
                })
            })
            .collect()
    }
}

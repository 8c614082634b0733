use std::fmt;

/// FASTQ quality encodings: a character offset plus the legal decoded-score
/// range for the variant.
///
/// The `Phred33` / `Phred64` variants are offset-only fallbacks whose bounds
/// span the lowest and highest scores possible across all encodings; the
/// auto-detector returns them when it can fix the offset but not the exact
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityEncoding {
    Sanger,
    Solexa,
    Illumina13,
    Illumina15,
    Illumina18,
    Phred33,
    Phred64,
}

impl QualityEncoding {
    /// Character offset subtracted from each quality character code.
    #[inline]
    pub fn offset(self) -> i32 {
        match self {
            Self::Sanger | Self::Illumina18 | Self::Phred33 => 33,
            Self::Solexa | Self::Illumina13 | Self::Illumina15 | Self::Phred64 => 64,
        }
    }

    /// Lowest legal decoded score.
    #[inline]
    pub fn lower_bound(self) -> i32 {
        match self {
            Self::Sanger | Self::Illumina13 | Self::Illumina18 => 0,
            Self::Solexa | Self::Phred33 | Self::Phred64 => -5,
            Self::Illumina15 => 3,
        }
    }

    /// Highest legal decoded score.
    #[inline]
    pub fn upper_bound(self) -> i32 {
        match self {
            Self::Illumina18 => 41,
            Self::Phred33 | Self::Phred64 => 50,
            _ => 40,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sanger => "Sanger",
            Self::Solexa => "Solexa",
            Self::Illumina13 => "Illumina 1.3",
            Self::Illumina15 => "Illumina 1.5",
            Self::Illumina18 => "Illumina 1.8",
            Self::Phred33 => "Undefined Phred+33",
            Self::Phred64 => "Undefined Phred+64",
        }
    }
}

impl fmt::Display for QualityEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

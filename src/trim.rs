use crate::decoder::QualityDecoder;
use crate::error::TrimError;
use crate::record::SeqRecord;

/// Default quality cutoff for both trimming algorithms.
pub const DEFAULT_CUTOFF: i32 = 18;

/// Default analysis-window length for [`WindowTrimmer`].
pub const DEFAULT_WINDOW: usize = 20;

/// Capability: take a record and produce the retained portion of it. A
/// rejected record comes back as the canonical empty record, id intact.
pub trait Trimmer {
    fn trim(&self, record: &SeqRecord) -> Result<SeqRecord, TrimError>;
}

/// Trailing-edge trimmer: truncates the low-quality tail of a read.
///
/// Scans from the last base backward keeping a running suffix quality sum.
/// Whenever the sum falls below `cutoff` times the distance to the current
/// cut index, the cut index moves to that position and the sum resets.
/// The accumulator is resettable, so several bad stretches each ratchet the
/// cut point further left. The final record is the prefix up to the cut
/// index.
pub struct TailTrimmer {
    decoder: Box<dyn QualityDecoder>,
    cutoff: i32,
    min_length: Option<usize>,
}

impl TailTrimmer {
    pub fn new(decoder: Box<dyn QualityDecoder>) -> Self {
        Self {
            decoder,
            cutoff: DEFAULT_CUTOFF,
            min_length: None,
        }
    }

    pub fn cutoff(mut self, cutoff: i32) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Reject (instead of truncate) reads that end up shorter than this.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }
}

impl Trimmer for TailTrimmer {
    fn trim(&self, record: &SeqRecord) -> Result<SeqRecord, TrimError> {
        let qual = self.decoder.decode(&record.qual)?;

        let mut cut = qual.len();
        let mut cum_quality: i64 = 0;
        for i in (0..qual.len()).rev() {
            // The proportional cutoff is measured against the *current* cut
            // index, not the sequence end.
            let cum_cutoff = self.cutoff as i64 * (cut - i) as i64;
            cum_quality += qual[i] as i64;
            if cum_quality - cum_cutoff < 0 {
                cut = i;
                cum_quality = 0;
            }
        }

        if let Some(min) = self.min_length {
            if cut < min {
                return Ok(SeqRecord::rejected(&record.id));
            }
        }
        Ok(SeqRecord::new(
            &record.id,
            &record.seq[..cut],
            &record.qual[..cut],
        ))
    }
}

/// Windowed trimmer: a binary keep/reject filter over the whole read.
///
/// Slides a window of `window` bases from the sequence end toward the start
/// and sums each window's scores independently; one window below
/// `cutoff * window` rejects the entire read. Never truncates. With no
/// window length configured the window spans the whole sequence; reads
/// shorter than the window are kept.
pub struct WindowTrimmer {
    decoder: Box<dyn QualityDecoder>,
    cutoff: i32,
    window: Option<usize>,
}

impl WindowTrimmer {
    /// Analysis window of [`DEFAULT_WINDOW`] bases.
    pub fn new(decoder: Box<dyn QualityDecoder>) -> Self {
        Self::with_window(decoder, DEFAULT_WINDOW)
    }

    /// Fixed-length analysis window.
    pub fn with_window(decoder: Box<dyn QualityDecoder>, window: usize) -> Self {
        Self {
            decoder,
            cutoff: DEFAULT_CUTOFF,
            window: Some(window),
        }
    }

    /// Analysis window spanning the whole sequence.
    pub fn whole_sequence(decoder: Box<dyn QualityDecoder>) -> Self {
        Self {
            decoder,
            cutoff: DEFAULT_CUTOFF,
            window: None,
        }
    }

    pub fn cutoff(mut self, cutoff: i32) -> Self {
        self.cutoff = cutoff;
        self
    }
}

impl Trimmer for WindowTrimmer {
    fn trim(&self, record: &SeqRecord) -> Result<SeqRecord, TrimError> {
        let qual = self.decoder.decode(&record.qual)?;
        let window = self.window.unwrap_or(qual.len());

        let cum_cutoff = self.cutoff as i64 * window as i64;
        let mut first = qual.len() as i64 - window as i64;
        while first >= 0 {
            let start = first as usize;
            let sum: i64 = qual[start..start + window].iter().map(|&q| q as i64).sum();
            if sum - cum_cutoff < 0 {
                return Ok(SeqRecord::rejected(&record.id));
            }
            first -= 1;
        }
        Ok(record.clone())
    }
}

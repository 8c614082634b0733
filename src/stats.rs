use crate::decoder::QualityDecoder;
use crate::error::TrimError;
use crate::pipeline::{RecordSink, SinkKind};
use crate::record::SeqRecord;

/// Running univariate distribution: count, min, max, mean and standard
/// deviation (Welford), no sample storage.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    count: u64,
    min: f64,
    max: f64,
    mean: f64,
    m2: f64,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation; 0 with fewer than two values.
    pub fn sd(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.m2 / (self.count - 1) as f64).sqrt()
        }
    }
}

/// Read-length distribution. Rejected (empty) records are not counted.
#[derive(Debug, Default)]
pub struct LengthStats {
    dist: Distribution,
}

impl LengthStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distribution(&self) -> &Distribution {
        &self.dist
    }
}

impl RecordSink for LengthStats {
    fn kind(&self) -> SinkKind {
        SinkKind::LengthStats
    }

    fn on_record(&mut self, record: &SeqRecord) -> Result<(), TrimError> {
        if record.is_empty() || record.qual.is_empty() {
            return Ok(());
        }
        self.dist.add(record.len() as f64);
        Ok(())
    }
}

/// GC content: a per-record GC-fraction distribution plus the global GC
/// proportion over all bases seen.
#[derive(Debug, Default)]
pub struct GcStats {
    dist: Distribution,
    base_count: u64,
    gc_count: u64,
}

impl GcStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distribution(&self) -> &Distribution {
        &self.dist
    }

    /// GC bases over all bases, across every record seen.
    pub fn gc_content(&self) -> f64 {
        if self.base_count == 0 {
            0.0
        } else {
            self.gc_count as f64 / self.base_count as f64
        }
    }
}

impl RecordSink for GcStats {
    fn kind(&self) -> SinkKind {
        SinkKind::GcStats
    }

    fn on_record(&mut self, record: &SeqRecord) -> Result<(), TrimError> {
        if record.is_empty() {
            return Ok(());
        }
        let gc = record
            .seq
            .bytes()
            .filter(|b| matches!(b, b'G' | b'C' | b'g' | b'c'))
            .count() as u64;
        self.base_count += record.len() as u64;
        self.gc_count += gc;
        self.dist.add(gc as f64 / record.len() as f64);
        Ok(())
    }
}

/// Per-position quality distributions, from base 1 up to the longest read
/// seen. A record whose quality does not decode is logged and skipped; one
/// bad record does not abort the run.
pub struct QualityStats {
    decoder: Box<dyn QualityDecoder>,
    per_position: Vec<Distribution>,
}

impl QualityStats {
    pub fn new(decoder: Box<dyn QualityDecoder>) -> Self {
        Self {
            decoder,
            per_position: Vec::new(),
        }
    }

    /// One distribution per base position, index 0 = first base.
    pub fn positions(&self) -> &[Distribution] {
        &self.per_position
    }
}

impl RecordSink for QualityStats {
    fn kind(&self) -> SinkKind {
        SinkKind::QualityStats
    }

    fn on_record(&mut self, record: &SeqRecord) -> Result<(), TrimError> {
        if record.is_empty() || record.qual.is_empty() {
            return Ok(());
        }
        let scores = match self.decoder.decode(&record.qual) {
            Ok(scores) => scores,
            Err(e) => {
                log::warn!("skipping record {}: {e}", record.id);
                return Ok(());
            }
        };
        if self.per_position.len() < scores.len() {
            self.per_position.resize(scores.len(), Distribution::new());
        }
        for (dist, &q) in self.per_position.iter_mut().zip(&scores) {
            dist.add(q as f64);
        }
        Ok(())
    }
}

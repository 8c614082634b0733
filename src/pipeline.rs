use crate::error::TrimError;
use crate::record::SeqRecord;
use crate::trim::Trimmer;

/// Capability: a finite, non-restartable source of records. Implemented for
/// free by anything that iterates `Result<SeqRecord, TrimError>`: both
/// readers, or a plain `vec.into_iter()` in tests.
pub trait RecordSource {
    fn next_record(&mut self) -> Option<Result<SeqRecord, TrimError>>;
}

impl<I> RecordSource for I
where
    I: Iterator<Item = Result<SeqRecord, TrimError>>,
{
    fn next_record(&mut self) -> Option<Result<SeqRecord, TrimError>> {
        self.next()
    }
}

/// Kind tag for registered consumers. Registration is deduplicated by kind,
/// not by identity: at most one consumer of a given kind per stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Writer,
    LengthStats,
    GcStats,
    QualityStats,
    Other(&'static str),
}

/// Capability: consume one record per pipeline stage. Rejected reads arrive
/// as the canonical empty record.
pub trait RecordSink {
    fn kind(&self) -> SinkKind;
    fn on_record(&mut self, record: &SeqRecord) -> Result<(), TrimError>;
}

/// Where a consumer sits relative to the trimming stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreTrim,
    PostTrim,
}

/// One-shot synchronous driver: source → pre-trim sinks → trimmer →
/// post-trim sinks, one record at a time, in input order. Consumers are
/// notified in registration order. The pipeline borrows its collaborators,
/// so sinks remain inspectable by the caller after the run; `run` consumes
/// the pipeline, making a second run impossible by construction.
///
/// Any reader or trimmer error aborts the run and propagates; records
/// already fanned out stay fanned out.
pub struct Pipeline<'a> {
    source: &'a mut dyn RecordSource,
    trimmer: Option<&'a dyn Trimmer>,
    pre: Vec<&'a mut dyn RecordSink>,
    post: Vec<&'a mut dyn RecordSink>,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a mut dyn RecordSource) -> Self {
        Self {
            source,
            trimmer: None,
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    pub fn set_trimmer(&mut self, trimmer: &'a dyn Trimmer) {
        self.trimmer = Some(trimmer);
    }

    /// Register a consumer. Returns `false` (and registers nothing) when a
    /// consumer of the same kind is already present at that stage, or when
    /// registering post-trim with no trimmer configured.
    pub fn add_sink(&mut self, stage: Stage, sink: &'a mut dyn RecordSink) -> bool {
        if stage == Stage::PostTrim && self.trimmer.is_none() {
            return false;
        }
        let sinks = match stage {
            Stage::PreTrim => &mut self.pre,
            Stage::PostTrim => &mut self.post,
        };
        let kind = sink.kind();
        if sinks.iter().any(|s| s.kind() == kind) {
            return false;
        }
        sinks.push(sink);
        true
    }

    /// Drive the source to exhaustion. Returns the number of records read.
    pub fn run(mut self) -> Result<u64, TrimError> {
        let mut records: u64 = 0;
        while let Some(next) = self.source.next_record() {
            let record = next?;
            records += 1;
            for sink in self.pre.iter_mut() {
                sink.on_record(&record)?;
            }
            if let Some(trimmer) = self.trimmer {
                let trimmed = trimmer.trim(&record)?;
                for sink in self.post.iter_mut() {
                    sink.on_record(&trimmed)?;
                }
            }
        }
        Ok(records)
    }
}

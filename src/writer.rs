use crate::error::TrimError;
use crate::pipeline::{RecordSink, SinkKind};
use crate::record::SeqRecord;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Characters per line when wrapping FASTA sequence bodies.
pub const FASTA_LINE_WIDTH: usize = 70;

/// Characters per line when wrapping QUAL token lines. Tokens are never
/// split across lines.
pub const QUAL_LINE_WIDTH: usize = FASTA_LINE_WIDTH * 3;

/// Capability: persist one record in some on-disk format.
pub trait RecordWriter {
    fn write_record(&mut self, record: &SeqRecord) -> io::Result<()>;
}

/// Writes records in 4-line FASTQ form.
pub struct FastqWriter<W: Write> {
    out: W,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordWriter for FastqWriter<W> {
    fn write_record(&mut self, record: &SeqRecord) -> io::Result<()> {
        writeln!(self.out, "@{}\n{}\n+\n{}", record.id, record.seq, record.qual)?;
        self.out.flush()
    }
}

/// Writes records in FASTA form, discarding the quality string. Sequence
/// bodies wrap at [`FASTA_LINE_WIDTH`] columns.
pub struct FastaWriter<W: Write> {
    out: W,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordWriter for FastaWriter<W> {
    fn write_record(&mut self, record: &SeqRecord) -> io::Result<()> {
        writeln!(
            self.out,
            ">{}\n{}",
            record.id,
            wrap_chars(&record.seq, FASTA_LINE_WIDTH)
        )?;
        self.out.flush()
    }
}

/// Writes records as a FASTA + QUAL file pair, headers mirrored on both
/// sides.
pub struct FastaQualWriter<W: Write, Q: Write> {
    seq_out: W,
    qual_out: Q,
}

impl<W: Write, Q: Write> FastaQualWriter<W, Q> {
    pub fn new(seq_out: W, qual_out: Q) -> Self {
        Self { seq_out, qual_out }
    }

    pub fn into_parts(self) -> (W, Q) {
        (self.seq_out, self.qual_out)
    }
}

impl<W: Write, Q: Write> RecordWriter for FastaQualWriter<W, Q> {
    fn write_record(&mut self, record: &SeqRecord) -> io::Result<()> {
        writeln!(
            self.seq_out,
            ">{}\n{}",
            record.id,
            wrap_chars(&record.seq, FASTA_LINE_WIDTH)
        )?;
        self.seq_out.flush()?;
        writeln!(
            self.qual_out,
            ">{}\n{}",
            record.id,
            wrap_tokens(&record.qual, QUAL_LINE_WIDTH)
        )?;
        self.qual_out.flush()
    }
}

/// What a [`WriterSink`] does with rejected (empty) records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyBehavior {
    /// Write the record with empty sequence and quality.
    Write,
    /// Drop the record.
    Skip,
}

/// Adapts a [`RecordWriter`] to the [`RecordSink`] capability so it can be
/// registered on a pipeline stage. I/O failures abort the run.
pub struct WriterSink<W: RecordWriter> {
    writer: W,
    behavior: EmptyBehavior,
}

impl<W: RecordWriter> WriterSink<W> {
    pub fn new(writer: W, behavior: EmptyBehavior) -> Self {
        Self { writer, behavior }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: RecordWriter> RecordSink for WriterSink<W> {
    fn kind(&self) -> SinkKind {
        SinkKind::Writer
    }

    fn on_record(&mut self, record: &SeqRecord) -> Result<(), TrimError> {
        if record.is_empty() && self.behavior == EmptyBehavior::Skip {
            return Ok(());
        }
        self.writer.write_record(record).map_err(TrimError::Io)
    }
}

/// Open a path for writing, gzip-compressing when it ends in `.gz`.
pub fn create_output(path: &Path) -> Result<Box<dyn Write + Send>, TrimError> {
    let f = File::create(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gzip")]
        {
            let enc = flate2::write::GzEncoder::new(f, flate2::Compression::default());
            Ok(Box::new(BufWriter::new(enc)))
        }
        #[cfg(not(feature = "gzip"))]
        {
            Err(crate::error::FormatError::GzipDisabled.into())
        }
    } else {
        Ok(Box::new(BufWriter::new(f)))
    }
}

fn wrap_chars(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / width.max(1) + 1);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}

fn wrap_tokens(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut line_len = 0usize;
    for tok in s.split_whitespace() {
        if line_len == 0 {
            out.push_str(tok);
            line_len = tok.len();
        } else if line_len + 1 + tok.len() <= width {
            out.push(' ');
            out.push_str(tok);
            line_len += 1 + tok.len();
        } else {
            out.push('\n');
            out.push_str(tok);
            line_len = tok.len();
        }
    }
    out
}

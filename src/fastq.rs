use crate::error::{FormatError, TrimError};
use crate::record::SeqRecord;
use crate::util::open_input;

use std::io::BufRead;
use std::path::Path;

/// Streaming FASTQ reader (plain or `.gz`), strict and fail-fast.
///
/// Records are pulled one at a time; the stream is finite and
/// non-restartable. Quality lines may wrap across physical lines and may
/// start with `@` or `+`, so the end of the quality block is detected by
/// accumulated length, not by content. A record left open at end of input is
/// dropped silently; any line that fits no grammar rule aborts the stream
/// with a [`FormatError`] carrying its 1-based line number.
pub struct FastqReader {
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    // Header line of the record currently being parsed; length mismatches
    // are reported here.
    seq_line: u64,
}

impl FastqReader {
    /// Open from a file path. Auto-detects `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TrimError> {
        Ok(Self::from_bufread_boxed(open_input(path.as_ref())?))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory sample, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::from_bufread_boxed(Box::new(reader))
    }

    fn from_bufread_boxed(rdr: Box<dyn BufRead + Send>) -> Self {
        Self {
            rdr,
            line_num: 0,
            seq_line: 0,
        }
    }

    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n > 0 {
            self.line_num += 1;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }

    fn read_one(&mut self) -> Result<Option<SeqRecord>, TrimError> {
        let mut id: Option<String> = None;
        let mut seq = String::new();
        let mut line = String::with_capacity(256);

        loop {
            let n = self.read_line(&mut line)?;
            if n == 0 {
                // EOF. An unterminated in-progress record is not an error.
                return Ok(None);
            }
            if line.is_empty() {
                continue;
            }
            if id.is_none() && is_header(&line) {
                self.seq_line = self.line_num;
                id = Some(line[1..].to_string());
                continue;
            }
            if id.is_some() && is_sequence(&line) {
                seq.push_str(&line);
                continue;
            }
            if let Some(rec_id) = id.take() {
                if line.starts_with('+') {
                    let qual = self.consume_quality(seq.len(), &mut line)?;
                    if qual.len() != seq.len() {
                        return Err(FormatError::LengthMismatch {
                            line: self.seq_line,
                        }
                        .into());
                    }
                    return Ok(Some(SeqRecord { id: rec_id, seq, qual }));
                }
            }
            return Err(FormatError::BadRecordLine {
                line: self.line_num,
            }
            .into());
        }
    }

    /// Append lines to the quality accumulator until it is at least
    /// `target` characters long (or EOF), then trim surrounding whitespace.
    /// The terminator is length, never content: a quality line may itself
    /// look like a header or separator.
    fn consume_quality(&mut self, target: usize, line: &mut String) -> Result<String, TrimError> {
        let mut qual = String::with_capacity(target);
        loop {
            let n = self.read_line(line)?;
            if n == 0 {
                break;
            }
            qual.push_str(line);
            if qual.len() >= target {
                break;
            }
        }
        Ok(qual.trim().to_string())
    }
}

impl Iterator for FastqReader {
    type Item = Result<SeqRecord, TrimError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_one().transpose()
    }
}

// `^@.+$`
fn is_header(line: &str) -> bool {
    line.len() > 1 && line.starts_with('@')
}

// `^[A-Za-z]+$`
fn is_sequence(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_alphabetic())
}

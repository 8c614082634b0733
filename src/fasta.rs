use crate::error::{FormatError, TrimError};
use crate::record::SeqRecord;
use crate::util::open_input;

use std::io::{self, BufRead};
use std::path::Path;

/// Which of the two paired files a sub-reader parses. Controls the body-line
/// grammar, how body lines are joined, and the error reported on a bad line.
#[derive(Debug, Clone, Copy)]
enum Side {
    Sequence,
    Quality,
}

impl Side {
    // `^[A-Za-z]+$` for sequence bodies, `^[0-9\s]+$` for quality bodies.
    fn matches(self, line: &str) -> bool {
        match self {
            Side::Sequence => {
                !line.is_empty() && line.bytes().all(|b| b.is_ascii_alphabetic())
            }
            Side::Quality => {
                !line.is_empty()
                    && line
                        .bytes()
                        .all(|b| b.is_ascii_digit() || b.is_ascii_whitespace())
            }
        }
    }

    fn append(self, body: &mut String, line: &str) {
        match self {
            Side::Sequence => body.push_str(line.trim()),
            Side::Quality => {
                // Keep one separator between wrapped quality lines so the
                // integer tokens stay delimited after joining.
                body.push_str(line.trim());
                body.push(' ');
            }
        }
    }

    fn bad_line(self, line: u64) -> FormatError {
        match self {
            Side::Sequence => FormatError::BadSequenceLine { line },
            Side::Quality => FormatError::BadQualityLine { line },
        }
    }
}

/// Single-file reader for the FASTA-shaped half of a pair.
///
/// The format has no record terminator; a record ends at the next `>` header
/// or at EOF. The header that ends a record is not consumed. It is parked in
/// the one-line pushback slot and replayed as the first line of the next
/// call. That slot, together with the line counter, is the whole reader
/// state.
struct SideReader {
    rdr: Box<dyn BufRead + Send>,
    buffered: Option<String>,
    line_num: u64,
    side: Side,
}

impl SideReader {
    fn new(rdr: Box<dyn BufRead + Send>, side: Side) -> Self {
        Self {
            rdr,
            buffered: None,
            line_num: 0,
            side,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.buffered.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        let n = self.rdr.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_num += 1;
        if buf.ends_with('\n') {
            buf.pop();
        }
        if buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Read one (id, body) pair, or `None` at end of stream.
    fn read_record(&mut self) -> Result<Option<(String, String)>, TrimError> {
        let mut id: Option<String> = None;
        let mut body = String::new();
        while let Some(line) = self.next_line()? {
            if line.is_empty() {
                continue;
            }
            if is_fasta_header(&line) {
                if id.is_some() {
                    // Next record starts here; replay this header later.
                    self.buffered = Some(line);
                    break;
                }
                id = Some(line[1..].to_string());
                continue;
            }
            if id.is_none() || !self.side.matches(&line) {
                return Err(self.side.bad_line(self.line_num).into());
            }
            self.side.append(&mut body, &line);
        }
        Ok(id.map(|id| (id, body.trim_end().to_string())))
    }
}

/// Paired FASTA+QUAL reader: two sub-readers advanced in lock-step, with
/// cross-validation of ids and of sequence length against the number of
/// quality tokens after each pair is fetched.
pub struct FastaQualReader {
    seq: SideReader,
    qual: SideReader,
    done: bool,
}

impl FastaQualReader {
    /// Open from the two file paths. Auto-detects `.gz` on either side.
    pub fn from_paths<P: AsRef<Path>>(seq_path: P, qual_path: P) -> Result<Self, TrimError> {
        Ok(Self::from_boxed(
            open_input(seq_path.as_ref())?,
            open_input(qual_path.as_ref())?,
        ))
    }

    /// Wrap two already-opened streams.
    pub fn from_bufreads<R, Q>(seq: R, qual: Q) -> Self
    where
        R: BufRead + Send + 'static,
        Q: BufRead + Send + 'static,
    {
        Self::from_boxed(Box::new(seq), Box::new(qual))
    }

    fn from_boxed(seq: Box<dyn BufRead + Send>, qual: Box<dyn BufRead + Send>) -> Self {
        Self {
            seq: SideReader::new(seq, Side::Sequence),
            qual: SideReader::new(qual, Side::Quality),
            done: false,
        }
    }

    fn read_one(&mut self) -> Result<Option<SeqRecord>, TrimError> {
        let Some((seq_id, seq)) = self.seq.read_record()? else {
            // Both files must run out in the same step.
            if self.qual.read_record()?.is_some() {
                return Err(FormatError::SeqFileTooShort.into());
            }
            return Ok(None);
        };
        let Some((qual_id, qual)) = self.qual.read_record()? else {
            return Err(FormatError::QualFileTooShort.into());
        };
        if seq_id != qual_id {
            return Err(FormatError::IdMismatch {
                seq_id,
                qual_id,
            }
            .into());
        }
        let tokens = qual.split_whitespace().count();
        if seq.len() != tokens {
            return Err(FormatError::CountMismatch {
                seq: seq.len(),
                qual: tokens,
            }
            .into());
        }
        Ok(Some(SeqRecord {
            id: seq_id,
            seq,
            qual,
        }))
    }
}

impl Iterator for FastaQualReader {
    type Item = Result<SeqRecord, TrimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_one().transpose() {
            Some(Err(e)) => {
                self.done = true;
                Some(Err(e))
            }
            other => {
                if other.is_none() {
                    self.done = true;
                }
                other
            }
        }
    }
}

// `^>.+$`
fn is_fasta_header(line: &str) -> bool {
    line.len() > 1 && line.starts_with('>')
}

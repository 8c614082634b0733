/// One sequencing read: an (id, base sequence, quality string) triple.
///
/// The id is stored without its format marker (`@` / `>`); writers re-add
/// the marker. For every record emitted by a reader the quality decodes to
/// exactly one score per base. A trimmer signals rejection by rewriting the
/// record as the canonical empty record (`seq` and `qual` both empty, id
/// retained).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub seq: String,
    pub qual: String,
}

impl SeqRecord {
    pub fn new(id: impl Into<String>, seq: impl Into<String>, qual: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    /// The canonical empty record: rejection marker for trimmers.
    pub fn rejected(id: impl Into<String>) -> Self {
        Self::new(id, "", "")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

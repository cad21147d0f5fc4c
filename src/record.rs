/// First byte of a description line.
pub const DESCRIPTION_MARKER: u8 = b'>';

/// What a single input line contributes to the record being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Zero-length line; ignored entirely.
    Empty,
    /// Starts a new record.
    Description,
    /// Sequence (or quality) content of the current record.
    Data,
}

impl LineKind {
    #[inline]
    pub fn of(line: &[u8]) -> Self {
        match line.first() {
            None => LineKind::Empty,
            Some(&DESCRIPTION_MARKER) => LineKind::Description,
            Some(_) => LineKind::Data,
        }
    }
}

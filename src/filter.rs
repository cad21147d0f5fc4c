use crate::config::Config;
use crate::error::GrepFasError;
use crate::reader::LineReader;
use crate::record::LineKind;
use crate::selector::Selector;

use std::io::Write;

/// Mutable scan position, owned by [`RecordFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Outcome for the most recent description line; gates its data lines.
    pub previous_matched: bool,
    /// Zero-based ordinal of the next record to start.
    pub record_index: u64,
}

/// Why a scan stopped. Both are successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// End of input.
    Exhausted,
    /// `first_only` was set and the first matching record has been written.
    FirstMatchComplete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub records_seen: u64,
    pub records_matched: u64,
    pub lines_written: u64,
}

/// Single-pass record filter: copies matching records from a [`LineReader`]
/// to a writer, verbatim and in input order.
pub struct RecordFilter {
    config: Config,
    selector: Selector,
    state: ScanState,
    stats: ScanStats,
}

impl RecordFilter {
    pub fn new(config: Config) -> Self {
        let selector = Selector::new(&config.selection);
        Self {
            config,
            selector,
            state: ScanState::default(),
            stats: ScanStats::default(),
        }
    }

    /// Scan `input` to the end (or to the end of the first match with
    /// `first_only`). The writer is flushed before returning `Ok`.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        input: &mut LineReader,
        out: &mut W,
    ) -> Result<ScanOutcome, GrepFasError> {
        let mut outcome = ScanOutcome::Exhausted;

        while let Some(line) = input.next_line()? {
            match LineKind::of(line) {
                LineKind::Empty => continue,
                LineKind::Description => {
                    // Only a completed match can end the scan, so record 0
                    // never triggers this.
                    if self.state.previous_matched && self.config.first_only {
                        outcome = ScanOutcome::FirstMatchComplete;
                        break;
                    }

                    let matched = self.selector.matches(line, self.state.record_index)?;
                    self.state.previous_matched = matched;
                    self.stats.records_seen += 1;
                    if matched {
                        self.stats.records_matched += 1;
                        if self.config.print_description {
                            self.emit(out, line)?;
                        }
                    }
                    self.state.record_index += 1;
                }
                LineKind::Data => {
                    if self.state.previous_matched && self.config.print_sequence {
                        self.emit(out, line)?;
                    }
                }
            }
        }

        out.flush().map_err(GrepFasError::write_err)?;
        log::debug!(
            "{outcome:?} after {} records ({} matched, {} lines written)",
            self.stats.records_seen,
            self.stats.records_matched,
            self.stats.lines_written
        );
        Ok(outcome)
    }

    fn emit<W: Write + ?Sized>(&mut self, out: &mut W, line: &[u8]) -> Result<(), GrepFasError> {
        out.write_all(line)
            .and_then(|_| out.write_all(b"\n"))
            .map_err(GrepFasError::write_err)?;
        self.stats.lines_written += 1;
        Ok(())
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}

//! Like grep, but for FASTA/FASTQ records.
//!
//! - Streams lines from stdin (plain or `.gz`, auto-detected); bounded memory.
//! - A record is a `>` description line plus the data lines up to the next one.
//! - Records are selected by regex, by zero-based record number, or by a
//!   gene list of regexes, and copied to the output verbatim.
//! - Description and data lines can be printed independently; `first_only`
//!   stops after the first matching record.

pub mod config;
pub mod error;
pub mod filter;
pub mod gene_list;
pub mod reader;
pub mod record;
pub mod selector;
mod util;

pub use crate::config::{Config, ConfigRequest, Selection};
pub use crate::error::{ConfigError, GrepFasError, IoContext};
pub use crate::filter::{RecordFilter, ScanOutcome, ScanState, ScanStats};
pub use crate::reader::LineReader;
pub use crate::record::LineKind;
pub use crate::selector::Selector;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

/// Problems with the resolved command line, detected before any input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("search pattern is needed")]
    MissingPattern,
    #[error("invalid sequence number {token:?}: expected base-10 integers separated by commas")]
    InvalidIndex { token: String },
    #[error("cannot read gene list {path:?}: {source}")]
    GeneList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("numbered sequences (-n) cannot be combined with a gene list (-l)")]
    ConflictingModes,
}

#[derive(Debug, Error)]
pub enum GrepFasError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("write error: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
    #[error("input is gzip-compressed but the `gzip` feature is disabled")]
    GzipDisabled,
}

impl GrepFasError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn write_err(source: io::Error) -> Self {
        Self::Write { source }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::GzipDisabled => 2,
            Self::Pattern { .. } => 3,
            Self::Io { .. } | Self::Write { .. } => 1,
        }
    }

    /// True when the output consumer hung up (e.g. `grep-fas x | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

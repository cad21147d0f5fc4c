use crate::error::{ConfigError, GrepFasError};
use crate::gene_list;

use std::collections::HashSet;
use std::path::PathBuf;

/// How description lines are tested. Exactly one mode is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Unanchored regular expression, compiled on first use.
    Pattern(String),
    /// Zero-based record ordinals.
    NumberedIndices(HashSet<u64>),
    /// Regular expressions OR-ed together; bad entries never match.
    GeneList(Vec<String>),
}

impl Selection {
    pub fn mode_name(&self) -> &'static str {
        match self {
            Selection::Pattern(_) => "pattern",
            Selection::NumberedIndices(_) => "numbered",
            Selection::GeneList(_) => "gene-list",
        }
    }
}

/// Resolved, immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub print_description: bool,
    pub print_sequence: bool,
    pub first_only: bool,
    pub selection: Selection,
}

impl Config {
    /// Plain pattern mode with default print switches.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::with_selection(Selection::Pattern(pattern.into()))
    }

    pub fn with_selection(selection: Selection) -> Self {
        Self {
            print_description: true,
            print_sequence: true,
            first_only: false,
            selection,
        }
    }

    /// Pick the selection mode from the command line.
    ///
    /// A gene list wins over the positional pattern; `-n` turns the pattern
    /// into a list of record numbers. Reads the gene-list file, if any.
    pub fn resolve(req: ConfigRequest) -> Result<Self, GrepFasError> {
        let selection = match (req.gene_list, req.pattern) {
            (Some(_), _) if req.numbered => return Err(ConfigError::ConflictingModes.into()),
            (Some(path), pattern) => {
                if let Some(p) = pattern {
                    log::warn!("gene list {path:?} given; ignoring pattern {p:?}");
                }
                Selection::GeneList(gene_list::load(&path)?)
            }
            (None, Some(arg)) if req.numbered => Selection::NumberedIndices(parse_indices(&arg)?),
            (None, Some(arg)) => Selection::Pattern(arg),
            (None, None) => return Err(ConfigError::MissingPattern.into()),
        };
        log::debug!("selection mode: {}", selection.mode_name());

        Ok(Self {
            print_description: req.print_description,
            print_sequence: req.print_sequence,
            first_only: req.first_only,
            selection,
        })
    }
}

/// Raw command-line values, before mode resolution.
#[derive(Debug, Clone)]
pub struct ConfigRequest {
    pub pattern: Option<String>,
    pub numbered: bool,
    pub gene_list: Option<PathBuf>,
    pub print_description: bool,
    pub print_sequence: bool,
    pub first_only: bool,
}

impl Default for ConfigRequest {
    fn default() -> Self {
        Self {
            pattern: None,
            numbered: false,
            gene_list: None,
            print_description: true,
            print_sequence: true,
            first_only: false,
        }
    }
}

/// Parse `"0,2,5"` into a set of record ordinals.
///
/// Every comma-separated token must be a base-10 integer. Negative numbers
/// are accepted but dropped since no record can have them.
pub fn parse_indices(arg: &str) -> Result<HashSet<u64>, ConfigError> {
    let mut indices = HashSet::new();
    for token in arg.split(',') {
        let v: i64 = token.parse().map_err(|_| ConfigError::InvalidIndex {
            token: token.to_string(),
        })?;
        match u64::try_from(v) {
            Ok(idx) => {
                indices.insert(idx);
            }
            Err(_) => log::warn!("sequence number {v} can never match; ignoring"),
        }
    }
    Ok(indices)
}

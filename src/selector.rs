use crate::config::Selection;
use crate::error::GrepFasError;

use regex::bytes::Regex;
use std::collections::HashSet;

/// Compiled form of a [`Selection`], tested once per description line.
#[derive(Debug)]
pub enum Selector {
    Pattern {
        source: String,
        // compiled on the first description line
        regex: Option<Regex>,
    },
    NumberedIndices(HashSet<u64>),
    GeneList(Vec<Regex>),
}

impl Selector {
    pub fn new(selection: &Selection) -> Self {
        match selection {
            Selection::Pattern(p) => Selector::Pattern {
                source: p.clone(),
                regex: None,
            },
            Selection::NumberedIndices(set) => Selector::NumberedIndices(set.clone()),
            Selection::GeneList(patterns) => Selector::GeneList(compile_gene_list(patterns)),
        }
    }

    /// Does the description line of record number `index` match?
    pub fn matches(&mut self, line: &[u8], index: u64) -> Result<bool, GrepFasError> {
        match self {
            Selector::Pattern { source, regex } => {
                if regex.is_none() {
                    let re = Regex::new(source).map_err(|e| GrepFasError::Pattern {
                        pattern: source.clone(),
                        source: e,
                    })?;
                    *regex = Some(re);
                }
                Ok(regex.as_ref().is_some_and(|re| re.is_match(line)))
            }
            Selector::NumberedIndices(set) => Ok(set.contains(&index)),
            Selector::GeneList(res) => Ok(res.iter().any(|re| re.is_match(line))),
        }
    }
}

/// Entries that fail to compile are reported and left out; they never match.
fn compile_gene_list(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("skipping gene-list pattern {p:?}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_unanchored() {
        let mut sel = Selector::new(&Selection::Pattern("abc".into()));
        assert!(sel.matches(b">seq1 xxabcxx", 0).unwrap());
        assert!(!sel.matches(b">seq2 def", 1).unwrap());
    }

    #[test]
    fn bad_pattern_fails_on_first_use_only() {
        let mut sel = Selector::new(&Selection::Pattern("(".into()));
        match sel.matches(b">x", 0) {
            Err(GrepFasError::Pattern { pattern, .. }) => assert_eq!(pattern, "("),
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn indices_ignore_line_content() {
        let mut sel = Selector::new(&Selection::NumberedIndices(HashSet::from([1])));
        assert!(!sel.matches(b">a", 0).unwrap());
        assert!(sel.matches(b">a", 1).unwrap());
    }

    #[test]
    fn gene_list_skips_bad_entries() {
        let patterns = vec!["[".to_string(), "xyz".to_string()];
        let mut sel = Selector::new(&Selection::GeneList(patterns));
        assert!(sel.matches(b">gene xyz", 0).unwrap());
        assert!(!sel.matches(b">gene [", 1).unwrap());
    }
}

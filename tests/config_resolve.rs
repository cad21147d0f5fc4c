use grep_fas::{Config, ConfigError, ConfigRequest, GrepFasError, LineReader, RecordFilter, Selection};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Write};
use tempfile::tempdir;

fn request(pattern: Option<&str>) -> ConfigRequest {
    ConfigRequest {
        pattern: pattern.map(str::to_string),
        ..ConfigRequest::default()
    }
}

#[test]
fn defaults_print_everything() {
    let cfg = Config::resolve(request(Some("abc"))).unwrap();
    assert!(cfg.print_description);
    assert!(cfg.print_sequence);
    assert!(!cfg.first_only);
    assert_eq!(cfg.selection, Selection::Pattern("abc".into()));
}

#[test]
fn pattern_is_stored_without_compiling() {
    let cfg = Config::resolve(request(Some("(unclosed"))).unwrap();
    assert_eq!(cfg.selection, Selection::Pattern("(unclosed".into()));
}

#[test]
fn missing_pattern_is_rejected() {
    let err = Config::resolve(request(None)).unwrap_err();
    assert!(matches!(err, GrepFasError::Config(ConfigError::MissingPattern)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn numbered_mode_parses_indices() {
    let req = ConfigRequest {
        numbered: true,
        ..request(Some("0,2,2"))
    };
    let cfg = Config::resolve(req).unwrap();
    assert_eq!(cfg.selection, Selection::NumberedIndices(HashSet::from([0, 2])));
}

#[test]
fn numbered_mode_rejects_non_integers() {
    let req = ConfigRequest {
        numbered: true,
        ..request(Some("0,two"))
    };
    match Config::resolve(req) {
        Err(GrepFasError::Config(ConfigError::InvalidIndex { token })) => assert_eq!(token, "two"),
        other => panic!("expected InvalidIndex, got {other:?}"),
    }
}

#[test]
fn gene_list_takes_precedence_over_pattern() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("genes.txt");
    {
        let mut f = File::create(&path).unwrap();
        write!(f, "  abc  \n\n\r\nxyz\r\n").unwrap();
    }

    let req = ConfigRequest {
        gene_list: Some(path),
        ..request(Some("ignored"))
    };
    let cfg = Config::resolve(req).unwrap();
    assert_eq!(
        cfg.selection,
        Selection::GeneList(vec!["abc".to_string(), "xyz".to_string()])
    );

    let input = ">g1 abc\nAA\n>g2 ignored\nCC\n>g3 xyz\nGG\n";
    let mut rdr = LineReader::from_bufread(Cursor::new(input.as_bytes().to_vec()));
    let mut out = Vec::new();
    RecordFilter::new(cfg).run(&mut rdr, &mut out).unwrap();
    assert_eq!(out, b">g1 abc\nAA\n>g3 xyz\nGG\n");
}

#[test]
fn gene_list_with_numbered_flag_is_a_conflict() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("genes.txt");
    std::fs::write(&path, "abc\n").unwrap();

    let req = ConfigRequest {
        numbered: true,
        gene_list: Some(path),
        ..request(Some("0"))
    };
    let err = Config::resolve(req).unwrap_err();
    assert!(matches!(err, GrepFasError::Config(ConfigError::ConflictingModes)));
}

#[test]
fn unreadable_gene_list_is_a_config_error() {
    let dir = tempdir().unwrap();
    let req = ConfigRequest {
        gene_list: Some(dir.path().join("missing.txt")),
        ..request(None)
    };
    let err = Config::resolve(req).unwrap_err();
    assert!(matches!(err, GrepFasError::Config(ConfigError::GeneList { .. })));
    assert_eq!(err.exit_code(), 2);
}

#[cfg(feature = "gzip")]
#[test]
fn gzipped_gene_list_is_decompressed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("genes.txt.gz");
    {
        let f = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        writeln!(enc, "COX1").unwrap();
        writeln!(enc, "ND[0-9]").unwrap();
        enc.finish().unwrap();
    }

    let req = ConfigRequest {
        gene_list: Some(path),
        ..request(None)
    };
    let cfg = Config::resolve(req).unwrap();
    assert_eq!(
        cfg.selection,
        Selection::GeneList(vec!["COX1".to_string(), "ND[0-9]".to_string()])
    );
}

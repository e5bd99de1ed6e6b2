use std::fs;
use std::path::Path;

use caesar_core::analysis::{
    load_reference_frequencies, ReferenceError, ReferenceTable, ENGLISH_LETTER_FREQUENCIES,
};
use caesar_core::types::ReferenceVersion;
use tempfile::tempdir;

fn lines(values: &[&str]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

fn uniform_lines(count: usize) -> String {
    lines(&vec!["0.04"; count])
}

#[test]
fn bundled_table_matches_builtin_english() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/english_frequencies.txt");
    let table = ReferenceTable::from_path(&path).unwrap();
    let english = ReferenceTable::english();

    assert_eq!(table.frequencies.as_array(), &ENGLISH_LETTER_FREQUENCIES);
    assert_eq!(table.version, english.version);
    assert_eq!(
        english.version.as_str(),
        "sha256:d857534a42a401b1422ea108a5f2cc0c09dac17d738105839b8201b287151405"
    );
}

#[test]
fn values_are_read_in_order_without_normalizing() {
    let mut source: Vec<String> = (1..=26).map(|i| i.to_string()).collect();
    source[4] = "  7.5\t".to_string();
    let source = lines(&source.iter().map(String::as_str).collect::<Vec<_>>());

    let freq = load_reference_frequencies(source.as_bytes()).unwrap();

    assert_eq!(freq.get(0), Some(1.0));
    assert_eq!(freq.get(4), Some(7.5));
    assert_eq!(freq.get(25), Some(26.0));
    assert!(freq.sum() > 1.0);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let source = vec!["0.04"; 26].join("\r\n");
    let freq = load_reference_frequencies(source.as_bytes()).unwrap();
    assert!((freq.sum() - 1.04).abs() < 1e-9);
}

#[test]
fn lines_after_the_alphabet_are_ignored() {
    let source = format!("{}not a number\n", uniform_lines(26));
    assert!(load_reference_frequencies(source.as_bytes()).is_ok());
}

#[test]
fn short_sources_are_rejected() {
    let err = load_reference_frequencies(uniform_lines(25).as_bytes()).unwrap_err();
    assert!(matches!(err, ReferenceError::TooShort { found: 25 }), "{err}");

    let err = load_reference_frequencies("".as_bytes()).unwrap_err();
    assert!(matches!(err, ReferenceError::TooShort { found: 0 }), "{err}");
}

#[test]
fn non_numeric_lines_are_rejected() {
    let mut values = vec!["0.04"; 26];
    values[2] = "abc";
    let err = load_reference_frequencies(lines(&values).as_bytes()).unwrap_err();
    match err {
        ReferenceError::NotNumeric { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error {other}"),
    }

    values[2] = "";
    let err = load_reference_frequencies(lines(&values).as_bytes()).unwrap_err();
    assert!(matches!(err, ReferenceError::NotNumeric { line: 3, .. }), "{err}");
}

#[test]
fn negative_and_non_finite_values_are_rejected() {
    for bad in ["-0.1", "NaN", "inf"] {
        let mut values = vec!["0.04"; 26];
        values[10] = bad;
        let err = load_reference_frequencies(lines(&values).as_bytes()).unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidValue { line: 11, .. }), "{bad}: {err}");
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = ReferenceTable::from_path(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, ReferenceError::Io(_)));
    assert!(err.to_string().starts_with("Invalid reference data"));
}

#[test]
fn table_version_tracks_file_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uniform.txt");
    let content = uniform_lines(26);
    fs::write(&path, &content).unwrap();

    let table = ReferenceTable::from_path(&path).unwrap();
    assert_eq!(table.version, ReferenceVersion::from_content(content.as_bytes()));

    fs::write(&path, format!("{content}\n")).unwrap();
    let reloaded = ReferenceTable::from_path(&path).unwrap();
    assert_eq!(reloaded.frequencies, table.frequencies);
    assert_ne!(reloaded.version, table.version);
}

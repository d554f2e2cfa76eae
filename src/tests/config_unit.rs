use std::path::PathBuf;
use super::super::config::{LoadConfig, LoadMode, InputSource, INPUT_FILE};

#[test]
fn default_is_lenient_stdin() {
    let config = LoadConfig::default();
    assert_eq!(config.mode, LoadMode::Lenient);
    assert_eq!(config.source, InputSource::Stdin);
}

#[test]
fn features_select_config() {
    let config = LoadConfig::from_features();
    if cfg!(feature = "strict") {
        assert_eq!(config.mode, LoadMode::Strict);
    } else {
        assert_eq!(config.mode, LoadMode::Lenient);
    }
    if cfg!(feature = "input-file") {
        assert_eq!(config.source, InputSource::File(PathBuf::from(INPUT_FILE)));
    } else {
        assert_eq!(config.source, InputSource::Stdin);
    }
}

#[test]
fn missing_input_file_is_io_error() {
    let source = InputSource::File(PathBuf::from("definitely/not/here/input.txt"));
    assert!(source.open().is_err());
}

use docsum::presentation::config::{DEFAULT_MAX_FILE_SIZE_BYTES, Environment, Settings};

#[test]
fn given_environment_names_when_parsing_then_maps_to_variants() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("TEST".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.upload.max_file_size_bytes, DEFAULT_MAX_FILE_SIZE_BYTES);
    assert_eq!(settings.upload.max_file_size_bytes, 5 * 1024 * 1024);
    assert!(!settings.ocr.tesseract_cmd.is_empty());
    assert!(!settings.upload.directory.is_empty());
}

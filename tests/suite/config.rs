//! Config loading and contacts database path resolution

use std::path::Path;

use tally_config::{ConfigError, TallyConfig};
use tally_contacts::ContactStore;

#[test]
fn config_file_sets_calculator_and_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[calculator]\nshow_registers = true\n\n[contacts]\nseed_sample_data = true\n",
    )
    .unwrap();

    let config = TallyConfig::load_from(&path).unwrap();
    assert!(config.calculator.show_registers);
    assert!(config.contacts.seed_sample_data);
    assert_eq!(config.contacts.db_path, None);
}

#[test]
fn malformed_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[calculator\n").unwrap();

    let err = TallyConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn explicit_db_flag_opens_that_file() {
    let dir = tempfile::tempdir().unwrap();
    let flag = dir.path().join("flagged.db");

    let config = TallyConfig::default();
    let resolved = config.contacts_db_path(Some(Path::new(&flag)));
    assert_eq!(resolved, flag);

    ContactStore::open(&resolved).unwrap();
    assert!(flag.exists());
}

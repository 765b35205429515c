//! Loading configuration rooted at an explicit project directory.

use fl_config::{FieldlineConfig, PROJECT_DIR};
use tempfile::TempDir;

#[test]
fn load_from_reads_project_config_under_given_root() {
    let temp = TempDir::new().expect("tempdir should create");
    let dir = temp.path().join(PROJECT_DIR);
    std::fs::create_dir_all(&dir).expect(".fieldline should create");
    std::fs::write(
        dir.join("config.toml"),
        "[export]\nfile_prefix = \"purok_survey\"\n",
    )
    .expect("config should write");

    let config = FieldlineConfig::load_from(temp.path()).expect("config loads");
    assert_eq!(config.export.file_prefix, "purok_survey");
}

#[test]
fn load_from_without_project_config_uses_defaults() {
    let temp = TempDir::new().expect("tempdir should create");
    let config = FieldlineConfig::load_from(temp.path()).expect("config loads");
    assert_eq!(config.catalog.path, "mission_config.json");
}

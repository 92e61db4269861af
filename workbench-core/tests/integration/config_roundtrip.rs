//! Settings persistence integration tests

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use workbench_core::config::{ConfigManager, SETTINGS_FILE, WorkbenchSettings};
use workbench_core::parts::{PartsLayout, PartsLayoutAccessor};
use workbench_core::tracing::TracingLevel;

#[test]
fn settings_written_by_hand_drive_the_engine() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(SETTINGS_FILE),
        r#"
[layout]
root_part_id = "editor-area"
null_if_empty = false

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());
    let settings = manager.load_settings().unwrap();
    assert_eq!(settings.logging.level, TracingLevel::Debug);

    let history: Arc<dyn PartsLayoutAccessor> = Arc::new(settings.layout.activation_history());
    let layout = PartsLayout::new(history);
    assert_eq!(layout.active_part_id(), "editor-area");

    let serialized = layout
        .serialize(&settings.layout.serialize_options())
        .unwrap();
    assert!(serialized.is_some());
}

#[test]
fn save_creates_directory_and_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(temp_dir.path().join("nested").join("workbench"));

    let mut settings = WorkbenchSettings::default();
    settings.layout.null_if_empty = false;
    settings.logging.filter = Some("workbench_core=trace".to_string());
    manager.save_settings(&settings).unwrap();

    let content = fs::read_to_string(manager.settings_path()).unwrap();
    assert!(content.contains("[layout]"));
    assert!(content.contains("null_if_empty = false"));

    assert_eq!(manager.load_settings().unwrap(), settings);
}

// Config file round trips and how configured defaults reach new entries

use kcoder::config::Config;
use kcoder::engine::{EntryOptions, Queue};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.defaults.video_library = "libsvtav1".to_string();
    config.defaults.audio_bitrate = 160;
    config.startup.clear_screen = false;
    config.logging.level = "debug".to_string();

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_readable_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    Config::default().save_to(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    assert!(contents.contains("[defaults]"));
    assert!(contents.contains("video_library = \"libaom-av1\""));
    assert!(contents.contains("audio_bitrate = 128"));
    assert!(contents.contains("[logging]"));
}

#[test]
fn test_invalid_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[defaults\nvideo_library = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to parse config file"));
    assert!(message.contains("config.toml"));
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_configured_defaults_apply_to_blank_answers() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[defaults]\ncontainer = \"mkv\"\naudio_library = \"aac\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let mut queue = Queue::with_defaults(config.defaults);
    let added = queue.add_entry("film.mp4", 30, EntryOptions::default().container(" "));

    assert_eq!(added.output, "film.mkv");
    assert_eq!(added.audio_library, "aac");
    assert_eq!(added.video_library, "libaom-av1");
}

//! Integration tests for layered settings and file-backed preferences

use reportgrid_conf::{
	DefaultSource, FileStore, GridSettings, PAGE_SIZE_KEY, PreferenceStore, Preferences,
	SettingsLoader, TomlFileSource, open_preferences,
};
use rstest::*;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[fixture]
fn dir() -> TempDir {
	tempfile::tempdir().unwrap()
}

#[rstest]
fn test_toml_overrides_defaults(dir: TempDir) {
	let path = dir.path().join("reportgrid.toml");
	fs::write(
		&path,
		"default_page_size = 20\npage_size_options = [20, 40]\n",
	)
	.unwrap();

	let settings = SettingsLoader::new()
		.add_source(TomlFileSource::new(&path))
		.add_source(DefaultSource::new())
		.load()
		.unwrap();

	assert_eq!(settings.default_page_size, 20);
	assert_eq!(settings.page_size_options, vec![20, 40]);
	assert_eq!(settings.placeholder_row_limit, 15);
}

#[rstest]
fn test_missing_toml_file_is_ignored(dir: TempDir) {
	let settings = SettingsLoader::new()
		.add_source(DefaultSource::new())
		.add_source(TomlFileSource::new(dir.path().join("absent.toml")))
		.load()
		.unwrap();
	assert_eq!(settings, GridSettings::default());
}

#[rstest]
fn test_file_store_persists_across_instances(dir: TempDir) {
	let path = dir.path().join("nested").join("prefs.json");

	let prefs = Preferences::new(Arc::new(FileStore::new(&path)));
	prefs.set_page_size(100).unwrap();

	let reopened = FileStore::new(&path);
	assert_eq!(reopened.get(PAGE_SIZE_KEY).unwrap(), Some(json!(100)));
	assert_eq!(Preferences::new(Arc::new(reopened)).page_size(), Some(100));
}

#[rstest]
fn test_file_store_keeps_other_keys(dir: TempDir) {
	let path = dir.path().join("prefs.json");
	let store = FileStore::new(&path);
	store.set("theme", json!("dark")).unwrap();
	store.set(PAGE_SIZE_KEY, json!(20)).unwrap();
	assert!(store.remove(PAGE_SIZE_KEY).unwrap());

	assert_eq!(store.get("theme").unwrap(), Some(json!("dark")));
	assert_eq!(store.get(PAGE_SIZE_KEY).unwrap(), None);
}

#[rstest]
fn test_corrupt_preference_file_reads_as_absent(dir: TempDir) {
	let path = dir.path().join("prefs.json");
	fs::write(&path, "{not json").unwrap();
	let prefs = Preferences::new(Arc::new(FileStore::new(&path)));
	assert_eq!(prefs.page_size(), None);
	assert_eq!(prefs.resolve_page_size(None, 30), 30);
}

#[rstest]
fn test_open_preferences_uses_configured_path(dir: TempDir) {
	let settings = GridSettings {
		preferences_path: Some(dir.path().join("prefs.json")),
		..GridSettings::default()
	};
	open_preferences(&settings).set_page_size(50).unwrap();
	assert!(dir.path().join("prefs.json").exists());
}

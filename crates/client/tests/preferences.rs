use std::time::Duration;

use dex_client::{ClientError, FilePreferenceStore, PreferenceStore, SETTINGS_KEY};
use dex_filter::{
    toggle_display_mode, toggle_item, DisplayMode, FilterSettings, Nature, PokemonType, Variant,
};
use pretty_assertions::assert_eq;

const YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

fn sample_settings() -> FilterSettings {
    let settings = toggle_item(FilterSettings::default(), Nature::Jolly.into());
    let settings = toggle_item(settings, PokemonType::Dragon.into());
    toggle_display_mode(settings, Variant::Melanistic, DisplayMode::ShowOnlyUnacquired)
}

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path(), YEAR);
    store.save(&sample_settings()).unwrap();

    assert_eq!(store.path(), dir.path().join(format!("{SETTINGS_KEY}.json")));
    assert_eq!(store.load(), sample_settings());

    let reopened = FilePreferenceStore::new(dir.path(), YEAR);
    assert_eq!(reopened.load(), sample_settings());
}

#[test]
fn blob_carries_year_scale_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path(), YEAR);
    store.save(&FilterSettings::default()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let expires_at = raw["expires_at"].as_u64().unwrap();
    assert!(expires_at >= now + YEAR.as_secs() - 60);
    assert_eq!(raw["value"]["displayPerVariant"]["albino"], "all");
}

#[test]
fn missing_blob_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path().join("nested"), YEAR);
    assert_eq!(store.load(), FilterSettings::default());
}

#[test]
fn malformed_blob_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path(), YEAR);
    std::fs::write(store.path(), "{not json").unwrap();
    assert_eq!(store.load(), FilterSettings::default());

    std::fs::write(store.path(), r#"{"value":{"natures":["Sleepy"]},"expires_at":99999999999}"#)
        .unwrap();
    assert_eq!(store.load(), FilterSettings::default());
}

#[test]
fn expired_blob_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path(), YEAR);
    let blob = serde_json::json!({
        "value": serde_json::to_value(sample_settings()).unwrap(),
        "expires_at": 1,
    });
    std::fs::write(store.path(), blob.to_string()).unwrap();
    assert_eq!(store.load(), FilterSettings::default());
}

#[test]
fn clear_removes_blob_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path(), YEAR);
    store.save(&sample_settings()).unwrap();
    store.clear().unwrap();
    assert!(!store.path().exists());
    store.clear().unwrap();
    assert_eq!(store.load(), FilterSettings::default());
}

#[test]
fn failed_save_reports_path_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path(), YEAR);
    // A directory squatting on the blob path makes the final rename fail.
    std::fs::create_dir(store.path()).unwrap();
    std::fs::write(store.path().join("occupied"), "x").unwrap();

    let err = store.save(&sample_settings()).unwrap_err();
    match err {
        ClientError::Preferences { path, .. } => {
            assert_eq!(path, store.path().display().to_string());
        }
        other => panic!("expected preferences error, got {other:?}"),
    }
    assert!(!store.path().with_extension("json.tmp").exists());
    assert_eq!(store.load(), FilterSettings::default());
}

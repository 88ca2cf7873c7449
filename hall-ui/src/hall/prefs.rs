//! Persisted layout preferences
//!
//! Four layout fields survive a reload. They are stored as one JSON blob under
//! [`PREFS_KEY`] and merged with defaults field by field when read back, so a
//! blob written by an older build (or edited by hand) never blocks startup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::hall::layout_store::{
    clamp_left_width, clamp_right_width, DEFAULT_LEFT_WIDTH, DEFAULT_RIGHT_WIDTH,
};

pub const PREFS_KEY: &str = "ui-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPrefs {
    pub left_width: i32,
    pub right_width: i32,
    pub left_collapsed: bool,
    pub right_open: bool,
}

impl Default for LayoutPrefs {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_LEFT_WIDTH,
            right_width: DEFAULT_RIGHT_WIDTH,
            left_collapsed: false,
            right_open: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to read preferences: {0}")]
    Read(String),
    #[error("failed to write preferences: {0}")]
    Write(String),
    #[error("invalid preferences blob: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key/value string storage backing the preferences blob.
pub trait PrefsStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Browser `localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, PrefsError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PrefsError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PrefsStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.storage
            .get_item(key)
            .map_err(|e| PrefsError::Read(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PrefsError::Write(format!("{e:?}")))
    }
}

/// Process-local storage, used when `localStorage` is blocked.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parse a stored blob, taking each field from the blob when it has the right
/// type and from the defaults otherwise. Widths are clamped.
///
/// Blobs wrapped as `{"state": {...}, "version": n}` are unwrapped first.
pub fn merge_prefs(raw: &str) -> Result<LayoutPrefs, PrefsError> {
    let value: Value = serde_json::from_str(raw)?;
    let defaults = LayoutPrefs::default();

    let Some(mut fields) = value.as_object() else {
        return Ok(defaults);
    };
    if let Some(state) = fields.get("state").and_then(Value::as_object) {
        fields = state;
    }

    Ok(LayoutPrefs {
        left_width: clamp_left_width(width_field(fields, "leftWidth").unwrap_or(defaults.left_width)),
        right_width: clamp_right_width(
            width_field(fields, "rightWidth").unwrap_or(defaults.right_width),
        ),
        left_collapsed: bool_field(fields, "leftCollapsed").unwrap_or(defaults.left_collapsed),
        right_open: bool_field(fields, "rightOpen").unwrap_or(defaults.right_open),
    })
}

fn width_field(fields: &Map<String, Value>, name: &str) -> Option<i32> {
    let width = fields.get(name)?.as_f64()?;
    if !width.is_finite() {
        return None;
    }
    Some(width.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

fn bool_field(fields: &Map<String, Value>, name: &str) -> Option<bool> {
    fields.get(name)?.as_bool()
}

/// Read the stored preferences, falling back to defaults on any failure.
pub fn load_prefs(storage: &dyn PrefsStorage) -> LayoutPrefs {
    let raw = match storage.get(PREFS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return LayoutPrefs::default(),
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to read layout preferences: {}", e);
            return LayoutPrefs::default();
        }
    };

    match merge_prefs(&raw) {
        Ok(prefs) => prefs,
        Err(e) => {
            dioxus_logger::tracing::warn!("Ignoring stored layout preferences: {}", e);
            LayoutPrefs::default()
        }
    }
}

/// Browser storage when available, otherwise an in-memory stand-in.
pub fn open_storage() -> Rc<dyn PrefsStorage> {
    match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            dioxus_logger::tracing::warn!("Layout preferences will not persist: {}", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

pub fn save_prefs(storage: &dyn PrefsStorage, prefs: &LayoutPrefs) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(prefs)?;
    storage.set(PREFS_KEY, &raw)
}

/// Writes the preferences blob whenever the persisted subset changes.
#[derive(Debug, Default)]
pub struct PrefsSync {
    last_saved: Option<LayoutPrefs>,
}

impl PrefsSync {
    /// Start from the prefs that were just loaded, so the first observation
    /// does not rewrite an unchanged blob.
    pub fn new(loaded: LayoutPrefs) -> Self {
        Self {
            last_saved: Some(loaded),
        }
    }

    /// Persist `prefs` if they differ from the last write. Returns whether a
    /// write happened. A failed write is retried on the next observation.
    pub fn observe(
        &mut self,
        storage: &dyn PrefsStorage,
        prefs: LayoutPrefs,
    ) -> Result<bool, PrefsError> {
        if self.last_saved == Some(prefs) {
            return Ok(false);
        }
        save_prefs(storage, &prefs)?;
        self.last_saved = Some(prefs);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct BrokenStorage;

    impl PrefsStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, PrefsError> {
            Err(PrefsError::Read("SecurityError".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PrefsError> {
            Err(PrefsError::Write("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn missing_blob_yields_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(load_prefs(&storage), LayoutPrefs::default());
    }

    #[test]
    fn saved_blob_uses_camel_case_keys() {
        let storage = MemoryStorage::new();
        let prefs = LayoutPrefs {
            left_width: 300,
            right_width: 500,
            left_collapsed: true,
            right_open: true,
        };
        save_prefs(&storage, &prefs).unwrap();

        let raw = storage.get(PREFS_KEY).unwrap().unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            json!({
                "leftWidth": 300,
                "rightWidth": 500,
                "leftCollapsed": true,
                "rightOpen": true
            })
        );
        assert_eq!(load_prefs(&storage), prefs);
    }

    #[test]
    fn merge_fills_missing_and_malformed_fields() {
        let raw = json!({ "leftWidth": 350, "rightWidth": "wide", "rightOpen": true }).to_string();
        let prefs = merge_prefs(&raw).unwrap();
        assert_eq!(prefs.left_width, 350);
        assert_eq!(prefs.right_width, DEFAULT_RIGHT_WIDTH);
        assert!(!prefs.left_collapsed);
        assert!(prefs.right_open);
    }

    #[test]
    fn merge_clamps_out_of_range_widths() {
        let raw = json!({ "leftWidth": 9000, "rightWidth": 12.4 }).to_string();
        let prefs = merge_prefs(&raw).unwrap();
        assert_eq!(prefs.left_width, 420);
        assert_eq!(prefs.right_width, 320);
    }

    #[test]
    fn merge_unwraps_versioned_state() {
        let raw = json!({
            "state": { "leftWidth": 240, "leftCollapsed": true },
            "version": 0
        })
        .to_string();
        let prefs = merge_prefs(&raw).unwrap();
        assert_eq!(prefs.left_width, 240);
        assert!(prefs.left_collapsed);
    }

    #[test]
    fn non_object_blob_yields_defaults() {
        assert_eq!(merge_prefs("[1, 2]").unwrap(), LayoutPrefs::default());
        assert!(matches!(merge_prefs("{not json"), Err(PrefsError::Json(_))));

        let storage = MemoryStorage::new();
        storage.set(PREFS_KEY, "{not json").unwrap();
        assert_eq!(load_prefs(&storage), LayoutPrefs::default());
    }

    #[test]
    fn unreadable_storage_yields_defaults() {
        assert_eq!(load_prefs(&BrokenStorage), LayoutPrefs::default());
    }

    #[test]
    fn sync_writes_only_on_change() {
        let storage = MemoryStorage::new();
        let loaded = LayoutPrefs::default();
        let mut sync = PrefsSync::new(loaded);

        assert!(!sync.observe(&storage, loaded).unwrap());
        assert!(storage.get(PREFS_KEY).unwrap().is_none());

        let changed = LayoutPrefs {
            right_open: true,
            ..loaded
        };
        assert!(sync.observe(&storage, changed).unwrap());
        assert!(!sync.observe(&storage, changed).unwrap());
        assert_eq!(load_prefs(&storage), changed);
    }

    #[test]
    fn failed_write_is_retried() {
        let mut sync = PrefsSync::new(LayoutPrefs::default());
        let changed = LayoutPrefs {
            left_collapsed: true,
            ..LayoutPrefs::default()
        };
        let err = sync.observe(&BrokenStorage, changed).expect_err("write must fail");
        assert!(matches!(err, PrefsError::Write(_)));

        let storage = MemoryStorage::new();
        assert!(sync.observe(&storage, changed).unwrap());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips_prefs() {
        let storage = LocalStorage::open().unwrap();
        let prefs = LayoutPrefs {
            left_width: 260,
            right_width: 480,
            left_collapsed: false,
            right_open: true,
        };
        save_prefs(&storage, &prefs).unwrap();
        assert_eq!(load_prefs(&storage), prefs);

        storage.set(PREFS_KEY, r#"{"leftWidth": 1}"#).unwrap();
        assert_eq!(load_prefs(&storage).left_width, 220);
    }
}

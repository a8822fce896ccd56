//! Wheel configuration and its persistence
//!
//! Persisted as a single JSON document under one well-known key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FONT_SIZE, DEFAULT_MIN_SPEED, DEFAULT_RANDOM_SPEED, DEFAULT_TICKS_PER_SECTOR,
};
use crate::error::WheelError;

/// Key-value storage for the persisted configuration
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError>;
}

/// In-memory store (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Result<Self, WheelError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| WheelError::MissingResource("localStorage".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl SettingsStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError> {
        self.storage
            .get_item(key)
            .map_err(|e| WheelError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WheelError::Storage(format!("{e:?}")))
    }
}

/// User-editable wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WheelConfig {
    /// First selectable label list
    pub players: Vec<String>,
    /// Second selectable label list
    pub presents: Vec<String>,
    /// Sector palette; empty or blank-first means the default palette
    pub colors: Vec<String>,
    /// Tick marks per sector (clamped to at least 1 when applied)
    pub tick_per_sector: i32,
    /// Floor of the randomized launch speed
    pub min_speed: f64,
    /// Width of the random addition to `min_speed`
    pub random_speed: f64,
    /// Label size in pixels
    pub font_size: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            presents: Vec::new(),
            colors: Vec::new(),
            tick_per_sector: DEFAULT_TICKS_PER_SECTOR,
            min_speed: DEFAULT_MIN_SPEED,
            random_speed: DEFAULT_RANDOM_SPEED,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl WheelConfig {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "lmd-wheel-settings";

    /// Clamp out-of-range numbers instead of rejecting them
    pub fn sanitized(mut self) -> Self {
        self.tick_per_sector = self.tick_per_sector.max(1);
        self.min_speed = non_negative(self.min_speed);
        self.random_speed = non_negative(self.random_speed);
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        self
    }

    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        Ok(serde_json::from_str::<Self>(json)?.sanitized())
    }

    pub fn to_json(&self) -> Result<String, WheelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load from the store, falling back to defaults on absence or corruption
    pub fn load(store: &impl SettingsStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded wheel settings from storage");
                    config
                }
                Err(e) => {
                    log::warn!("Stored wheel settings unreadable ({e}), using defaults");
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default wheel settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read wheel settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Persist to the store
    pub fn save(&self, store: &mut impl SettingsStore) -> Result<(), WheelError> {
        let json = self.to_json()?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Wheel settings saved");
        Ok(())
    }
}

/// Leading integer of a form field: "10.5" reads as 10 and "12px" as 12.
/// `None` when no digits lead the text.
pub fn parse_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign_len = text.len() - unsigned.len();
    text[..sign_len + digits].parse().ok()
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = WheelConfig::default().to_json().unwrap();
        for key in [
            "players",
            "presents",
            "colors",
            "tickPerSector",
            "minSpeed",
            "randomSpeed",
            "fontSize",
        ] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key} in {json}");
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = WheelConfig::from_json(r#"{"minSpeed": 3000, "players": ["a", "b"]}"#).unwrap();
        assert_eq!(config.min_speed, 3000.0);
        assert_eq!(config.players, vec!["a", "b"]);
        assert_eq!(config.random_speed, DEFAULT_RANDOM_SPEED);
        assert_eq!(config.tick_per_sector, DEFAULT_TICKS_PER_SECTOR);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = WheelConfig {
            tick_per_sector: -4,
            min_speed: -10.0,
            random_speed: f64::NAN,
            font_size: 0.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.tick_per_sector, 1);
        assert_eq!(config.min_speed, 0.0);
        assert_eq!(config.random_speed, 0.0);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(WheelConfig::load(&store), WheelConfig::default());
    }

    #[test]
    fn test_load_malformed_uses_defaults() {
        let store = MemoryStore::with_entry(WheelConfig::STORAGE_KEY, "{not json");
        assert_eq!(WheelConfig::load(&store), WheelConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let config = WheelConfig {
            colors: vec!["#fff".into(), "#000".into()],
            tick_per_sector: 4,
            ..Default::default()
        };
        config.save(&mut store).unwrap();
        assert_eq!(WheelConfig::load(&store), config);
    }

    #[test]
    fn test_parse_int_takes_leading_integer() {
        assert_eq!(parse_int("10"), Some(10));
        assert_eq!(parse_int("10.5"), Some(10));
        assert_eq!(parse_int("  12px"), Some(12));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+7.9"), Some(7));
        assert_eq!(parse_int(".5"), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_storage_key_matches_existing_saves() {
        let json = r#"{"players":["a"],"tickPerSector":5}"#;
        let store = MemoryStore::with_entry("lmd-wheel-settings", json);
        let config = WheelConfig::load(&store);
        assert_eq!(config.players, vec!["a"]);
        assert_eq!(config.tick_per_sector, 5);
    }
}

use crate::registry::{ActionItem, ActionRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One configured action, as written by the settings UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSetting {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    #[serde(default)]
    pub extended_only: bool,
}

/// On-disk settings for the context menu module.
///
/// `enabled` and `use_cascade` are consumed by the registration side; the
/// in-process handler only reads the action list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub use_cascade: bool,
    #[serde(default)]
    pub actions: Vec<ActionSetting>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        let actions = ActionRegistry::builtin()
            .iter()
            .map(|action| ActionSetting {
                id: action.id.clone(),
                label: action.label.clone(),
                icon_path: None,
                extended_only: action.extended_only,
            })
            .collect();

        Self {
            enabled: true,
            use_cascade: true,
            actions,
        }
    }
}

/// The settings file path under the user's home directory, if one can be
/// determined.
pub fn settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".context-menu-edit").join("settings.json"))
}

impl Settings {
    /// Loads settings from the default location. A missing file yields the
    /// built-in defaults; an unreadable or malformed file is an error.
    pub fn load() -> Result<Self, SettingsError> {
        let Some(path) = settings_path() else {
            tracing::warn!(target: "settings", "No home directory, using default settings");
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(target: "settings", path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        tracing::debug!(
            target: "settings",
            path = %path.display(),
            actions = settings.actions.len(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Converts the configured actions into a registry snapshot.
    ///
    /// Duplicate ids are preserved in order; uniqueness is the settings UI's
    /// responsibility, so a duplicate here is only worth a warning.
    pub fn registry(&self) -> ActionRegistry {
        let mut seen = HashSet::new();
        for action in &self.actions {
            if !seen.insert(action.id.as_str()) {
                tracing::warn!(target: "settings", id = %action.id, "Duplicate action id in settings");
            }
        }

        ActionRegistry::new(
            self.actions
                .iter()
                .map(|action| {
                    ActionItem::new(
                        action.id.clone(),
                        action.label.clone(),
                        action.icon_path.clone().unwrap_or_default(),
                        action.extended_only,
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_carry_builtin_actions() {
        let settings = Settings::default();
        assert!(settings.enabled);
        assert!(settings.use_cascade);
        assert_eq!(settings.actions.len(), 2);
        assert_eq!(settings.actions[0].id, "open_ps_here");
        assert_eq!(settings.actions[1].id, "copy_path");
        assert!(settings.actions[1].extended_only);
    }

    #[test]
    fn test_parse_settings_json() {
        let json = r#"{
            "enabled": true,
            "useCascade": false,
            "actions": [
                {"id": "open_terminal", "label": "Open Terminal", "iconPath": "C:\\icons\\term.ico"},
                {"id": "copy_path", "label": "Copy full path", "extendedOnly": true}
            ]
        }"#;

        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(!settings.use_cascade);
        assert_eq!(settings.actions.len(), 2);
        assert_eq!(
            settings.actions[0].icon_path.as_deref(),
            Some("C:\\icons\\term.ico")
        );
        assert!(!settings.actions[0].extended_only);
        assert!(settings.actions[1].extended_only);

        let registry = settings.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).unwrap().icon, "C:\\icons\\term.ico");
        assert_eq!(registry.get(1).unwrap().icon, "");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.actions.len(), 2);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_round_trip_preserves_field_names() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"useCascade\""));
        assert!(json.contains("\"extendedOnly\""));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.actions.len(), settings.actions.len());
    }

    #[test]
    fn test_duplicate_ids_are_preserved() {
        let json = r#"{"actions": [
            {"id": "a", "label": "First"},
            {"id": "a", "label": "Second"}
        ]}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        let registry = settings.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).unwrap().label, "First");
        assert_eq!(registry.get(1).unwrap().label, "Second");
    }
}

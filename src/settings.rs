//! User preferences loaded from `settings.json`.
//!
//! Only presentation preferences live here; board content is never written
//! to disk. A missing file means defaults, an unreadable one logs a warning
//! and falls back to defaults.

use crate::constants::DEFAULT_EXPORT_BACKGROUND;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Board fill in exported images, as `#rrggbb`
    pub background: String,
    /// Fixed pixel density for exports instead of the window's scale factor
    pub scale_override: Option<f32>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            background: DEFAULT_EXPORT_BACKGROUND.to_string(),
            scale_override: None,
        }
    }
}

impl ExportSettings {
    /// Background as opaque RGBA, falling back to the default on a bad value.
    pub fn background_rgba(&self) -> [u8; 4] {
        parse_hex_color(&self.background)
            .or_else(|| parse_hex_color(DEFAULT_EXPORT_BACKGROUND))
            .unwrap_or([0xf9, 0xfa, 0xfb, 0xff])
    }

    /// Scale to render at: the override if valid, else the window's scale factor.
    pub fn effective_scale(&self, window_scale: f32) -> f32 {
        let valid = |scale: f32| scale.is_finite() && scale > 0.0;
        match self.scale_override {
            Some(scale) if valid(scale) => scale,
            _ if valid(window_scale) => window_scale,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    pub export: ExportSettings,
}

impl Settings {
    /// Load from the default location, never failing.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }
}

/// `<config dir>/empathyboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("empathyboard").join("settings.json"))
}

/// Parse `#rrggbb` (or `rrggbb`) into opaque RGBA bytes.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 4]> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b, 0xff])
}

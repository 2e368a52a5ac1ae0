//! Persisted theme preference: which scheme, which mode, and optional
//! per-anchor palette overrides.
//!
//! ```toml
//! color_scheme = "green"
//! mode = "dark"
//!
//! [overrides.primary]
//! pure = "#1c7ed6"
//! contrast_text = "#ffffff"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, TokenError};
use crate::tokens::{ColorKey, RawPalette, SchemeName};

use super::{Mode, Theme};

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnchorOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_text: Option<String>,
}

impl AnchorOverride {
    pub fn pure(mut self, value: impl Into<String>) -> Self {
        self.pure = Some(value.into());
        self
    }

    pub fn contrast_text(mut self, value: impl Into<String>) -> Self {
        self.contrast_text = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteOverrides {
    anchors: BTreeMap<ColorKey, AnchorOverride>,
}

impl PaletteOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(mut self, key: ColorKey, value: AnchorOverride) -> Self {
        self.anchors.insert(key, value);
        self
    }

    pub fn get(&self, key: ColorKey) -> Option<&AnchorOverride> {
        self.anchors.get(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Replaces curated anchor colors. A value that does not parse keeps the
    /// curated color so a bad preference never blocks rendering.
    pub(crate) fn apply_to(&self, palette: &mut RawPalette) {
        for (key, value) in &self.anchors {
            let mut anchor = palette.get(*key);
            if let Some(pure) = parse_override(*key, "pure", value.pure.as_deref()) {
                anchor.pure = pure;
            }
            if let Some(text) =
                parse_override(*key, "contrast_text", value.contrast_text.as_deref())
            {
                anchor.contrast_text = text;
            }
            palette.set(*key, anchor);
        }
    }
}

fn parse_override(key: ColorKey, field: &str, raw: Option<&str>) -> Option<Color> {
    let raw = raw?;
    match Color::parse(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::warn!(
                anchor = key.as_str(),
                field,
                error = %err,
                "ignoring palette override"
            );
            None
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Kept as text so an unknown or retired scheme still loads and degrades
    /// to the default at resolve time.
    pub color_scheme: String,
    pub mode: Mode,
    #[serde(skip_serializing_if = "PaletteOverrides::is_empty")]
    pub overrides: PaletteOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_scheme: SchemeName::default().as_str().to_string(),
            mode: Mode::default(),
            overrides: PaletteOverrides::default(),
        }
    }
}

impl ThemeConfig {
    pub fn new(scheme: SchemeName, mode: Mode) -> Self {
        Self {
            color_scheme: scheme.as_str().to_string(),
            mode,
            overrides: PaletteOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: PaletteOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Loads the preference file, or the default preference when it does not
    /// exist yet.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no theme config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| TokenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            scheme = %config.color_scheme,
            mode = config.mode.as_str(),
            "loaded theme config"
        );
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| TokenError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)
    }

    pub fn scheme(&self) -> SchemeName {
        SchemeName::resolve(&self.color_scheme)
    }

    pub fn resolve(&self) -> Theme {
        Theme::new(self.scheme(), self.mode).with_overrides(self.overrides.clone())
    }
}

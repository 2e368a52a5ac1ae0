use std::sync::Arc;

use crate::theme::{Mode, Theme, ThemeConfig};
use crate::tokens::SchemeName;

/// Owns the active [`Theme`]. The provider is the single writer; readers take
/// `Arc` snapshots that are never mutated, so a theme change replaces the
/// whole token set at once.
#[derive(Clone, Debug, Default)]
pub struct ThemeProvider {
    theme: Arc<Theme>,
    revision: u64,
}

impl ThemeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            theme: Arc::new(config.resolve()),
            revision: 0,
        }
    }

    pub fn with_theme(mut self, configure: impl FnOnce(Arc<Theme>) -> Theme) -> Self {
        self.theme = configure(self.theme).into();
        self
    }

    pub fn theme(&self) -> Arc<Theme> {
        self.theme.clone()
    }

    pub fn mode(&self) -> Mode {
        self.theme.mode
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if *self.theme == theme {
            return;
        }
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            scheme = theme.scheme.as_str(),
            mode = theme.mode.as_str(),
            "theme replaced"
        );
        self.theme = Arc::new(theme);
    }

    pub fn update(&mut self, change: impl FnOnce(&Theme) -> Theme) {
        let next = change(&self.theme);
        self.set_theme(next);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.update(|theme| theme.with_mode(mode));
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode().toggled());
    }

    /// Accepts the raw scheme name from user input; unknown names fall back
    /// to the default scheme.
    pub fn set_scheme(&mut self, name: &str) {
        let scheme = SchemeName::resolve(name);
        self.update(|theme| theme.with_scheme(scheme));
    }

    pub fn apply_config(&mut self, config: &ThemeConfig) {
        self.set_theme(config.resolve());
    }

    pub fn to_config(&self) -> ThemeConfig {
        ThemeConfig::new(self.theme.scheme, self.theme.mode)
            .with_overrides(self.theme.overrides.clone())
    }
}

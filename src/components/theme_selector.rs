use std::collections::BTreeMap;

use serde::Serialize;

use crate::gradient::two_tone_gradient;
use crate::style::{CURSOR_DEFAULT, CURSOR_POINTER, ComponentRecipe, SkeletonColors, TRANSPARENT};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{PaletteCatalog, RADIUS_PILL, SchemeName};

use super::{IconButtonStates, Neutrals, css, focus_ring};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ThemeSelectorArgs {
    pub selected: SchemeName,
}

impl ThemeSelectorArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, value: SchemeName) -> Self {
        self.selected = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SwatchTokens {
    pub label: String,
    pub fill: String,
    pub border: String,
    pub ring: String,
    pub hover_ring: String,
    pub check_icon: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ModeToggleTokens {
    pub icon_name: String,
    pub label: String,
    pub button: IconButtonStates,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ThemeSelectorTokens {
    pub panel_bg: String,
    pub panel_border: String,
    pub title_text: String,
    pub swatches: BTreeMap<SchemeName, SwatchTokens>,
    pub swatch_size: u16,
    pub swatch_radius: String,
    pub swatch_cursor: String,
    pub mode_toggle: ModeToggleTokens,
}

impl ThemeSelectorTokens {
    pub fn swatch(&self, scheme: SchemeName) -> Option<&SwatchTokens> {
        self.swatches.get(&scheme)
    }
}

const SWATCH_SIZE: u16 = 28;

/// Previews every scheme in the current mode so the picker shows what a
/// switch would actually look like.
pub fn generate_theme_selector_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &ThemeSelectorArgs,
) -> ThemeSelectorTokens {
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let swatches = SchemeName::ALL
        .into_iter()
        .map(|scheme| {
            let palette = PaletteCatalog::raw(scheme, mode);
            let selected = scheme == args.selected;
            let swatch = SwatchTokens {
                label: scheme.as_str().to_string(),
                fill: two_tone_gradient(palette.primary.pure, palette.secondary.pure),
                border: css(neutrals.border),
                ring: if selected {
                    format!("0 0 0 2px {}, 0 0 0 4px {}", neutrals.surface, palette.primary.pure)
                } else {
                    "none".to_string()
                },
                hover_ring: focus_ring(palette.primary.pure),
                check_icon: if selected {
                    css(palette.primary.contrast_text)
                } else {
                    TRANSPARENT.to_string()
                },
                selected,
            };
            (scheme, swatch)
        })
        .collect();

    let (icon_name, label) = match mode {
        Mode::Light => ("moon", "Switch to dark mode"),
        Mode::Dark => ("sun", "Switch to light mode"),
    };

    ThemeSelectorTokens {
        panel_bg: css(neutrals.surface),
        panel_border: css(neutrals.border),
        title_text: css(neutrals.ink),
        swatches,
        swatch_size: SWATCH_SIZE,
        swatch_radius: RADIUS_PILL.to_string(),
        swatch_cursor: CURSOR_POINTER.to_string(),
        mode_toggle: ModeToggleTokens {
            icon_name: icon_name.to_string(),
            label: label.to_string(),
            button: IconButtonStates::build(&neutrals, neutrals.soft, neutrals.border),
        },
    }
}

impl ComponentRecipe for ThemeSelectorTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let swatches = SchemeName::ALL
            .into_iter()
            .map(|scheme| {
                let swatch = SwatchTokens {
                    label: scheme.as_str().to_string(),
                    fill: skeleton.fill(),
                    border: skeleton.edge(),
                    ring: "none".to_string(),
                    hover_ring: "none".to_string(),
                    check_icon: TRANSPARENT.to_string(),
                    selected: false,
                };
                (scheme, swatch)
            })
            .collect();
        Self {
            panel_bg: skeleton.fill(),
            panel_border: skeleton.edge(),
            title_text: skeleton.ink(),
            swatches,
            swatch_size: SWATCH_SIZE,
            swatch_radius: RADIUS_PILL.to_string(),
            swatch_cursor: CURSOR_DEFAULT.to_string(),
            mode_toggle: ModeToggleTokens {
                icon_name: match mode {
                    Mode::Light => "moon".to_string(),
                    Mode::Dark => "sun".to_string(),
                },
                label: String::from("Toggle color mode"),
                button: IconButtonStates::skeleton(&skeleton),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn one_swatch_per_scheme_and_one_selected() {
        let theme = Theme::default();
        let selector = generate_theme_selector_tokens(
            &theme.colors,
            theme.mode,
            &ThemeSelectorArgs::new().selected(SchemeName::Teal),
        );
        assert_eq!(selector.swatches.len(), SchemeName::ALL.len());
        let selected: Vec<_> = selector
            .swatches
            .iter()
            .filter(|(_, swatch)| swatch.selected)
            .map(|(scheme, _)| *scheme)
            .collect();
        assert_eq!(selected, vec![SchemeName::Teal]);
    }

    #[test]
    fn swatches_preview_the_current_mode() {
        let light = Theme::default();
        let dark = light.with_mode(Mode::Dark);
        let args = ThemeSelectorArgs::new();
        let a = generate_theme_selector_tokens(&light.colors, light.mode, &args);
        let b = generate_theme_selector_tokens(&dark.colors, dark.mode, &args);
        let green = |tokens: &ThemeSelectorTokens| {
            tokens
                .swatch(SchemeName::Green)
                .map(|swatch| swatch.fill.clone())
        };
        assert_ne!(green(&a), green(&b));
        assert_eq!(a.mode_toggle.icon_name, "moon");
        assert_eq!(b.mode_toggle.icon_name, "sun");
    }
}

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::tokens::{
    Anchor, ColorKey, DARK_CANVAS, LIGHT_CANVAS, PaletteCatalog, RawPalette, SchemeName,
};

pub mod config;

pub use config::{AnchorOverride, PaletteOverrides, ThemeConfig};

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Page color that tints and muted text are blended toward.
    pub const fn canvas(self) -> Color {
        match self {
            Self::Light => LIGHT_CANVAS,
            Self::Dark => DARK_CANVAS,
        }
    }

    const fn grayscale_ink(self) -> Color {
        match self {
            Self::Light => Color::hex(0x212529),
            Self::Dark => Color::hex(0xe9ecef),
        }
    }
}

/// Tonal variants of one hue anchor in one mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct ColorShade {
    pub pure: Color,
    pub pure_shade: Color,
    pub bg: Color,
    pub bg_shade: Color,
    pub text: Color,
    pub text_shade: Color,
    pub contrast_text: Color,
}

struct BlendRecipe {
    bg: f32,
    bg_shade: f32,
    text_shade: f32,
    pure_shade: f32,
}

const fn blend_recipe(mode: Mode) -> BlendRecipe {
    match mode {
        Mode::Light => BlendRecipe {
            bg: 0.88,
            bg_shade: 0.76,
            text_shade: 0.30,
            pure_shade: 0.10,
        },
        Mode::Dark => BlendRecipe {
            bg: 0.80,
            bg_shade: 0.66,
            text_shade: 0.30,
            pure_shade: 0.10,
        },
    }
}

/// Derives the tonal variants of a hued anchor.
pub fn expand_shade(pure: Color, contrast_text: Color, mode: Mode) -> ColorShade {
    let canvas = mode.canvas();
    let recipe = blend_recipe(mode);
    let text = match mode {
        Mode::Light => pure.darken(0.25).saturate(0.10),
        Mode::Dark => pure.lighten(0.30).saturate(0.10),
    };

    ColorShade {
        pure,
        pure_shade: pure.darken(recipe.pure_shade),
        bg: pure.mix(canvas, recipe.bg),
        bg_shade: pure.mix(canvas, recipe.bg_shade),
        text,
        text_shade: text.mix(canvas, recipe.text_shade),
        contrast_text,
    }
}

/// Variant of [`expand_shade`] for `neutral` and `white`: the same blends,
/// with saturation stripped after blending so the tinted dark canvas cannot
/// leak hue back in.
pub fn expand_grayscale_shade(pure: Color, contrast_text: Color, mode: Mode) -> ColorShade {
    let canvas = mode.canvas();
    let recipe = blend_recipe(mode);
    let text = mode.grayscale_ink();

    ColorShade {
        pure: pure.grayscale(),
        pure_shade: pure.darken(recipe.pure_shade).grayscale(),
        bg: pure.mix(canvas, recipe.bg).grayscale(),
        bg_shade: pure.mix(canvas, recipe.bg_shade).grayscale(),
        text: text.grayscale(),
        text_shade: text.mix(canvas, recipe.text_shade).grayscale(),
        contrast_text,
    }
}

pub fn expand_anchor(key: ColorKey, anchor: Anchor, mode: Mode) -> ColorShade {
    if key.is_grayscale() {
        expand_grayscale_shade(anchor.pure, anchor.contrast_text, mode)
    } else {
        expand_shade(anchor.pure, anchor.contrast_text, mode)
    }
}

/// One value per [`ColorKey`]; indexing is total.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct ColorMap<T> {
    pub primary: T,
    pub secondary: T,
    pub tertiary: T,
    pub accent: T,
    pub success: T,
    pub warning: T,
    pub danger: T,
    pub neutral: T,
    pub white: T,
}

impl<T> ColorMap<T> {
    pub fn from_fn(mut f: impl FnMut(ColorKey) -> T) -> Self {
        Self {
            primary: f(ColorKey::Primary),
            secondary: f(ColorKey::Secondary),
            tertiary: f(ColorKey::Tertiary),
            accent: f(ColorKey::Accent),
            success: f(ColorKey::Success),
            warning: f(ColorKey::Warning),
            danger: f(ColorKey::Danger),
            neutral: f(ColorKey::Neutral),
            white: f(ColorKey::White),
        }
    }

    pub const fn get(&self, key: ColorKey) -> &T {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Tertiary => &self.tertiary,
            ColorKey::Accent => &self.accent,
            ColorKey::Success => &self.success,
            ColorKey::Warning => &self.warning,
            ColorKey::Danger => &self.danger,
            ColorKey::Neutral => &self.neutral,
            ColorKey::White => &self.white,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &T)> {
        ColorKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Every expanded shade of the active palette. Read-only for generators.
pub type AppColorTokens = ColorMap<ColorShade>;

impl ColorMap<ColorShade> {
    pub fn from_palette(palette: &RawPalette, mode: Mode) -> Self {
        Self::from_fn(|key| expand_anchor(key, palette.get(key), mode))
    }

    /// String-keyed access for callers holding a scheme name from props or
    /// config. Unknown names get the `neutral` shade.
    pub fn lookup(&self, name: &str) -> &ColorShade {
        self.get(ColorKey::resolve(name))
    }
}

/// Resolves a scheme name into its curated palette for `mode`. Never fails:
/// unknown names fall back to the default scheme.
pub fn resolve_palette(name: &str, mode: Mode) -> RawPalette {
    PaletteCatalog::raw(SchemeName::resolve(name), mode)
}

/// Immutable theme snapshot. Changes build a new value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Theme {
    pub scheme: SchemeName,
    pub mode: Mode,
    pub overrides: PaletteOverrides,
    pub colors: AppColorTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(SchemeName::default(), Mode::default())
    }
}

impl Theme {
    pub fn new(scheme: SchemeName, mode: Mode) -> Self {
        Self::build(scheme, mode, PaletteOverrides::default())
    }

    pub fn resolve(name: &str, mode: Mode) -> Self {
        Self::new(SchemeName::resolve(name), mode)
    }

    fn build(scheme: SchemeName, mode: Mode, overrides: PaletteOverrides) -> Self {
        let mut palette = PaletteCatalog::raw(scheme, mode);
        overrides.apply_to(&mut palette);
        Self {
            scheme,
            mode,
            colors: AppColorTokens::from_palette(&palette, mode),
            overrides,
        }
    }

    pub fn with_mode(&self, mode: Mode) -> Self {
        Self::build(self.scheme, mode, self.overrides.clone())
    }

    pub fn with_scheme(&self, scheme: SchemeName) -> Self {
        Self::build(scheme, self.mode, self.overrides.clone())
    }

    pub fn with_overrides(&self, overrides: PaletteOverrides) -> Self {
        Self::build(self.scheme, self.mode, overrides)
    }

    pub fn shade(&self, key: ColorKey) -> &ColorShade {
        self.colors.get(key)
    }

    /// Stable key over every field, including the resolved colors, so a
    /// hand-edited token set never shares a key with the catalog one.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.scheme.hash(&mut hasher);
        self.mode.hash(&mut hasher);
        self.overrides.hash(&mut hasher);
        self.colors.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_blue_in_light_mode() {
        let theme = Theme::default();
        assert_eq!(theme.scheme, SchemeName::Blue);
        assert_eq!(theme.mode, Mode::Light);
        assert_eq!(theme.colors.primary.pure, Color::hex(0x1c7ed6));
    }

    #[test]
    fn unknown_scheme_resolves_to_blue_palette() {
        for mode in Mode::ALL {
            assert_eq!(
                resolve_palette("chartreuse", mode),
                PaletteCatalog::raw(SchemeName::Blue, mode)
            );
        }
        assert_eq!(Theme::resolve("", Mode::Dark).scheme, SchemeName::Blue);
    }

    #[test]
    fn expand_shade_is_referentially_stable() {
        let pure = Color::hex(0x2f9e44);
        assert_eq!(
            expand_shade(pure, Color::WHITE, Mode::Light),
            expand_shade(pure, Color::WHITE, Mode::Light)
        );
    }

    #[test]
    fn light_tints_are_lighter_than_pure_and_dark_tints_darker() {
        let pure = Color::hex(0x1c7ed6);
        let light = expand_shade(pure, Color::WHITE, Mode::Light);
        assert!(light.bg.to_hsl().l > pure.to_hsl().l);
        assert!(light.bg.to_hsl().l > light.bg_shade.to_hsl().l);
        assert!(light.pure_shade.to_hsl().l < pure.to_hsl().l);
        assert!(light.text.to_hsl().l < pure.to_hsl().l);

        let dark = expand_shade(pure, Color::WHITE, Mode::Dark);
        assert!(dark.bg.to_hsl().l < pure.to_hsl().l);
        assert!(dark.text.to_hsl().l > pure.to_hsl().l);
    }

    #[test]
    fn grayscale_anchors_carry_no_hue() {
        for scheme in SchemeName::ALL {
            for mode in Mode::ALL {
                let theme = Theme::new(scheme, mode);
                for shade in [theme.colors.neutral, theme.colors.white] {
                    for color in [
                        shade.pure,
                        shade.pure_shade,
                        shade.bg,
                        shade.bg_shade,
                        shade.text,
                        shade.text_shade,
                    ] {
                        assert_eq!(color.r, color.g, "{color} is not gray in {}", mode.as_str());
                        assert_eq!(color.g, color.b, "{color} is not gray in {}", mode.as_str());
                    }
                }
            }
        }
    }

    #[test]
    fn grayscale_blends_match_the_hued_recipe() {
        for mode in Mode::ALL {
            let pure = Color::hex(0x868e96);
            let hued = expand_shade(pure, Color::WHITE, mode);
            let gray = expand_grayscale_shade(pure, Color::WHITE, mode);
            assert_eq!(gray.bg, hued.bg.grayscale());
            assert_eq!(gray.bg_shade, hued.bg_shade.grayscale());
            assert_eq!(gray.pure_shade, hued.pure_shade.grayscale());
        }
        let light = expand_grayscale_shade(Color::hex(0x868e96), Color::WHITE, Mode::Light);
        let dark = expand_grayscale_shade(Color::hex(0x868e96), Color::WHITE, Mode::Dark);
        assert_eq!(light.text, Color::hex(0x212529).grayscale());
        assert_eq!(dark.text, Color::hex(0xe9ecef).grayscale());
    }

    #[test]
    fn mode_switch_changes_every_background() {
        for scheme in SchemeName::ALL {
            let light = Theme::new(scheme, Mode::Light);
            let dark = light.with_mode(Mode::Dark);
            for key in ColorKey::ALL {
                assert_ne!(
                    light.shade(key).bg,
                    dark.shade(key).bg,
                    "{}/{}",
                    scheme.as_str(),
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn lookup_falls_back_to_neutral() {
        let theme = Theme::default();
        assert_eq!(theme.colors.lookup("danger"), &theme.colors.danger);
        assert_eq!(theme.colors.lookup("brand"), &theme.colors.neutral);
    }

    #[test]
    fn with_scheme_builds_a_new_value() {
        let blue = Theme::default();
        let green = blue.with_scheme(SchemeName::Green);
        assert_eq!(blue.scheme, SchemeName::Blue);
        assert_ne!(blue.colors.primary, green.colors.primary);
        assert_ne!(blue.fingerprint(), green.fingerprint());
        assert_eq!(blue.fingerprint(), Theme::default().fingerprint());
    }

    #[test]
    fn fingerprint_covers_resolved_colors() {
        let base = Theme::default();
        let mut edited = base.clone();
        edited.colors.primary.pure = Color::hex(0xff0000);
        assert_ne!(base.fingerprint(), edited.fingerprint());
    }

    #[test]
    fn color_map_iterates_in_key_order() {
        let keys: Vec<ColorKey> = Theme::default().colors.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ColorKey::ALL.to_vec());
    }
}

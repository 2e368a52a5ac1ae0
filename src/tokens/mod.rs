use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::style::{BadgeScale, SizeScale};
use crate::theme::Mode;

/// Named theme the user picks. Unknown names resolve to [`SchemeName::Blue`].
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SchemeName {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    Rose,
}

impl SchemeName {
    pub const ALL: [SchemeName; 6] = [
        SchemeName::Blue,
        SchemeName::Green,
        SchemeName::Purple,
        SchemeName::Orange,
        SchemeName::Teal,
        SchemeName::Rose,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Teal => "teal",
            Self::Rose => "rose",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(name))
    }

    /// Lenient lookup: unknown names degrade to the default scheme.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(
                requested = name,
                fallback = Self::default().as_str(),
                "unknown color scheme, using default"
            );
            Self::default()
        })
    }
}

/// Hue anchor inside a palette; the first-class variant axis of every component.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Accent,
    Success,
    Warning,
    Danger,
    Neutral,
    White,
}

impl ColorKey {
    pub const ALL: [ColorKey; 9] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Tertiary,
        ColorKey::Accent,
        ColorKey::Success,
        ColorKey::Warning,
        ColorKey::Danger,
        ColorKey::Neutral,
        ColorKey::White,
    ];

    pub const HUED: [ColorKey; 7] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Tertiary,
        ColorKey::Accent,
        ColorKey::Success,
        ColorKey::Warning,
        ColorKey::Danger,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
            Self::White => "white",
        }
    }

    pub const fn is_grayscale(self) -> bool {
        matches!(self, Self::Neutral | Self::White)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }

    /// Lenient lookup for string-typed callers: unknown keys map to `neutral`.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(requested = name, "unknown color key, using neutral");
            Self::Neutral
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Anchor {
    pub pure: Color,
    pub contrast_text: Color,
}

const fn anchor(pure: u32, contrast_text: u32) -> Anchor {
    Anchor {
        pure: Color::hex(pure),
        contrast_text: Color::hex(contrast_text),
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RawPalette {
    pub primary: Anchor,
    pub secondary: Anchor,
    pub tertiary: Anchor,
    pub accent: Anchor,
    pub success: Anchor,
    pub warning: Anchor,
    pub danger: Anchor,
    pub neutral: Anchor,
    pub white: Anchor,
}

impl RawPalette {
    pub const fn get(&self, key: ColorKey) -> Anchor {
        match key {
            ColorKey::Primary => self.primary,
            ColorKey::Secondary => self.secondary,
            ColorKey::Tertiary => self.tertiary,
            ColorKey::Accent => self.accent,
            ColorKey::Success => self.success,
            ColorKey::Warning => self.warning,
            ColorKey::Danger => self.danger,
            ColorKey::Neutral => self.neutral,
            ColorKey::White => self.white,
        }
    }

    pub fn set(&mut self, key: ColorKey, value: Anchor) {
        let slot = match key {
            ColorKey::Primary => &mut self.primary,
            ColorKey::Secondary => &mut self.secondary,
            ColorKey::Tertiary => &mut self.tertiary,
            ColorKey::Accent => &mut self.accent,
            ColorKey::Success => &mut self.success,
            ColorKey::Warning => &mut self.warning,
            ColorKey::Danger => &mut self.danger,
            ColorKey::Neutral => &mut self.neutral,
            ColorKey::White => &mut self.white,
        };
        *slot = value;
    }
}

const ON_LIGHT: u32 = 0xffffff;
const INK: u32 = 0x212529;
const ON_DARK: u32 = 0x141517;

/// Primary, secondary, tertiary and accent anchors for one scheme.
type HueSet = [Anchor; 4];

const fn light_hues(scheme: SchemeName) -> HueSet {
    match scheme {
        SchemeName::Blue => [
            anchor(0x1c7ed6, ON_LIGHT),
            anchor(0x4263eb, ON_LIGHT),
            anchor(0x1098ad, ON_LIGHT),
            anchor(0x7048e8, ON_LIGHT),
        ],
        SchemeName::Green => [
            anchor(0x2f9e44, ON_LIGHT),
            anchor(0x099268, ON_LIGHT),
            anchor(0x5c940d, ON_LIGHT),
            anchor(0x0c8599, ON_LIGHT),
        ],
        SchemeName::Purple => [
            anchor(0x7048e8, ON_LIGHT),
            anchor(0xae3ec9, ON_LIGHT),
            anchor(0x4263eb, ON_LIGHT),
            anchor(0xd6336c, ON_LIGHT),
        ],
        SchemeName::Orange => [
            anchor(0xe8590c, ON_LIGHT),
            anchor(0xf08c00, INK),
            anchor(0xe03131, ON_LIGHT),
            anchor(0x1c7ed6, ON_LIGHT),
        ],
        SchemeName::Teal => [
            anchor(0x099268, ON_LIGHT),
            anchor(0x0c8599, ON_LIGHT),
            anchor(0x2f9e44, ON_LIGHT),
            anchor(0x7048e8, ON_LIGHT),
        ],
        SchemeName::Rose => [
            anchor(0xd6336c, ON_LIGHT),
            anchor(0xc2255c, ON_LIGHT),
            anchor(0xae3ec9, ON_LIGHT),
            anchor(0xe8590c, ON_LIGHT),
        ],
    }
}

const fn dark_hues(scheme: SchemeName) -> HueSet {
    match scheme {
        SchemeName::Blue => [
            anchor(0x4dabf7, ON_DARK),
            anchor(0x748ffc, ON_DARK),
            anchor(0x3bc9db, ON_DARK),
            anchor(0x9775fa, ON_DARK),
        ],
        SchemeName::Green => [
            anchor(0x51cf66, ON_DARK),
            anchor(0x38d9a9, ON_DARK),
            anchor(0x94d82d, ON_DARK),
            anchor(0x22b8cf, ON_DARK),
        ],
        SchemeName::Purple => [
            anchor(0x9775fa, ON_DARK),
            anchor(0xda77f2, ON_DARK),
            anchor(0x748ffc, ON_DARK),
            anchor(0xf06595, ON_DARK),
        ],
        SchemeName::Orange => [
            anchor(0xff922b, ON_DARK),
            anchor(0xfcc419, ON_DARK),
            anchor(0xff6b6b, ON_DARK),
            anchor(0x4dabf7, ON_DARK),
        ],
        SchemeName::Teal => [
            anchor(0x20c997, ON_DARK),
            anchor(0x3bc9db, ON_DARK),
            anchor(0x69db7c, ON_DARK),
            anchor(0x9775fa, ON_DARK),
        ],
        SchemeName::Rose => [
            anchor(0xf06595, ON_DARK),
            anchor(0xf783ac, ON_DARK),
            anchor(0xda77f2, ON_DARK),
            anchor(0xff922b, ON_DARK),
        ],
    }
}

/// Status and grayscale anchors shared by every scheme: success, warning,
/// danger, neutral, white.
const fn shared_anchors(mode: Mode) -> [Anchor; 5] {
    match mode {
        Mode::Light => [
            anchor(0x2f9e44, ON_LIGHT),
            anchor(0xf59f00, INK),
            anchor(0xe03131, ON_LIGHT),
            anchor(0x495057, ON_LIGHT),
            anchor(0xffffff, INK),
        ],
        Mode::Dark => [
            anchor(0x51cf66, ON_DARK),
            anchor(0xfcc419, ON_DARK),
            anchor(0xff6b6b, ON_DARK),
            anchor(0x909296, ON_DARK),
            anchor(0x25262b, 0xe9ecef),
        ],
    }
}

/// Designer-curated palettes. Dark mode uses its own tables rather than a
/// transform of the light anchors.
pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn raw(scheme: SchemeName, mode: Mode) -> RawPalette {
        let [primary, secondary, tertiary, accent] = match mode {
            Mode::Light => light_hues(scheme),
            Mode::Dark => dark_hues(scheme),
        };
        let [success, warning, danger, neutral, white] = shared_anchors(mode);
        RawPalette {
            primary,
            secondary,
            tertiary,
            accent,
            success,
            warning,
            danger,
            neutral,
            white,
        }
    }
}

pub const LIGHT_CANVAS: Color = Color::hex(0xffffff);
pub const DARK_CANVAS: Color = Color::hex(0x141517);

pub const BADGE_PIXEL_HEIGHTS: BadgeScale<u16> = BadgeScale::new(18, 20, 24, 28, 32);
pub const BADGE_FONT_SIZES: BadgeScale<&str> =
    BadgeScale::new("0.625rem", "0.6875rem", "0.75rem", "0.8125rem", "0.875rem");
pub const BADGE_PADDING_X: BadgeScale<u16> = BadgeScale::new(4, 6, 8, 10, 12);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwitchDimensions {
    pub track_width: u16,
    pub track_height: u16,
    pub thumb_size: u16,
}

pub const SWITCH_SIZES: SizeScale<SwitchDimensions> = SizeScale::new(
    SwitchDimensions {
        track_width: 28,
        track_height: 16,
        thumb_size: 12,
    },
    SwitchDimensions {
        track_width: 36,
        track_height: 20,
        thumb_size: 16,
    },
    SwitchDimensions {
        track_width: 44,
        track_height: 24,
        thumb_size: 20,
    },
);

pub const PROGRESS_HEIGHTS: SizeScale<u16> = SizeScale::new(4, 8, 12);
pub const RADIO_CONTROL_SIZES: SizeScale<u16> = SizeScale::new(16, 20, 24);
pub const RADIO_DOT_SIZES: SizeScale<u16> = SizeScale::new(6, 8, 10);
pub const SPHERE_DIAMETERS: SizeScale<u16> = SizeScale::new(48, 96, 160);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedScale {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

impl NamedScale {
    pub const fn new(
        xs: &'static str,
        sm: &'static str,
        md: &'static str,
        lg: &'static str,
        xl: &'static str,
    ) -> Self {
        Self { xs, sm, md, lg, xl }
    }
}

pub const SPACING: NamedScale = NamedScale::new("0.625rem", "0.75rem", "1rem", "1.25rem", "2rem");
pub const RADIUS: NamedScale = NamedScale::new("0.125rem", "0.25rem", "0.5rem", "1rem", "2rem");
pub const RADIUS_PILL: &str = "9999px";

use serde::Serialize;

use crate::style::{BadgeScale, BadgeSize, ComponentRecipe, SkeletonColors, StyleType, TRANSPARENT};
use crate::theme::{AppColorTokens, ColorMap, ColorShade, Mode};
use crate::tokens::{
    BADGE_FONT_SIZES, BADGE_PADDING_X, BADGE_PIXEL_HEIGHTS, ColorKey, RADIUS_PILL,
};

use super::css;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BadgeStyleTokens {
    pub bg: String,
    pub text: String,
    pub border: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BadgeSchemeTokens {
    pub solid: BadgeStyleTokens,
    pub subtle: BadgeStyleTokens,
    pub outline: BadgeStyleTokens,
}

impl BadgeSchemeTokens {
    pub fn style(&self, style_type: StyleType) -> &BadgeStyleTokens {
        match style_type {
            StyleType::Solid => &self.solid,
            StyleType::Subtle => &self.subtle,
            StyleType::Outline => &self.outline,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BadgeSizeTokens {
    pub height: u16,
    pub font_size: String,
    pub padding_x: u16,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StandardBadgeTokens {
    pub schemes: ColorMap<BadgeSchemeTokens>,
    pub sizes: BadgeScale<BadgeSizeTokens>,
    pub radius: String,
    pub font_weight: u16,
}

impl StandardBadgeTokens {
    pub fn style(&self, key: ColorKey, style_type: StyleType) -> &BadgeStyleTokens {
        self.schemes.get(key).style(style_type)
    }

    pub fn size(&self, size: BadgeSize) -> &BadgeSizeTokens {
        self.sizes.get(size)
    }
}

fn scheme_tokens(shade: &ColorShade) -> BadgeSchemeTokens {
    BadgeSchemeTokens {
        solid: BadgeStyleTokens {
            bg: css(shade.pure),
            text: css(shade.contrast_text),
            border: css(shade.pure),
        },
        subtle: BadgeStyleTokens {
            bg: css(shade.bg),
            text: css(shade.text),
            border: css(shade.bg_shade),
        },
        outline: BadgeStyleTokens {
            bg: TRANSPARENT.to_string(),
            text: css(shade.text),
            border: css(shade.pure),
        },
    }
}

fn size_tokens(size: BadgeSize) -> BadgeSizeTokens {
    BadgeSizeTokens {
        height: *BADGE_PIXEL_HEIGHTS.get(size),
        font_size: BADGE_FONT_SIZES.get(size).to_string(),
        padding_x: *BADGE_PADDING_X.get(size),
    }
}

fn size_table() -> BadgeScale<BadgeSizeTokens> {
    BadgeScale::new(
        size_tokens(BadgeSize::Xxs),
        size_tokens(BadgeSize::Xs),
        size_tokens(BadgeSize::Sm),
        size_tokens(BadgeSize::Md),
        size_tokens(BadgeSize::Lg),
    )
}

/// Every scheme × style combination at once. Shades are already resolved
/// for the active mode, so the badge needs no mode argument.
pub fn generate_standard_badge_tokens(tokens: &AppColorTokens) -> StandardBadgeTokens {
    StandardBadgeTokens {
        schemes: ColorMap::from_fn(|key| scheme_tokens(tokens.get(key))),
        sizes: size_table(),
        radius: RADIUS_PILL.to_string(),
        font_weight: 600,
    }
}

impl ComponentRecipe for StandardBadgeTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let style = BadgeStyleTokens {
            bg: skeleton.fill(),
            text: skeleton.ink(),
            border: skeleton.edge(),
        };
        let scheme = BadgeSchemeTokens {
            solid: style.clone(),
            subtle: style.clone(),
            outline: style,
        };
        Self {
            schemes: ColorMap::from_fn(|_| scheme.clone()),
            sizes: size_table(),
            radius: RADIUS_PILL.to_string(),
            font_weight: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn solid_uses_pure_and_contrast_text() {
        let theme = Theme::default();
        let badge = generate_standard_badge_tokens(&theme.colors);
        let solid = badge.style(ColorKey::Primary, StyleType::Solid);
        assert_eq!(solid.bg, theme.colors.primary.pure.to_css());
        assert_eq!(solid.text, theme.colors.primary.contrast_text.to_css());
    }

    #[test]
    fn outline_is_transparent_with_pure_border() {
        let theme = Theme::default();
        let badge = generate_standard_badge_tokens(&theme.colors);
        let outline = badge.style(ColorKey::Primary, StyleType::Outline);
        assert_eq!(outline.bg, "transparent");
        assert_eq!(outline.border, theme.colors.primary.pure.to_css());
    }

    #[test]
    fn generation_is_idempotent() {
        let theme = Theme::default();
        assert_eq!(
            generate_standard_badge_tokens(&theme.colors),
            generate_standard_badge_tokens(&theme.colors)
        );
    }

    #[test]
    fn md_badge_is_28px() {
        let badge = generate_standard_badge_tokens(&Theme::default().colors);
        assert_eq!(badge.size(BadgeSize::Md).height, 28);
    }
}

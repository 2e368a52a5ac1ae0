use serde::Serialize;

use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, OPACITY_DISABLED,
    OPACITY_FULL, SkeletonColors, TRANSPARENT,
};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{Neutrals, css, focus_ring};

/// One accordion item snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AccordionArgs {
    pub color: ColorKey,
    pub is_active: bool,
    pub is_hovered: bool,
    pub is_disabled: bool,
}

impl AccordionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }

    pub fn active(mut self, value: bool) -> Self {
        self.is_active = value;
        self
    }

    pub fn hovered(mut self, value: bool) -> Self {
        self.is_hovered = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.is_disabled = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AccordionTokens {
    pub item_bg: String,
    pub item_border: String,
    pub item_radius: String,
    pub header_bg: String,
    pub header_text: String,
    pub header_font_weight: u16,
    pub chevron_color: String,
    pub chevron_rotation: String,
    pub panel_bg: String,
    pub panel_text: String,
    pub panel_border: String,
    pub focus_ring: String,
    pub opacity: String,
    pub cursor: String,
}

/// Layers the item's states in a fixed order: base, hover, open, then
/// disabled, so disabled styling always supersedes the others.
pub fn generate_accordion_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &AccordionArgs,
) -> AccordionTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let mut recipe = AccordionTokens {
        item_bg: css(neutrals.surface),
        item_border: css(neutrals.border),
        item_radius: RADIUS.sm.to_string(),
        header_bg: TRANSPARENT.to_string(),
        header_text: css(neutrals.ink),
        header_font_weight: 500,
        chevron_color: css(neutrals.muted),
        chevron_rotation: "0deg".to_string(),
        panel_bg: css(neutrals.surface),
        panel_text: css(neutrals.ink),
        panel_border: css(neutrals.border),
        focus_ring: focus_ring(shade.pure),
        opacity: OPACITY_FULL.to_string(),
        cursor: CURSOR_POINTER.to_string(),
    };

    if args.is_hovered {
        recipe.header_bg = css(shade.bg);
        recipe.chevron_color = css(shade.text);
    }

    if args.is_active {
        recipe.item_border = css(shade.pure);
        recipe.header_bg = css(shade.bg_shade);
        recipe.header_text = css(shade.text);
        recipe.header_font_weight = 600;
        recipe.chevron_color = css(shade.text);
        recipe.chevron_rotation = "180deg".to_string();
        recipe.panel_bg = css(shade.bg.mix(neutrals.surface, 0.5));
        recipe.panel_border = css(shade.bg_shade);
    }

    if args.is_disabled {
        recipe.header_bg = css(neutrals.soft);
        recipe.header_text = css(neutrals.muted);
        recipe.chevron_color = css(neutrals.muted);
        recipe.item_border = css(neutrals.border);
        recipe.focus_ring = "none".to_string();
        recipe.opacity = OPACITY_DISABLED.to_string();
        recipe.cursor = CURSOR_NOT_ALLOWED.to_string();
    }

    recipe
}

impl ComponentRecipe for AccordionTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            item_bg: skeleton.fill(),
            item_border: skeleton.edge(),
            item_radius: RADIUS.sm.to_string(),
            header_bg: skeleton.fill(),
            header_text: skeleton.ink(),
            header_font_weight: 500,
            chevron_color: skeleton.ink(),
            chevron_rotation: "0deg".to_string(),
            panel_bg: skeleton.fill(),
            panel_text: skeleton.ink(),
            panel_border: skeleton.edge(),
            focus_ring: "none".to_string(),
            opacity: OPACITY_FULL.to_string(),
            cursor: CURSOR_DEFAULT.to_string(),
        }
    }
}

use serde::Serialize;

use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, InteractionState,
    OPACITY_DISABLED, OPACITY_FULL, SkeletonColors, StateFlags, TRANSPARENT,
};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{Neutrals, css, elevation};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DropdownMenuArgs {
    pub color: ColorKey,
}

impl DropdownMenuArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MenuItemTokens {
    pub bg: String,
    pub text: String,
    pub icon: String,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MenuItemStates {
    pub default: MenuItemTokens,
    pub hover: MenuItemTokens,
    pub active: MenuItemTokens,
    pub disabled: MenuItemTokens,
    pub danger: MenuItemTokens,
    pub danger_hover: MenuItemTokens,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DropdownMenuTokens {
    pub content_bg: String,
    pub content_border: String,
    pub content_shadow: String,
    pub content_radius: String,
    pub content_padding: String,
    pub min_width: String,
    pub item: MenuItemStates,
    pub item_radius: String,
    pub separator: String,
    pub label_text: String,
    pub shortcut_text: String,
}

impl DropdownMenuTokens {
    /// Destructive items keep their danger hue through hover and press;
    /// disabled still wins over everything.
    pub fn item(&self, flags: StateFlags, danger: bool) -> &MenuItemTokens {
        match (flags.resolve(), danger) {
            (InteractionState::Disabled, _) => &self.item.disabled,
            (InteractionState::Hover | InteractionState::Active, true) => &self.item.danger_hover,
            (InteractionState::Default, true) => &self.item.danger,
            (InteractionState::Hover, false) => &self.item.hover,
            (InteractionState::Active, false) => &self.item.active,
            (InteractionState::Default, false) => &self.item.default,
        }
    }
}

pub fn generate_dropdown_menu_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &DropdownMenuArgs,
) -> DropdownMenuTokens {
    let shade = tokens.get(args.color);
    let danger = tokens.danger;
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let item = |bg: String, text: String, icon: String| MenuItemTokens {
        bg,
        text,
        icon,
        cursor: CURSOR_POINTER.to_string(),
        opacity: OPACITY_FULL.to_string(),
    };

    DropdownMenuTokens {
        content_bg: css(neutrals.surface),
        content_border: css(neutrals.border),
        content_shadow: elevation(mode, 2),
        content_radius: RADIUS.md.to_string(),
        content_padding: "0.25rem".to_string(),
        min_width: "12rem".to_string(),
        item: MenuItemStates {
            default: item(
                TRANSPARENT.to_string(),
                css(neutrals.ink),
                css(neutrals.muted),
            ),
            hover: item(css(shade.bg), css(shade.text), css(shade.text)),
            active: item(css(shade.bg_shade), css(shade.text), css(shade.text)),
            disabled: MenuItemTokens {
                bg: TRANSPARENT.to_string(),
                text: css(neutrals.muted),
                icon: css(neutrals.muted),
                cursor: CURSOR_NOT_ALLOWED.to_string(),
                opacity: OPACITY_DISABLED.to_string(),
            },
            danger: item(TRANSPARENT.to_string(), css(danger.text), css(danger.pure)),
            danger_hover: item(css(danger.bg), css(danger.text), css(danger.pure)),
        },
        item_radius: RADIUS.sm.to_string(),
        separator: css(neutrals.border),
        label_text: css(neutrals.muted),
        shortcut_text: css(neutrals.muted),
    }
}

impl ComponentRecipe for DropdownMenuTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let item = MenuItemTokens {
            bg: skeleton.fill(),
            text: skeleton.ink(),
            icon: skeleton.ink(),
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            content_bg: skeleton.fill(),
            content_border: skeleton.edge(),
            content_shadow: "none".to_string(),
            content_radius: RADIUS.md.to_string(),
            content_padding: "0.25rem".to_string(),
            min_width: "12rem".to_string(),
            item: MenuItemStates {
                default: item.clone(),
                hover: item.clone(),
                active: item.clone(),
                disabled: item.clone(),
                danger: item.clone(),
                danger_hover: item,
            },
            item_radius: RADIUS.sm.to_string(),
            separator: skeleton.edge(),
            label_text: skeleton.ink(),
            shortcut_text: skeleton.ink(),
        }
    }
}

//! One token generator per primitive family. Each generator is a pure
//! function of the resolved [`AppColorTokens`], the [`Mode`], and the
//! component's own variant arguments.

use serde::Serialize;

use crate::color::Color;
use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, InteractionState,
    OPACITY_DISABLED, OPACITY_FULL, SkeletonColors, StateFlags, TRANSPARENT,
};
use crate::theme::{AppColorTokens, Mode};

pub mod accordion;
pub mod alert;
pub mod badge;
pub mod date_picker;
pub mod dialog;
pub mod dropdown_menu;
pub mod navbar;
pub mod page_background;
pub mod progress;
pub mod radio;
pub mod sphere;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod textarea;
pub mod theme_selector;

#[cfg(test)]
mod test_recipe_coverage;
#[cfg(test)]
mod test_state_precedence;

pub use accordion::{AccordionArgs, AccordionTokens, generate_accordion_tokens};
pub use alert::{AlertArgs, AlertStatus, AlertTokens, generate_alert_tokens};
pub use badge::{StandardBadgeTokens, generate_standard_badge_tokens};
pub use date_picker::{DatePickerArgs, DatePickerTokens, generate_date_picker_tokens};
pub use dialog::{DialogArgs, DialogTokens, generate_dialog_tokens};
pub use dropdown_menu::{DropdownMenuArgs, DropdownMenuTokens, generate_dropdown_menu_tokens};
pub use navbar::{NavbarArgs, NavbarTokens, generate_navbar_tokens};
pub use page_background::{PageBackgroundTokens, generate_page_background_tokens};
pub use progress::{ProgressArgs, ProgressTokens, generate_progress_tokens};
pub use radio::{RadioArgs, RadioTokens, generate_radio_tokens};
pub use sphere::{SphereArgs, SphereTokens, generate_sphere_tokens};
pub use switch::{StandardSwitchTokens, SwitchArgs, generate_standard_switch_tokens};
pub use table::{TableArgs, TableTokens, generate_table_tokens};
pub use tabs::{TabsArgs, TabsStyle, TabsTokens, generate_tabs_tokens};
pub use textarea::{TextareaArgs, TextareaTokens, generate_textarea_tokens};
pub use theme_selector::{ThemeSelectorArgs, ThemeSelectorTokens, generate_theme_selector_tokens};

/// Grayscale roles every generator draws its chrome from.
pub(crate) struct Neutrals {
    pub surface: Color,
    pub soft: Color,
    pub border: Color,
    pub ink: Color,
    pub muted: Color,
    pub canvas: Color,
}

impl Neutrals {
    pub fn from_tokens(tokens: &AppColorTokens, mode: Mode) -> Self {
        Self {
            surface: tokens.white.pure,
            soft: tokens.neutral.bg,
            border: tokens.neutral.bg_shade,
            ink: tokens.neutral.text,
            muted: tokens.neutral.text_shade,
            canvas: mode.canvas(),
        }
    }
}

pub(crate) fn css(color: Color) -> String {
    color.to_css()
}

pub(crate) fn elevation(mode: Mode, depth: u8) -> String {
    let alpha = match mode {
        Mode::Light => 0.06 + f32::from(depth) * 0.03,
        Mode::Dark => 0.30 + f32::from(depth) * 0.10,
    };
    let blur = 4 + u16::from(depth) * 8;
    let offset = 1 + u16::from(depth) * 2;
    format!(
        "0 {offset}px {blur}px {}",
        Color::BLACK.with_alpha(alpha).to_css()
    )
}

pub(crate) fn focus_ring(color: Color) -> String {
    format!("0 0 0 3px {}", color.with_alpha(0.35).to_css())
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IconButtonTokens {
    pub bg: String,
    pub icon: String,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IconButtonStates {
    pub default: IconButtonTokens,
    pub hover: IconButtonTokens,
    pub active: IconButtonTokens,
    pub disabled: IconButtonTokens,
}

impl IconButtonStates {
    pub(crate) fn build(neutrals: &Neutrals, hover_bg: Color, active_bg: Color) -> Self {
        let button = |bg: String, icon: Color| IconButtonTokens {
            bg,
            icon: css(icon),
            cursor: CURSOR_POINTER.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            default: button(TRANSPARENT.to_string(), neutrals.muted),
            hover: button(css(hover_bg), neutrals.ink),
            active: button(css(active_bg), neutrals.ink),
            disabled: IconButtonTokens {
                bg: TRANSPARENT.to_string(),
                icon: css(neutrals.muted),
                cursor: CURSOR_NOT_ALLOWED.to_string(),
                opacity: OPACITY_DISABLED.to_string(),
            },
        }
    }

    pub(crate) fn skeleton(skeleton: &SkeletonColors) -> Self {
        let button = IconButtonTokens {
            bg: TRANSPARENT.to_string(),
            icon: skeleton.ink(),
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            default: button.clone(),
            hover: button.clone(),
            active: button.clone(),
            disabled: button,
        }
    }

    pub fn state(&self, flags: StateFlags) -> &IconButtonTokens {
        match flags.resolve() {
            InteractionState::Default => &self.default,
            InteractionState::Hover => &self.hover,
            InteractionState::Active => &self.active,
            InteractionState::Disabled => &self.disabled,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldStateTokens {
    pub bg: String,
    pub border: String,
    pub text: String,
    pub shadow: String,
    pub cursor: String,
    pub opacity: String,
}

/// Text-entry field states shared by textarea and date picker inputs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldStates {
    pub default: FieldStateTokens,
    pub hover: FieldStateTokens,
    pub focus: FieldStateTokens,
    pub invalid: FieldStateTokens,
    pub disabled: FieldStateTokens,
}

impl FieldStates {
    pub(crate) fn build(tokens: &AppColorTokens, neutrals: &Neutrals, accent: Color) -> Self {
        let field = |border: Color, shadow: String| FieldStateTokens {
            bg: css(neutrals.surface),
            border: css(border),
            text: css(neutrals.ink),
            shadow,
            cursor: "text".to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        let danger = tokens.danger.pure;
        Self {
            default: field(neutrals.border, "none".to_string()),
            hover: field(neutrals.muted, "none".to_string()),
            focus: field(accent, focus_ring(accent)),
            invalid: field(danger, focus_ring(danger)),
            disabled: FieldStateTokens {
                bg: css(neutrals.soft),
                border: css(neutrals.border),
                text: css(neutrals.muted),
                shadow: "none".to_string(),
                cursor: CURSOR_NOT_ALLOWED.to_string(),
                opacity: OPACITY_DISABLED.to_string(),
            },
        }
    }

    pub(crate) fn skeleton(skeleton: &SkeletonColors) -> Self {
        let field = FieldStateTokens {
            bg: skeleton.fill(),
            border: skeleton.edge(),
            text: skeleton.ink(),
            shadow: "none".to_string(),
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            default: field.clone(),
            hover: field.clone(),
            focus: field.clone(),
            invalid: field.clone(),
            disabled: field,
        }
    }

    /// Disabled beats invalid, invalid beats focus, focus beats hover.
    pub fn state(&self, flags: StateFlags, invalid: bool) -> &FieldStateTokens {
        match flags.resolve() {
            InteractionState::Disabled => &self.disabled,
            _ if invalid => &self.invalid,
            InteractionState::Active => &self.focus,
            InteractionState::Hover => &self.hover,
            InteractionState::Default => &self.default,
        }
    }
}

/// Generates through `generate` when tokens exist, otherwise returns the
/// recipe's skeleton.
pub fn tokens_or_placeholder<R: ComponentRecipe>(
    tokens: Option<&AppColorTokens>,
    mode: Mode,
    generate: impl FnOnce(&AppColorTokens, Mode) -> R,
) -> R {
    crate::style::recipe_or_placeholder(tokens, mode, |tokens| generate(tokens, mode))
}

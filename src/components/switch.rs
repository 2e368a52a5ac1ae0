use serde::Serialize;

use crate::color::Color;
use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, OPACITY_DISABLED,
    OPACITY_FULL, SizeScale, SkeletonColors,
};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS_PILL, SWITCH_SIZES, SwitchDimensions};

use super::{Neutrals, css, elevation, focus_ring};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SwitchArgs {
    pub color: ColorKey,
}

impl SwitchArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SwitchStateTokens {
    pub track_bg: String,
    pub track_border: String,
    pub track_hover_bg: String,
    pub thumb_bg: String,
    pub thumb_shadow: String,
    pub label: String,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SwitchSizeTokens {
    pub track_width: u16,
    pub track_height: u16,
    pub thumb_size: u16,
    pub thumb_inset: u16,
    pub thumb_travel: u16,
}

impl From<SwitchDimensions> for SwitchSizeTokens {
    fn from(dims: SwitchDimensions) -> Self {
        let inset = (dims.track_height - dims.thumb_size) / 2;
        Self {
            track_width: dims.track_width,
            track_height: dims.track_height,
            thumb_size: dims.thumb_size,
            thumb_inset: inset,
            thumb_travel: dims.track_width - dims.thumb_size - inset * 2,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StandardSwitchTokens {
    pub on: SwitchStateTokens,
    pub off: SwitchStateTokens,
    pub disabled: SwitchStateTokens,
    pub focus_ring: String,
    pub radius: String,
    pub sizes: SizeScale<SwitchSizeTokens>,
}

impl StandardSwitchTokens {
    /// Disabled always wins over the checked state.
    pub fn state(&self, checked: bool, disabled: bool) -> &SwitchStateTokens {
        if disabled {
            &self.disabled
        } else if checked {
            &self.on
        } else {
            &self.off
        }
    }
}

fn thumb_color(mode: Mode) -> Color {
    match mode {
        Mode::Light => Color::WHITE,
        Mode::Dark => Color::hex(0xf1f3f5),
    }
}

pub fn generate_standard_switch_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &SwitchArgs,
) -> StandardSwitchTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);
    let thumb = thumb_color(mode);

    let on = SwitchStateTokens {
        track_bg: css(shade.pure),
        track_border: css(shade.pure),
        track_hover_bg: css(shade.pure_shade),
        thumb_bg: css(thumb),
        thumb_shadow: elevation(mode, 0),
        label: css(neutrals.ink),
        cursor: CURSOR_POINTER.to_string(),
        opacity: OPACITY_FULL.to_string(),
    };
    let off = SwitchStateTokens {
        track_bg: css(neutrals.border),
        track_border: css(neutrals.border),
        track_hover_bg: css(neutrals.border.mix(neutrals.ink, 0.12)),
        ..on.clone()
    };
    let disabled = SwitchStateTokens {
        track_bg: css(neutrals.soft),
        track_border: css(neutrals.border),
        track_hover_bg: css(neutrals.soft),
        thumb_bg: css(thumb.mix(neutrals.soft, 0.4)),
        thumb_shadow: "none".to_string(),
        label: css(neutrals.muted),
        cursor: CURSOR_NOT_ALLOWED.to_string(),
        opacity: OPACITY_DISABLED.to_string(),
    };

    StandardSwitchTokens {
        on,
        off,
        disabled,
        focus_ring: focus_ring(shade.pure),
        radius: RADIUS_PILL.to_string(),
        sizes: SWITCH_SIZES.map(|dims| SwitchSizeTokens::from(*dims)),
    }
}

impl ComponentRecipe for StandardSwitchTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let state = SwitchStateTokens {
            track_bg: skeleton.fill(),
            track_border: skeleton.edge(),
            track_hover_bg: skeleton.fill(),
            thumb_bg: skeleton.edge(),
            thumb_shadow: "none".to_string(),
            label: skeleton.ink(),
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            on: state.clone(),
            off: state.clone(),
            disabled: state,
            focus_ring: "none".to_string(),
            radius: RADIUS_PILL.to_string(),
            sizes: SWITCH_SIZES.map(|dims| SwitchSizeTokens::from(*dims)),
        }
    }
}

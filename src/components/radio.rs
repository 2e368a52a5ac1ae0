use serde::Serialize;

use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, ControlSize,
    OPACITY_DISABLED, OPACITY_FULL, SkeletonColors, StateFlags, TRANSPARENT,
};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIO_CONTROL_SIZES, RADIO_DOT_SIZES};

use super::{Neutrals, css, focus_ring};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RadioArgs {
    pub color: ColorKey,
    pub size: ControlSize,
}

impl RadioArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }

    pub fn size(mut self, value: ControlSize) -> Self {
        self.size = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RadioControlTokens {
    pub bg: String,
    pub border: String,
    pub dot: String,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RadioTokens {
    pub unchecked: RadioControlTokens,
    pub checked: RadioControlTokens,
    pub hover: RadioControlTokens,
    pub checked_hover: RadioControlTokens,
    pub disabled: RadioControlTokens,
    pub label: String,
    pub description: String,
    pub focus_ring: String,
    pub control_size: u16,
    pub dot_size: u16,
    pub border_width: String,
}

impl RadioTokens {
    /// `flags.is_active` is ignored; selection comes from `checked`.
    pub fn state(&self, checked: bool, flags: StateFlags) -> &RadioControlTokens {
        match (flags.is_disabled, flags.is_hovered, checked) {
            (true, _, _) => &self.disabled,
            (false, true, true) => &self.checked_hover,
            (false, true, false) => &self.hover,
            (false, false, true) => &self.checked,
            (false, false, false) => &self.unchecked,
        }
    }
}

pub fn generate_radio_tokens(tokens: &AppColorTokens, mode: Mode, args: &RadioArgs) -> RadioTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let control = |bg: String, border: String, dot: String| RadioControlTokens {
        bg,
        border,
        dot,
        cursor: CURSOR_POINTER.to_string(),
        opacity: OPACITY_FULL.to_string(),
    };

    RadioTokens {
        unchecked: control(
            css(neutrals.surface),
            css(neutrals.border),
            TRANSPARENT.to_string(),
        ),
        checked: control(
            css(shade.pure),
            css(shade.pure),
            css(shade.contrast_text),
        ),
        hover: control(css(shade.bg), css(shade.pure), TRANSPARENT.to_string()),
        checked_hover: control(
            css(shade.pure_shade),
            css(shade.pure_shade),
            css(shade.contrast_text),
        ),
        disabled: RadioControlTokens {
            bg: css(neutrals.soft),
            border: css(neutrals.border),
            dot: css(neutrals.muted),
            cursor: CURSOR_NOT_ALLOWED.to_string(),
            opacity: OPACITY_DISABLED.to_string(),
        },
        label: css(neutrals.ink),
        description: css(neutrals.muted),
        focus_ring: focus_ring(shade.pure),
        control_size: *RADIO_CONTROL_SIZES.get(args.size),
        dot_size: *RADIO_DOT_SIZES.get(args.size),
        border_width: "1px".to_string(),
    }
}

impl ComponentRecipe for RadioTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let control = RadioControlTokens {
            bg: skeleton.fill(),
            border: skeleton.edge(),
            dot: skeleton.edge(),
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            unchecked: control.clone(),
            checked: control.clone(),
            hover: control.clone(),
            checked_hover: control.clone(),
            disabled: control,
            label: skeleton.ink(),
            description: skeleton.ink(),
            focus_ring: "none".to_string(),
            control_size: *RADIO_CONTROL_SIZES.get(ControlSize::Md),
            dot_size: *RADIO_DOT_SIZES.get(ControlSize::Md),
            border_width: "1px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn checked_control_fills_with_pure() {
        let theme = Theme::default();
        let radio = generate_radio_tokens(
            &theme.colors,
            theme.mode,
            &RadioArgs::new().color(ColorKey::Accent),
        );
        let checked = radio.state(true, StateFlags::new());
        assert_eq!(checked.bg, theme.colors.accent.pure.to_css());
        assert_eq!(checked.dot, theme.colors.accent.contrast_text.to_css());
        assert_eq!(radio.state(false, StateFlags::new()).dot, "transparent");
    }

    #[test]
    fn disabled_wins_even_when_checked_and_hovered() {
        let theme = Theme::default();
        let radio = generate_radio_tokens(&theme.colors, theme.mode, &RadioArgs::new());
        let state = radio.state(true, StateFlags::new().hovered(true).disabled(true));
        assert_eq!(state, &radio.disabled);
    }

    #[test]
    fn pressing_keeps_the_hover_look() {
        let theme = Theme::default();
        let radio = generate_radio_tokens(&theme.colors, theme.mode, &RadioArgs::new());
        let pressed = StateFlags::new().hovered(true).active(true);
        assert_eq!(radio.state(true, pressed), &radio.checked_hover);
        assert_eq!(radio.state(false, pressed), &radio.hover);
        assert_eq!(radio.state(true, StateFlags::new().active(true)), &radio.checked);
    }

    #[test]
    fn dot_fits_inside_control() {
        let theme = Theme::default();
        for size in ControlSize::ALL {
            let radio =
                generate_radio_tokens(&theme.colors, theme.mode, &RadioArgs::new().size(size));
            assert!(radio.dot_size < radio.control_size);
        }
    }
}

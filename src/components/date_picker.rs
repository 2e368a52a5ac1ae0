use serde::Serialize;

use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, OPACITY_DISABLED,
    OPACITY_FULL, SkeletonColors, TRANSPARENT,
};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{FieldStates, IconButtonStates, Neutrals, css, elevation};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DatePickerArgs {
    pub color: ColorKey,
}

impl DatePickerArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DayCellTokens {
    pub bg: String,
    pub text: String,
    pub border: String,
    pub font_weight: u16,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DayCellStates {
    pub default: DayCellTokens,
    pub hover: DayCellTokens,
    pub selected: DayCellTokens,
    pub in_range: DayCellTokens,
    pub today: DayCellTokens,
    pub outside: DayCellTokens,
    pub weekend: DayCellTokens,
    pub disabled: DayCellTokens,
}

/// Facts about one calendar cell. Precedence when several hold:
/// disabled, selected, in range, hover, today, outside, weekend.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DayCellFlags {
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_in_range: bool,
    pub is_hovered: bool,
    pub is_today: bool,
    pub is_outside: bool,
    pub is_weekend: bool,
}

impl DayCellStates {
    pub fn resolve(&self, flags: DayCellFlags) -> &DayCellTokens {
        if flags.is_disabled {
            &self.disabled
        } else if flags.is_selected {
            &self.selected
        } else if flags.is_in_range {
            &self.in_range
        } else if flags.is_hovered {
            &self.hover
        } else if flags.is_today {
            &self.today
        } else if flags.is_outside {
            &self.outside
        } else if flags.is_weekend {
            &self.weekend
        } else {
            &self.default
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DatePickerTokens {
    pub input: FieldStates,
    pub input_icon: String,
    pub popover_bg: String,
    pub popover_border: String,
    pub popover_shadow: String,
    pub popover_radius: String,
    pub header_text: String,
    pub weekday_text: String,
    pub day: DayCellStates,
    pub day_radius: String,
    pub day_size: u16,
    pub nav: IconButtonStates,
}

const DAY_SIZE: u16 = 36;

pub fn generate_date_picker_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &DatePickerArgs,
) -> DatePickerTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let cell = |bg: String, text: String| DayCellTokens {
        bg,
        text,
        border: TRANSPARENT.to_string(),
        font_weight: 400,
        cursor: CURSOR_POINTER.to_string(),
        opacity: OPACITY_FULL.to_string(),
    };

    let day = DayCellStates {
        default: cell(TRANSPARENT.to_string(), css(neutrals.ink)),
        hover: cell(css(neutrals.soft), css(neutrals.ink)),
        selected: DayCellTokens {
            font_weight: 600,
            ..cell(css(shade.pure), css(shade.contrast_text))
        },
        in_range: cell(css(shade.bg), css(shade.text)),
        today: DayCellTokens {
            border: css(shade.pure),
            font_weight: 600,
            ..cell(TRANSPARENT.to_string(), css(shade.text))
        },
        outside: cell(TRANSPARENT.to_string(), css(neutrals.muted)),
        weekend: cell(TRANSPARENT.to_string(), css(tokens.danger.text)),
        disabled: DayCellTokens {
            cursor: CURSOR_NOT_ALLOWED.to_string(),
            opacity: OPACITY_DISABLED.to_string(),
            ..cell(TRANSPARENT.to_string(), css(neutrals.muted))
        },
    };

    DatePickerTokens {
        input: FieldStates::build(tokens, &neutrals, shade.pure),
        input_icon: css(neutrals.muted),
        popover_bg: css(neutrals.surface),
        popover_border: css(neutrals.border),
        popover_shadow: elevation(mode, 2),
        popover_radius: RADIUS.md.to_string(),
        header_text: css(neutrals.ink),
        weekday_text: css(neutrals.muted),
        day,
        day_radius: RADIUS.sm.to_string(),
        day_size: DAY_SIZE,
        nav: IconButtonStates::build(&neutrals, neutrals.soft, neutrals.border),
    }
}

impl ComponentRecipe for DatePickerTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let cell = DayCellTokens {
            bg: skeleton.fill(),
            text: skeleton.ink(),
            border: skeleton.edge(),
            font_weight: 400,
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            input: FieldStates::skeleton(&skeleton),
            input_icon: skeleton.ink(),
            popover_bg: skeleton.fill(),
            popover_border: skeleton.edge(),
            popover_shadow: "none".to_string(),
            popover_radius: RADIUS.md.to_string(),
            header_text: skeleton.ink(),
            weekday_text: skeleton.ink(),
            day: DayCellStates {
                default: cell.clone(),
                hover: cell.clone(),
                selected: cell.clone(),
                in_range: cell.clone(),
                today: cell.clone(),
                outside: cell.clone(),
                weekend: cell.clone(),
                disabled: cell,
            },
            day_radius: RADIUS.sm.to_string(),
            day_size: DAY_SIZE,
            nav: IconButtonStates::skeleton(&skeleton),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StateFlags;
    use crate::theme::Theme;

    #[test]
    fn selected_day_uses_pure_fill() {
        let theme = Theme::default();
        let picker = generate_date_picker_tokens(&theme.colors, theme.mode, &DatePickerArgs::new());
        let selected = picker.day.resolve(DayCellFlags {
            is_selected: true,
            is_today: true,
            ..DayCellFlags::default()
        });
        assert_eq!(selected.bg, theme.colors.primary.pure.to_css());
        assert_eq!(selected.text, theme.colors.primary.contrast_text.to_css());
    }

    #[test]
    fn disabled_day_beats_selection() {
        let theme = Theme::default();
        let picker = generate_date_picker_tokens(&theme.colors, theme.mode, &DatePickerArgs::new());
        let cell = picker.day.resolve(DayCellFlags {
            is_disabled: true,
            is_selected: true,
            ..DayCellFlags::default()
        });
        assert_eq!(cell, &picker.day.disabled);
    }

    #[test]
    fn today_is_outlined_and_range_is_tinted() {
        let theme = Theme::default().with_mode(Mode::Dark);
        let picker = generate_date_picker_tokens(&theme.colors, theme.mode, &DatePickerArgs::new());
        assert_eq!(picker.day.today.border, theme.colors.primary.pure.to_css());
        assert_eq!(picker.day.in_range.bg, theme.colors.primary.bg.to_css());
    }

    #[test]
    fn nav_buttons_share_icon_button_states() {
        let theme = Theme::default();
        let picker = generate_date_picker_tokens(&theme.colors, theme.mode, &DatePickerArgs::new());
        let disabled = picker.nav.state(StateFlags::new().hovered(true).disabled(true));
        assert_eq!(disabled.cursor, "not-allowed");
    }
}

use serde::{Deserialize, Serialize};

use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, InteractionState,
    OPACITY_DISABLED, OPACITY_FULL, SkeletonColors, StateFlags, TRANSPARENT,
};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS, SPACING};

use super::{Neutrals, css, focus_ring};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabsStyle {
    #[default]
    Line,
    Enclosed,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct TabsArgs {
    pub color: ColorKey,
    pub style: TabsStyle,
}

impl TabsArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }

    pub fn style(mut self, value: TabsStyle) -> Self {
        self.style = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TabTriggerTokens {
    pub bg: String,
    pub text: String,
    pub border_color: String,
    pub border_width: String,
    pub font_weight: u16,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TabTriggerStates {
    pub default: TabTriggerTokens,
    pub hover: TabTriggerTokens,
    pub active: TabTriggerTokens,
    pub disabled: TabTriggerTokens,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TabsTokens {
    pub list_bg: String,
    pub list_border: String,
    pub list_gap: String,
    pub list_radius: String,
    pub indicator: String,
    pub trigger: TabTriggerStates,
    pub trigger_radius: String,
    pub focus_ring: String,
    pub panel_bg: String,
    pub panel_border: String,
    pub panel_text: String,
    pub panel_padding: String,
}

impl TabsTokens {
    pub fn trigger(&self, flags: StateFlags) -> &TabTriggerTokens {
        match flags.resolve() {
            InteractionState::Default => &self.trigger.default,
            InteractionState::Hover => &self.trigger.hover,
            InteractionState::Active => &self.trigger.active,
            InteractionState::Disabled => &self.trigger.disabled,
        }
    }
}

pub fn generate_tabs_tokens(tokens: &AppColorTokens, mode: Mode, args: &TabsArgs) -> TabsTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let base = TabTriggerTokens {
        bg: TRANSPARENT.to_string(),
        text: css(neutrals.muted),
        border_color: TRANSPARENT.to_string(),
        border_width: String::new(),
        font_weight: 500,
        cursor: CURSOR_POINTER.to_string(),
        opacity: OPACITY_FULL.to_string(),
    };

    let (border_width, list_bg, list_border, hover, active) = match args.style {
        TabsStyle::Line => (
            "0 0 2px 0",
            TRANSPARENT.to_string(),
            css(neutrals.border),
            TabTriggerTokens {
                bg: css(shade.bg),
                text: css(neutrals.ink),
                border_color: css(neutrals.border),
                ..base.clone()
            },
            TabTriggerTokens {
                text: css(shade.text),
                border_color: css(shade.pure),
                font_weight: 600,
                ..base.clone()
            },
        ),
        TabsStyle::Enclosed => (
            "1px 1px 0 1px",
            css(neutrals.soft),
            css(neutrals.border),
            TabTriggerTokens {
                bg: css(neutrals.border),
                text: css(neutrals.ink),
                ..base.clone()
            },
            TabTriggerTokens {
                bg: css(neutrals.surface),
                text: css(shade.text),
                border_color: css(neutrals.border),
                font_weight: 600,
                ..base.clone()
            },
        ),
    };

    let with_width = |trigger: TabTriggerTokens| TabTriggerTokens {
        border_width: border_width.to_string(),
        ..trigger
    };
    let disabled = TabTriggerTokens {
        text: css(neutrals.muted),
        cursor: CURSOR_NOT_ALLOWED.to_string(),
        opacity: OPACITY_DISABLED.to_string(),
        ..base.clone()
    };

    TabsTokens {
        list_bg,
        list_border,
        list_gap: match args.style {
            TabsStyle::Line => "0".to_string(),
            TabsStyle::Enclosed => "2px".to_string(),
        },
        list_radius: RADIUS.md.to_string(),
        indicator: css(shade.pure),
        trigger: TabTriggerStates {
            default: with_width(base),
            hover: with_width(hover),
            active: with_width(active),
            disabled: with_width(disabled),
        },
        trigger_radius: match args.style {
            TabsStyle::Line => "0".to_string(),
            TabsStyle::Enclosed => format!("{} {} 0 0", RADIUS.md, RADIUS.md),
        },
        focus_ring: focus_ring(shade.pure),
        panel_bg: css(neutrals.surface),
        panel_border: css(neutrals.border),
        panel_text: css(neutrals.ink),
        panel_padding: SPACING.md.to_string(),
    }
}

impl ComponentRecipe for TabsTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let trigger = TabTriggerTokens {
            bg: skeleton.fill(),
            text: skeleton.ink(),
            border_color: skeleton.edge(),
            border_width: "0 0 2px 0".to_string(),
            font_weight: 500,
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            list_bg: skeleton.fill(),
            list_border: skeleton.edge(),
            list_gap: "0".to_string(),
            list_radius: RADIUS.md.to_string(),
            indicator: skeleton.edge(),
            trigger: TabTriggerStates {
                default: trigger.clone(),
                hover: trigger.clone(),
                active: trigger.clone(),
                disabled: trigger,
            },
            trigger_radius: "0".to_string(),
            focus_ring: "none".to_string(),
            panel_bg: skeleton.fill(),
            panel_border: skeleton.edge(),
            panel_text: skeleton.ink(),
            panel_padding: SPACING.md.to_string(),
        }
    }
}

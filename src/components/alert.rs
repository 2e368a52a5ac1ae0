use serde::{Deserialize, Serialize};

use crate::style::{ComponentRecipe, SkeletonColors, StyleType, TRANSPARENT};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{IconButtonStates, Neutrals, css};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::Info,
        AlertStatus::Success,
        AlertStatus::Warning,
        AlertStatus::Danger,
    ];

    /// Info alerts borrow the scheme's primary hue.
    pub const fn color_key(self) -> ColorKey {
        match self {
            Self::Info => ColorKey::Primary,
            Self::Success => ColorKey::Success,
            Self::Warning => ColorKey::Warning,
            Self::Danger => ColorKey::Danger,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AlertArgs {
    pub status: AlertStatus,
    pub style_type: StyleType,
}

impl AlertArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, value: AlertStatus) -> Self {
        self.status = value;
        self
    }

    pub fn style_type(mut self, value: StyleType) -> Self {
        self.style_type = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AlertTokens {
    pub bg: String,
    pub border: String,
    pub accent_bar: String,
    pub title_text: String,
    pub body_text: String,
    pub icon: String,
    pub icon_bg: String,
    pub close: IconButtonStates,
    pub radius: String,
    pub padding: String,
}

pub fn generate_alert_tokens(tokens: &AppColorTokens, mode: Mode, args: &AlertArgs) -> AlertTokens {
    let shade = tokens.get(args.status.color_key());
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let base = AlertTokens {
        bg: css(shade.bg),
        border: css(shade.bg_shade),
        accent_bar: css(shade.pure),
        title_text: css(shade.text),
        body_text: css(neutrals.ink),
        icon: css(shade.pure),
        icon_bg: css(shade.bg_shade),
        close: IconButtonStates::build(
            &neutrals,
            shade.bg_shade,
            shade.bg_shade.mix(shade.pure, 0.2),
        ),
        radius: RADIUS.md.to_string(),
        padding: "0.75rem 1rem".to_string(),
    };

    match args.style_type {
        StyleType::Subtle => base,
        StyleType::Solid => {
            let on_pure = shade.contrast_text;
            let mut close = IconButtonStates::build(
                &neutrals,
                shade.pure_shade,
                shade.pure_shade.mix(on_pure, 0.15),
            );
            close.default.icon = css(on_pure);
            close.hover.icon = css(on_pure);
            close.active.icon = css(on_pure);
            AlertTokens {
                bg: css(shade.pure),
                border: css(shade.pure),
                accent_bar: css(shade.pure_shade),
                title_text: css(on_pure),
                body_text: css(on_pure),
                icon: css(on_pure),
                icon_bg: css(shade.pure_shade),
                close,
                ..base
            }
        }
        StyleType::Outline => AlertTokens {
            bg: TRANSPARENT.to_string(),
            border: css(shade.pure),
            icon_bg: TRANSPARENT.to_string(),
            ..base
        },
    }
}

impl ComponentRecipe for AlertTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            bg: skeleton.fill(),
            border: skeleton.edge(),
            accent_bar: skeleton.edge(),
            title_text: skeleton.ink(),
            body_text: skeleton.ink(),
            icon: skeleton.ink(),
            icon_bg: skeleton.edge(),
            close: IconButtonStates::skeleton(&skeleton),
            radius: RADIUS.md.to_string(),
            padding: "0.75rem 1rem".to_string(),
        }
    }
}

use serde::Serialize;

use crate::gradient::two_tone_gradient_at;
use crate::style::{ComponentRecipe, InteractionState, SkeletonColors, StateFlags, TRANSPARENT};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{Neutrals, css, elevation};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NavbarArgs {
    pub color: ColorKey,
}

impl NavbarArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NavLinkTokens {
    pub text: String,
    pub bg: String,
    pub indicator: String,
    pub font_weight: u16,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NavLinkStates {
    pub default: NavLinkTokens,
    pub hover: NavLinkTokens,
    pub active: NavLinkTokens,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NavbarTokens {
    pub bar_bg: String,
    pub bar_border: String,
    pub bar_shadow: String,
    pub height: u16,
    pub brand_text: String,
    pub brand_accent: String,
    pub link: NavLinkStates,
    pub link_radius: String,
    pub divider: String,
    pub avatar_ring: String,
}

impl NavbarTokens {
    /// Links have no disabled look; a disabled flag renders as default.
    pub fn link(&self, flags: StateFlags) -> &NavLinkTokens {
        match flags.resolve() {
            InteractionState::Active => &self.link.active,
            InteractionState::Hover => &self.link.hover,
            InteractionState::Default | InteractionState::Disabled => &self.link.default,
        }
    }
}

const BAR_HEIGHT: u16 = 56;

pub fn generate_navbar_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &NavbarArgs,
) -> NavbarTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    NavbarTokens {
        bar_bg: two_tone_gradient_at(neutrals.surface, shade.bg, 90.0),
        bar_border: css(neutrals.border),
        bar_shadow: elevation(mode, 1),
        height: BAR_HEIGHT,
        brand_text: css(shade.text),
        brand_accent: css(shade.pure),
        link: NavLinkStates {
            default: NavLinkTokens {
                text: css(neutrals.muted),
                bg: TRANSPARENT.to_string(),
                indicator: TRANSPARENT.to_string(),
                font_weight: 500,
            },
            hover: NavLinkTokens {
                text: css(neutrals.ink),
                bg: css(neutrals.soft),
                indicator: TRANSPARENT.to_string(),
                font_weight: 500,
            },
            active: NavLinkTokens {
                text: css(shade.text),
                bg: css(shade.bg),
                indicator: css(shade.pure),
                font_weight: 600,
            },
        },
        link_radius: RADIUS.sm.to_string(),
        divider: css(neutrals.border),
        avatar_ring: format!("0 0 0 2px {}", shade.pure),
    }
}

impl ComponentRecipe for NavbarTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let link = NavLinkTokens {
            text: skeleton.ink(),
            bg: skeleton.fill(),
            indicator: skeleton.edge(),
            font_weight: 500,
        };
        Self {
            bar_bg: skeleton.fill(),
            bar_border: skeleton.edge(),
            bar_shadow: "none".to_string(),
            height: BAR_HEIGHT,
            brand_text: skeleton.ink(),
            brand_accent: skeleton.edge(),
            link: NavLinkStates {
                default: link.clone(),
                hover: link.clone(),
                active: link,
            },
            link_radius: RADIUS.sm.to_string(),
            divider: skeleton.edge(),
            avatar_ring: "none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn bar_gradient_runs_left_to_right() {
        let theme = Theme::default();
        let navbar = generate_navbar_tokens(&theme.colors, theme.mode, &NavbarArgs::new());
        assert!(navbar.bar_bg.starts_with("linear-gradient(90deg, "));
        assert!(navbar.bar_bg.ends_with(&format!("{} 100%)", theme.colors.primary.bg)));
    }

    #[test]
    fn active_link_shows_indicator() {
        let theme = Theme::default();
        let navbar = generate_navbar_tokens(&theme.colors, theme.mode, &NavbarArgs::new());
        let active = navbar.link(StateFlags::new().active(true).hovered(true));
        assert_eq!(active.indicator, theme.colors.primary.pure.to_css());
        assert_eq!(navbar.link(StateFlags::new()).indicator, "transparent");
    }
}

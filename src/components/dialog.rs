use serde::Serialize;

use crate::color::Color;
use crate::gradient::two_tone_gradient;
use crate::style::{ComponentRecipe, SkeletonColors};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{IconButtonStates, Neutrals, css, elevation};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DialogArgs {
    pub color: ColorKey,
}

impl DialogArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DialogTokens {
    pub overlay_bg: String,
    pub overlay_blur: String,
    pub surface_bg: String,
    pub surface_border: String,
    pub surface_shadow: String,
    pub radius: String,
    pub max_width: String,
    pub header_bg: String,
    pub header_border: String,
    pub title_text: String,
    pub body_text: String,
    pub footer_bg: String,
    pub footer_border: String,
    pub close: IconButtonStates,
}

fn overlay(mode: Mode) -> Color {
    match mode {
        Mode::Light => Color::BLACK.with_alpha(0.45),
        Mode::Dark => Color::BLACK.with_alpha(0.65),
    }
}

pub fn generate_dialog_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &DialogArgs,
) -> DialogTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    DialogTokens {
        overlay_bg: css(overlay(mode)),
        overlay_blur: "4px".to_string(),
        surface_bg: css(neutrals.surface),
        surface_border: css(neutrals.border),
        surface_shadow: elevation(mode, 3),
        radius: RADIUS.lg.to_string(),
        max_width: "32rem".to_string(),
        header_bg: two_tone_gradient(shade.bg, neutrals.surface),
        header_border: css(shade.bg_shade),
        title_text: css(shade.text),
        body_text: css(neutrals.ink),
        footer_bg: css(neutrals.soft),
        footer_border: css(neutrals.border),
        close: IconButtonStates::build(&neutrals, shade.bg, shade.bg_shade),
    }
}

impl ComponentRecipe for DialogTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            overlay_bg: css(overlay(mode)),
            overlay_blur: "0".to_string(),
            surface_bg: skeleton.fill(),
            surface_border: skeleton.edge(),
            surface_shadow: "none".to_string(),
            radius: RADIUS.lg.to_string(),
            max_width: "32rem".to_string(),
            header_bg: skeleton.fill(),
            header_border: skeleton.edge(),
            title_text: skeleton.ink(),
            body_text: skeleton.ink(),
            footer_bg: skeleton.fill(),
            footer_border: skeleton.edge(),
            close: IconButtonStates::skeleton(&skeleton),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StateFlags;
    use crate::theme::Theme;

    #[test]
    fn header_fades_from_tint_to_surface() {
        let theme = Theme::default();
        let dialog = generate_dialog_tokens(&theme.colors, theme.mode, &DialogArgs::new());
        assert_eq!(
            dialog.header_bg,
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                theme.colors.primary.bg, theme.colors.white.pure
            )
        );
    }

    #[test]
    fn dark_overlay_is_heavier() {
        let light = Theme::default();
        let dark = light.with_mode(Mode::Dark);
        let a = generate_dialog_tokens(&light.colors, light.mode, &DialogArgs::new());
        let b = generate_dialog_tokens(&dark.colors, dark.mode, &DialogArgs::new());
        assert_eq!(a.overlay_bg, "rgba(0, 0, 0, 0.45)");
        assert_eq!(b.overlay_bg, "rgba(0, 0, 0, 0.65)");
    }

    #[test]
    fn close_button_hover_tints_with_scheme() {
        let theme = Theme::default();
        let dialog = generate_dialog_tokens(
            &theme.colors,
            theme.mode,
            &DialogArgs::new().color(ColorKey::Danger),
        );
        let hover = dialog.close.state(StateFlags::new().hovered(true));
        assert_eq!(hover.bg, theme.colors.danger.bg.to_css());
    }
}

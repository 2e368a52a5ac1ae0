use serde::Serialize;

use crate::color::Color;
use crate::gradient::three_tone_gradient_at;
use crate::style::{ComponentRecipe, SkeletonColors};
use crate::theme::{AppColorTokens, Mode};

use super::{Neutrals, css};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PageBackgroundTokens {
    pub page_bg: String,
    pub canvas: String,
    pub surface: String,
    pub surface_raised: String,
    pub border: String,
    pub section_divider: String,
    pub text: String,
    pub muted_text: String,
    pub link_text: String,
    pub selection_bg: String,
}

/// Page-level canvas. Takes no variant arguments; the wash always blends
/// primary and tertiary into the mode's canvas.
pub fn generate_page_background_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
) -> PageBackgroundTokens {
    let neutrals = Neutrals::from_tokens(tokens, mode);
    let wash = |tint: Color| neutrals.canvas.mix(tint, 0.5);

    PageBackgroundTokens {
        page_bg: three_tone_gradient_at(
            wash(tokens.primary.bg),
            neutrals.canvas,
            wash(tokens.tertiary.bg),
            180.0,
        ),
        canvas: css(neutrals.canvas),
        surface: css(neutrals.surface),
        surface_raised: css(neutrals.surface.mix(neutrals.soft, 0.35)),
        border: css(neutrals.border),
        section_divider: css(neutrals.border.with_alpha(0.6)),
        text: css(neutrals.ink),
        muted_text: css(neutrals.muted),
        link_text: css(tokens.primary.text),
        selection_bg: css(tokens.primary.bg_shade),
    }
}

impl ComponentRecipe for PageBackgroundTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            page_bg: css(mode.canvas()),
            canvas: css(mode.canvas()),
            surface: skeleton.fill(),
            surface_raised: skeleton.fill(),
            border: skeleton.edge(),
            section_divider: skeleton.edge(),
            text: skeleton.ink(),
            muted_text: skeleton.ink(),
            link_text: skeleton.ink(),
            selection_bg: skeleton.edge(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn page_gradient_passes_through_canvas() {
        let theme = Theme::default();
        let page = generate_page_background_tokens(&theme.colors, theme.mode);
        assert!(page.page_bg.starts_with("linear-gradient(180deg, "));
        assert!(page.page_bg.contains(&format!("{} 50%", Mode::Light.canvas())));
    }

    #[test]
    fn dark_canvas_differs() {
        let light = Theme::default();
        let dark = light.with_mode(Mode::Dark);
        let a = generate_page_background_tokens(&light.colors, light.mode);
        let b = generate_page_background_tokens(&dark.colors, dark.mode);
        assert_eq!(a.canvas, "#ffffff");
        assert_eq!(b.canvas, "#141517");
        assert_ne!(a.text, b.text);
    }
}

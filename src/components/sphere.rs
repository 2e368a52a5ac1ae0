use serde::Serialize;

use crate::color::Color;
use crate::gradient::{GradientStop, radial_gradient};
use crate::style::{ComponentRecipe, ControlSize, SkeletonColors};
use crate::theme::{AppColorTokens, ColorShade, Mode};
use crate::tokens::{ColorKey, SPHERE_DIAMETERS};

use super::css;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SphereArgs {
    pub color: ColorKey,
    pub size: ControlSize,
}

impl SphereArgs {
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

/// Decorative orb.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SphereTokens {
    pub core: String,
    pub glow: String,
    pub highlight: String,
    pub ring: String,
    pub diameter: u16,
    pub radius: String,
}

const CORE_SHAPE: &str = "circle at 30% 30%";
const HIGHLIGHT_SHAPE: &str = "circle at 28% 24%";

fn core_stops(shade: &ColorShade) -> [GradientStop; 3] {
    [
        GradientStop::new(shade.bg, 0.0),
        GradientStop::new(shade.pure, 45.0),
        GradientStop::new(shade.pure_shade, 100.0),
    ]
}

fn glow(pure: Color, mode: Mode, diameter: u16) -> String {
    let (alpha, spread) = match mode {
        Mode::Light => (0.35, diameter / 4),
        Mode::Dark => (0.55, diameter / 3),
    };
    format!("0 0 {spread}px {}", pure.with_alpha(alpha))
}

pub fn generate_sphere_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &SphereArgs,
) -> SphereTokens {
    let shade = tokens.get(args.color);
    let diameter = *SPHERE_DIAMETERS.get(args.size);
    let highlight = [
        GradientStop::new(Color::WHITE.with_alpha(0.7), 0.0),
        GradientStop::new(Color::WHITE.with_alpha(0.0), 35.0),
    ];

    // Stop lists are fixed and non-empty.
    let core = radial_gradient(&core_stops(shade), CORE_SHAPE).unwrap_or_else(|_| css(shade.pure));
    let highlight =
        radial_gradient(&highlight, HIGHLIGHT_SHAPE).unwrap_or_else(|_| "none".to_string());

    SphereTokens {
        core,
        glow: glow(shade.pure, mode, diameter),
        highlight,
        ring: css(shade.bg_shade),
        diameter,
        radius: "50%".to_string(),
    }
}

impl ComponentRecipe for SphereTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            core: skeleton.fill(),
            glow: "none".to_string(),
            highlight: "none".to_string(),
            ring: skeleton.edge(),
            diameter: *SPHERE_DIAMETERS.get(ControlSize::Md),
            radius: "50%".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn core_is_offset_radial_gradient() {
        let theme = Theme::default();
        let sphere = generate_sphere_tokens(&theme.colors, theme.mode, &SphereArgs::new());
        let primary = theme.colors.primary;
        assert_eq!(
            sphere.core,
            format!(
                "radial-gradient(circle at 30% 30%, {} 0%, {} 45%, {} 100%)",
                primary.bg, primary.pure, primary.pure_shade
            )
        );
    }

    #[test]
    fn glow_scales_with_diameter() {
        let theme = Theme::default();
        let small = generate_sphere_tokens(
            &theme.colors,
            theme.mode,
            &SphereArgs::new().size(ControlSize::Sm),
        );
        let large = generate_sphere_tokens(
            &theme.colors,
            theme.mode,
            &SphereArgs::new().size(ControlSize::Lg),
        );
        assert_eq!(small.diameter, 48);
        assert_eq!(small.glow, format!("0 0 12px {}", theme.colors.primary.pure.with_alpha(0.35)));
        assert_ne!(small.glow, large.glow);
    }
}

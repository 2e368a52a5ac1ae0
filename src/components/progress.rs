use serde::Serialize;

use crate::color::Color;
use crate::gradient::two_tone_gradient_at;
use crate::style::{ComponentRecipe, ControlSize, SkeletonColors};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, PROGRESS_HEIGHTS, RADIUS_PILL};

use super::{Neutrals, css};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ProgressArgs {
    pub color: ColorKey,
    pub size: ControlSize,
    pub striped: bool,
}

impl ProgressArgs {
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

    pub fn striped(mut self, value: bool) -> Self {
        self.striped = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProgressTokens {
    pub track_bg: String,
    pub fill_bg: String,
    pub fill_stripes: String,
    pub stripe_size: String,
    pub label_text: String,
    pub value_text: String,
    pub height: u16,
    pub radius: String,
    pub transition: String,
}

const STRIPE_SIZE: &str = "1rem 1rem";
const FILL_TRANSITION: &str = "width 200ms ease";

fn stripes(ink: Color) -> String {
    let band = ink.with_alpha(0.15).to_css();
    format!(
        "linear-gradient(45deg, {band} 25%, transparent 25%, transparent 50%, \
         {band} 50%, {band} 75%, transparent 75%, transparent)"
    )
}

pub fn generate_progress_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &ProgressArgs,
) -> ProgressTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    ProgressTokens {
        track_bg: css(neutrals.border),
        fill_bg: two_tone_gradient_at(shade.pure_shade, shade.pure, 90.0),
        fill_stripes: if args.striped {
            stripes(shade.contrast_text)
        } else {
            "none".to_string()
        },
        stripe_size: STRIPE_SIZE.to_string(),
        label_text: css(neutrals.ink),
        value_text: css(shade.text),
        height: *PROGRESS_HEIGHTS.get(args.size),
        radius: RADIUS_PILL.to_string(),
        transition: FILL_TRANSITION.to_string(),
    }
}

impl ComponentRecipe for ProgressTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            track_bg: skeleton.fill(),
            fill_bg: skeleton.edge(),
            fill_stripes: "none".to_string(),
            stripe_size: STRIPE_SIZE.to_string(),
            label_text: skeleton.ink(),
            value_text: skeleton.ink(),
            height: *PROGRESS_HEIGHTS.get(ControlSize::Md),
            radius: RADIUS_PILL.to_string(),
            transition: FILL_TRANSITION.to_string(),
        }
    }
}

use serde::Serialize;

use crate::style::{ComponentRecipe, SkeletonColors, StateFlags};
use crate::theme::{AppColorTokens, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{FieldStateTokens, FieldStates, Neutrals, css};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct TextareaArgs {
    pub color: ColorKey,
}

impl TextareaArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TextareaTokens {
    pub field: FieldStates,
    pub placeholder: String,
    pub label: String,
    pub description: String,
    pub error_text: String,
    pub counter_text: String,
    pub counter_limit_text: String,
    pub radius: String,
    pub min_height: String,
    pub padding: String,
    pub resize: String,
}

impl TextareaTokens {
    pub fn field(&self, flags: StateFlags, invalid: bool) -> &FieldStateTokens {
        self.field.state(flags, invalid)
    }

    /// Counter color once the content reaches `limit`.
    pub fn counter(&self, length: usize, limit: Option<usize>) -> &str {
        match limit {
            Some(limit) if length >= limit => &self.counter_limit_text,
            _ => &self.counter_text,
        }
    }
}

pub fn generate_textarea_tokens(
    tokens: &AppColorTokens,
    mode: Mode,
    args: &TextareaArgs,
) -> TextareaTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    TextareaTokens {
        field: FieldStates::build(tokens, &neutrals, shade.pure),
        placeholder: css(neutrals.muted),
        label: css(neutrals.ink),
        description: css(neutrals.muted),
        error_text: css(tokens.danger.text),
        counter_text: css(neutrals.muted),
        counter_limit_text: css(tokens.danger.pure),
        radius: RADIUS.sm.to_string(),
        min_height: "5rem".to_string(),
        padding: "0.5rem 0.75rem".to_string(),
        resize: "vertical".to_string(),
    }
}

impl ComponentRecipe for TextareaTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        Self {
            field: FieldStates::skeleton(&skeleton),
            placeholder: skeleton.ink(),
            label: skeleton.ink(),
            description: skeleton.ink(),
            error_text: skeleton.ink(),
            counter_text: skeleton.ink(),
            counter_limit_text: skeleton.ink(),
            radius: RADIUS.sm.to_string(),
            min_height: "5rem".to_string(),
            padding: "0.5rem 0.75rem".to_string(),
            resize: "none".to_string(),
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;
use crate::theme::{AppColorTokens, Mode};

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleType {
    #[default]
    Solid,
    Subtle,
    Outline,
}

impl StyleType {
    pub const ALL: [StyleType; 3] = [StyleType::Solid, StyleType::Subtle, StyleType::Outline];
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ControlSize {
    pub const ALL: [ControlSize; 3] = [ControlSize::Sm, ControlSize::Md, ControlSize::Lg];
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum BadgeSize {
    #[serde(rename = "2xs")]
    Xxs,
    #[serde(rename = "xs")]
    Xs,
    #[default]
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
}

impl BadgeSize {
    pub const ALL: [BadgeSize; 5] = [
        BadgeSize::Xxs,
        BadgeSize::Xs,
        BadgeSize::Sm,
        BadgeSize::Md,
        BadgeSize::Lg,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xxs => "2xs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SizeScale<T> {
    pub sm: T,
    pub md: T,
    pub lg: T,
}

impl<T> SizeScale<T> {
    pub const fn new(sm: T, md: T, lg: T) -> Self {
        Self { sm, md, lg }
    }

    pub const fn get(&self, size: ControlSize) -> &T {
        match size {
            ControlSize::Sm => &self.sm,
            ControlSize::Md => &self.md,
            ControlSize::Lg => &self.lg,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SizeScale<U> {
        SizeScale {
            sm: f(&self.sm),
            md: f(&self.md),
            lg: f(&self.lg),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct BadgeScale<T> {
    #[serde(rename = "2xs")]
    pub xxs: T,
    pub xs: T,
    pub sm: T,
    pub md: T,
    pub lg: T,
}

impl<T> BadgeScale<T> {
    pub const fn new(xxs: T, xs: T, sm: T, md: T, lg: T) -> Self {
        Self { xxs, xs, sm, md, lg }
    }

    pub const fn get(&self, size: BadgeSize) -> &T {
        match size {
            BadgeSize::Xxs => &self.xxs,
            BadgeSize::Xs => &self.xs,
            BadgeSize::Sm => &self.sm,
            BadgeSize::Md => &self.md,
            BadgeSize::Lg => &self.lg,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Active,
    Disabled,
}

/// Snapshot of a primitive's own interaction state. Generators never track
/// it; they are called once per snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct StateFlags {
    pub is_active: bool,
    pub is_hovered: bool,
    pub is_disabled: bool,
}

impl StateFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, value: bool) -> Self {
        self.is_active = value;
        self
    }

    pub fn hovered(mut self, value: bool) -> Self {
        self.is_hovered = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.is_disabled = value;
        self
    }

    /// Disabled beats active, active beats hover.
    pub fn resolve(self) -> InteractionState {
        if self.is_disabled {
            InteractionState::Disabled
        } else if self.is_active {
            InteractionState::Active
        } else if self.is_hovered {
            InteractionState::Hover
        } else {
            InteractionState::Default
        }
    }
}

pub const CURSOR_POINTER: &str = "pointer";
pub const CURSOR_DEFAULT: &str = "default";
pub const CURSOR_NOT_ALLOWED: &str = "not-allowed";
pub const OPACITY_FULL: &str = "1";
pub const OPACITY_DISABLED: &str = "0.5";
pub const TRANSPARENT: &str = "transparent";

/// Ordered CSS property map, e.g. custom properties for one primitive.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleMap {
    tokens: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    pub fn extend(mut self, other: Self) -> Self {
        for (name, value) in other.tokens {
            self.tokens.insert(name, value);
        }
        self
    }

    pub fn read(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Renders `name: value;` pairs suitable for an inline `style` attribute.
    pub fn to_declarations(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Flattens a recipe into CSS custom properties named
/// `--{prefix}-{field}-{nested-field}`.
pub fn css_variables<T: Serialize>(prefix: &str, recipe: &T) -> StyleMap {
    let value = match serde_json::to_value(recipe) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                prefix,
                error = %err,
                "recipe could not be flattened into css variables"
            );
            return StyleMap::new();
        }
    };

    let mut out = BTreeMap::new();
    flatten_into(&mut out, format!("--{}", kebab(prefix)), &value);
    StyleMap { tokens: out }
}

fn flatten_into(out: &mut BTreeMap<String, String>, path: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            out.insert(path, flag.to_string());
        }
        Value::Number(number) => {
            out.insert(path, number.to_string());
        }
        Value::String(text) => {
            out.insert(path, text.clone());
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(out, format!("{path}-{index}"), item);
            }
        }
        Value::Object(fields) => {
            for (key, item) in fields {
                flatten_into(out, format!("{path}-{}", kebab(key)), item);
            }
        }
    }
}

fn kebab(name: &str) -> String {
    name.replace('_', "-")
}

/// Fixed gray fills used while the token set is not resolved yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SkeletonColors {
    pub fill: Color,
    pub edge: Color,
    pub ink: Color,
}

impl SkeletonColors {
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self {
                fill: Color::hex(0xe9ecef),
                edge: Color::hex(0xdee2e6),
                ink: Color::hex(0xadb5bd),
            },
            Mode::Dark => Self {
                fill: Color::hex(0x2c2e33),
                edge: Color::hex(0x373a40),
                ink: Color::hex(0x5c5f66),
            },
        }
    }

    pub fn fill(&self) -> String {
        self.fill.to_css()
    }

    pub fn edge(&self) -> String {
        self.edge.to_css()
    }

    pub fn ink(&self) -> String {
        self.ink.to_css()
    }
}

/// A render-ready recipe for one primitive family.
///
/// Each family defines its own inert placeholder: a primitive that renders
/// before the theme provider has produced [`AppColorTokens`] shows the
/// skeleton instead of failing.
pub trait ComponentRecipe: Sized {
    fn placeholder(mode: Mode) -> Self;
}

pub fn recipe_or_placeholder<R: ComponentRecipe>(
    tokens: Option<&AppColorTokens>,
    mode: Mode,
    generate: impl FnOnce(&AppColorTokens) -> R,
) -> R {
    match tokens {
        Some(tokens) => generate(tokens),
        None => R::placeholder(mode),
    }
}

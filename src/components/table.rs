use std::collections::BTreeMap;

use serde::Serialize;

use crate::gradient::two_tone_gradient_at;
use crate::style::{
    CURSOR_DEFAULT, CURSOR_NOT_ALLOWED, CURSOR_POINTER, ComponentRecipe, InteractionState,
    OPACITY_DISABLED, OPACITY_FULL, SkeletonColors, StateFlags,
};
use crate::theme::{AppColorTokens, ColorShade, Mode};
use crate::tokens::{ColorKey, RADIUS};

use super::{Neutrals, css, elevation};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct TableArgs {
    pub color: ColorKey,
}

impl TableArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: ColorKey) -> Self {
        self.color = value;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableHeaderTokens {
    pub bg: String,
    pub text: String,
    pub border: String,
    pub font_weight: u16,
    pub sort_icon: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableRowTokens {
    pub bg: String,
    pub text: String,
    pub border: String,
    pub accent_bar: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableRowStates {
    pub default: TableRowTokens,
    pub striped: TableRowTokens,
    pub hover: TableRowTokens,
    pub selected: TableRowTokens,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableCellTokens {
    pub bg: String,
    pub text: String,
    pub font_weight: u16,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableCellVariants {
    pub highlight: TableCellTokens,
    pub muted: TableCellTokens,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExpanderCircleTokens {
    pub bg: String,
    pub border: String,
    pub icon: String,
    pub icon_rotation: String,
    pub size: u16,
    pub cursor: String,
    pub opacity: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExpanderStates {
    pub collapsed: ExpanderCircleTokens,
    pub expanded: ExpanderCircleTokens,
    pub hover: ExpanderCircleTokens,
    pub disabled: ExpanderCircleTokens,
}

impl ExpanderStates {
    /// `is_active` means the row is expanded.
    pub fn state(&self, flags: StateFlags) -> &ExpanderCircleTokens {
        match flags.resolve() {
            InteractionState::Default => &self.collapsed,
            InteractionState::Hover => &self.hover,
            InteractionState::Active => &self.expanded,
            InteractionState::Disabled => &self.disabled,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableTokens {
    pub container_bg: String,
    pub container_border: String,
    pub container_shadow: String,
    pub radius: String,
    pub header: TableHeaderTokens,
    pub rows: TableRowStates,
    /// Status rows for every hued scheme; neutral rows use `rows.default`.
    pub status: BTreeMap<ColorKey, TableRowTokens>,
    pub cells: TableCellVariants,
    pub expander: ExpanderStates,
    pub caption_text: String,
    pub empty_text: String,
}

impl TableTokens {
    pub fn status_row(&self, key: ColorKey) -> &TableRowTokens {
        self.status.get(&key).unwrap_or(&self.rows.default)
    }
}

const EXPANDER_SIZE: u16 = 20;

fn status_row(shade: &ColorShade, neutrals: &Neutrals) -> TableRowTokens {
    TableRowTokens {
        bg: css(shade.bg),
        text: css(neutrals.ink),
        border: css(shade.bg_shade),
        accent_bar: css(shade.pure),
    }
}

pub fn generate_table_tokens(tokens: &AppColorTokens, mode: Mode, args: &TableArgs) -> TableTokens {
    let shade = tokens.get(args.color);
    let neutrals = Neutrals::from_tokens(tokens, mode);

    let row = |bg: String, accent_bar: String| TableRowTokens {
        bg,
        text: css(neutrals.ink),
        border: css(neutrals.border),
        accent_bar,
    };
    let surface = css(neutrals.surface);

    let expander = |bg: String, border: String, icon: String, rotation: &str| ExpanderCircleTokens {
        bg,
        border,
        icon,
        icon_rotation: rotation.to_string(),
        size: EXPANDER_SIZE,
        cursor: CURSOR_POINTER.to_string(),
        opacity: OPACITY_FULL.to_string(),
    };

    TableTokens {
        container_bg: surface.clone(),
        container_border: css(neutrals.border),
        container_shadow: elevation(mode, 0),
        radius: RADIUS.md.to_string(),
        header: TableHeaderTokens {
            bg: two_tone_gradient_at(shade.bg, shade.bg_shade, 180.0),
            text: css(shade.text),
            border: css(shade.bg_shade),
            font_weight: 600,
            sort_icon: css(shade.text_shade),
        },
        rows: TableRowStates {
            default: row(surface.clone(), surface.clone()),
            striped: row(css(neutrals.soft), css(neutrals.soft)),
            hover: row(css(shade.bg), css(shade.bg_shade)),
            selected: TableRowTokens {
                bg: css(shade.bg_shade),
                text: css(shade.text),
                border: css(shade.bg_shade),
                accent_bar: css(shade.pure),
            },
        },
        status: ColorKey::HUED
            .into_iter()
            .map(|key| (key, status_row(tokens.get(key), &neutrals)))
            .collect(),
        cells: TableCellVariants {
            highlight: TableCellTokens {
                bg: css(shade.bg),
                text: css(shade.text),
                font_weight: 600,
            },
            muted: TableCellTokens {
                bg: surface.clone(),
                text: css(neutrals.muted),
                font_weight: 400,
            },
        },
        expander: ExpanderStates {
            collapsed: expander(
                surface.clone(),
                css(neutrals.border),
                css(neutrals.muted),
                "0deg",
            ),
            expanded: expander(
                css(shade.pure),
                css(shade.pure),
                css(shade.contrast_text),
                "90deg",
            ),
            hover: expander(css(shade.bg), css(shade.pure), css(shade.text), "0deg"),
            disabled: ExpanderCircleTokens {
                cursor: CURSOR_NOT_ALLOWED.to_string(),
                opacity: OPACITY_DISABLED.to_string(),
                ..expander(
                    css(neutrals.soft),
                    css(neutrals.border),
                    css(neutrals.muted),
                    "0deg",
                )
            },
        },
        caption_text: css(neutrals.muted),
        empty_text: css(neutrals.muted),
    }
}

impl ComponentRecipe for TableTokens {
    fn placeholder(mode: Mode) -> Self {
        let skeleton = SkeletonColors::for_mode(mode);
        let row = TableRowTokens {
            bg: skeleton.fill(),
            text: skeleton.ink(),
            border: skeleton.edge(),
            accent_bar: skeleton.edge(),
        };
        let cell = TableCellTokens {
            bg: skeleton.fill(),
            text: skeleton.ink(),
            font_weight: 400,
        };
        let circle = ExpanderCircleTokens {
            bg: skeleton.fill(),
            border: skeleton.edge(),
            icon: skeleton.ink(),
            icon_rotation: "0deg".to_string(),
            size: EXPANDER_SIZE,
            cursor: CURSOR_DEFAULT.to_string(),
            opacity: OPACITY_FULL.to_string(),
        };
        Self {
            container_bg: skeleton.fill(),
            container_border: skeleton.edge(),
            container_shadow: "none".to_string(),
            radius: RADIUS.md.to_string(),
            header: TableHeaderTokens {
                bg: skeleton.edge(),
                text: skeleton.ink(),
                border: skeleton.edge(),
                font_weight: 600,
                sort_icon: skeleton.ink(),
            },
            rows: TableRowStates {
                default: row.clone(),
                striped: row.clone(),
                hover: row.clone(),
                selected: row.clone(),
            },
            status: ColorKey::HUED
                .into_iter()
                .map(|key| (key, row.clone()))
                .collect(),
            cells: TableCellVariants {
                highlight: cell.clone(),
                muted: cell,
            },
            expander: ExpanderStates {
                collapsed: circle.clone(),
                expanded: circle.clone(),
                hover: circle.clone(),
                disabled: circle,
            },
            caption_text: skeleton.ink(),
            empty_text: skeleton.ink(),
        }
    }
}

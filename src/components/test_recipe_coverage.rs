use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use super::*;
use crate::style::{ComponentRecipe, StyleType};
use crate::theme::{Mode, Theme};
use crate::tokens::{ColorKey, SchemeName};

fn json(recipe: &impl Serialize) -> Value {
    match serde_json::to_value(recipe) {
        Ok(value) => value,
        Err(err) => panic!("recipe failed to serialize: {err}"),
    }
}

fn recipes(theme: &Theme, color: ColorKey) -> Vec<(&'static str, Value)> {
    let tokens = &theme.colors;
    let mode = theme.mode;
    vec![
        (
            "accordion",
            json(&generate_accordion_tokens(
                tokens,
                mode,
                &AccordionArgs::new().color(color).active(true),
            )),
        ),
        (
            "alert",
            json(&generate_alert_tokens(
                tokens,
                mode,
                &AlertArgs::new()
                    .status(AlertStatus::Warning)
                    .style_type(StyleType::Outline),
            )),
        ),
        ("badge", json(&generate_standard_badge_tokens(tokens))),
        (
            "date_picker",
            json(&generate_date_picker_tokens(
                tokens,
                mode,
                &DatePickerArgs::new().color(color),
            )),
        ),
        (
            "dialog",
            json(&generate_dialog_tokens(tokens, mode, &DialogArgs::new().color(color))),
        ),
        (
            "dropdown_menu",
            json(&generate_dropdown_menu_tokens(
                tokens,
                mode,
                &DropdownMenuArgs::new().color(color),
            )),
        ),
        (
            "navbar",
            json(&generate_navbar_tokens(tokens, mode, &NavbarArgs::new().color(color))),
        ),
        (
            "page_background",
            json(&generate_page_background_tokens(tokens, mode)),
        ),
        (
            "progress",
            json(&generate_progress_tokens(
                tokens,
                mode,
                &ProgressArgs::new().color(color).striped(true),
            )),
        ),
        (
            "radio",
            json(&generate_radio_tokens(tokens, mode, &RadioArgs::new().color(color))),
        ),
        (
            "sphere",
            json(&generate_sphere_tokens(tokens, mode, &SphereArgs::new().color(color))),
        ),
        (
            "switch",
            json(&generate_standard_switch_tokens(
                tokens,
                mode,
                &SwitchArgs::new().color(color),
            )),
        ),
        (
            "table",
            json(&generate_table_tokens(tokens, mode, &TableArgs::new().color(color))),
        ),
        (
            "tabs",
            json(&generate_tabs_tokens(
                tokens,
                mode,
                &TabsArgs::new().color(color).style(TabsStyle::Enclosed),
            )),
        ),
        (
            "textarea",
            json(&generate_textarea_tokens(
                tokens,
                mode,
                &TextareaArgs::new().color(color),
            )),
        ),
        (
            "theme_selector",
            json(&generate_theme_selector_tokens(
                tokens,
                mode,
                &ThemeSelectorArgs::new().selected(theme.scheme),
            )),
        ),
    ]
}

fn placeholders(mode: Mode) -> Vec<(&'static str, Value)> {
    vec![
        ("accordion", json(&AccordionTokens::placeholder(mode))),
        ("alert", json(&AlertTokens::placeholder(mode))),
        ("badge", json(&StandardBadgeTokens::placeholder(mode))),
        ("date_picker", json(&DatePickerTokens::placeholder(mode))),
        ("dialog", json(&DialogTokens::placeholder(mode))),
        ("dropdown_menu", json(&DropdownMenuTokens::placeholder(mode))),
        ("navbar", json(&NavbarTokens::placeholder(mode))),
        ("page_background", json(&PageBackgroundTokens::placeholder(mode))),
        ("progress", json(&ProgressTokens::placeholder(mode))),
        ("radio", json(&RadioTokens::placeholder(mode))),
        ("sphere", json(&SphereTokens::placeholder(mode))),
        ("switch", json(&StandardSwitchTokens::placeholder(mode))),
        ("table", json(&TableTokens::placeholder(mode))),
        ("tabs", json(&TabsTokens::placeholder(mode))),
        ("textarea", json(&TextareaTokens::placeholder(mode))),
        ("theme_selector", json(&ThemeSelectorTokens::placeholder(mode))),
    ]
}

fn assert_populated(path: &str, value: &Value) {
    match value {
        Value::Null => panic!("{path} is null"),
        Value::String(text) => assert!(!text.trim().is_empty(), "{path} is empty"),
        Value::Array(items) => {
            assert!(!items.is_empty(), "{path} is an empty list");
            for (index, item) in items.iter().enumerate() {
                assert_populated(&format!("{path}[{index}]"), item);
            }
        }
        Value::Object(fields) => {
            assert!(!fields.is_empty(), "{path} has no fields");
            for (key, field) in fields {
                assert_populated(&format!("{path}.{key}"), field);
            }
        }
        Value::Bool(_) | Value::Number(_) => {}
    }
}

fn component_modules() -> BTreeSet<String> {
    include_str!("mod.rs")
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("pub mod "))
        .filter_map(|line| line.strip_suffix(';'))
        .map(str::to_string)
        .collect()
}

#[test]
fn every_component_module_is_covered() {
    let modules = component_modules();
    let covered: BTreeSet<String> = recipes(&Theme::default(), ColorKey::Primary)
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();
    let skeletons: BTreeSet<String> = placeholders(Mode::Light)
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(modules.len(), 16);
    assert_eq!(covered, modules);
    assert_eq!(skeletons, modules);
}

#[test]
fn every_scheme_and_mode_populates_every_field() {
    for scheme in SchemeName::ALL {
        for mode in Mode::ALL {
            let theme = Theme::new(scheme, mode);
            for color in ColorKey::ALL {
                for (name, value) in recipes(&theme, color) {
                    let path = format!(
                        "{}/{}/{}/{name}",
                        scheme.as_str(),
                        mode.as_str(),
                        color.as_str()
                    );
                    assert_populated(&path, &value);
                }
            }
        }
    }
}

#[test]
fn placeholders_are_complete() {
    for mode in Mode::ALL {
        for (name, value) in placeholders(mode) {
            assert_populated(&format!("placeholder/{}/{name}", mode.as_str()), &value);
        }
    }
}

#[test]
fn generation_is_idempotent() {
    let theme = Theme::new(SchemeName::Purple, Mode::Dark);
    assert_eq!(
        recipes(&theme, ColorKey::Accent),
        recipes(&theme, ColorKey::Accent)
    );
}

#[test]
fn switching_mode_changes_every_recipe() {
    for scheme in SchemeName::ALL {
        let light = Theme::new(scheme, Mode::Light);
        let dark = light.with_mode(Mode::Dark);
        for ((name, a), (_, b)) in recipes(&light, ColorKey::Primary)
            .into_iter()
            .zip(recipes(&dark, ColorKey::Primary))
        {
            assert_ne!(a, b, "{name} ignores the mode for {}", scheme.as_str());
        }
    }
}

#[test]
fn missing_tokens_fall_back_to_placeholder() {
    let theme = Theme::default();
    let ready = tokens_or_placeholder(Some(&theme.colors), theme.mode, |tokens, mode| {
        generate_radio_tokens(tokens, mode, &RadioArgs::new())
    });
    let pending = tokens_or_placeholder(None, Mode::Dark, |tokens, mode| {
        generate_radio_tokens(tokens, mode, &RadioArgs::new())
    });
    assert_eq!(ready, generate_radio_tokens(&theme.colors, theme.mode, &RadioArgs::new()));
    assert_eq!(pending, RadioTokens::placeholder(Mode::Dark));
}

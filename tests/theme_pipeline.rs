use std::num::NonZeroUsize;
use std::sync::Arc;

use lumen_tokens::prelude::*;

#[test]
fn provider_snapshot_drives_every_generator() {
    let mut provider = ThemeProvider::new();
    provider.set_scheme("green");
    let theme = provider.theme();

    let badge = generate_standard_badge_tokens(&theme.colors);
    let solid = badge.style(ColorKey::Success, StyleType::Solid);
    assert_eq!(solid.bg, theme.colors.success.pure.to_css());

    let page = generate_page_background_tokens(&theme.colors, theme.mode);
    assert_eq!(page.canvas, "#ffffff");

    provider.toggle_mode();
    let dark = provider.theme();
    assert_eq!(dark.scheme, SchemeName::Green);
    assert_eq!(dark.mode, Mode::Dark);
    assert_ne!(
        generate_page_background_tokens(&dark.colors, dark.mode),
        page
    );
    // The earlier snapshot is untouched by the toggle.
    assert_eq!(theme.mode, Mode::Light);
}

#[test]
fn string_keyed_callers_degrade_to_neutral() {
    let theme = Theme::resolve("not-a-scheme", Mode::Light);
    assert_eq!(theme.scheme, SchemeName::Blue);
    assert_eq!(theme.colors.lookup("brand"), &theme.colors.neutral);
    assert_eq!(theme.colors.lookup("Primary"), &theme.colors.primary);
}

#[test]
fn recipes_flatten_into_css_variables() {
    let theme = Theme::default();
    let switch = generate_standard_switch_tokens(&theme.colors, theme.mode, &SwitchArgs::new());
    let vars = css_variables("switch", &switch);
    assert_eq!(
        vars.read("--switch-on-track-bg"),
        Some(theme.colors.primary.pure.to_css().as_str())
    );
    assert_eq!(vars.read("--switch-sizes-md-track-width"), Some("36"));
    assert!(vars.to_declarations().contains("--switch-radius: 9999px;"));
}

#[test]
fn config_file_round_trip_feeds_the_provider() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs").join("theme.toml");

    let overrides = PaletteOverrides::new().anchor(
        ColorKey::Primary,
        lumen_tokens::theme::AnchorOverride::default().pure("#e8590c"),
    );
    let config = ThemeConfig::new(SchemeName::Purple, Mode::Dark).with_overrides(overrides);
    config.save_to_path(&path).expect("save");

    let loaded = ThemeConfig::load_from_path(&path).expect("load");
    assert_eq!(loaded, config);

    let provider = ThemeProvider::from_config(&loaded);
    let theme = provider.theme();
    assert_eq!(theme.colors.primary.pure, Color::hex(0xe8590c));
    assert_eq!(provider.to_config(), config);
}

#[test]
fn memo_returns_shared_recipe_until_theme_changes() {
    let mut memo: RecipeMemo<TabsArgs, TabsTokens> =
        RecipeMemo::new(NonZeroUsize::new(4).expect("non-zero"));
    let mut provider = ThemeProvider::new();
    let args = TabsArgs::new().style(TabsStyle::Enclosed);

    let first = memo.get_or_generate(&provider.theme(), &args, generate_tabs_tokens);
    let second = memo.get_or_generate(&provider.theme(), &args, generate_tabs_tokens);
    assert!(Arc::ptr_eq(&first, &second));

    provider.set_mode(Mode::Dark);
    let third = memo.get_or_generate(&provider.theme(), &args, generate_tabs_tokens);
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(memo.misses(), 2);
    assert_eq!(memo.hits(), 1);
}

#[test]
fn gradients_render_css_functions() {
    let stops = [
        GradientStop::new(Color::hex(0xff0000), 0.0),
        GradientStop::new(Color::hex(0x0000ff), 100.0),
    ];
    assert_eq!(
        linear_gradient(&stops, None).expect("stops"),
        "linear-gradient(135deg, #ff0000 0%, #0000ff 100%)"
    );
    assert!(matches!(
        linear_gradient(&[], Some(90.0)),
        Err(TokenError::EmptyGradient)
    ));
    assert_eq!(
        three_tone_gradient("#fff", "#888", "#000"),
        "linear-gradient(135deg, #fff 0%, #888 50%, #000 100%)"
    );
}

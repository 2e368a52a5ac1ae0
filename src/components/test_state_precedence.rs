use super::*;
use crate::style::{InteractionState, StateFlags};
use crate::theme::{Mode, Theme};
use crate::tokens::SchemeName;

fn all_flag_combinations() -> Vec<StateFlags> {
    let mut combos = Vec::new();
    for is_active in [false, true] {
        for is_hovered in [false, true] {
            for is_disabled in [false, true] {
                combos.push(
                    StateFlags::new()
                        .active(is_active)
                        .hovered(is_hovered)
                        .disabled(is_disabled),
                );
            }
        }
    }
    combos
}

fn themes() -> Vec<Theme> {
    SchemeName::ALL
        .into_iter()
        .flat_map(|scheme| Mode::ALL.into_iter().map(move |mode| Theme::new(scheme, mode)))
        .collect()
}

#[test]
fn flags_resolve_with_disabled_first() {
    for flags in all_flag_combinations() {
        let expected = if flags.is_disabled {
            InteractionState::Disabled
        } else if flags.is_active {
            InteractionState::Active
        } else if flags.is_hovered {
            InteractionState::Hover
        } else {
            InteractionState::Default
        };
        assert_eq!(flags.resolve(), expected, "{flags:?}");
    }
}

#[test]
fn disabled_accordion_ignores_every_other_flag() {
    for theme in themes() {
        let baseline = generate_accordion_tokens(
            &theme.colors,
            theme.mode,
            &AccordionArgs::new().disabled(true),
        );
        for flags in all_flag_combinations() {
            let recipe = generate_accordion_tokens(
                &theme.colors,
                theme.mode,
                &AccordionArgs::new()
                    .active(flags.is_active)
                    .hovered(flags.is_hovered)
                    .disabled(true),
            );
            assert_eq!(recipe.opacity, "0.5");
            assert_eq!(recipe.cursor, "not-allowed");
            assert_eq!(recipe.header_bg, baseline.header_bg);
            assert_eq!(recipe.header_text, baseline.header_text);
        }
    }
}

#[test]
fn disabled_state_wins_across_stateful_recipes() {
    for theme in themes() {
        let (tokens, mode) = (&theme.colors, theme.mode);
        let tabs = generate_tabs_tokens(tokens, mode, &TabsArgs::new());
        let radio = generate_radio_tokens(tokens, mode, &RadioArgs::new());
        let menu = generate_dropdown_menu_tokens(tokens, mode, &DropdownMenuArgs::new());
        let textarea = generate_textarea_tokens(tokens, mode, &TextareaArgs::new());
        let table = generate_table_tokens(tokens, mode, &TableArgs::new());
        let dialog = generate_dialog_tokens(tokens, mode, &DialogArgs::new());
        let switch = generate_standard_switch_tokens(tokens, mode, &SwitchArgs::new());

        for flags in all_flag_combinations()
            .into_iter()
            .filter(|flags| flags.is_disabled)
        {
            assert_eq!(tabs.trigger(flags), &tabs.trigger.disabled);
            assert_eq!(radio.state(true, flags), &radio.disabled);
            assert_eq!(radio.state(false, flags), &radio.disabled);
            assert_eq!(menu.item(flags, true), &menu.item.disabled);
            assert_eq!(textarea.field(flags, true), &textarea.field.disabled);
            assert_eq!(table.expander.state(flags), &table.expander.disabled);
            assert_eq!(dialog.close.state(flags), &dialog.close.disabled);
            assert_eq!(switch.state(flags.is_active, flags.is_disabled), &switch.disabled);
        }
    }
}

#[test]
fn disabled_recipes_share_cursor_and_opacity() {
    let theme = Theme::default();
    let (tokens, mode) = (&theme.colors, theme.mode);
    let tabs = generate_tabs_tokens(tokens, mode, &TabsArgs::new());
    let radio = generate_radio_tokens(tokens, mode, &RadioArgs::new());
    let menu = generate_dropdown_menu_tokens(tokens, mode, &DropdownMenuArgs::new());
    let picker = generate_date_picker_tokens(tokens, mode, &DatePickerArgs::new());
    let switch = generate_standard_switch_tokens(tokens, mode, &SwitchArgs::new());

    let pairs = [
        (&tabs.trigger.disabled.cursor, &tabs.trigger.disabled.opacity),
        (&radio.disabled.cursor, &radio.disabled.opacity),
        (&menu.item.disabled.cursor, &menu.item.disabled.opacity),
        (&picker.day.disabled.cursor, &picker.day.disabled.opacity),
        (&picker.input.disabled.cursor, &picker.input.disabled.opacity),
        (&switch.disabled.cursor, &switch.disabled.opacity),
    ];
    for (cursor, opacity) in pairs {
        assert_eq!(cursor, "not-allowed");
        assert_eq!(opacity, "0.5");
    }
}

#[test]
fn hover_never_leaks_into_active() {
    let theme = Theme::default();
    let tabs = generate_tabs_tokens(&theme.colors, theme.mode, &TabsArgs::new());
    let both = tabs.trigger(StateFlags::new().active(true).hovered(true));
    assert_eq!(both, &tabs.trigger.active);
}

pub use crate::color::Color;
pub use crate::components::{
    AccordionArgs, AccordionTokens, AlertArgs, AlertStatus, AlertTokens, DatePickerArgs,
    DatePickerTokens, DialogArgs, DialogTokens, DropdownMenuArgs, DropdownMenuTokens, NavbarArgs,
    NavbarTokens, PageBackgroundTokens, ProgressArgs, ProgressTokens, RadioArgs, RadioTokens,
    SphereArgs, SphereTokens, StandardBadgeTokens, StandardSwitchTokens, SwitchArgs, TableArgs,
    TableTokens, TabsArgs, TabsStyle, TabsTokens, TextareaArgs, TextareaTokens, ThemeSelectorArgs,
    ThemeSelectorTokens, generate_accordion_tokens, generate_alert_tokens,
    generate_date_picker_tokens, generate_dialog_tokens, generate_dropdown_menu_tokens,
    generate_navbar_tokens, generate_page_background_tokens, generate_progress_tokens,
    generate_radio_tokens, generate_sphere_tokens, generate_standard_badge_tokens,
    generate_standard_switch_tokens, generate_table_tokens, generate_tabs_tokens,
    generate_textarea_tokens, generate_theme_selector_tokens, tokens_or_placeholder,
};
pub use crate::error::{Result, TokenError};
pub use crate::gradient::{
    GradientStop, linear_gradient, radial_gradient, three_tone_gradient, two_tone_gradient,
};
pub use crate::memo::RecipeMemo;
pub use crate::provider::ThemeProvider;
pub use crate::style::{
    BadgeSize, ComponentRecipe, ControlSize, InteractionState, StateFlags, StyleMap, StyleType,
    css_variables,
};
pub use crate::theme::{
    AppColorTokens, ColorShade, Mode, PaletteOverrides, Theme, ThemeConfig, resolve_palette,
};
pub use crate::tokens::{ColorKey, SchemeName};

pub mod color;
pub mod components;
pub mod error;
pub mod gradient;
pub mod memo;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;
pub mod tokens;

pub use color::Color;
pub use error::{Result, TokenError};
pub use memo::RecipeMemo;
pub use provider::ThemeProvider;
pub use theme::{AppColorTokens, ColorShade, Mode, Theme, ThemeConfig};
pub use tokens::{ColorKey, SchemeName};

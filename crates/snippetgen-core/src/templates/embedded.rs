//! Compile-time embedded description templates.
//!
//! Each constant loads a template file from `templates/descriptions/` via [`include_str!`].
//! The paths are relative to this source file
//! (`crates/snippetgen-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.

use crate::locale::Locale;

pub const JA_DESCRIPTION: &str = include_str!("../../../../templates/descriptions/ja.hbs");
pub const EN_DESCRIPTION: &str = include_str!("../../../../templates/descriptions/en.hbs");

/// Built-in description template for a locale.
pub fn for_locale(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => JA_DESCRIPTION,
        Locale::En => EN_DESCRIPTION,
    }
}

//! Description templates for catalog entries.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::Describer`].
//!
//! ## Template variables
//!
//! - `{{args}}` — number of documented arguments
//! - `{{returns}}` — `true` when a return value is documented
//! - `{{function}}` — `true` for functions, `false` for methods
//! - `{{plural}}` — `true` unless `args` is exactly one
//!
//! ## Adding a new locale
//!
//! 1. Create `templates/descriptions/<code>.hbs`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add the variant to [`crate::locale::Locale`] and map it in [`embedded::for_locale`]

pub mod embedded;
pub mod renderer;

//! Handlebars-based renderer for snippet descriptions.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so a
//! template that references an unknown variable fails instead of rendering an
//! empty string. HTML escaping is turned off: descriptions are plain text
//! written into JSON, not markup.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::locale::Locale;
//! use crate::snippet::{SnippetKind, Target};
//! use crate::templates::renderer::Describer;
//!
//! let describer = Describer::new(Locale::En)?;
//! let text = describer.describe(&SnippetKind::new(2, Target::Function, true))?;
//! assert_eq!(text, "Function with 2 arguments and a documented return value");
//! ```

use handlebars::Handlebars;
use serde_json::json;

use crate::error::{Result, SnippetError};
use crate::locale::Locale;
use crate::snippet::{SnippetKind, Target};
use crate::templates::embedded;

const DESCRIPTION: &str = "description";

/// Renders the human-readable description of a [`SnippetKind`].
pub struct Describer {
    hbs: Handlebars<'static>,
}

impl Describer {
    /// Create a describer using the built-in template for `locale`.
    pub fn new(locale: Locale) -> Result<Self> {
        Self::from_template(embedded::for_locale(locale))
    }

    /// Create a describer from a custom Handlebars template.
    ///
    /// The template is compiled and test-rendered once, so a syntax error or a
    /// reference to an unknown variable is reported here rather than halfway
    /// through building a catalog.
    pub fn from_template(template: &str) -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.register_template_string(DESCRIPTION, template)
            .map_err(|e| SnippetError::TemplateRender(e.to_string()))?;

        let describer = Self { hbs };
        describer.describe(&SnippetKind::new(1, Target::Method, true))?;
        Ok(describer)
    }

    /// Render the description for one snippet.
    pub fn describe(&self, kind: &SnippetKind) -> Result<String> {
        let data = json!({
            "args": kind.args,
            "returns": kind.returns,
            "function": kind.target == Target::Function,
            "plural": kind.args != 1,
        });
        let text = self
            .hbs
            .render(DESCRIPTION, &data)
            .map_err(|e| SnippetError::TemplateRender(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}

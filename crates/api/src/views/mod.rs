//! HTML page rendering.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Every page wraps its body in the shared `layout` partial. Handlebars
//! escapes all `{{ }}` interpolations, so record fields are safe to render
//! as-is.

use axum::response::Html;
use handlebars::{handlebars_helper, Handlebars, RenderError, TemplateError};
use serde::Serialize;

pub const INDEX: &str = "index";
pub const ADD_ARTICLE: &str = "add_article";
pub const ADD_CHARACTER: &str = "add_character";
pub const ADD_PLACE: &str = "add_place";
pub const ARTICLE: &str = "article";
pub const CHARACTER: &str = "character";
pub const PLACE: &str = "place";
pub const TEXT_ANALYSIS: &str = "text_analysis";

const LAYOUT: &str = "layout";

const TEMPLATES: &[(&str, &str)] = &[
    (LAYOUT, include_str!("../../templates/layout.hbs")),
    (INDEX, include_str!("../../templates/index.hbs")),
    (ADD_ARTICLE, include_str!("../../templates/add_article.hbs")),
    (ADD_CHARACTER, include_str!("../../templates/add_character.hbs")),
    (ADD_PLACE, include_str!("../../templates/add_place.hbs")),
    (ARTICLE, include_str!("../../templates/article.hbs")),
    (CHARACTER, include_str!("../../templates/character.hbs")),
    (PLACE, include_str!("../../templates/place.hbs")),
    (TEXT_ANALYSIS, include_str!("../../templates/text_analysis.hbs")),
];

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`. Unparseable input is
/// shown unchanged.
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

handlebars_helper!(date: |ts: str| format_timestamp(ts));

/// Registry of compiled page templates.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Compile every page template. Fails if any template has a syntax error.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_helper("date", Box::new(date));

        for (name, source) in TEMPLATES {
            if *name == LAYOUT {
                registry.register_partial(name, *source)?;
            } else {
                registry.register_template_string(name, *source)?;
            }
        }

        Ok(Self { registry })
    }

    /// Render the named page with the given context.
    pub fn render<T: Serialize>(&self, page: &str, ctx: &T) -> Result<Html<String>, RenderError> {
        self.registry.render(page, ctx).map(Html)
    }
}

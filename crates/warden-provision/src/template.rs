//! Whole-value template expressions in schema settings.
//!
//! A setting value is a template iff it matches, in its entirety,
//! `{{ .path }}` with exactly one space on each side of the dotted
//! path. Partial templating inside a larger string is not supported;
//! such values pass through unchanged.

use std::sync::LazyLock;

use regex::Regex;
use warden_core::ServerSpec;
use warden_schema::GameSchema;

use crate::error::SynthesisError;

/// Shape of a whole-value template expression.
static TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{ (?P<path>(\.\w+)+) \}\}$").unwrap()
});

/// A recognized template expression, or a literal value.
///
/// The closed set of reference kinds replaces dispatch on raw path
/// strings; a template-shaped value with an unrecognized path parses as
/// `Literal` and passes through unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateExpr {
    /// `{{ .name }}` — the instance display name.
    Name,
    /// `{{ .modloader }}` — the game's mod loader.
    ModLoader,
    /// `{{ .players }}` — player capacity of the selected size tier.
    Players,
    /// Anything else, returned verbatim.
    Literal(String),
}

impl TemplateExpr {
    /// Classify a raw setting value.
    pub fn parse(raw: &str) -> Self {
        let Some(caps) = TEMPLATE_RE.captures(raw) else {
            return TemplateExpr::Literal(raw.to_string());
        };
        match &caps["path"] {
            ".name" => TemplateExpr::Name,
            ".modloader" => TemplateExpr::ModLoader,
            ".players" => TemplateExpr::Players,
            // Template-shaped but unrecognized: keep the placeholder.
            _ => TemplateExpr::Literal(raw.to_string()),
        }
    }

    /// Resolve against the (schema, spec) context.
    ///
    /// `Players` fails with `SchemaMismatch` when the spec's size has no
    /// tier in the schema; no template path ever panics on missing data.
    pub fn resolve(&self, schema: &GameSchema, spec: &ServerSpec) -> Result<String, SynthesisError> {
        match self {
            TemplateExpr::Name => Ok(spec.name.clone()),
            TemplateExpr::ModLoader => Ok(spec.game.mod_loader.clone()),
            TemplateExpr::Players => schema
                .size_tier(&spec.size)
                .map(|tier| tier.players.to_string())
                .ok_or_else(|| SynthesisError::SchemaMismatch {
                    size: spec.size.clone(),
                    game: schema.name.clone(),
                }),
            TemplateExpr::Literal(value) => Ok(value.clone()),
        }
    }
}

/// Resolve a raw setting value in one step.
pub fn resolve_value(
    raw: &str,
    schema: &GameSchema,
    spec: &ServerSpec,
) -> Result<String, SynthesisError> {
    TemplateExpr::parse(raw).resolve(schema, spec)
}

//! Choosing safe JavaScript names for template identifiers.
//!
//! The tables in `js_names` only answer membership questions. This module
//! is the backend policy on top of them: names that would not parse get a
//! suffix, names that shadow a global are kept (with a warning) unless the
//! options ask for them to be renamed too.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::js_names::{IdentifierClass, classify_identifier};

/// Accepts both `true` and `"true"` (and the usual string spellings).
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                s
            ))),
        },
    }
}

fn default_reserved_suffix() -> String {
    "$".to_string()
}

/// Naming options for the JavaScript backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsNameOptions {
    /// Appended to names that collide with a reserved word or literal.
    #[serde(default = "default_reserved_suffix")]
    pub reserved_suffix: String,
    /// Also rename names that shadow a global binding.
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub rename_globals: bool,
}

impl Default for JsNameOptions {
    fn default() -> Self {
        JsNameOptions {
            reserved_suffix: default_reserved_suffix(),
            rename_globals: false,
        }
    }
}

impl JsNameOptions {
    pub fn from_json_str(text: &str) -> Result<JsNameOptions> {
        let options: JsNameOptions =
            serde_json::from_str(text).context("failed to parse JS naming options")?;
        if options.reserved_suffix.is_empty() {
            anyhow::bail!("reservedSuffix must not be empty");
        }
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<JsNameOptions> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        JsNameOptions::from_json_str(&text)
            .with_context(|| format!("invalid naming options in {}", path.display()))
    }
}

/// The name to emit for the template identifier `name`.
pub fn safe_identifier<'a>(name: &'a str, options: &JsNameOptions) -> Cow<'a, str> {
    let class = classify_identifier(name);
    match class {
        IdentifierClass::Plain => Cow::Borrowed(name),
        IdentifierClass::Literal | IdentifierClass::Reserved => {
            debug!(name, ?class, "renaming identifier");
            Cow::Owned(format!("{name}{}", options.reserved_suffix))
        }
        IdentifierClass::Global => {
            if options.rename_globals {
                debug!(name, "renaming identifier that shadows a global");
                Cow::Owned(format!("{name}{}", options.reserved_suffix))
            } else {
                warn!(name, "identifier shadows a JavaScript global");
                Cow::Borrowed(name)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/name_policy_tests.rs"]
mod tests;

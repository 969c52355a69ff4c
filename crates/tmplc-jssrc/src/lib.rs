//! JavaScript backend utilities for the tmplc template compiler.
//!
//! Anything that writes identifiers or string literals into JavaScript
//! output goes through here:
//! - `js_names` - reserved words, literal keywords and global bindings
//! - `unicode_format` - escaping of invisible format characters
//! - `literals` - quoting of JavaScript string literals
//! - `name_policy` - renaming identifiers that collide with the tables

pub mod js_names;
pub use js_names::{
    IdentifierClass, classify_identifier, is_global_binding, is_js_literal, is_reserved_word,
};

pub mod unicode_format;
pub use unicode_format::{escape_format_chars, is_format_char};

pub mod literals;
pub use literals::quote_js_string;

pub mod name_policy;
pub use name_policy::{JsNameOptions, safe_identifier};

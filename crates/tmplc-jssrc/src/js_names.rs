//! Names that cannot be emitted verbatim as JavaScript identifiers.
//!
//! Three fixed sets, matched exactly and case-sensitively:
//! - literal keywords (`null`, `NaN`, ...), never usable as variable names
//! - reserved words, which are syntax errors as identifiers
//! - global bindings, legal but shadowing a builtin generated code may need

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

pub const JS_LITERALS: &[&str] = &["null", "true", "false", "NaN", "Infinity", "undefined"];

pub const JS_RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "finally",
    "for",
    "function",
    "if",
    "in",
    "instanceof",
    "new",
    "return",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "class",
    "const",
    "enum",
    "export",
    "extends",
    "import",
    "super",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    // future reserved words
    "async",
    "await",
];

/// Standard global objects and functions.
///
/// <https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects>
pub const JS_GLOBALS: &[&str] = &[
    "eval",
    "uneval",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "escape",
    "unescape",
    "Object",
    "Function",
    "Boolean",
    "Symbol",
    "Error",
    "EvalError",
    "InternalError",
    "RangeError",
    "ReferenceError",
    "SyntaxError",
    "TypeError",
    "URIError",
    "Number",
    "Math",
    "Date",
    "String",
    "RegExp",
    "Array",
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "SIMD",
    "ArrayBuffer",
    "SharedArrayBuffer",
    "Atomics",
    "DataView",
    "JSON",
    "Promise",
    "Generator",
    "GeneratorFunction",
    "AsyncFunction",
    "Reflect",
    "Proxy",
    "Intl",
    "WebAssembly",
    "Iterator",
    "ParallelArray",
    "StopIteration",
    "arguments",
];

static LITERAL_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| JS_LITERALS.iter().copied().collect());
static RESERVED_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| JS_RESERVED_WORDS.iter().copied().collect());
static GLOBAL_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| JS_GLOBALS.iter().copied().collect());

#[inline]
pub fn is_js_literal(name: &str) -> bool {
    LITERAL_SET.contains(name)
}

#[inline]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_SET.contains(name)
}

#[inline]
pub fn is_global_binding(name: &str) -> bool {
    GLOBAL_SET.contains(name)
}

/// How safe a name is to emit as a JavaScript identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierClass {
    Plain,
    Literal,
    Reserved,
    Global,
}

impl IdentifierClass {
    /// Emitting the name verbatim would change meaning or fail to parse.
    pub const fn must_rename(self) -> bool {
        matches!(self, IdentifierClass::Literal | IdentifierClass::Reserved)
    }
}

pub fn classify_identifier(name: &str) -> IdentifierClass {
    if is_js_literal(name) {
        IdentifierClass::Literal
    } else if is_reserved_word(name) {
        IdentifierClass::Reserved
    } else if is_global_binding(name) {
        IdentifierClass::Global
    } else {
        IdentifierClass::Plain
    }
}

#[cfg(test)]
#[path = "../tests/js_names_tests.rs"]
mod tests;

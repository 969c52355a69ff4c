//! Source spans.
//!
//! A `Span` is a half-open byte range `[start, end)` inside one source file.
//! Nodes created by the compiler itself (rather than the parser) carry a
//! synthetic span so that every node can answer "where did you come from"
//! without an `Option`.

use serde::Serialize;

/// Identifies a source file within one compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FileId(pub u32);

impl FileId {
    /// Sentinel for compiler-generated code that has no backing file.
    pub const SYNTHETIC: FileId = FileId(u32::MAX);

    #[inline]
    pub fn is_synthetic(self) -> bool {
        self == Self::SYNTHETIC
    }
}

/// A byte range within a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub file: FileId,
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(file: FileId, start: u32, end: u32) -> Span {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Span { file, start, end }
    }

    /// Span for nodes generated by a compiler pass.
    pub const fn synthetic() -> Span {
        Span {
            file: FileId::SYNTHETIC,
            start: 0,
            end: 0,
        }
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.file.is_synthetic()
    }

    /// Length in bytes; zero for an inverted span.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Smallest span covering both inputs.
    ///
    /// Spans from different files cannot be merged; the receiver wins.
    pub fn merge(&self, other: &Span) -> Span {
        if self.file != other.file {
            return *self;
        }
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::synthetic()
    }
}

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod tests;

//! Internal compiler errors.
//!
//! A malformed tree is a bug in an earlier pass, not something the user can
//! fix, so these abort instead of returning a `Result`.

use tmplc_common::Span;
use tmplc_common::diagnostics::{Diagnostic, diagnostic_codes};

/// Report an internal invariant violation at `span` and abort.
#[cold]
#[track_caller]
pub fn internal_error(span: Span, detail: &str) -> ! {
    let diag = Diagnostic::from_code(span, diagnostic_codes::INTERNAL_COMPILER_ERROR, &[detail]);
    tracing::error!(
        code = diag.code,
        file = span.file.0,
        start = span.start,
        end = span.end,
        "{}",
        diag.message_text
    );
    panic!(
        "{} (file {}, {}..{})",
        diag.message_text, span.file.0, span.start, span.end
    )
}

use super::*;
use crate::span::FileId;

#[test]
fn format_message_fills_placeholders() {
    assert_eq!(
        format_message("Internal compiler error: {0}", &["dangling reference"]),
        "Internal compiler error: dangling reference"
    );
    assert_eq!(format_message("{0} and {1}", &["a", "b"]), "a and b");
}

#[test]
fn from_code_uses_registered_template() {
    let span = Span::new(FileId(0), 7, 12);
    let diag = Diagnostic::from_code(
        span,
        diagnostic_codes::IMPORT_PATH_MUST_BE_A_STRING_LITERAL,
        &[],
    );
    assert_eq!(diag.code, 1001);
    assert_eq!(diag.span, span);
    assert!(diag.is_error());
    assert_eq!(diag.message_text, "Import path must be a string literal.");
}

#[test]
fn every_code_has_a_message() {
    for code in [
        diagnostic_codes::IMPORT_PATH_MUST_BE_A_STRING_LITERAL,
        diagnostic_codes::INTERNAL_COMPILER_ERROR,
    ] {
        assert!(
            get_message_template(code).is_some(),
            "missing message for code {code}"
        );
    }
    assert!(get_message_template(4242).is_none());
}

#[test]
fn related_information_is_serialized_only_when_present() {
    let diag = Diagnostic::error(Span::synthetic(), "boom".to_string(), 9001);
    let json = serde_json::to_value(&diag).expect("diagnostic serializes");
    assert!(json.get("related_information").is_none());

    let diag = diag.with_related(Span::new(FileId(3), 0, 1), "here".to_string());
    let json = serde_json::to_value(&diag).expect("diagnostic serializes");
    assert_eq!(json["related_information"][0]["message_text"], "here");
}

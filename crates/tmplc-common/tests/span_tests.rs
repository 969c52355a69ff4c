use super::*;

#[test]
fn synthetic_span_is_flagged() {
    let span = Span::synthetic();
    assert!(span.is_synthetic());
    assert!(span.is_empty());
    assert_eq!(Span::default(), span);
}

#[test]
fn parsed_span_is_not_synthetic() {
    let span = Span::new(FileId(0), 4, 10);
    assert!(!span.is_synthetic());
    assert_eq!(span.len(), 6);
    assert!(span.contains(4));
    assert!(span.contains(9));
    assert!(!span.contains(10));
}

#[test]
fn merge_covers_both_spans() {
    let a = Span::new(FileId(1), 10, 20);
    let b = Span::new(FileId(1), 5, 12);
    assert_eq!(a.merge(&b), Span::new(FileId(1), 5, 20));
}

#[test]
fn merge_across_files_keeps_receiver() {
    let a = Span::new(FileId(1), 10, 20);
    let b = Span::new(FileId(2), 0, 40);
    assert_eq!(a.merge(&b), a);
}

#[test]
fn inverted_span_has_zero_length() {
    let span = Span {
        file: FileId(0),
        start: 12,
        end: 4,
    };
    assert_eq!(span.len(), 0);
}

use super::*;
use tmplc_common::FileId;

#[test]
fn resolve_returns_registered_copy() {
    let mut state = CopyState::new();
    let original = NodeId::fresh();
    let copy = NodeId::fresh();
    assert!(state.is_empty());
    assert_eq!(state.resolve(original), None);

    state.register(original, copy);
    assert_eq!(state.len(), 1);
    assert_eq!(state.resolve(original), Some(copy));
    assert_eq!(state.resolve_reference(original, Span::synthetic()), copy);
}

#[test]
fn external_reference_keeps_original_target() {
    let outer = NodeId::fresh();
    let state = CopyState::with_external([outer]);
    assert_eq!(state.resolve_reference(outer, Span::synthetic()), outer);

    let mut state = CopyState::new();
    state.allow_external(outer);
    assert_eq!(state.resolve_reference(outer, Span::synthetic()), outer);
}

#[test]
#[should_panic(expected = "Internal compiler error: reference to node")]
fn dangling_reference_fails_fast() {
    let state = CopyState::new();
    state.resolve_reference(NodeId::fresh(), Span::new(FileId(0), 3, 9));
}

use super::*;
use crate::defn::ImportedVar;
use tmplc_common::FileId;

fn span(start: u32, end: u32) -> Span {
    Span::new(FileId(0), start, end)
}

#[test]
fn string_node_renders_quoted_and_escaped() {
    let node = StringNode::new("it's a \\ path", span(0, 10));
    assert_eq!(node.kind(), NodeKind::StringLiteral);
    assert_eq!(node.value(), "it's a \\ path");
    assert_eq!(node.to_source_string(), "'it\\'s a \\\\ path'");
}

#[test]
fn string_node_escapes_invisible_characters() {
    let node = StringNode::new("a\r\tb\0\u{1B}\u{7F}\u{2028}\u{200B}\u{E0001}", span(0, 20));
    assert_eq!(
        node.to_source_string(),
        "'a\\r\\tb\\0\\u001B\\u007F\\u2028\\u200B\\uDB40\\uDC01'"
    );
}

#[test]
fn var_ref_points_at_declaration() {
    let defn = ImportedVar::new("Msg", span(8, 11));
    let var_ref = VarRefNode::to_defn(&defn, span(40, 43));
    assert_eq!(var_ref.name(), "Msg");
    assert_eq!(var_ref.defn(), defn.id());
    assert_eq!(var_ref.kind(), NodeKind::VarRef);
}

#[test]
fn var_ref_copy_relinks_to_copied_declaration() {
    let defn = ImportedVar::new("Msg", span(8, 11));
    let var_ref = VarRefNode::to_defn(&defn, span(40, 43));

    let mut state = CopyState::new();
    let defn_copy = defn.copy(&mut state);
    let ref_copy = var_ref.copy(&mut state);

    assert_ne!(ref_copy.id(), var_ref.id());
    assert_eq!(ref_copy.defn(), defn_copy.id());
    assert_ne!(ref_copy.defn(), defn.id());
    assert_eq!(ref_copy.span(), var_ref.span());
}

#[test]
fn expr_node_delegates_to_variant() {
    let expr: ExprNode = StringNode::new("a.proto", span(7, 16)).into();
    assert_eq!(expr.kind(), NodeKind::StringLiteral);
    assert_eq!(expr.span(), span(7, 16));
    assert!(expr.as_string().is_some());

    let mut state = CopyState::new();
    let copy = expr.copy(&mut state);
    assert_ne!(copy.id(), expr.id());
    assert_eq!(copy.to_source_string(), "'a.proto'");
    assert_eq!(state.resolve(expr.id()), Some(copy.id()));
}

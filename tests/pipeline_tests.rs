//! Integration tests across the IR and the JavaScript backend.
//!
//! These build trees the way a parser would, copy them the way a
//! specializing pass would, and serialize names and paths the way a
//! JavaScript emitter would.

use tmplc::ast::{
    ImportedVar, NodeRef, PrintNode, StringNode, VarDefn, VarRefNode, walk_preorder,
};
use tmplc::common::FileId;
use tmplc::common::diagnostics::diagnostic_codes;
use tmplc::jssrc::{JsNameOptions, escape_format_chars, quote_js_string, safe_identifier};
use tmplc::{
    ExprNode, FileNode, ImportNode, ImportType, Node, NodeKind, Span, SyntaxNode, deep_copy,
};

fn span(start: u32, end: u32) -> Span {
    Span::new(FileId(7), start, end)
}

fn import(path: &str, names: &[&str]) -> ImportNode {
    let identifiers = names
        .iter()
        .map(|name| ImportedVar::new(*name, span(8, 8 + name.len() as u32)))
        .collect();
    ImportNode::new(span(0, 60), StringNode::new(path, span(30, 58)), identifiers)
}

#[test]
fn imports_classify_and_render() {
    let cases = [
        (import("styles.scss", &[]), ImportType::Css, "import 'styles.scss'"),
        (import("theme.gss", &[]), ImportType::Css, "import 'theme.gss'"),
        (
            import("foo.proto", &["Msg", "Kind"]),
            ImportType::Proto,
            "import {Msg,Kind} from 'foo.proto'",
        ),
        (import("foo.js", &["x"]), ImportType::Unknown, "import {x} from 'foo.js'"),
    ];
    for (node, expected_type, expected_source) in cases {
        assert_eq!(node.import_type(), expected_type, "{expected_source}");
        assert_eq!(node.to_source_string(), expected_source);
    }
}

#[test]
fn specialized_copy_is_independent_of_original() {
    tmplc::tracing_config::init_tracing();

    let import = import("foo.proto", &["class", "Map"]);
    let class_ref = VarRefNode::to_defn(&import.identifiers()[0], span(70, 75));
    let file = FileNode::new(
        "a.tmpl",
        span(0, 80),
        vec![
            Node::Import(import),
            Node::Print(PrintNode::new(span(62, 80), ExprNode::VarRef(class_ref))),
        ],
    );

    let copy = deep_copy(&file);
    assert_eq!(copy.to_source_string(), file.to_source_string());

    let mut original_ids = Vec::new();
    walk_preorder(NodeRef::File(&file), &mut |n| original_ids.push((n.id(), n.kind())));
    let mut copy_ids = Vec::new();
    walk_preorder(NodeRef::File(&copy), &mut |n| copy_ids.push((n.id(), n.kind())));

    assert_eq!(original_ids.len(), copy_ids.len());
    for ((orig_id, orig_kind), (copy_id, copy_kind)) in original_ids.iter().zip(&copy_ids) {
        assert_eq!(orig_kind, copy_kind);
        assert_ne!(orig_id, copy_id);
    }

    drop(file);
    assert_eq!(copy.imports().next().map(|i| i.import_type()), Some(ImportType::Proto));
    assert_eq!(copy.children()[1].kind(), NodeKind::Print);
}

#[test]
fn emitted_names_and_paths_are_safe() {
    let node = import("dir/\u{200B}msg.proto", &["class", "Map", "message"]);
    let options = JsNameOptions::default();

    let names: Vec<String> = node
        .identifiers()
        .iter()
        .map(|defn| safe_identifier(defn.name(), &options).into_owned())
        .collect();
    assert_eq!(names, ["class$", "Map", "message"]);

    assert_eq!(escape_format_chars(node.path()), "dir/\\u200Bmsg.proto");
    assert_eq!(quote_js_string(node.path(), '\''), "'dir/\\u200Bmsg.proto'");
}

#[test]
fn non_literal_import_path_is_a_compilation_error() {
    let defn = ImportedVar::new("p", span(0, 1));
    let path = ExprNode::VarRef(VarRefNode::to_defn(&defn, span(12, 13)));
    let diag = ImportNode::from_path_expr(span(0, 13), path, Vec::new())
        .expect_err("variable paths are rejected");
    assert_eq!(diag.code, diagnostic_codes::IMPORT_PATH_MUST_BE_A_STRING_LITERAL);
    assert_eq!(diag.span.file, FileId(7));
}

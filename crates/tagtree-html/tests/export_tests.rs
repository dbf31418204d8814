//! Tests for exporting a parsed tree as records, JSON, and an indented dump.

use serde_json::json;
use tagtree_html::{AttributeValue, HtmlTokenizer, TokenTree, TreeRecord};

/// Helper to parse HTML strictly
fn parse(html: &str) -> TokenTree {
    HtmlTokenizer::strict().tokenize(html).expect("well-formed input")
}

#[test]
fn test_doctype_record() {
    let tree = parse("<!DOCTYPE asdf>");
    assert_eq!(
        tree.to_tree(tree.roots()[0]),
        Some(TreeRecord::DocType {
            value: "asdf".to_string(),
            line: 0,
            position: 0,
        })
    );
    assert_eq!(
        tree.to_json_value().expect("serializable"),
        json!([{ "type": "doctype", "value": "asdf", "line": 0, "position": 0 }])
    );
}

#[test]
fn test_element_record() {
    let tree = parse(r#"<a href="x" disabled>y</a>"#);
    assert_eq!(
        tree.to_json_value().expect("serializable"),
        json!([{
            "type": "element",
            "name": "a",
            "attributes": { "href": "x", "disabled": true },
            "children": [{ "type": "text", "value": "y", "line": 0, "position": 21 }]
        }])
    );
}

#[test]
fn test_empty_attributes_and_children_are_omitted() {
    let tree = parse("<br><p></p>");
    assert_eq!(
        tree.to_json_value().expect("serializable"),
        json!([
            { "type": "element", "name": "br" },
            { "type": "element", "name": "p" }
        ])
    );
}

#[test]
fn test_comment_record_location() {
    let tree = parse("<div>\n  <!-- note -->\n</div>");
    let Some(TreeRecord::Element { children, .. }) = tree.to_tree(tree.roots()[0]) else {
        panic!("Expected element record");
    };
    assert_eq!(
        children,
        [TreeRecord::Comment {
            value: "note".to_string(),
            line: 1,
            position: 2,
        }]
    );
}

#[test]
fn test_nested_records() {
    let tree = parse("<ul><li>a<li>b</ul>");
    let Some(TreeRecord::Element { name, attributes, children }) = tree.to_tree(tree.roots()[0]) else {
        panic!("Expected element record");
    };
    assert_eq!(name, "ul");
    assert!(attributes.is_empty());
    assert_eq!(children.len(), 2);
    for (child, text) in children.iter().zip(["a", "b"]) {
        let TreeRecord::Element { name, children, .. } = child else {
            panic!("Expected element record");
        };
        assert_eq!(name, "li");
        assert!(matches!(&children[..], [TreeRecord::Text { value, .. }] if value == text));
    }
}

#[test]
fn test_exported_attributes_keep_values() {
    let tree = parse(r#"<input type=checkbox checked value="on"></input>"#);
    let Some(TreeRecord::Element { attributes, .. }) = tree.to_tree(tree.roots()[0]) else {
        panic!("Expected element record");
    };
    let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["type", "checked", "value"]);
    assert_eq!(attributes.get("checked"), Some(&AttributeValue::Boolean));
}

#[test]
fn test_unknown_node_exports_nothing() {
    let tree = parse("<p>x</p>");
    assert_eq!(tree.to_tree(tagtree_html::NodeId(99)), None);
}

#[test]
fn test_records_cover_all_roots() {
    let tree = parse("<!DOCTYPE html><!-- c -->text<p></p>");
    let records = tree.to_records();
    assert_eq!(records.len(), 4);
    assert!(matches!(records[2], TreeRecord::Text { ref value, .. } if value == "text"));
}

#[test]
fn test_pretty_json() {
    let tree = parse("<br>");
    let pretty = tree.to_json_pretty().expect("serializable");
    let reparsed: serde_json::Value = serde_json::from_str(&pretty).expect("valid JSON");
    assert_eq!(reparsed, json!([{ "type": "element", "name": "br" }]));
    assert!(pretty.contains('\n'));
}

// ========== text dump ==========

#[test]
fn test_display_dump() {
    let tree = parse("<!DOCTYPE html><div id=a><!-- c -->hi<br><input disabled></div>");
    let expected = "\
<!DOCTYPE html>
<div id=\"a\">
  <!-- c -->
  \"hi\"
  <br>
  <input disabled>
";
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn test_display_escapes_newlines_in_text() {
    let tree = parse("<pre>one\ntwo</pre>");
    assert_eq!(tree.to_string(), "<pre>\n  \"one\\ntwo\"\n");
}

#[test]
fn test_display_empty_tree() {
    assert_eq!(parse("").to_string(), "");
}

//! Tests for single tokens parsed through the factory API: doctypes,
//! comments, text runs, and how a pending token decides to close its parent.

use tagtree_html::{
    Cursor, Location, NodeId, ParseError, ParseMode, ParseResult, PendingToken, Token, TokenKind,
    TokenTree, build_from_text,
};

/// Helper to parse one token of `kind` from the start of `html`.
///
/// Returns the tree, the new node, and the unconsumed input.
fn parse_as(kind: TokenKind, html: &str, mode: ParseMode) -> ParseResult<(TokenTree, NodeId, String)> {
    let mut tree = TokenTree::new(mode);
    let token = PendingToken {
        kind,
        parent: None,
        location: Location::default(),
        mode,
    };
    let (id, rest) = token.parse(&mut tree, Cursor::new(html))?;
    Ok((tree, id, rest.rest().to_string()))
}

/// Helper to parse leniently and return the token's value and the remainder
fn value_and_rest(kind: TokenKind, html: &str) -> (String, String) {
    let (tree, id, rest) = parse_as(kind, html, ParseMode::Lenient).expect("lenient parsing never fails");
    let value = tree
        .get(id)
        .and_then(|node| node.token.value())
        .expect("Expected leaf")
        .to_string();
    (value, rest)
}

// ========== doctype ==========

#[test]
fn test_doctype_simple() {
    assert_eq!(value_and_rest(TokenKind::DocType, "<!DOCTYPE asdf>"), ("asdf".into(), String::new()));
}

#[test]
fn test_doctype_followed_by_element() {
    assert_eq!(
        value_and_rest(TokenKind::DocType, "<!DOCTYPE asdf><whoa />"),
        ("asdf".into(), "<whoa />".into())
    );
}

#[test]
fn test_doctype_whitespace_is_trimmed() {
    assert_eq!(
        value_and_rest(TokenKind::DocType, "<!DOCTYPE \n  asdf \n>yo"),
        ("asdf".into(), "yo".into())
    );
}

#[test]
fn test_doctype_keyword_is_case_insensitive() {
    assert_eq!(value_and_rest(TokenKind::DocType, "<!docType ASDF>"), ("ASDF".into(), String::new()));
}

#[test]
fn test_doctype_missing_closing_bracket() {
    assert_eq!(value_and_rest(TokenKind::DocType, "<!DOCTYPE ASDF"), (String::new(), String::new()));

    let error = parse_as(TokenKind::DocType, "<!DOCTYPE ASDF", ParseMode::Strict).map(|_| ());
    assert_eq!(error, Err(ParseError::MissingClosingBracket(Location::default())));
}

#[test]
fn test_doctype_parsed_from_something_else() {
    assert_eq!(value_and_rest(TokenKind::DocType, "<!-- asdf"), (String::new(), String::new()));

    let result = parse_as(TokenKind::DocType, "<!-- asdf", ParseMode::Strict);
    assert!(matches!(result, Err(ParseError::MalformedDocType(_))));
}

// ========== comment ==========

#[test]
fn test_comment_simple() {
    assert_eq!(
        value_and_rest(TokenKind::Comment, "<!-- hi -->rest"),
        ("hi".into(), "rest".into())
    );
}

#[test]
fn test_comment_empty() {
    assert_eq!(value_and_rest(TokenKind::Comment, "<!---->"), (String::new(), String::new()));
}

#[test]
fn test_comment_keeps_markup_and_dashes() {
    assert_eq!(
        value_and_rest(TokenKind::Comment, "<!--\n <b>a</b> -- b\n-->\n<p>"),
        ("<b>a</b> -- b".into(), "\n<p>".into())
    );
}

#[test]
fn test_comment_unterminated() {
    assert_eq!(
        value_and_rest(TokenKind::Comment, "<!-- runs to the end "),
        ("runs to the end".into(), String::new())
    );

    let result = parse_as(TokenKind::Comment, "<!-- runs to the end", ParseMode::Strict);
    assert!(matches!(result, Err(ParseError::MalformedComment(_))));
}

#[test]
fn test_comment_parsed_from_something_else() {
    let result = parse_as(TokenKind::Comment, "<p>", ParseMode::Strict);
    assert_eq!(result.map(|_| ()), Err(ParseError::MalformedComment(Location::default())));
}

// ========== text ==========

#[test]
fn test_text_stops_at_next_tag() {
    assert_eq!(value_and_rest(TokenKind::Text, "hello <b>"), ("hello".into(), "<b>".into()));
}

#[test]
fn test_text_runs_to_end_of_input() {
    assert_eq!(value_and_rest(TokenKind::Text, "  spaced out \n"), ("spaced out".into(), String::new()));
}

#[test]
fn test_text_keeps_leading_angle_bracket() {
    assert_eq!(value_and_rest(TokenKind::Text, "< b <c"), ("< b".into(), "<c".into()));
    assert_eq!(value_and_rest(TokenKind::Text, "<"), ("<".into(), String::new()));
}

#[test]
fn test_text_never_fails_in_strict_mode() {
    let (tree, id, rest) = parse_as(TokenKind::Text, "a > b", ParseMode::Strict).expect("text is never malformed");
    assert!(matches!(&tree.get(id).expect("text").token, Token::Text(v) if v == "a > b"));
    assert_eq!(rest, "");
}

// ========== element ==========

#[test]
fn test_element_without_name() {
    let result = parse_as(TokenKind::Element, "< div>", ParseMode::Strict);
    assert!(matches!(result, Err(ParseError::MalformedElementName(_))));

    let (tree, id, rest) = parse_as(TokenKind::Element, "< div>", ParseMode::Lenient).expect("lenient");
    assert_eq!(tree.element(id).map(|e| e.name.as_str()), Some(""));
    assert_eq!(rest, "");
}

#[test]
fn test_element_leaves_following_input() {
    let (tree, id, rest) = parse_as(TokenKind::Element, "<b>x</b> tail <i>", ParseMode::Strict).expect("well-formed");
    assert_eq!(tree.children(id).len(), 1);
    assert_eq!(rest, " tail <i>");
}

#[test]
fn test_parsed_token_is_attached() {
    let mut tree = TokenTree::new(ParseMode::Lenient);
    let html = Cursor::new("<ul>");
    let token = build_from_text(html, None, ParseMode::Lenient).expect("element");
    let (ul, _) = token.parse(&mut tree, html).expect("lenient");
    assert_eq!(tree.roots(), [ul]);

    let item = Cursor::new("<li>one");
    let token = build_from_text(item, Some(ul), ParseMode::Lenient).expect("element");
    let (li, _) = token.parse(&mut tree, item).expect("lenient");
    assert_eq!(tree.children(ul), [li]);
    assert_eq!(tree.parent(li), Some(ul));
    assert_eq!(tree.parent_name(li), Some("ul"));
}

// ========== implied closing ==========

/// Helper to ask whether `html` would close a `parent` element
fn closes(parent: &str, html: &str) -> bool {
    let mut tree = TokenTree::new(ParseMode::Lenient);
    let open = format!("<{parent}>");
    let start = Cursor::new(&open);
    let token = build_from_text(start, None, ParseMode::Lenient).expect("element");
    let (id, _) = token.parse(&mut tree, start).expect("lenient");

    let remaining = Cursor::new(html);
    build_from_text(remaining, Some(id), ParseMode::Lenient)
        .is_some_and(|child| child.is_closing_implied(&tree, remaining))
}

#[test]
fn test_closing_implied_by_sibling() {
    assert!(closes("p", "<div>"));
    assert!(closes("p", "<P class=x>"));
    assert!(closes("li", "<li>"));
    assert!(closes("dt", "<dd>"));
    assert!(closes("dd", "<dt>"));
    assert!(closes("rt", "<rp>"));
    assert!(closes("head", "<body>"));
}

#[test]
fn test_closing_not_implied() {
    assert!(!closes("p", "<span>"));
    assert!(!closes("p", "text <div>"));
    assert!(!closes("p", "<!-- <div> -->"));
    assert!(!closes("div", "<p>"));
    assert!(!closes("li", "<ul>"));
    assert!(!closes("head", "<meta>"));
}

#[test]
fn test_top_level_token_closes_nothing() {
    let tree = TokenTree::new(ParseMode::Lenient);
    let remaining = Cursor::new("<div>");
    let token = build_from_text(remaining, None, ParseMode::Lenient).expect("element");
    assert!(!token.is_closing_implied(&tree, remaining));
}

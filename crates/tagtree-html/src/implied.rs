//! Element-name tables consulted while parsing.
//!
//! These are the only pieces of HTML-specific knowledge in the parser:
//! which elements never have contents, and which (parent, child) pairs mean
//! the parent's end tag was omitted.
//!
//! [§ 13.1.2.4 Optional tags](https://html.spec.whatwg.org/multipage/syntax.html#optional-tags)

/// Elements that are closed by their start tag even without `/>`.
pub const VOID_ELEMENTS: [&str; 5] = ["base", "link", "meta", "hr", "br"];

/// "A p element's end tag may be omitted if the p element is immediately
/// followed by an address, article, aside, blockquote, details, div, dl,
/// fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, header,
/// hgroup, hr, main, menu, nav, ol, p, pre, section, table, or ul element"
pub const NOT_CHILDREN_OF_P: [&str; 30] = [
    "address",
    "article",
    "aside",
    "blockquote",
    "details",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "main",
    "menu",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Check whether `name` is a void element.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Decide whether a `candidate` start tag appearing inside an open `parent`
/// element closes the parent.
///
/// Both names are expected in lowercase.
#[must_use]
pub fn closing_implied(parent: &str, candidate: &str) -> bool {
    match parent {
        // "A head element's end tag may be omitted if ..." followed by body.
        "head" => candidate == "body",
        "p" => NOT_CHILDREN_OF_P.contains(&candidate),
        "li" => candidate == "li",
        "dt" | "dd" => matches!(candidate, "dt" | "dd"),
        "rp" | "rt" => matches!(candidate, "rp" | "rt"),
        _ => false,
    }
}

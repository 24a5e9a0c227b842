//! Statement matcher for call-style include/require directives.

use regex::Regex;
use std::sync::LazyLock;

// Full-line statement: `<indent><keyword>(<argument>);<trailing>`
// - group 1: indent
// - group 2: keyword, as written
// - group 3: argument, shortest match between the parentheses
// - group 4: trailing whitespace, an optional comment and an optional `?>`
static STATEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\s*)(include|include_once|require|require_once)\s*\(\s*(.*?)\s*\)\s*;(\s*(?:(?://|#|/\*).*)?\s*(?:\?>\s*)?)$",
    )
    .unwrap()
});

/// A directive statement split into the parts needed to rewrite it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedStatement<'a> {
    /// Leading whitespace.
    pub indent: &'a str,
    /// Directive name with its original casing.
    pub keyword: &'a str,
    /// Expression between the parentheses, without surrounding whitespace.
    pub argument: &'a str,
    /// Everything after the `;`, including its leading whitespace.
    pub trailing: &'a str,
}

/// Match `line` against the full-line directive grammar.
///
/// `line` must not carry its line ending. Returns `None` unless the whole line
/// is a single directive call followed only by whitespace, a comment or a
/// closing `?>` tag.
pub fn match_statement(line: &str) -> Option<MatchedStatement<'_>> {
    let captures = STATEMENT_REGEX.captures(line)?;
    let group = |i: usize| captures.get(i).map_or("", |m| m.as_str());

    Some(MatchedStatement {
        indent: group(1),
        keyword: group(2),
        argument: group(3),
        trailing: group(4),
    })
}

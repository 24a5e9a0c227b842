//! Rewriter for lines already classified as safe.

use super::matcher::MatchedStatement;

/// Split a line into its content and its line ending (`""`, `"\n"` or `"\r\n"`).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Build the keyword form of a matched statement.
///
/// Produces `<indent><keyword> <argument>;<trailing><line_ending>`. The keyword
/// keeps its casing and the trailing comment is kept verbatim.
pub fn rewrite_statement(statement: &MatchedStatement<'_>, line_ending: &str) -> String {
    let MatchedStatement {
        indent,
        keyword,
        argument,
        trailing,
    } = statement;

    format!("{indent}{keyword} {argument};{trailing}{line_ending}")
}

//! Line classifier.
//!
//! Combines the [`scanner`](super::scanner) and the [`matcher`](super::matcher)
//! to decide whether a line holds exactly one directive statement and nothing
//! else but whitespace and comments.

use regex::Regex;
use std::sync::LazyLock;

use super::matcher::{MatchedStatement, match_statement};
use super::scanner::{CommentState, strip_comments};

// Comment-free code must be exactly one `keyword(...);` statement.
static LENIENT_STATEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(include|include_once|require|require_once)\s*\(\s*.*?\s*\)\s*;\s*$")
        .unwrap()
});

static CLOSING_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\?>\s*$").unwrap());

/// Outcome of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    /// The line matches the strict directive grammar.
    pub matches_shape: bool,
    /// The directive is the only code on the line.
    pub is_safe: bool,
}

impl Verdict {
    /// A rewrite requires both flags.
    pub fn can_rewrite(&self) -> bool {
        self.matches_shape && self.is_safe
    }
}

/// Classify `line` (without its line ending) and advance the comment state.
///
/// The comment state is advanced for every line, including lines that do not
/// match, so that block comments opened on earlier lines are tracked.
pub fn classify_line<'a>(
    line: &'a str,
    state: CommentState,
) -> (Verdict, Option<MatchedStatement<'a>>, CommentState) {
    let statement = match_statement(line);
    let (code, next_state) = strip_comments(line, state);

    let Some(statement) = statement else {
        return (Verdict::default(), None, next_state);
    };

    let is_safe = is_single_statement(&code) && has_balanced_parentheses(statement.argument);
    let verdict = Verdict {
        matches_shape: true,
        is_safe,
    };

    (verdict, Some(statement), next_state)
}

/// Check comment-free code for a lone directive, allowing a trailing `?>`.
fn is_single_statement(code: &str) -> bool {
    let code = CLOSING_TAG_REGEX.replace(code.trim(), "");
    LENIENT_STATEMENT_REGEX.is_match(&code)
}

/// Check that parentheses outside string literals balance.
///
/// The shortest argument match can run across a closing parenthesis, e.g.
/// `include('a.php') or die('x');`; such arguments cannot be unwrapped.
fn has_balanced_parentheses(argument: &str) -> bool {
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in argument.chars() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }

    depth == 0
}

//! Comment and string scanner.
//!
//! Strips PHP comments (`//`, `#`, `/* ... */`) from a single line while
//! leaving string literals untouched. Block comments may span lines, so the
//! scanner threads a [`CommentState`] from one line to the next.

/// Block comment state carried across the lines of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentState {
    /// True while inside a `/*` that has not been closed yet.
    pub in_block: bool,
}

impl CommentState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Remove comments from `line`, returning the remaining code and the
/// block comment state after the line.
///
/// Comment openers are only recognized outside of string literals. Inside a
/// string, a backslash escapes exactly one following character.
///
/// # Examples
///
/// ```
/// use incfix::core::{CommentState, strip_comments};
///
/// let (code, state) = strip_comments("include('a.php'); // note", CommentState::new());
/// assert_eq!(code, "include('a.php'); ");
/// assert!(!state.in_block);
///
/// let (code, state) = strip_comments("$x = 1; /* open", CommentState::new());
/// assert_eq!(code, "$x = 1; ");
/// assert!(state.in_block);
/// ```
pub fn strip_comments(line: &str, state: CommentState) -> (String, CommentState) {
    let mut in_block = state.in_block;
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_block {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block = false;
            }
            continue;
        }

        let in_string = in_single || in_double;

        if in_string && !escaped && ch == '\\' {
            escaped = true;
            out.push(ch);
            continue;
        }

        if !escaped {
            if !in_double && ch == '\'' {
                in_single = !in_single;
                out.push(ch);
                continue;
            }
            if !in_single && ch == '"' {
                in_double = !in_double;
                out.push(ch);
                continue;
            }
        }

        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }

        if !in_string {
            match (ch, chars.peek().copied()) {
                ('/', Some('/')) | ('#', _) => break,
                ('/', Some('*')) => {
                    chars.next();
                    in_block = true;
                    continue;
                }
                _ => {}
            }
        }

        out.push(ch);
    }

    (out, CommentState { in_block })
}

//! Value normalization
//!
//! Applied identically to file values and environment values.

use smallvec::SmallVec;

/// Start of a line comment.
pub const COMMENT: char = '#';

/// Byte offset where a comment begins.
///
/// Before the `=`, a `#` opens a comment when only whitespace precedes it
/// or it follows whitespace. In the value, a `#` opens a comment only when
/// it follows whitespace after some value text, and never inside quotes, so
/// `ui_accent=#3c82ff` and `ui_accent = #3c82ff # mine` both keep the color.
fn comment_at(s: &str, in_value: bool) -> Option<usize> {
    let mut in_value = in_value;
    let mut value_started = false;
    let mut quote: Option<char> = None;
    let mut prev_ws = true;

    for (i, c) in s.char_indices() {
        if in_value {
            match (c, quote) {
                ('"' | '\'', None) if !value_started => quote = Some(c),
                (q, Some(open)) if q == open => quote = None,
                (COMMENT, None) if prev_ws && value_started => return Some(i),
                _ => {}
            }
            if !c.is_whitespace() {
                value_started = true;
            }
        } else if c == COMMENT && (prev_ws || s[..i].trim().is_empty()) {
            return Some(i);
        } else if c == '=' {
            in_value = true;
        }
        prev_ws = c.is_whitespace();
    }
    None
}

/// Drop a trailing comment from a `key=value` line.
pub fn strip_comment(line: &str) -> &str {
    match comment_at(line, false) {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Drop a trailing comment from a bare value, then normalize it.
///
/// ```rust
/// use ui9_config::clean_value;
///
/// assert_eq!(clean_value(" #3c82ff  # accent"), "#3c82ff");
/// assert_eq!(clean_value("\"menu ws\" # left"), "menu ws");
/// ```
pub fn clean_value(raw: &str) -> &str {
    let raw = match comment_at(raw, true) {
        Some(i) => &raw[..i],
        None => raw,
    };
    normalize_value(raw)
}

fn strip_quotes(v: &str) -> &str {
    let b = v.as_bytes();
    let n = b.len();
    if n >= 2 && (b[0] == b'"' || b[0] == b'\'') && b[n - 1] == b[0] {
        &v[1..n - 1]
    } else {
        v
    }
}

/// Trim, strip one level of matching quotes, trim, then strip one level of
/// enclosing parentheses.
///
/// ```rust
/// use ui9_config::normalize_value;
///
/// assert_eq!(normalize_value("  \"(menu ws)\" "), "menu ws");
/// assert_eq!(normalize_value("'dark'"), "dark");
/// assert_eq!(normalize_value("(unclosed"), "(unclosed");
/// ```
pub fn normalize_value(v: &str) -> &str {
    let v = strip_quotes(v.trim()).trim();
    match v.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => inner.trim(),
        None => v,
    }
}

/// Split one config line into a trimmed key and a normalized value.
///
/// Blank lines, comment-only lines, lines without `=` and lines with an
/// empty key yield `None`.
pub fn parse_assignment(line: &str) -> Option<(&str, &str)> {
    let line = strip_comment(line).trim();
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, normalize_value(value)))
}

/// Integer with C `atoi` semantics.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit, and input without leading digits reads as `0`. Overflow
/// saturates.
///
/// Treating `ui_alpha=abc` as `0` (fully transparent glass) is almost
/// certainly not what the user meant. It is kept because existing config
/// files rely on it.
pub fn parse_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    let acc = if negative { -acc } else { acc };
    acc.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Booleans are integers; anything nonzero is true.
pub fn truthy(s: &str) -> bool {
    parse_int(s) != 0
}

/// Whitespace-separated words of a list value.
pub fn split_words(s: &str) -> SmallVec<[&str; 8]> {
    s.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_quotes_and_parens() {
        assert_eq!(normalize_value("\"menu ws\""), "menu ws");
        assert_eq!(normalize_value("( menu ws )"), "menu ws");
        assert_eq!(normalize_value("' (a b) '"), "a b");
        assert_eq!(normalize_value("\"mismatched'"), "\"mismatched'");
        assert_eq!(normalize_value("\""), "\"");
        assert_eq!(normalize_value("()"), "");
        assert_eq!(normalize_value("  plain  "), "plain");
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("ui_alpha = 150 # strength"), Some(("ui_alpha", "150")));
        assert_eq!(parse_assignment("panel_left=\"menu ws\""), Some(("panel_left", "menu ws")));
        assert_eq!(parse_assignment("key=a=b"), Some(("key", "a=b")));
        assert_eq!(parse_assignment("   # comment"), None);
        assert_eq!(parse_assignment(""), None);
        assert_eq!(parse_assignment("no equals"), None);
        assert_eq!(parse_assignment(" = value"), None);
    }

    #[test]
    fn test_hash_opening_a_value_is_a_color() {
        assert_eq!(parse_assignment("ui_accent=#3c82ff"), Some(("ui_accent", "#3c82ff")));
        assert_eq!(
            parse_assignment("ui_accent = #3c82ff # mine"),
            Some(("ui_accent", "#3c82ff"))
        );
        assert_eq!(parse_assignment("ui_topbg=\"#101014\""), Some(("ui_topbg", "#101014")));
        assert_eq!(
            parse_assignment("panel_left=\"menu # ws\" # note"),
            Some(("panel_left", "menu # ws"))
        );
        assert_eq!(parse_assignment("ui_style=dark#x"), Some(("ui_style", "dark#x")));
        assert_eq!(parse_assignment("#ui_accent=#3c82ff"), None);
        assert_eq!(strip_comment("  # whole line"), "  ");
    }

    #[test]
    fn test_clean_value_matches_file_normalization() {
        assert_eq!(clean_value("150 # strength"), "150");
        assert_eq!(clean_value("  #ff0000"), "#ff0000");
        assert_eq!(clean_value("(menu ws) # left"), "menu ws");
        assert_eq!(clean_value("'dark'"), "dark");
    }

    #[test]
    fn test_parse_int_atoi_semantics() {
        assert_eq!(parse_int("150"), 150);
        assert_eq!(parse_int("  -7"), -7);
        assert_eq!(parse_int("+12px"), 12);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("-"), 0);
        assert_eq!(parse_int("99999999999"), i32::MAX);
        assert_eq!(parse_int("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_truthy_and_words() {
        assert!(truthy("1"));
        assert!(truthy("-1"));
        assert!(!truthy("0"));
        assert!(!truthy("yes"));
        assert_eq!(split_words(" preset  de\tnet ").as_slice(), ["preset", "de", "net"]);
    }
}

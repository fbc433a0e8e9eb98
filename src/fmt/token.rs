//! Single-token extraction passes over a raw format string.
//!
//! Each pass looks for exactly one token kind and reports the last well-formed
//! occurrence in the input. Earlier occurrences of the same kind stay in the
//! string as literal text. Malformed candidates (an unterminated `%{color:`,
//! `%{time:}`, `%{timex}`) are skipped over, so an earlier well-formed token
//! can still be selected.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `%{color:<name>}` with a non-empty name that cannot contain `}`.
static COLOR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A%\{color:([^}]+)\}").expect("Invalid color token regex"));

/// `%{time}` or `%{time:<layout>}`; the layout group may repeat its leading colon.
static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A%\{time((?::[^}]+)*)\}").expect("Invalid time token regex")
});

const COLOR_OPENER: &str = "%{color:";
const TIME_OPENER: &str = "%{time";

/// A token located in the input: its byte range and its captured argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch<'a> {
    /// Byte range of the whole token, braces included.
    pub range: Range<usize>,
    /// The color name, or the raw `:layout` suffix for time tokens (empty for bare `%{time}`).
    pub capture: &'a str,
}

impl TokenMatch<'_> {
    /// Returns `input` with the token replaced by `replacement`.
    #[must_use]
    pub fn splice(&self, input: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(input.len() - self.range.len() + replacement.len());
        out.push_str(&input[..self.range.start]);
        out.push_str(replacement);
        out.push_str(&input[self.range.end..]);
        out
    }
}

/// Locates the color token selected from `input`.
#[must_use]
pub fn find_color(input: &str) -> Option<TokenMatch<'_>> {
    find_last(input, COLOR_OPENER, &COLOR_TOKEN)
}

/// Locates the time token selected from `input`.
#[must_use]
pub fn find_time(input: &str) -> Option<TokenMatch<'_>> {
    find_last(input, TIME_OPENER, &TIME_TOKEN)
}

fn find_last<'a>(input: &'a str, opener: &str, token: &Regex) -> Option<TokenMatch<'a>> {
    input.rmatch_indices(opener).find_map(|(start, _)| {
        let caps = token.captures(&input[start..])?;
        let whole = caps.get(0)?;
        Some(TokenMatch {
            range: start..start + whole.end(),
            capture: caps.get(1).map_or("", |m| m.as_str()),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_token_captures_name() {
        let m = find_color("a%{color:red}b").unwrap();
        assert_eq!(m.range, 1..13);
        assert_eq!(m.capture, "red");
        assert_eq!(m.splice("a%{color:red}b", ""), "ab");
    }

    #[test]
    fn last_well_formed_color_wins() {
        let m = find_color("%{color:red}x%{color:blue}").unwrap();
        assert_eq!(m.capture, "blue");

        let m = find_color("%{color:red}x%{color:}").unwrap();
        assert_eq!(m.capture, "red");
    }

    #[test]
    fn nested_opener_selects_inner_token() {
        let m = find_color("%{color:%{color:red}").unwrap();
        assert_eq!(m.capture, "red");
        assert_eq!(m.range, 8..20);
    }

    #[test]
    fn unterminated_color_is_ignored() {
        assert!(find_color("%{color:red").is_none());
        assert!(find_color("%{color:}").is_none());
    }

    #[test]
    fn time_token_shapes() {
        assert_eq!(find_time("%{time}").unwrap().capture, "");
        assert_eq!(find_time("%{time:15:04}").unwrap().capture, ":15:04");
        assert_eq!(find_time("%{time::x}").unwrap().capture, "::x");
        assert!(find_time("%{time:}").is_none());
        assert!(find_time("%{timex}").is_none());
        assert!(find_time("%{time").is_none());
    }

    #[test]
    fn tokens_may_span_lines() {
        let m = find_time("a\n%{time:Jan\n2}\nb").unwrap();
        assert_eq!(m.capture, ":Jan\n2");
    }
}

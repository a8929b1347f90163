//! Fenced code block detection.
//!
//! A fence is a triple-backtick delimiter, optionally followed on the same
//! line (no space) by a bare word-character language tag, a newline, a
//! non-greedy body, and a closing triple-backtick delimiter. Non-greedy
//! matching keeps adjacent fences from collapsing into one span. An opening
//! delimiter with no closing one simply never matches.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The triple-backtick delimiter.
pub const FENCE_DELIMITER: &str = "```";

pub(crate) static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(\w+)?\n([\s\S]*?)```").unwrap());

/// One fenced code region matched inside a card payload.
///
/// Borrows from the payload and lives only for the duration of one
/// transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Language tag from the opening delimiter, if present and non-empty.
    pub language_tag: Option<&'a str>,
    /// Code text between the delimiters, unescaped.
    pub raw_body: &'a str,
}

impl<'a> FencedBlock<'a> {
    pub(crate) fn from_captures(caps: &Captures<'a>) -> Self {
        let language_tag = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|tag| !tag.is_empty());
        let raw_body = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        Self {
            language_tag,
            raw_body,
        }
    }

    /// The block's language tag, or `default` when the fence carried none.
    pub fn language_or<'b>(&'b self, default: &'b str) -> &'b str {
        match self.language_tag {
            Some(tag) => tag,
            None => default,
        }
    }
}

/// Iterate over every well-formed fenced block in `text`.
pub fn scan(text: &str) -> impl Iterator<Item = FencedBlock<'_>> {
    FENCE_RE
        .captures_iter(text)
        .map(|caps| FencedBlock::from_captures(&caps))
}

/// Escape the markup anchor characters so a code body cannot be interpreted
/// as structural markup. Intentionally narrow: only `<` and `>` are
/// rewritten, nothing else.
pub fn escape_angle_brackets(body: &str) -> String {
    body.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scan_single_tagged_block() {
        let blocks: Vec<_> = scan("```python\nprint(1)\n```").collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language_tag, Some("python"));
        assert_eq!(blocks[0].raw_body, "print(1)\n");
    }

    #[test]
    fn scan_untagged_block_has_no_tag() {
        let blocks: Vec<_> = scan("```\ncode\n```").collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language_tag, None);
        assert_eq!(blocks[0].raw_body, "code\n");
    }

    #[test]
    fn scan_adjacent_blocks_separately() {
        let text = "```rust\na\n```\n```go\nb\n```";
        let blocks: Vec<_> = scan(text).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language_tag, Some("rust"));
        assert_eq!(blocks[0].raw_body, "a\n");
        assert_eq!(blocks[1].language_tag, Some("go"));
        assert_eq!(blocks[1].raw_body, "b\n");
    }

    #[test]
    fn unterminated_fence_does_not_match() {
        let blocks: Vec<_> = scan("```python\nno closing delimiter").collect();
        assert!(blocks.is_empty());
    }

    #[test]
    fn multiline_body_is_kept_verbatim() {
        let blocks: Vec<_> = scan("```js\nline 1\n\nline 3\n```").collect();
        assert_eq!(blocks[0].raw_body, "line 1\n\nline 3\n");
    }

    #[test]
    fn language_or_falls_back() {
        let block = FencedBlock {
            language_tag: None,
            raw_body: "x",
        };
        assert_eq!(block.language_or("python"), "python");

        let block = FencedBlock {
            language_tag: Some("rust"),
            raw_body: "x",
        };
        assert_eq!(block.language_or("python"), "rust");
    }

    #[test]
    fn escape_rewrites_only_angle_brackets() {
        assert_eq!(
            escape_angle_brackets("if a < b && b > c { \"&\" }"),
            "if a &lt; b && b &gt; c { \"&\" }"
        );
    }
}

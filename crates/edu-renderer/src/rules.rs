//! Ordered substitution rules applied after escaping.
//!
//! Each rule is a global regex replacement. Rules run in declaration order and
//! later rules depend on tags inserted by earlier ones (the cleanup rules only
//! make sense after newlines became `<br />`), so the order is part of the
//! rendering contract.

use std::sync::LazyLock;

use regex::Regex;

/// Element emitted for a `---` line.
pub(crate) const HR: &str = "<hr/>";

/// A single named substitution step.
pub(crate) struct Rule {
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Apply the rule to every non-overlapping match in `text`.
    pub(crate) fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

/// The substitution pipeline, in execution order.
///
/// Line-anchored rules use multi-line CRLF mode so `^` and `$` match at both
/// `\n` and `\r\n` line boundaries; `.` never crosses a line terminator, which keeps headers, emphasis,
/// quotes and list items confined to one line. Blockquotes match the escaped
/// marker because `>` has already become `&gt;`.
pub(crate) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("h3", r"(?mR)^### (.*)$", "<h3>${1}</h3>"),
        Rule::new("h2", r"(?mR)^## (.*)$", "<h2>${1}</h2>"),
        Rule::new("h1", r"(?mR)^# (.*)$", "<h1>${1}</h1>"),
        Rule::new("bold", r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        Rule::new("italic", r"\*(.*?)\*", "<em>${1}</em>"),
        Rule::new(
            "blockquote",
            r"(?mR)^&gt; (.*)$",
            "<blockquote>${1}</blockquote>",
        ),
        Rule::new("fenced_code", r"```([^`]+)```", "<pre><code>${1}</code></pre>"),
        Rule::new("inline_code", r"`([^`]+)`", "<code>${1}</code>"),
        Rule::new("hr", r"(?mR)^---$", HR),
        Rule::new("unordered_item", r"(?mR)^- (.*)$", "<li>${1}</li>"),
        Rule::new("ordered_item", r"(?mR)^[0-9]\. (.*)$", "<li>${1}</li>"),
        Rule::new("line_break", r"\r?\n", "<br />"),
        Rule::new(
            "block_break_cleanup",
            r"</(h1|h2|h3|blockquote|li|pre)><br />",
            "</${1}>",
        ),
        Rule::new("hr_break_cleanup", r"<hr/>\s*<br />", HR),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static Rule {
        RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "h3",
                "h2",
                "h1",
                "bold",
                "italic",
                "blockquote",
                "fenced_code",
                "inline_code",
                "hr",
                "unordered_item",
                "ordered_item",
                "line_break",
                "block_break_cleanup",
                "hr_break_cleanup",
            ]
        );
    }

    #[test]
    fn test_h1_does_not_match_h2_marker() {
        assert_eq!(rule("h1").apply("## Title"), "## Title");
    }

    #[test]
    fn test_header_requires_space() {
        assert_eq!(rule("h1").apply("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_header_only_at_line_start() {
        assert_eq!(rule("h1").apply("see # here"), "see # here");
        assert_eq!(rule("h1").apply("a\n# b"), "a\n<h1>b</h1>");
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            rule("bold").apply("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(rule("bold").apply("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_italic_pairs_left_to_right() {
        assert_eq!(
            rule("italic").apply("*a* b *c*"),
            "<em>a</em> b <em>c</em>"
        );
    }

    #[test]
    fn test_blockquote_matches_escaped_marker() {
        assert_eq!(
            rule("blockquote").apply("&gt; quoted"),
            "<blockquote>quoted</blockquote>"
        );
        assert_eq!(rule("blockquote").apply("> raw"), "> raw");
    }

    #[test]
    fn test_fenced_code_spans_lines() {
        assert_eq!(
            rule("fenced_code").apply("```\nlet x;\n```"),
            "<pre><code>\nlet x;\n</code></pre>"
        );
    }

    #[test]
    fn test_inline_code_requires_content() {
        assert_eq!(rule("inline_code").apply("``"), "``");
    }

    #[test]
    fn test_hr_requires_exact_line() {
        assert_eq!(rule("hr").apply("----"), "----");
        assert_eq!(rule("hr").apply("--- x"), "--- x");
        assert_eq!(rule("hr").apply("a\n---\nb"), "a\n<hr/>\nb");
    }

    #[test]
    fn test_line_anchors_accept_crlf() {
        assert_eq!(rule("h2").apply("## Sub\r\nx"), "<h2>Sub</h2>\r\nx");
        assert_eq!(rule("hr").apply("a\r\n---\r\nb"), "a\r\n<hr/>\r\nb");
        assert_eq!(rule("unordered_item").apply("- a\r\n"), "<li>a</li>\r\n");
    }

    #[test]
    fn test_line_break_consumes_carriage_return() {
        assert_eq!(rule("line_break").apply("a\r\nb\nc"), "a<br />b<br />c");
    }

    #[test]
    fn test_ordered_item_single_digit_only() {
        assert_eq!(rule("ordered_item").apply("1. one"), "<li>one</li>");
        assert_eq!(rule("ordered_item").apply("10. ten"), "10. ten");
    }

    #[test]
    fn test_block_break_cleanup() {
        assert_eq!(
            rule("block_break_cleanup").apply("</h2><br />x</li><br />y<br />"),
            "</h2>x</li>y<br />"
        );
    }

    #[test]
    fn test_hr_break_cleanup_removes_single_break() {
        assert_eq!(
            rule("hr_break_cleanup").apply("<hr/><br /><br />"),
            "<hr/><br />"
        );
    }
}

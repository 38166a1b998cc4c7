//! Helpers for putting user-written card text on screen.

/// Replace markup-significant characters with entity references.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;`
/// and `&#39;`. Everything else passes through.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Strip control characters so card text can't drive the terminal.
///
/// Tabs become spaces; newlines are kept so multi-line answers still wrap.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Shorten to at most `max` characters, ending with an ellipsis if cut.
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Render a card as the front/back markup fragment, escaped.
pub fn card_markup(question: &str, answer: &str) -> String {
    format!(
        "<div class=\"flashcard\">\n  <div class=\"flashcard-inner\">\n    <div class=\"flashcard-front\">{}</div>\n    <div class=\"flashcard-back\">{}</div>\n  </div>\n</div>",
        escape_markup(question),
        escape_markup(answer)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_markup("plain text"), "plain text");
    }

    #[test]
    fn test_escape_does_not_double_escape_input_order() {
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_sanitize_for_terminal() {
        assert_eq!(sanitize_for_terminal("a\x1b[31mred\x07"), "a[31mred");
        assert_eq!(sanitize_for_terminal("line1\nline2\tx"), "line1\nline2 x");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("héllo", 2), "h…");
    }

    #[test]
    fn test_card_markup_escapes_both_sides() {
        let html = card_markup("<script>", "a & b");
        assert!(html.contains("<div class=\"flashcard-front\">&lt;script&gt;</div>"));
        assert!(html.contains("<div class=\"flashcard-back\">a &amp; b</div>"));
    }
}

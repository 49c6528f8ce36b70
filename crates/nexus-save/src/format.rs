//! Small, locale-independent formatting helpers shared by the section
//! builders and cards.

use chrono::{DateTime, Utc};

/// Appended to any text cut at its limit.
pub const ELLIPSIS: &str = "...";

/// Recap limit in the campaign manager's recent-sessions list.
pub const TRACKER_RECAP_LIMIT: usize = 50;

/// Recap limit in the session-state highlights.
pub const HIGHLIGHT_RECAP_LIMIT: usize = 80;

/// Limit for short on-screen card previews.
pub const CARD_PREVIEW_LIMIT: usize = 100;

/// Horizontal rule between top-level sections.
pub const RULE: &str = "════════════════════════════════════════════════════════════════";

/// Cut `text` to `limit` characters and append [`ELLIPSIS`] if it was longer.
///
/// Counts Unicode scalar values, so multi-byte text is never split
/// mid-character.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Calendar date as `YYYY-MM-DD`.
pub fn date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Optional calendar date, `Unknown` when absent.
pub fn date_or_unknown(at: Option<&DateTime<Utc>>) -> String {
    at.map(date).unwrap_or_else(|| "Unknown".to_string())
}

/// Full timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Integer with comma thousands separators. For on-screen display only.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `""` for one, `"s"` otherwise.
pub fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// A string as a JSON literal, escaping quotes and control characters.
pub fn quoted(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn truncate_at_limit_is_untouched() {
        let s = "a".repeat(80);
        assert_eq!(truncate(&s, 80), s);
    }

    #[test]
    fn truncate_one_over_limit() {
        let s = "b".repeat(81);
        let out = truncate(&s, 80);
        assert_eq!(out, format!("{}...", "b".repeat(80)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let s = "🐉".repeat(51);
        let out = truncate(&s, 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.starts_with(&"🐉".repeat(50)));
    }

    #[test]
    fn truncate_short_and_empty() {
        assert_eq!(truncate("", 10), "");
        assert_eq!(truncate("hi", 10), "hi");
    }

    #[test]
    fn dates() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(date(&at), "2024-01-02");
        assert_eq!(timestamp(&at), "2024-01-02 03:04:05 UTC");
        assert_eq!(date_or_unknown(None), "Unknown");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn quoting_escapes() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quoted("two\nlines\t"), "\"two\\nlines\\t\"");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}

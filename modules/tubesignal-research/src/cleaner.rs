//! Comment text cleaning: URL stripping, trimming, minimum-length filter.

use std::sync::OnceLock;

use regex::Regex;

/// Comments at or below this length (after cleaning) carry no signal and
/// are dropped. Fixed policy constant, not configurable per call.
pub const MIN_COMMENT_CHARS: usize = 10;

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S+|www\S+").expect("valid URL pattern"))
}

/// Strip URL-like tokens, trim whitespace, and reject low-signal results.
/// Returns `None` when the cleaned text is `MIN_COMMENT_CHARS` or shorter.
pub fn clean(raw: &str) -> Option<String> {
    let stripped = url_pattern().replace_all(raw, "");
    let trimmed = stripped.trim();
    if trimmed.chars().count() <= MIN_COMMENT_CHARS {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_urls_and_trims() {
        let raw = "Check this out http://spam.example/x and www.more.example";
        assert_eq!(clean(raw).as_deref(), Some("Check this out  and"));
    }

    #[test]
    fn rejects_short_comments() {
        assert_eq!(clean("nice!"), None);
        assert_eq!(clean("   lol   "), None);
        // Exactly at the threshold is still rejected.
        assert_eq!(clean("1234567890"), None);
    }

    #[test]
    fn accepts_just_over_threshold() {
        assert_eq!(clean("12345678901").as_deref(), Some("12345678901"));
    }

    #[test]
    fn rejects_url_only_comments() {
        assert_eq!(clean("https://only.a.link/here"), None);
        assert_eq!(clean("www.bare.example   "), None);
    }

    #[test]
    fn threshold_counts_chars_not_bytes() {
        // Eleven multibyte chars must pass.
        assert!(clean("ééééééééééé").is_some());
    }

    #[test]
    fn idempotent_on_accepted_output() {
        let raw = "  A genuinely useful comment with a link http://x.example  ";
        let once = clean(raw).unwrap();
        let twice = clean(&once).unwrap();
        assert_eq!(once, twice);
    }
}

// scf-core/src/domain/snippet.rs
//
// Case-insensitive matching and excerpt extraction for control search.
// Text is folded char by char so that match positions in the folded form are
// also valid positions in the original text.

pub const ELLIPSIS: &str = "…";

const CONTEXT_BEFORE: usize = 50;
const CONTEXT_AFTER: usize = 100;
const FALLBACK_LEN: usize = 150;

/// Text in its original and lower-cased form, aligned char for char.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedText {
    original: Vec<char>,
    folded: Vec<char>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        let original: Vec<char> = text.chars().collect();
        let folded = original.iter().map(|&c| fold_char(c)).collect();
        Self { original, folded }
    }

    /// Char offset of the first case-insensitive occurrence of `needle`.
    pub fn find(&self, needle: &FoldedText) -> Option<usize> {
        let n = needle.folded.len();
        if n == 0 {
            return Some(0);
        }
        if n > self.folded.len() {
            return None;
        }
        self.folded
            .windows(n)
            .position(|window| window == needle.folded.as_slice())
    }

    pub fn contains(&self, needle: &FoldedText) -> bool {
        self.find(needle).is_some()
    }

    pub fn char_len(&self) -> usize {
        self.original.len()
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.original[start..end].iter().collect()
    }
}

/// One char in, one char out, so folded positions index the original text.
///
/// Chars whose lowercase form spans several chars keep only the first one:
/// `İ` (U+0130) folds to `i`, not `i̇`. A query written with the combining dot
/// therefore does not match it, while a plain `i` does.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Excerpt of `description` around the first occurrence of `query`.
///
/// Up to 50 chars before the match and up to 100 chars after it, clipped to the
/// text, with an ellipsis on each clipped side. Without an occurrence, the first
/// 150 chars are returned.
pub fn extract(description: &FoldedText, query: &FoldedText) -> String {
    let len = description.char_len();
    match description.find(query) {
        Some(idx) => {
            let start = idx.saturating_sub(CONTEXT_BEFORE);
            let end = (idx + query.char_len() + CONTEXT_AFTER).min(len);
            let mut snippet = String::new();
            if start > 0 {
                snippet.push_str(ELLIPSIS);
            }
            snippet.push_str(&description.slice(start, end));
            if end < len {
                snippet.push_str(ELLIPSIS);
            }
            snippet
        }
        None if len > FALLBACK_LEN => {
            let mut snippet = description.slice(0, FALLBACK_LEN);
            snippet.push_str(ELLIPSIS);
            snippet
        }
        None => description.slice(0, len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(description: &str, query: &str) -> String {
        extract(&FoldedText::new(description), &FoldedText::new(query))
    }

    #[test]
    fn test_short_text_is_returned_whole() {
        assert_eq!(snippet("Use of Cryptographic Controls", "crypto"), "Use of Cryptographic Controls");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let text = FoldedText::new("Encryption of Data at Rest");
        assert_eq!(text.find(&FoldedText::new("ENCRYPTION")), Some(0));
        assert_eq!(text.find(&FoldedText::new("data AT")), Some(14));
        assert!(!text.contains(&FoldedText::new("transit")));
    }

    #[test]
    fn test_clipped_on_both_sides() {
        let description = format!("{}needle{}", "a".repeat(80), "b".repeat(200));
        let result = snippet(&description, "NEEDLE");

        let expected = format!("…{}needle{}…", "a".repeat(50), "b".repeat(100));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_clipped_only_at_end() {
        let description = format!("needle{}", "b".repeat(120));
        let result = snippet(&description, "needle");
        assert_eq!(result, format!("needle{}…", "b".repeat(100)));
    }

    #[test]
    fn test_fallback_without_occurrence() {
        let description = "x".repeat(160);
        assert_eq!(snippet(&description, "zzz"), format!("{}…", "x".repeat(150)));
        assert_eq!(snippet("short", "zzz"), "short");
        assert_eq!(snippet(&"y".repeat(150), "zzz"), "y".repeat(150));
    }

    #[test]
    fn test_multibyte_text_is_sliced_on_chars() {
        let description = format!("{}Sécurité{}", "é".repeat(60), "ü".repeat(110));
        let result = snippet(&description, "sécurité");
        assert!(result.starts_with(ELLIPSIS));
        assert!(result.ends_with(ELLIPSIS));
        assert!(result.contains("Sécurité"));
        assert_eq!(
            result.chars().count(),
            ELLIPSIS.chars().count() * 2 + 50 + 8 + 100
        );
        assert_eq!(result.chars().count(), 160);
    }

    #[test]
    fn test_dotted_capital_i_folds_to_single_char() {
        let text = FoldedText::new("İSTANBUL office");
        assert_eq!(text.char_len(), 15);
        assert!(text.contains(&FoldedText::new("istanbul")));
        assert!(!text.contains(&FoldedText::new("i\u{307}stanbul")));
        assert_eq!(extract(&text, &FoldedText::new("office")), "İSTANBUL office");
    }
}

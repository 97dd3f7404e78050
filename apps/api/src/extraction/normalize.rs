use once_cell::sync::Lazy;
use regex::Regex;

static MERGED_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Collapses every whitespace run (line breaks included) to a single space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Re-inserts the space PDF text runs lose between words set in different runs
/// ("SoftwareEngineer" -> "Software Engineer").
pub fn split_merged_words(text: &str) -> String {
    MERGED_WORDS.replace_all(text, "$1 $2").into_owned()
}

/// PDF normalization: whitespace collapse, then merged-word split.
pub fn normalize_pdf_text(text: &str) -> String {
    split_merged_words(&collapse_whitespace(text))
}

/// Salvages readable text from an unknown binary: everything outside printable
/// ASCII (and line breaks) becomes a space, then whitespace is collapsed.
pub fn printable_ascii(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let replaced: String = decoded
        .chars()
        .map(|c| if c == '\n' || (' '..='~').contains(&c) { c } else { ' ' })
        .collect();
    collapse_whitespace(&replaced)
}

/// Returns at most `limit` characters of `text`, cut on a character boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\t\tb \n\n c  "), "a b c");
    }

    #[test]
    fn test_split_merged_words() {
        assert_eq!(split_merged_words("SeniorEngineer atAcme"), "Senior Engineer at Acme");
        assert_eq!(split_merged_words("already spaced"), "already spaced");
    }

    #[test]
    fn test_normalize_pdf_text() {
        assert_eq!(
            normalize_pdf_text("John  Smith\nSoftwareEngineer\n\n"),
            "John Smith Software Engineer"
        );
    }

    #[test]
    fn test_printable_ascii_strips_binary_noise() {
        let bytes = b"\xd0\xcf\x11\xe0Jane\x00\x01Doe\x7f\r\nEngineer";
        assert_eq!(printable_ascii(bytes), "Jane Doe Engineer");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}

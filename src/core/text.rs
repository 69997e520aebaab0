//! Question text cleanup for rendering: HTML entity decoding and ASCII
//! transliteration.

use deunicode::deunicode;
use html_escape::decode_html_entities;

/// Decode HTML character entities, numeric and the full named set.
/// Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

/// Transliterate every non-ASCII character to its closest ASCII spelling.
pub fn to_ascii(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    deunicode(text)
}

/// Entity-decode then transliterate: what gets rendered
pub fn clean_question_text(raw: &str) -> String {
    to_ascii(&decode_entities(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(
            decode_entities("&quot;Pi&quot; isn&#039;t &#x3C0;"),
            "\"Pi\" isn't π"
        );
    }

    #[test]
    fn test_decode_accented_entities() {
        assert_eq!(
            decode_entities("Ram&aacute;nujan, Ca&ntilde;on, Poincar&eacute;"),
            "Ramánujan, Cañon, Poincaré"
        );
    }

    #[test]
    fn test_unknown_entity_untouched() {
        assert_eq!(decode_entities("a &bogus; b & c"), "a &bogus; b & c");
    }

    #[test]
    fn test_to_ascii_latin() {
        assert_eq!(to_ascii("Gödel’s théorème"), "Godel's theoreme");
        assert_eq!(to_ascii("Æneid"), "AEneid");
        assert_eq!(to_ascii("plain text"), "plain text");
    }

    #[test]
    fn test_to_ascii_other_scripts() {
        assert_eq!(to_ascii("Пифагор"), "Pifagor");
        assert_eq!(to_ascii("北亰"), "Bei Jing");

        let greek = to_ascii("Ευκλείδης");
        assert!(greek.is_ascii());
        assert!(greek.starts_with("Eu"));
        assert!(!greek.contains('?'));
    }

    #[test]
    fn test_clean_question_text() {
        let cleaned = clean_question_text("Ram&aacute;nujan &amp; Ca&ntilde;on &gt; 3");
        assert_eq!(cleaned, "Ramanujan & Canon > 3");
        assert!(cleaned.is_ascii());
    }
}

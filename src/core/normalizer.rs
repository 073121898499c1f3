use crate::core::stemmer::stem;

/// French and English stopwords removed before stemming
///
/// Short entries overlap with the length filter; the list is kept whole.
pub const STOPWORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "et", "ou", "de", "du", "au", "aux",
    "a", "à", "ce", "ces", "cette", "en", "par", "pour", "avec", "sans", "sur",
    "the", "a", "an", "and", "or", "of", "to", "in", "on", "by", "for", "with", "without",
    "je", "tu", "il", "elle", "nous", "vous", "ils", "elles",
    "i", "you", "he", "she", "we", "they",
];

/// Tokens at or below this many characters are dropped
const MIN_TOKEN_CHARS: usize = 2;

/// Check whether a lowercase token is a stopword
#[inline]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Check whether a character belongs to a word: ASCII letters and digits,
/// underscore, or the basic Cyrillic alphabet (U+0410 to U+044F)
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{0410}'..='\u{044F}').contains(&c)
}

/// Split lowercase text into word tokens
///
/// A word is a maximal run of word characters; any other character, accented
/// Latin letters included, separates words and is discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize free text into a sequence of stemmed tokens
///
/// Lowercases and tokenizes the text, drops stopwords and tokens of two
/// characters or fewer, then stems what remains. Absent or empty text gives
/// an empty sequence.
pub fn normalize(text: Option<&str>) -> Vec<String> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Vec::new(),
    };

    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|token| !is_stopword(token) && token.chars().count() > MIN_TOKEN_CHARS)
        .map(|token| stem(&token))
        .collect();

    tracing::trace!("Normalized {} chars into {} tokens", text.len(), tokens.len());

    tokens
}

/// Normalize a borrowed string; shorthand for `normalize(Some(text))`
#[inline]
pub fn normalize_str(text: &str) -> Vec<String> {
    normalize(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent() {
        assert!(normalize(None).is_empty());
        assert!(normalize(Some("")).is_empty());
        assert!(normalize_str("   ").is_empty());
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("Node.js, React!"), vec!["node", "js", "react"]);
        assert_eq!(tokenize("snake_case stays"), vec!["snake_case", "stays"]);
    }

    #[test]
    fn test_tokenize_splits_on_accented_letters() {
        assert_eq!(tokenize("Développeur à Paris"), vec!["d", "veloppeur", "paris"]);
        assert_eq!(normalize_str("Développeur"), vec!["veloppeur"]);
    }

    #[test]
    fn test_tokenize_keeps_cyrillic() {
        assert_eq!(tokenize("Разработчик Python"), vec!["разработчик", "python"]);
    }

    #[test]
    fn test_stopwords_removed() {
        let tokens = normalize_str("The developer and the designer");
        assert_eq!(tokens, vec!["develop", "design"]);

        let tokens = normalize_str("Ingénieur pour les données avec Python");
        assert!(!tokens.iter().any(|t| t == "pour" || t == "les" || t == "avec"));
        assert!(tokens.contains(&"python".to_string()));
    }

    #[test]
    fn test_short_tokens_removed() {
        assert_eq!(normalize_str("Go C# UI Rust"), vec!["rust"]);
    }

    #[test]
    fn test_tokens_are_stemmed() {
        assert_eq!(normalize_str("Developing APIs"), vec!["develop", "api"]);
    }

    #[test]
    fn test_order_preserved_with_duplicates() {
        assert_eq!(
            normalize_str("python django python"),
            vec!["python", "django", "python"]
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "Senior Backend Engineer with Rust and PostgreSQL";
        assert_eq!(normalize_str(text), normalize_str(text));
    }
}

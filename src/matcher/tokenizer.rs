/// Normalize a single query token: drop every whitespace character and lowercase.
pub fn normalize_token(token: &str) -> String {
    let stripped: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    // Must agree with str::to_lowercase on ingredient names (final sigma)
    stripped.to_lowercase()
}

/// Split `input` on every `delimiter` and normalize each piece.
///
/// Empty pieces are kept, so `""` yields `[""]` and a trailing delimiter
/// yields a trailing `""`.
pub fn tokenize(input: &str, delimiter: char) -> Vec<String> {
    input.split(delimiter).map(normalize_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_trims_and_lowercases() {
        assert_eq!(
            tokenize("tomato, pasta, garlic", ','),
            vec!["tomato", "pasta", "garlic"]
        );
        assert_eq!(tokenize("TOMATO , Garlic", ','), vec!["tomato", "garlic"]);
    }

    #[test]
    fn test_tokenize_strips_interior_whitespace() {
        assert_eq!(tokenize("olive oil", ','), vec!["oliveoil"]);
        assert_eq!(tokenize(" sea\tsalt\n", ','), vec!["seasalt"]);
    }

    #[test]
    fn test_tokenize_keeps_empty_tokens() {
        assert_eq!(tokenize("", ','), vec![""]);
        assert_eq!(tokenize("a,", ','), vec!["a", ""]);
        assert_eq!(tokenize("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(tokenize("   ", ','), vec![""]);
    }

    #[test]
    fn test_tokenize_custom_delimiter() {
        assert_eq!(tokenize("Bread;BUTTER", ';'), vec!["bread", "butter"]);
        assert_eq!(tokenize("bread,butter", ';'), vec!["bread,butter"]);
    }

    #[test]
    fn test_normalize_token_matches_str_lowercase() {
        assert_eq!(normalize_token("ΟΔΟΣ"), "ΟΔΟΣ".to_lowercase());
        assert_eq!(normalize_token(" ΟΔΟΣ "), "οδος");
    }

    #[test]
    fn test_tokenize_keeps_repeats() {
        assert_eq!(tokenize("garlic,Garlic", ','), vec!["garlic", "garlic"]);
    }
}

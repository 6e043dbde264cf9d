use ticker_resolver::Tokenizer;

#[cfg(test)]
mod query_tokenizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_tokens() {
        let tokenizer = Tokenizer::query_parser();

        let text = "these are all LOWERCASE Tokens";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["lowercase", "tokens"]);
    }

    #[test]
    fn test_tokenize_ignores_stop_words() {
        let tokenizer = Tokenizer::query_parser();

        let text = "This Is A Stop Word Laden Phrase With Microsoft, Google, and Apple";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec![
                "stop",
                "word",
                "laden",
                "phrase",
                "microsoft",
                "google",
                "apple"
            ]
        );
    }

    #[test]
    fn test_tokenize_ignores_finance_and_temporal_words() {
        let tokenizer = Tokenizer::query_parser();

        let text = "Should I buy HDFC Life shares now?";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["hdfc", "life"]);
    }

    #[test]
    fn test_tokenize_ignores_comparison_words() {
        let tokenizer = Tokenizer::query_parser();

        let text = "tcs vs infosys, which is better today";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["tcs", "infosys"]);
    }

    #[test]
    fn test_tokenize_keeps_words_which_start_company_names() {
        let tokenizer = Tokenizer::query_parser();

        let text = "Yes Bank";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["yes", "bank"]);
    }

    #[test]
    fn test_tokenize_with_tabs() {
        let tokenizer = Tokenizer::query_parser();

        let text = "This\tis\ta\ttest\tstring\tthat\tFord\tand\tDisney\tdid\tnot\tgenerate";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["test", "string", "ford", "disney", "generate"]);
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let tokenizer = Tokenizer::query_parser();

        let text = "  Google...\n\n\t and   Facebook\n";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["google", "facebook"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokenizer = Tokenizer::query_parser();

        let text = "";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, Vec::<&str>::new());
    }

    #[test]
    fn test_tokenize_stop_words_only() {
        let tokenizer = Tokenizer::query_parser();

        let text = "what is the price now?";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, Vec::<&str>::new());
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokenizer = Tokenizer::query_parser();

        let text = "x y z xy";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["xy"]);
    }

    #[test]
    fn test_tokenize_with_punctuation() {
        let tokenizer = Tokenizer::query_parser();

        let text = "Alphabet, Inc. (Google), Tesla's products, and Amazon's dominance.";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec![
                "alphabet",
                "inc",
                "google",
                "teslas",
                "products",
                "amazons",
                "dominance"
            ]
        );
    }

    #[test]
    fn test_tokenize_maintaining_mid_word_symbols() {
        let tokenizer = Tokenizer::query_parser();

        let text = "BRK.A and BRK-B are both valid!";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["brka", "brkb", "both", "valid"]);
    }

    #[test]
    fn test_tokenize_keeps_ampersands() {
        let tokenizer = Tokenizer::query_parser();

        let text = "M&M and L&T";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["m&m", "l&t"]);
    }

    #[test]
    fn test_tokenize_preserves_duplicates_and_order() {
        let tokenizer = Tokenizer::query_parser();

        let text = "acme capital acme";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["acme", "capital", "acme"]);
    }
}

#[cfg(test)]
mod company_name_tokenizer_tests {
    use super::*;

    #[test]
    fn test_company_name_keeps_stop_words() {
        let tokenizer = Tokenizer::company_name_parser();

        let text = "State Bank of India";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["state", "bank", "of", "india"]);
    }

    #[test]
    fn test_company_name_with_punctuation() {
        let tokenizer = Tokenizer::company_name_parser();

        let text = "Dr. Reddy's Laboratories Ltd.";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["dr", "reddys", "laboratories", "ltd"]);
    }

    #[test]
    fn test_company_name_keeps_standalone_ampersand() {
        let tokenizer = Tokenizer::company_name_parser();

        let text = "Larsen & Toubro";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["larsen", "&", "toubro"]);
    }

    #[test]
    fn test_normalize_removes_hyphens() {
        let tokenizer = Tokenizer::company_name_parser();

        assert_eq!(tokenizer.normalize("Bajaj-Auto  Ltd"), "bajajauto ltd");
    }
}

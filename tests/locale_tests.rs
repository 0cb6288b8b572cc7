#[cfg(test)]
pub mod locale_tests {
    use parivar::i18n::*;

    #[test]
    fn test_switch_lang_preserves_deep_paths() {
        assert_eq!(switch_lang("/hi/founders/42", Lang::En), "/en/founders/42");
        assert_eq!(
            switch_lang("/en/matrimony/7c9e6679-7425-40de-944b-e07fc1f90ae7", Lang::Hi),
            "/hi/matrimony/7c9e6679-7425-40de-944b-e07fc1f90ae7"
        );
    }

    #[test]
    fn test_switch_lang_preserves_query_string() {
        assert_eq!(
            switch_lang("/hi/login?next=/hi/dashboard", Lang::En),
            "/en/login?next=/hi/dashboard"
        );
    }

    #[test]
    fn test_switch_lang_prefixes_unprefixed_paths() {
        assert_eq!(switch_lang("/founders/42", Lang::En), "/en/founders/42");
    }

    #[test]
    fn test_switch_lang_root() {
        assert_eq!(switch_lang("/", Lang::Hi), "/hi");
        assert_eq!(switch_lang("/en", Lang::Hi), "/hi");
    }

    #[test]
    fn test_switch_lang_roundtrip_is_identity_up_to_first_segment() {
        let path = "/hi/news/parivar-sammelan-2026";
        let there = switch_lang(path, Lang::En);
        let back = switch_lang(&there, Lang::Hi);
        assert_eq!(back, path);
    }

    #[test]
    fn test_localized_prefixes_segments() {
        assert_eq!(localized(Lang::En, "news"), "/en/news");
        assert_eq!(localized(Lang::Hi, "/news"), "/hi/news");
        assert_eq!(localized(Lang::Hi, ""), "/hi");
    }

    #[test]
    fn test_localized_passes_absolute_urls_through() {
        assert_eq!(
            localized(Lang::En, "https://pay.example.com/checkout/1"),
            "https://pay.example.com/checkout/1"
        );
        assert_eq!(localized(Lang::Hi, "//cdn.example.com/a.png"), "//cdn.example.com/a.png");
    }

    #[test]
    fn test_lang_from_path() {
        assert_eq!(lang_from_path("/en/news"), Some(Lang::En));
        assert_eq!(lang_from_path("/hi"), Some(Lang::Hi));
        assert_eq!(lang_from_path("/fr/news"), None);
        assert_eq!(lang_from_path("/founders"), None);
        assert_eq!(lang_from_path("/"), None);
    }

    #[test]
    fn test_lang_from_code_accepts_regional_tags() {
        assert_eq!(Lang::from_code("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_code("hi-IN"), Some(Lang::Hi));
        assert_eq!(Lang::from_code("HI"), Some(Lang::Hi));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn test_ensure_locale_serves_supported_paths_unchanged() {
        assert_eq!(ensure_locale("/en/founders/42", Lang::En), None);
        assert_eq!(ensure_locale("/hi", Lang::En), None);
    }

    #[test]
    fn test_ensure_locale_substitutes_unsupported_locale_tags() {
        assert_eq!(
            ensure_locale("/fr/founders/42", Lang::En),
            Some("/en/founders/42".to_string())
        );
        assert_eq!(
            ensure_locale("/de-DE/news", Lang::Hi),
            Some("/hi/news".to_string())
        );
    }

    #[test]
    fn test_ensure_locale_prefixes_plain_paths() {
        assert_eq!(
            ensure_locale("/founders/42", Lang::En),
            Some("/en/founders/42".to_string())
        );
        assert_eq!(ensure_locale("/", Lang::En), Some("/en".to_string()));
    }

    #[test]
    fn test_ensure_locale_keeps_query_string() {
        assert_eq!(
            ensure_locale("/dashboard?tab=interests", Lang::En),
            Some("/en/dashboard?tab=interests".to_string())
        );
    }
}

#[cfg(test)]
mod integration_tests {

    use crate::{
        ConceptNormalizer, EnglishFilter, LangTier, NoFilter, get_uri_language,
        lang::{ALL_LANGUAGES, CORE_LANGUAGES, is_supported, tier_of},
        standardized_concept_uri_with, topic_to_concept,
        uri::{assertion_uri, parse_compound_uri},
    };

    #[test]
    fn assertion_between_topics() {
        let start = topic_to_concept("en", "Mercury (planet)");
        let end = topic_to_concept("EN", "Planet");
        let edge = assertion_uri("/r/IsA", [start.as_str(), end.as_str()]);

        assert_eq!(edge, "/a/[/r/IsA/,/c/en/mercury/n/wp/planet/,/c/en/planet/]");
        assert_eq!(get_uri_language(&edge), Some("en"));
        let (_, args) = parse_compound_uri(&edge).unwrap();
        assert_eq!(args.as_slice(), ["/r/IsA", start.as_str(), end.as_str()]);
    }

    #[test]
    fn cross_source_alignment() {
        // Two sources tag the same Norwegian word differently.
        let a = standardized_concept_uri_with("nb", "Hus", ["n"]);
        let b = standardized_concept_uri_with("NN", "hus_", [Some("N"), None]);
        assert_eq!(a, b);
        assert_eq!(a, "/c/no/hus/n");
        assert!(is_supported(get_uri_language(&a).unwrap_or_default()));
    }

    #[test]
    fn every_core_language_round_trips() {
        for &lang in &CORE_LANGUAGES {
            let uri = topic_to_concept(lang, "Example (test)");
            assert_eq!(get_uri_language(&uri), Some(lang));
            assert_eq!(tier_of(lang), Some(LangTier::Common));
        }
    }

    #[test]
    fn every_supported_language_survives_canonicalization() {
        for &lang in ALL_LANGUAGES.iter() {
            let uri = standardized_concept_uri_with(lang, "x", ["n"]);
            assert_eq!(get_uri_language(&uri), Some(lang));
        }
    }

    #[test]
    fn custom_normalizer_pipeline() {
        let n = ConceptNormalizer::builder()
            .without_filters()
            .filter("en", EnglishFilter)
            .filter("fr", NoFilter)
            .build();
        assert_eq!(n.topic_to_concept("en", "The Wall (album)"), "/c/en/wall/n/wp/album");
        assert_eq!(n.topic_to_concept("fr", "Le Mur (album)"), "/c/fr/le_mur/n/wp/album");
    }
}

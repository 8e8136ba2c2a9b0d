//! Static language data: the code merge table and the tiered catalog of
//! supported languages. Everything here is built at compile time by `phf`.

use phf::{Map, Set, phf_map, phf_set};

/// ---------------------------------------------------------------------------
///    Macro – generates the tier sets and `LangTier` from one table
/// ---------------------------------------------------------------------------
macro_rules! define_tiers {
    ($(
        $variant:ident, $set:ident, $name:literal,
        common: $common:literal,
        historical: $historical:literal,
        artificial: $artificial:literal,
        codes: { $($code:literal),* $(,)? }
    );* $(;)?) => {
        $(
            pub static $set: Set<&'static str> = phf_set! { $($code),* };
        )*

        /// Usage tier of a supported language. Tiers never overlap.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum LangTier {
            $($variant),*
        }

        impl LangTier {
            pub const ALL: &'static [LangTier] = &[$(LangTier::$variant),*];

            /// Catalog name of the tier, e.g. `"common-historical"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(LangTier::$variant => $name),*
                }
            }

            pub fn codes(self) -> &'static Set<&'static str> {
                match self {
                    $(LangTier::$variant => &$set),*
                }
            }

            pub const fn is_common(self) -> bool {
                match self {
                    $(LangTier::$variant => $common),*
                }
            }

            pub const fn is_historical(self) -> bool {
                match self {
                    $(LangTier::$variant => $historical),*
                }
            }

            pub const fn is_artificial(self) -> bool {
                match self {
                    $(LangTier::$variant => $artificial),*
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Merge table
//    When it is unclear whether two codes name "the same language", they are
//    merged. Alignment across sources matters more here than precision.
//    Every target is a plain code with no further entry (one hop).
// ---------------------------------------------------------------------------
pub static LCODE_ALIASES: Map<&'static str, &'static str> = phf_map! {
    // Chinese varieties and regional tags collapse to `zh`.
    "cmn" => "zh",
    "yue" => "zh",
    "zh_tw" => "zh",
    "zh_cn" => "zh",
    "zh-tw" => "zh",
    "zh-cn" => "zh",

    "nds-de" => "nds",
    "nds-nl" => "nds",

    // Indonesian and Standard Malay share the macrolanguage code.
    "zsm" => "ms",
    "id" => "ms",

    // Bokmål and Nynorsk are both Norwegian.
    "nn" => "no",
    "nb" => "no",

    // Serbo-Croatian macrolanguage; scripts are not unified.
    "bs" => "sh",
    "hr" => "sh",
    "sr" => "sh",
    "hbs" => "sh",
    "sr-latn" => "sh",
    "sr-cyrl" => "sh",

    "arb" => "ar",   // Modern Standard Arabic
    "arz" => "ar",   // Egyptian Arabic
    "ary" => "ar",   // Moroccan Arabic
    "ckb" => "ku",   // Central Kurdish
    "mvf" => "mn",   // Peripheral Mongolian
    "tl" => "fil",   // Tagalog
    "vro" => "et",   // Võro
    "sgs" => "lt",   // Samogitian
    "ciw" => "oj",   // Chippewa
    "xal" => "xwo",  // Kalmyk -> Oirat
    "ffm" => "ff",   // Maasina Fulfulde
};

// ---------------------------------------------------------------------------
//    Supported languages
//    A language is listed when it has enough edges, a stable BCP 47 code, is
//    not a sign language, and is living, historically important, or a
//    fully developed constructed language.
// ---------------------------------------------------------------------------
define_tiers! {
    // Living languages with at least 25,000 edges.
    Common, COMMON, "common",
        common: true, historical: false, artificial: false,
        codes: {
        "en", "fr", "de", "it", "es", "ru", "pt", "ja", "zh", "nl", "fi", "pl", "bg", "sv",
        "cs", "sh", "sl", "ar", "ca", "hu", "se", "is", "ro", "el", "lv", "ms", "tr", "da",
        "ga", "vi", "ko", "hy", "gl", "oc", "fo", "gd", "fa", "ast", "hsb", "ka", "he",
        "no", "sq", "mg", "nrf", "sk", "lt", "et", "te", "mk", "nv", "hi", "af", "gv",
        "sa", "th", "fil", "eu", "rup", "uk", "cy",
        };

    // No living native speakers, at least 25,000 edges counting etymologies.
    CommonHistorical, COMMON_HISTORICAL, "common-historical",
        common: true, historical: true, artificial: false,
        codes: {
        "la", "grc", "xcl", "fro", "ang", "non",
        };

    // `mul` covers international standards and emoji.
    CommonArtificial, COMMON_ARTIFICIAL, "common-artificial",
        common: true, historical: false, artificial: true,
        codes: {
        "mul", "eo", "io", "vo",
        };

    More, MORE, "more",
        common: false, historical: false, artificial: false,
        codes: {
        "rm", "br", "lb", "fy", "ku", "be", "kk", "frp", "mi", "sw", "yi", "dsb", "vec",
        "ln", "fur", "pap", "nds", "mn", "km", "ba", "os", "sco", "lld", "bn", "mt", "ady",
        "az", "qu", "scn", "haw", "bm", "iu", "lo", "crh", "ses", "ta", "tg", "vep", "wa",
        "kw", "co", "tt", "ky", "ceb", "nan", "dlm", "mdf", "stq", "uz", "pcd", "my", "zu",
        "sc", "tk", "ht", "lad", "arn", "srn", "ps", "gu", "kl", "mr", "tpi", "hil", "kn",
        "ne", "wym", "ug", "nap", "oj", "mwl", "frr", "an", "yua", "cv", "bo", "zdj",
        "chr", "sah", "pal", "ce", "wo", "li", "ml", "egl", "csb", "ist", "lkt", "pi",
        "kbd", "twf", "jv", "fon", "nah", "pa", "myv", "nmn", "rom", "ltg", "ee", "sm",
        "am", "kum", "krc", "gsw", "dak", "swb", "bal", "si", "so", "su", "kjh", "cic",
        "gag", "nog", "chk", "ha", "tyv", "nhn", "zza", "oma", "vot", "krl", "rw", "aa",
        "or", "alt", "esu", "ccc", "ab", "ppl", "chl", "ain", "na", "ty", "wau", "dua",
        "rap", "adx", "cjs", "tet", "kim", "hak", "lij", "gn", "tpw", "sms", "xmf", "smn",
        "raj", "cim", "rue", "hke", "fj", "pms", "wae", "yo", "mh", "szl", "pjt", "khb",
        "dv", "udm", "dje", "ilo", "aii", "koy", "war", "lmo", "ti", "av", "mch", "abe",
        "cho", "xwo", "za", "ki", "lzz", "sd", "st", "shh", "bi", "ch", "akz", "ff",
        };

    MoreHistorical, MORE_HISTORICAL, "more-historical",
        common: false, historical: true, artificial: false,
        codes: {
        "syc", "cu", "goh", "frm", "enm", "sga", "pro", "osx", "got", "hbo", "nci", "arc",
        "sux", "ota", "dum", "gml", "gmh", "ofs", "osp", "roa-opt", "prg", "liv", "egx",
        "akk", "odt", "oge", "frk", "axm", "txb", "orv", "xto", "peo", "ae", "xno", "uga",
        "mga", "egy", "xpr", "cop", "hit",
        };

    MoreArtificial, MORE_ARTIFICIAL, "more-artificial",
        common: false, historical: false, artificial: true,
        codes: {
        "jbo", "ia", "nov", "ie", "qya",
        };
}

/// The top supported languages, in priority order.
pub const CORE_LANGUAGES: [&str; 10] = ["en", "fr", "de", "it", "es", "ru", "pt", "ja", "zh", "nl"];

/// Display names to prefer over whatever a generic language-name lookup
/// would return for these codes.
pub static LANGUAGE_NAME_OVERRIDES: Map<&'static str, &'static str> = phf_map! {
    "sh" => "Serbo-Croatian",
};

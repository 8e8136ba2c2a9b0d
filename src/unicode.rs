//! Script classification for the tokenizer.
//!
//! Scripts written without spaces between words get no help from UAX #29,
//! which breaks between every ideograph. Runs of these characters are kept
//! together as one token instead.

// Hiragana block.
#[inline(always)]
fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

// Katakana + small extensions.
#[inline(always)]
fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FF  | // Katakana
        0x31F0..=0x31FF  | // Phonetic Extensions
        0xFF66..=0xFF9F    // Halfwidth
    )
}

// Kana Supplement, Extended-A and Small Kana Extension.
#[inline(always)]
fn is_kana_supplement(c: char) -> bool {
    matches!(c as u32, 0x1B000..=0x1B16F)
}

// Unified Han blocks, extensions and the compatibility block.
#[inline(always)]
fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF   | // Unified
        0x3400..=0x4DBF   | // Ext A
        0x20000..=0x2A6DF | // Ext B
        0x2A700..=0x2EBEF | // Ext C–F
        0x30000..=0x323AF | // Ext G–H
        0xF900..=0xFAFF     // Compatibility
    )
}

// Han/Kana cluster excluding Hangul.
#[inline(always)]
fn is_cjk_han_or_kana(c: char) -> bool {
    is_cjk_unified_ideograph(c)
        || is_hiragana(c)
        || is_katakana(c)
        || is_kana_supplement(c)
        || c == '々' // iteration mark
}

// Southeast Asian scripts with no spaces between words.
#[inline(always)]
fn is_se_asian_script(c: char) -> bool {
    matches!(c as u32,
        0x0E00..=0x0E7F  | // Thai
        0x0E80..=0x0EFF  | // Lao
        0x1000..=0x109F  | // Myanmar
        0xAA60..=0xAA7F  | // Myanmar Ext-A
        0xA9E0..=0xA9FF  | // Myanmar Ext-B
        0x1780..=0x17FF  | // Khmer
        0x19E0..=0x19FF  | // Khmer Symbols
        0x1A20..=0x1AAF    // Tai Tham
    )
}

/// Whether `c` belongs to a script that does not separate words with spaces.
/// Hangul is excluded: Korean is written with spaces.
#[inline(always)]
pub fn is_spaceless(c: char) -> bool {
    is_cjk_han_or_kana(c) || is_se_asian_script(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scripts() {
        for c in ['北', 'ひ', 'カ', 'ｶ', '々', 'ก', 'ລ', 'က', 'ក', '𠀀'] {
            assert!(is_spaceless(c), "{c:?}");
        }
        // Small Kana Extension.
        for c in ['\u{1B132}', '\u{1B150}', '\u{1B164}'] {
            assert!(is_spaceless(c), "{c:?}");
        }
        for c in ['a', 'é', 'я', '한', 'ש', '1', ' ', '。'] {
            assert!(!is_spaceless(c), "{c:?}");
        }
    }
}

//! Unicode block lookup.
//!
//! The script-boundary splitter cuts a token wherever two consecutive chars
//! fall in different blocks. Only the blocks that occur in CJK and Latin
//! technical text are named; every other code point maps to
//! [`UnicodeBlock::Other`].

/// A named Unicode block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnicodeBlock {
    BasicLatin,
    Latin1Supplement,
    LatinExtendedA,
    LatinExtendedB,
    IpaExtensions,
    SpacingModifierLetters,
    CombiningDiacriticalMarks,
    GreekAndCoptic,
    Cyrillic,
    Hebrew,
    Arabic,
    Thai,
    HangulJamo,
    LatinExtendedAdditional,
    GreekExtended,
    GeneralPunctuation,
    SuperscriptsAndSubscripts,
    CurrencySymbols,
    LetterlikeSymbols,
    NumberForms,
    Arrows,
    MathematicalOperators,
    MiscellaneousTechnical,
    EnclosedAlphanumerics,
    BoxDrawing,
    GeometricShapes,
    MiscellaneousSymbols,
    CjkRadicalsSupplement,
    CjkSymbolsAndPunctuation,
    Hiragana,
    Katakana,
    Bopomofo,
    HangulCompatibilityJamo,
    KatakanaPhoneticExtensions,
    EnclosedCjkLettersAndMonths,
    CjkCompatibility,
    CjkUnifiedIdeographsExtensionA,
    CjkUnifiedIdeographs,
    HangulSyllables,
    CjkCompatibilityIdeographs,
    CjkCompatibilityForms,
    SmallFormVariants,
    HalfwidthAndFullwidthForms,
    CjkUnifiedIdeographsExtensionB,
    Other,
}

/// Sorted, non-overlapping `(first, last, block)` ranges.
const BLOCKS: &[(u32, u32, UnicodeBlock)] = &[
    (0x0000, 0x007F, UnicodeBlock::BasicLatin),
    (0x0080, 0x00FF, UnicodeBlock::Latin1Supplement),
    (0x0100, 0x017F, UnicodeBlock::LatinExtendedA),
    (0x0180, 0x024F, UnicodeBlock::LatinExtendedB),
    (0x0250, 0x02AF, UnicodeBlock::IpaExtensions),
    (0x02B0, 0x02FF, UnicodeBlock::SpacingModifierLetters),
    (0x0300, 0x036F, UnicodeBlock::CombiningDiacriticalMarks),
    (0x0370, 0x03FF, UnicodeBlock::GreekAndCoptic),
    (0x0400, 0x04FF, UnicodeBlock::Cyrillic),
    (0x0590, 0x05FF, UnicodeBlock::Hebrew),
    (0x0600, 0x06FF, UnicodeBlock::Arabic),
    (0x0E00, 0x0E7F, UnicodeBlock::Thai),
    (0x1100, 0x11FF, UnicodeBlock::HangulJamo),
    (0x1E00, 0x1EFF, UnicodeBlock::LatinExtendedAdditional),
    (0x1F00, 0x1FFF, UnicodeBlock::GreekExtended),
    (0x2000, 0x206F, UnicodeBlock::GeneralPunctuation),
    (0x2070, 0x209F, UnicodeBlock::SuperscriptsAndSubscripts),
    (0x20A0, 0x20CF, UnicodeBlock::CurrencySymbols),
    (0x2100, 0x214F, UnicodeBlock::LetterlikeSymbols),
    (0x2150, 0x218F, UnicodeBlock::NumberForms),
    (0x2190, 0x21FF, UnicodeBlock::Arrows),
    (0x2200, 0x22FF, UnicodeBlock::MathematicalOperators),
    (0x2300, 0x23FF, UnicodeBlock::MiscellaneousTechnical),
    (0x2460, 0x24FF, UnicodeBlock::EnclosedAlphanumerics),
    (0x2500, 0x257F, UnicodeBlock::BoxDrawing),
    (0x25A0, 0x25FF, UnicodeBlock::GeometricShapes),
    (0x2600, 0x26FF, UnicodeBlock::MiscellaneousSymbols),
    (0x2E80, 0x2EFF, UnicodeBlock::CjkRadicalsSupplement),
    (0x3000, 0x303F, UnicodeBlock::CjkSymbolsAndPunctuation),
    (0x3040, 0x309F, UnicodeBlock::Hiragana),
    (0x30A0, 0x30FF, UnicodeBlock::Katakana),
    (0x3100, 0x312F, UnicodeBlock::Bopomofo),
    (0x3130, 0x318F, UnicodeBlock::HangulCompatibilityJamo),
    (0x31F0, 0x31FF, UnicodeBlock::KatakanaPhoneticExtensions),
    (0x3200, 0x32FF, UnicodeBlock::EnclosedCjkLettersAndMonths),
    (0x3300, 0x33FF, UnicodeBlock::CjkCompatibility),
    (0x3400, 0x4DBF, UnicodeBlock::CjkUnifiedIdeographsExtensionA),
    (0x4E00, 0x9FFF, UnicodeBlock::CjkUnifiedIdeographs),
    (0xAC00, 0xD7AF, UnicodeBlock::HangulSyllables),
    (0xF900, 0xFAFF, UnicodeBlock::CjkCompatibilityIdeographs),
    (0xFE30, 0xFE4F, UnicodeBlock::CjkCompatibilityForms),
    (0xFE50, 0xFE6F, UnicodeBlock::SmallFormVariants),
    (0xFF00, 0xFFEF, UnicodeBlock::HalfwidthAndFullwidthForms),
    (0x20000, 0x2A6DF, UnicodeBlock::CjkUnifiedIdeographsExtensionB),
];

impl UnicodeBlock {
    /// The block containing `c`.
    pub fn of(c: char) -> UnicodeBlock {
        let cp = c as u32;
        match BLOCKS.binary_search_by(|&(first, last, _)| {
            if cp < first {
                std::cmp::Ordering::Greater
            } else if cp > last {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        }) {
            Ok(idx) => BLOCKS[idx].2,
            Err(_) => UnicodeBlock::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lookup() {
        assert_eq!(UnicodeBlock::of('a'), UnicodeBlock::BasicLatin);
        assert_eq!(UnicodeBlock::of('-'), UnicodeBlock::BasicLatin);
        assert_eq!(UnicodeBlock::of('é'), UnicodeBlock::Latin1Supplement);
        assert_eq!(UnicodeBlock::of('α'), UnicodeBlock::GreekAndCoptic);
        assert_eq!(UnicodeBlock::of('第'), UnicodeBlock::CjkUnifiedIdeographs);
        assert_eq!(UnicodeBlock::of('の'), UnicodeBlock::Hiragana);
        assert_eq!(UnicodeBlock::of('カ'), UnicodeBlock::Katakana);
        assert_eq!(UnicodeBlock::of('한'), UnicodeBlock::HangulSyllables);
        assert_eq!(UnicodeBlock::of('ｅ'), UnicodeBlock::HalfwidthAndFullwidthForms);
        assert_eq!(UnicodeBlock::of('、'), UnicodeBlock::CjkSymbolsAndPunctuation);
        assert_eq!(UnicodeBlock::of('\u{0700}'), UnicodeBlock::Other);
    }
}

//! Replacement rules for characters the target encoding cannot carry.
//!
//! Translators type curly quotes, em dashes, accented Latin, and
//! sometimes Cyrillic; Shift-JIS has no mapping for most of these, and
//! letting them all collapse to `?` would destroy meaning. The rules
//! here transliterate each such character to an ASCII-safe equivalent
//! before encoding. Characters the encoding carries natively (kana,
//! kanji, the JIS horizontal bar and ellipsis, Greek, `°±×÷`) are
//! deliberately absent so decompiled Japanese text recompiles to the
//! same bytes.

/// Exact-match rules, consulted before any encoding attempt.
///
/// Every replacement is plain ASCII, so applying the table twice is a
/// no-op.
#[rustfmt::skip]
pub(crate) static EXACT: &[(char, &str)] = &[
    // Hyphens, dashes, minus
    ('\u{2010}', "-"), ('\u{2011}', "-"), ('\u{2012}', "-"),
    ('\u{2013}', "-"), ('\u{2014}', "-"), ('\u{2212}', "-"),
    // Quotation marks and apostrophes
    ('\u{2018}', "'"),  ('\u{2019}', "'"),  ('\u{201A}', ","), ('\u{201B}', "'"),
    ('\u{201C}', "\""), ('\u{201D}', "\""), ('\u{201E}', "\""), ('\u{201F}', "\""),
    ('\u{2039}', "<"),  ('\u{203A}', ">"),  ('\u{00AB}', "<<"), ('\u{00BB}', ">>"),
    ('\u{02BC}', "'"),
    // Bullets, daggers, leaders
    ('\u{2022}', "*"), ('\u{2023}', "*"), ('\u{2020}', "*"), ('\u{2021}', "*"),
    // Spacing and invisible marks
    ('\u{00A0}', " "), ('\u{00AD}', ""), ('\u{2028}', " "), ('\u{2029}', " "),
    ('\u{FEFF}', ""),
    // Signs and symbols
    ('\u{2122}', "TM"),  ('\u{00A9}', "(c)"), ('\u{00AE}', "(r)"),
    ('\u{20AC}', "EUR"), ('\u{00A6}', "|"),   ('\u{2044}', "/"),
    ('\u{00A1}', "!"),   ('\u{00BF}', "?"),   ('\u{00B5}', "u"),
    ('\u{00B7}', "."),   ('\u{00AA}', "a"),   ('\u{00BA}', "o"),
    // Superscripts and vulgar fractions
    ('\u{00B9}', "1"),   ('\u{00B2}', "2"),   ('\u{00B3}', "3"),
    ('\u{00BC}', "1/4"), ('\u{00BD}', "1/2"), ('\u{00BE}', "3/4"),
    ('\u{2153}', "1/3"), ('\u{2154}', "2/3"),
    // Latin-1 Supplement letters
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Æ', "AE"), ('Ç', "C"),
    ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"),
    ('Ð', "D"), ('Ñ', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"),
    ('Ý', "Y"), ('Þ', "Th"), ('ß', "ss"),
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"),
    ('æ', "ae"), ('ç', "c"),
    ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"),
    ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"),
    ('ð', "d"), ('ñ', "n"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"), ('ø', "o"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"),
    ('ý', "y"), ('ÿ', "y"), ('þ', "th"),
    // Latin Extended-A
    ('Ā', "A"), ('ā', "a"), ('Ă', "A"), ('ă', "a"), ('Ą', "A"), ('ą', "a"),
    ('Ć', "C"), ('ć', "c"), ('Ĉ', "C"), ('ĉ', "c"), ('Ċ', "C"), ('ċ', "c"),
    ('Č', "C"), ('č', "c"),
    ('Ď', "D"), ('ď', "d"), ('Đ', "D"), ('đ', "d"),
    ('Ē', "E"), ('ē', "e"), ('Ĕ', "E"), ('ĕ', "e"), ('Ė', "E"), ('ė', "e"),
    ('Ę', "E"), ('ę', "e"), ('Ě', "E"), ('ě', "e"),
    ('Ĝ', "G"), ('ĝ', "g"), ('Ğ', "G"), ('ğ', "g"), ('Ġ', "G"), ('ġ', "g"),
    ('Ģ', "G"), ('ģ', "g"),
    ('Ĥ', "H"), ('ĥ', "h"), ('Ħ', "H"), ('ħ', "h"),
    ('Ĩ', "I"), ('ĩ', "i"), ('Ī', "I"), ('ī', "i"), ('Ĭ', "I"), ('ĭ', "i"),
    ('Į', "I"), ('į', "i"), ('İ', "I"), ('ı', "i"),
    ('Ĵ', "J"), ('ĵ', "j"), ('Ķ', "K"), ('ķ', "k"),
    ('Ĺ', "L"), ('ĺ', "l"), ('Ļ', "L"), ('ļ', "l"), ('Ľ', "L"), ('ľ', "l"),
    ('Ŀ', "L"), ('ŀ', "l"), ('Ł', "L"), ('ł', "l"),
    ('Ń', "N"), ('ń', "n"), ('Ņ', "N"), ('ņ', "n"), ('Ň', "N"), ('ň', "n"),
    ('ŉ', "'n"), ('Ŋ', "N"), ('ŋ', "n"),
    ('Ō', "O"), ('ō', "o"), ('Ŏ', "O"), ('ŏ', "o"), ('Ő', "O"), ('ő', "o"),
    ('Œ', "OE"), ('œ', "oe"),
    ('Ŕ', "R"), ('ŕ', "r"), ('Ŗ', "R"), ('ŗ', "r"), ('Ř', "R"), ('ř', "r"),
    ('Ś', "S"), ('ś', "s"), ('Ŝ', "S"), ('ŝ', "s"), ('Ş', "S"), ('ş', "s"),
    ('Š', "S"), ('š', "s"),
    ('Ţ', "T"), ('ţ', "t"), ('Ť', "T"), ('ť', "t"), ('Ŧ', "T"), ('ŧ', "t"),
    ('Ũ', "U"), ('ũ', "u"), ('Ū', "U"), ('ū', "u"), ('Ŭ', "U"), ('ŭ', "u"),
    ('Ů', "U"), ('ů', "u"), ('Ű', "U"), ('ű', "u"), ('Ų', "U"), ('ų', "u"),
    ('Ŵ', "W"), ('ŵ', "w"), ('Ŷ', "Y"), ('ŷ', "y"), ('Ÿ', "Y"),
    ('Ź', "Z"), ('ź', "z"), ('Ż', "Z"), ('ż', "z"), ('Ž', "Z"), ('ž', "z"),
    ('ſ', "s"),
    // Cyrillic, GOST-style romanization
    ('А', "A"),  ('Б', "B"),  ('В', "V"),  ('Г', "G"),  ('Д', "D"),
    ('Е', "E"),  ('Ж', "Zh"), ('З', "Z"),  ('И', "I"),  ('Й', "Y"),
    ('К', "K"),  ('Л', "L"),  ('М', "M"),  ('Н', "N"),  ('О', "O"),
    ('П', "P"),  ('Р', "R"),  ('С', "S"),  ('Т', "T"),  ('У', "U"),
    ('Ф', "F"),  ('Х', "Kh"), ('Ц', "Ts"), ('Ч', "Ch"), ('Ш', "Sh"),
    ('Щ', "Shch"), ('Ъ', ""), ('Ы', "Y"),  ('Ь', ""),   ('Э', "E"),
    ('Ю', "Yu"), ('Я', "Ya"), ('Ё', "Yo"),
    ('а', "a"),  ('б', "b"),  ('в', "v"),  ('г', "g"),  ('д', "d"),
    ('е', "e"),  ('ж', "zh"), ('з', "z"),  ('и', "i"),  ('й', "y"),
    ('к', "k"),  ('л', "l"),  ('м', "m"),  ('н', "n"),  ('о', "o"),
    ('п', "p"),  ('р', "r"),  ('с', "s"),  ('т', "t"),  ('у', "u"),
    ('ф', "f"),  ('х', "kh"), ('ц', "ts"), ('ч', "ch"), ('ш', "sh"),
    ('щ', "shch"), ('ъ', ""), ('ы', "y"),  ('ь', ""),   ('э', "e"),
    ('ю', "yu"), ('я', "ya"), ('ё', "yo"),
    ('Є', "Ye"), ('є', "ye"), ('І', "I"),  ('і', "i"),
    ('Ї', "Yi"), ('ї', "yi"), ('Ґ', "G"),  ('ґ', "g"),
];

/// Inclusive range rules, consulted after exact matches.
#[rustfmt::skip]
pub(crate) static RANGES: &[(char, char, &str)] = &[
    ('\u{0300}', '\u{036F}', ""),  // combining diacritics, dropped
    ('\u{2000}', '\u{200A}', " "), // typographic spaces
    ('\u{200B}', '\u{200F}', ""),  // zero-width and directional marks
];

/// Looks up the replacement for `ch`, exact rules first.
pub(crate) fn lookup(ch: char) -> Option<&'static str> {
    if let Some((_, replacement)) = EXACT.iter().find(|(c, _)| *c == ch) {
        return Some(replacement);
    }
    RANGES
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&ch))
        .map(|&(_, _, replacement)| replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_rules_win_over_ranges() {
        assert_eq!(lookup('\u{2014}'), Some("-"));
        assert_eq!(lookup('\u{2019}'), Some("'"));
    }

    #[test]
    fn test_range_rules() {
        assert_eq!(lookup('\u{0301}'), Some(""));
        assert_eq!(lookup('\u{2009}'), Some(" "));
        assert_eq!(lookup('\u{200B}'), Some(""));
    }

    #[test]
    fn test_native_characters_have_no_rule() {
        // These must flow through to the encoder untouched.
        assert_eq!(lookup('あ'), None);
        assert_eq!(lookup('漢'), None);
        assert_eq!(lookup('\u{2015}'), None);
        assert_eq!(lookup('\u{2026}'), None);
        assert_eq!(lookup('A'), None);
    }

    #[test]
    fn test_replacements_are_ascii() {
        for (ch, replacement) in EXACT {
            assert!(replacement.is_ascii(), "rule for {ch:?} is not ASCII-safe");
        }
        for (_, _, replacement) in RANGES {
            assert!(replacement.is_ascii());
        }
    }

    #[test]
    fn test_cyrillic_transliteration() {
        assert_eq!(lookup('Щ'), Some("Shch"));
        assert_eq!(lookup('ё'), Some("yo"));
        assert_eq!(lookup('ї'), Some("yi"));
    }
}

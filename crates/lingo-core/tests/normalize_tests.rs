use lingo_core::normalize::{normalize, normalize_vietnamese};
use rstest::rstest;

#[test]
fn test_ascii_letters_pass_through() {
    for ch in ('A'..='Z').chain('a'..='z') {
        assert_eq!(normalize(ch), ch);
    }
}

#[rstest]
#[case(' ')]
#[case('0')]
#[case('9')]
#[case('!')]
#[case('[')]
#[case('`')]
#[case('\n')]
fn test_basic_latin_noise_folds_to_space(#[case] ch: char) {
    assert_eq!(normalize(ch), ' ');
}

#[rstest]
#[case('\u{00A0}', ' ')] // NBSP is a boundary
#[case('\u{00AB}', ' ')] // left guillemet
#[case('\u{00BB}', ' ')] // right guillemet
#[case('\u{00B0}', ' ')] // degree sign
#[case('\u{00A1}', '\u{00A1}')] // inverted exclamation passes
#[case('\u{00E9}', '\u{00E9}')] // e-acute passes
fn test_latin1_exclusion_set(#[case] input: char, #[case] expected: char) {
    assert_eq!(normalize(input), expected);
}

#[rstest]
#[case('\u{0219}', '\u{015F}')] // s-comma -> s-cedilla
#[case('\u{021B}', '\u{0163}')] // t-comma -> t-cedilla
#[case('\u{0218}', '\u{0218}')] // uppercase forms pass
fn test_romanian_comma_below(#[case] input: char, #[case] expected: char) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_farsi_yeh_folds_to_arabic_yeh() {
    assert_eq!(normalize('\u{06CC}'), '\u{064A}');
    assert_eq!(normalize('\u{064A}'), '\u{064A}');
}

#[rstest]
#[case('\u{1EA0}')]
#[case('\u{1EC3}')]
#[case('\u{1EFF}')]
fn test_latin_extended_additional_folds_to_representative(#[case] ch: char) {
    assert_eq!(normalize(ch), '\u{1EC3}');
}

#[test]
fn test_general_punctuation_is_boundary() {
    assert_eq!(normalize('\u{2000}'), ' ');
    assert_eq!(normalize('\u{2014}'), ' ');
    assert_eq!(normalize('\u{206F}'), ' ');
}

#[rstest]
#[case('\u{3041}', '\u{3042}')] // hiragana
#[case('\u{309F}', '\u{3042}')]
#[case('\u{30A1}', '\u{30A2}')] // katakana
#[case('\u{30FC}', '\u{30A2}')]
#[case('\u{3105}', '\u{3105}')] // bopomofo
#[case('\u{31A0}', '\u{3105}')] // bopomofo extended
#[case('\u{AC01}', '\u{AC00}')] // hangul
#[case('\u{D7AF}', '\u{AC00}')]
fn test_whole_script_blocks_fold_to_one_char(#[case] input: char, #[case] expected: char) {
    assert_eq!(normalize(input), expected);
}

#[rstest]
#[case('七', '丁')] // clustered with its frequency twin
#[case('两', '专')] // simplified-only forms share a class
#[case('严', '专')]
#[case('一', '一')] // outside every class: unchanged
#[case('万', '万')]
#[case('且', '且')]
fn test_cjk_equivalence_classes(#[case] input: char, #[case] expected: char) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_unlisted_scripts_pass_through() {
    assert_eq!(normalize('\u{0430}'), '\u{0430}'); // cyrillic a
    assert_eq!(normalize('\u{0E01}'), '\u{0E01}'); // thai ko kai
    assert_eq!(normalize('\u{05D0}'), '\u{05D0}'); // hebrew alef
}

// --- Vietnamese recomposition ---

#[rstest]
#[case("", "")]
#[case("ABC", "ABC")]
#[case("012", "012")]
#[case("\u{00C0}", "\u{00C0}")] // already precomposed
#[case("\u{0041}\u{0300}", "\u{00C0}")] // A + grave
#[case("\u{0045}\u{0300}", "\u{00C8}")] // E + grave
#[case("\u{0041}\u{0301}", "\u{00C1}")] // A + acute
#[case("\u{00C2}\u{0301}", "\u{1EA4}")] // A-circumflex + acute
#[case("\u{0102}\u{0300}", "\u{1EB0}")] // A-breve + grave
#[case("\u{01A0}\u{0323}", "\u{1EE2}")] // O-horn + dot below
#[case("\u{0075}\u{0309}", "\u{1EE7}")] // u + hook above
#[case("\u{0079}\u{0303}", "\u{1EF9}")] // y + tilde
fn test_vietnamese_composition(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_vietnamese(input), expected);
}

#[test]
fn test_vietnamese_mark_after_non_base_is_left_alone() {
    // Combining grave after a consonant has no precomposed partner.
    assert_eq!(normalize_vietnamese("t\u{0300}"), "t\u{0300}");
}

#[test]
fn test_vietnamese_untouched_input_borrows() {
    let text = "xin chao the gioi";
    assert!(matches!(
        normalize_vietnamese(text),
        std::borrow::Cow::Borrowed(_)
    ));
}

#[test]
fn test_vietnamese_is_idempotent_on_mixed_text() {
    let input = "Tie\u{0301}ng Vie\u{0323}t ro\u{0300}i";
    let once = normalize_vietnamese(input).into_owned();
    let twice = normalize_vietnamese(&once).into_owned();
    assert_eq!(once, twice);
}

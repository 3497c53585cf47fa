//! Vietnamese combining-mark composition tables.
//!
//! Trained profiles store Vietnamese in precomposed form, so detection
//! input has to fold a base vowel followed by a combining mark into the
//! matching precomposed character before counting.

/// Base letters that take marks; column order shared by every row of
/// [`COMPOSED`].
const BASES: [char; 24] = [
    'A', 'E', 'I', 'O', 'U', 'Y', 'a', 'e', 'i', 'o', 'u', 'y',
    '\u{00C2}', '\u{00CA}', '\u{00D4}', '\u{00E2}', '\u{00EA}', '\u{00F4}',
    '\u{0102}', '\u{0103}', '\u{01A0}', '\u{01A1}', '\u{01AF}', '\u{01B0}',
];

/// Grave, acute, tilde, hook above, dot below; row order of [`COMPOSED`].
const MARKS: [char; 5] = [
    '\u{0300}', '\u{0301}', '\u{0303}', '\u{0309}', '\u{0323}',
];

/// Precomposed characters, indexed `[mark][base]`.
const COMPOSED: [[char; 24]; 5] = [
    [
        '\u{00C0}', '\u{00C8}', '\u{00CC}', '\u{00D2}', '\u{00D9}', '\u{1EF2}',
        '\u{00E0}', '\u{00E8}', '\u{00EC}', '\u{00F2}', '\u{00F9}', '\u{1EF3}',
        '\u{1EA6}', '\u{1EC0}', '\u{1ED2}', '\u{1EA7}', '\u{1EC1}', '\u{1ED3}',
        '\u{1EB0}', '\u{1EB1}', '\u{1EDC}', '\u{1EDD}', '\u{1EEA}', '\u{1EEB}',
    ],
    [
        '\u{00C1}', '\u{00C9}', '\u{00CD}', '\u{00D3}', '\u{00DA}', '\u{00DD}',
        '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00FD}',
        '\u{1EA4}', '\u{1EBE}', '\u{1ED0}', '\u{1EA5}', '\u{1EBF}', '\u{1ED1}',
        '\u{1EAE}', '\u{1EAF}', '\u{1EDA}', '\u{1EDB}', '\u{1EE8}', '\u{1EE9}',
    ],
    [
        '\u{00C3}', '\u{1EBC}', '\u{0128}', '\u{00D5}', '\u{0168}', '\u{1EF8}',
        '\u{00E3}', '\u{1EBD}', '\u{0129}', '\u{00F5}', '\u{0169}', '\u{1EF9}',
        '\u{1EAA}', '\u{1EC4}', '\u{1ED6}', '\u{1EAB}', '\u{1EC5}', '\u{1ED7}',
        '\u{1EB4}', '\u{1EB5}', '\u{1EE0}', '\u{1EE1}', '\u{1EEE}', '\u{1EEF}',
    ],
    [
        '\u{1EA2}', '\u{1EBA}', '\u{1EC8}', '\u{1ECE}', '\u{1EE6}', '\u{1EF6}',
        '\u{1EA3}', '\u{1EBB}', '\u{1EC9}', '\u{1ECF}', '\u{1EE7}', '\u{1EF7}',
        '\u{1EA8}', '\u{1EC2}', '\u{1ED4}', '\u{1EA9}', '\u{1EC3}', '\u{1ED5}',
        '\u{1EB2}', '\u{1EB3}', '\u{1EDE}', '\u{1EDF}', '\u{1EEC}', '\u{1EED}',
    ],
    [
        '\u{1EA0}', '\u{1EB8}', '\u{1ECA}', '\u{1ECC}', '\u{1EE4}', '\u{1EF4}',
        '\u{1EA1}', '\u{1EB9}', '\u{1ECB}', '\u{1ECD}', '\u{1EE5}', '\u{1EF5}',
        '\u{1EAC}', '\u{1EC6}', '\u{1ED8}', '\u{1EAD}', '\u{1EC7}', '\u{1ED9}',
        '\u{1EB6}', '\u{1EB7}', '\u{1EE2}', '\u{1EE3}', '\u{1EF0}', '\u{1EF1}',
    ],
];

/// The precomposed character for `base` followed by `mark`, if the pair
/// combines.
pub(super) fn compose(base: char, mark: char) -> Option<char> {
    let m = MARKS.iter().position(|&c| c == mark)?;
    let b = BASES.iter().position(|&c| c == base)?;
    Some(COMPOSED[m][b])
}

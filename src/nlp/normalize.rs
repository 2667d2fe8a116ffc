//! Character allowlist applied to raw review text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not compatibility jamo (consonants, vowels), a precomposed
/// Hangul syllable or an ASCII space.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^ㄱ-ㅎㅏ-ㅣ가-힣 ]").expect("valid regex"));

/// Strip every character outside the Hangul allowlist and the space character.
pub fn normalize(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}

/// Whether `c` survives [`normalize`].
pub fn is_allowed(c: char) -> bool {
    matches!(c, 'ㄱ'..='ㅎ' | 'ㅏ'..='ㅣ' | '가'..='힣' | ' ')
}

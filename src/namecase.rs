use super::utils::{capitalize, is_mixed_case};

// Capitalize pieces split by the separator, leaving mixed-case pieces
// alone so that "McDonald" or "DiCaprio" survive, while "SMITH" and
// "smith" both become "Smith".
fn capitalize_pieces(word: &str, separator: char) -> String {
    let mut result = String::with_capacity(word.len());

    for (i, piece) in word.split(separator).enumerate() {
        if i > 0 {
            result.push(separator);
        }
        if is_mixed_case(piece) {
            result.push_str(piece);
        } else {
            result.push_str(&capitalize(piece));
        }
    }

    result
}

/// Normalize the casing of a single name word.
///
/// Hyphenated words are capitalized per segment ("kimura-fay" becomes
/// "Kimura-Fay"), as are period-separated initials ("j.p." becomes
/// "J.P."). Words that already mix upper- and lowercase are passed
/// through untouched.
pub fn fix_case(word: &str) -> String {
    let hyphens_fixed = capitalize_pieces(word, '-');
    capitalize_pieces(&hyphens_fixed, '.')
}

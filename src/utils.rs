pub fn is_mixed_case(word: &str) -> bool {
    let mut has_lowercase = false;
    let mut has_uppercase = false;

    for c in word.chars() {
        if c.is_uppercase() {
            has_uppercase = true;
        };
        if c.is_lowercase() {
            has_lowercase = true;
        };
        if has_lowercase && has_uppercase {
            return true;
        };
    }

    false
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// Lookup key for the salutation and suffix tables, which match
// case-insensitively and ignore periods ("Ph.D." and "phd" hit
// the same entry).
pub fn table_key(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

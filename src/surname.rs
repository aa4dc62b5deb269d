use phf::phf_set;

// Function words that signal the start of a compound surname, like the
// "de la" in "Oscar de la Hoya". Matched case-insensitively; periods
// are significant here ("st" and "st." are separate entries).
static COMPOUND_MARKERS: phf::Set<&'static str> = phf_set! {
    "abu",
    "bin",
    "bon",
    "da",
    "dal",
    "de",
    "del",
    "della",
    "der",
    "di",
    "du",
    "ibn",
    "la",
    "le",
    "lo",
    "pietro",
    "san",
    "st",
    "st.",
    "ste",
    "ter",
    "van",
    "vanden",
    "vere",
    "von",
};

/// True if the word marks the start of a compound surname.
pub fn is_compound_marker(word: &str) -> bool {
    COMPOUND_MARKERS.contains(word.to_lowercase().as_str())
}

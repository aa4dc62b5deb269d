use crate::utils::table_key;
use phf::phf_map;

// Recognized English honorifics, keyed by their period-stripped
// lowercase spelling, mapped to the canonical display form.
static SALUTATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "mr" => "Mr.",
    "mister" => "Mr.",
    "master" => "Mr.",
    "mrs" => "Mrs.",
    "miss" => "Ms.",
    "ms" => "Ms.",
    "dr" => "Dr.",
    "rev" => "Rev.",
    "fr" => "Fr.",
};

/// Canonical display form for a salutation word, if it is one.
///
/// Matching is case-insensitive and ignores periods, so "mr", "MR.",
/// and "Mister" all map to "Mr.".
pub fn canonical_salutation(word: &str) -> Option<&'static str> {
    SALUTATIONS.get(table_key(word).as_str()).copied()
}

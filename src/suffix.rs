use crate::utils::table_key;
use phf::phf_map;

// Generational suffixes, academic and professional credentials, and
// military affiliations, keyed by period-stripped lowercase spelling.
// The values are the canonical display forms, which keep their stored
// casing in the output regardless of how the input was typed.
static SUFFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    // Generational
    "i" => "I",
    "ii" => "II",
    "iii" => "III",
    "iv" => "IV",
    "v" => "V",
    "jr" => "Jr.",
    "sr" => "Sr.",
    "junior" => "Junior",
    "senior" => "Senior",
    // Academic and professional
    "apr" => "APR",
    "bvm" => "BVM",
    "cfre" => "CFRE",
    "clu" => "CLU",
    "cme" => "CME",
    "cpa" => "CPA",
    "csc" => "CSC",
    "csj" => "CSJ",
    "dc" => "DC",
    "dd" => "DD",
    "dds" => "DDS",
    "dmd" => "DMD",
    "do" => "DO",
    "dvm" => "DVM",
    "edd" => "EdD",
    "esq" => "Esq",
    "jd" => "JD",
    "lld" => "LLD",
    "ma" => "MA",
    "md" => "MD",
    "od" => "OD",
    "osb" => "OSB",
    "pc" => "PC",
    "pe" => "PE",
    "phd" => "PhD",
    "ret" => "Ret",
    "rgs" => "RGS",
    "rn" => "RN",
    "rnc" => "RNC",
    "rph" => "RPh",
    "shcj" => "SHCJ",
    "sj" => "SJ",
    "snjm" => "SNJM",
    "ssmo" => "SSMO",
    // Military
    "usa" => "USA",
    "usaf" => "USAF",
    "usafr" => "USAFR",
    "usar" => "USAR",
    "uscg" => "USCG",
    "usmc" => "USMC",
    "usmcr" => "USMCR",
    "usn" => "USN",
    "usnr" => "USNR",
};

/// Canonical display form for a suffix word, if it is one.
///
/// Matching is case-insensitive and ignores periods, so "jr", "JR.",
/// and "Jr." all map to "Jr.", and "phd" maps to "PhD".
pub fn canonical_suffix(word: &str) -> Option<&'static str> {
    SUFFIXES.get(table_key(word).as_str()).copied()
}

//! A heuristic parser splitting free-form English personal names into
//! salutation, first name, middle name, last name, nickname, and suffix.
//!
//! The parser is a deterministic, rule-based classifier: each
//! whitespace-delimited word of the input is assigned to exactly one
//! name part using static lookup tables (salutations, suffixes,
//! compound-surname markers) and positional rules. It is best-effort
//! by design — malformed input degrades to partially-empty output, and
//! no input causes an error.
//!
//! # Examples
//!
//! ```
//! use nameparts::ParsedName;
//!
//! let name = ParsedName::parse("Dr. John Q. Public Jr.");
//! assert_eq!("Dr.", name.salutation);
//! assert_eq!("John", name.first_name);
//! assert_eq!("Q.", name.middle_name);
//! assert_eq!("Public", name.last_name);
//! assert_eq!("Jr.", name.suffix);
//! ```
//!
//! Compound surnames and parenthetical nicknames are recognized:
//!
//! ```
//! use nameparts::ParsedName;
//!
//! let name = ParsedName::parse("Juan Xavier de la Vega III (Doc Vega)");
//! assert_eq!("De La Vega", name.last_name);
//! assert_eq!("Doc Vega", name.nick_name);
//! assert_eq!("III", name.suffix);
//! ```

mod initials;
mod namecase;
mod nickname;
mod salutation;
mod suffix;
mod surname;
mod utils;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::namecase::fix_case;

/// The parts of a personal name. Every field defaults to the empty
/// string when the corresponding part is absent.
///
/// `salutation` and `suffix` hold canonical display forms ("Mr.",
/// "PhD") independent of the input spelling; the free-form fields are
/// case-normalized per word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase", default))]
pub struct ParsedName {
    pub salutation: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nick_name: String,
    pub suffix: String,
}

impl ParsedName {
    /// Parse a full name with the default rule set.
    ///
    /// Equivalent to `ParseOptions::default().parse(full_name)`.
    pub fn parse(full_name: &str) -> ParsedName {
        ParseOptions::default().parse(full_name)
    }
}

/// Parser configuration. The defaults are the canonical rule set;
/// each flag opts into a documented alternative behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// When the word in the first-name position is a single-letter
    /// initial, look ahead one word: if the next word is *not* also an
    /// initial, assume the person goes by their middle name, demote
    /// the leading initial to the middle-name field, and take the next
    /// word as the first name ("R. Jason Smith" parses with first name
    /// "Jason" and middle name "R.").
    ///
    /// Off by default: the first-name position is taken verbatim.
    pub initial_look_ahead: bool,
}

impl ParseOptions {
    pub fn new() -> ParseOptions {
        ParseOptions::default()
    }

    pub fn initial_look_ahead(mut self, enabled: bool) -> ParseOptions {
        self.initial_look_ahead = enabled;
        self
    }

    /// Parse a full name with this rule set.
    ///
    /// Never fails: empty or malformed input yields a best-effort,
    /// possibly partially-empty [`ParsedName`].
    pub fn parse(&self, full_name: &str) -> ParsedName {
        let mut parsed = ParsedName::default();

        let (stripped, nick_name) = nickname::extract_nickname(full_name.trim());
        parsed.nick_name = nick_name;

        let words: Vec<&str> = stripped.split_whitespace().collect();
        if words.is_empty() {
            return parsed;
        }

        // Trim the classification window: a leading salutation and a
        // trailing suffix are claimed before positional rules apply.
        let mut start = 0;
        let mut end = words.len();

        if let Some(canonical) = salutation::canonical_salutation(words[0]) {
            parsed.salutation = canonical.to_string();
            start = 1;
        }

        if end > start {
            if let Some(canonical) = suffix::canonical_suffix(words[end - 1]) {
                parsed.suffix = canonical.to_string();
                end -= 1;
            }
        }

        match end - start {
            0 => {}
            // A single remaining word is a bare first name
            1 => parsed.first_name = fix_case(words[start]),
            _ => self.classify_window(&words[start..end], &mut parsed),
        }

        parsed
    }

    // Assign first, middle, and last names within the window left
    // after salutation and suffix removal. The window has at least
    // two words.
    fn classify_window(&self, words: &[&str], parsed: &mut ParsedName) {
        let last = words.len() - 1;
        let mut middle: Vec<String> = Vec::new();

        if self.initial_look_ahead && initials::is_initial(words[0]) && !initials::is_initial(words[1])
        {
            middle.push(fix_case(words[0]));
        } else {
            parsed.first_name = fix_case(words[0]);
        }

        // Walk the interior words: a compound-surname marker ends the
        // middle-name scan and starts the surname. A marker sitting in
        // the first-name position itself ("Von Fabella") was already
        // claimed above and never breaks.
        let mut surname_from = last;
        for (i, word) in words.iter().enumerate().skip(1) {
            if i == last {
                break;
            }
            if surname::is_compound_marker(word) {
                surname_from = i;
                break;
            }
            middle.push(fix_case(word));
        }

        parsed.middle_name = middle.join(" ");
        parsed.last_name = words[surname_from..]
            .iter()
            .map(|w| fix_case(w))
            .collect::<Vec<_>>()
            .join(" ");
    }
}

/// Parse a full name with the default rule set.
pub fn parse(full_name: &str) -> ParsedName {
    ParsedName::parse(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_last() {
        let name = parse("John Smith");
        assert_eq!("John", name.first_name);
        assert_eq!("Smith", name.last_name);
        assert_eq!("", name.salutation);
        assert_eq!("", name.middle_name);
        assert_eq!("", name.nick_name);
        assert_eq!("", name.suffix);
    }

    #[test]
    fn single_word() {
        let name = parse("Madonna");
        assert_eq!("Madonna", name.first_name);
        assert_eq!("", name.middle_name);
        assert_eq!("", name.last_name);
    }

    #[test]
    fn empty_and_whitespace() {
        assert_eq!(ParsedName::default(), parse(""));
        assert_eq!(ParsedName::default(), parse("   "));
        assert_eq!(ParsedName::default(), parse("\t \n"));
    }

    #[test]
    fn full_pipeline() {
        let name = parse("Dr. John Q. Public Jr.");
        assert_eq!("Dr.", name.salutation);
        assert_eq!("John", name.first_name);
        assert_eq!("Q.", name.middle_name);
        assert_eq!("Public", name.last_name);
        assert_eq!("Jr.", name.suffix);
    }

    #[test]
    fn compound_surname() {
        let name = parse("Oscar de la Hoya");
        assert_eq!("Oscar", name.first_name);
        assert_eq!("", name.middle_name);
        assert_eq!("De La Hoya", name.last_name);
    }

    #[test]
    fn compound_marker_in_first_position_is_exempt() {
        let name = parse("Von Fabella");
        assert_eq!("Von", name.first_name);
        assert_eq!("Fabella", name.last_name);
        assert_eq!("", name.middle_name);
    }

    #[test]
    fn nickname_with_compound_surname_and_suffix() {
        let name = parse("Juan Xavier de la Vega III (Doc Vega)");
        assert_eq!("Juan", name.first_name);
        assert_eq!("Xavier", name.middle_name);
        assert_eq!("De La Vega", name.last_name);
        assert_eq!("Doc Vega", name.nick_name);
        assert_eq!("III", name.suffix);
    }

    #[test]
    fn multiple_middle_names() {
        let name = parse("George Herbert Walker Bush");
        assert_eq!("George", name.first_name);
        assert_eq!("Herbert Walker", name.middle_name);
        assert_eq!("Bush", name.last_name);
    }

    #[test]
    fn case_normalization() {
        let name = parse("MR. JASON SMITH");
        assert_eq!("Mr.", name.salutation);
        assert_eq!("Jason", name.first_name);
        assert_eq!("Smith", name.last_name);

        let name = parse("ronald mcdonald");
        assert_eq!("Ronald", name.first_name);
        assert_eq!("Mcdonald", name.last_name);

        let name = parse("Ronald McDonald");
        assert_eq!("McDonald", name.last_name);
    }

    #[test]
    fn suffix_casing_from_table() {
        let name = parse("John Smith phd");
        assert_eq!("PhD", name.suffix);

        let name = parse("John Paul Jones USN");
        assert_eq!("John", name.first_name);
        assert_eq!("Paul", name.middle_name);
        assert_eq!("Jones", name.last_name);
        assert_eq!("USN", name.suffix);
    }

    #[test]
    fn lone_salutation_and_lone_suffix() {
        let name = parse("Dr.");
        assert_eq!("Dr.", name.salutation);
        assert_eq!("", name.first_name);
        assert_eq!("", name.last_name);

        let name = parse("Jr");
        assert_eq!("Jr.", name.suffix);
        assert_eq!("", name.first_name);
    }

    #[test]
    fn suffix_next_to_bare_surname() {
        let name = parse("Smith Jr.");
        assert_eq!("Smith", name.first_name);
        assert_eq!("", name.last_name);
        assert_eq!("Jr.", name.suffix);
    }

    #[test]
    fn default_rule_set_takes_leading_initial_verbatim() {
        let name = parse("R. Jason Smith");
        assert_eq!("R.", name.first_name);
        assert_eq!("Jason", name.middle_name);
        assert_eq!("Smith", name.last_name);
    }

    #[test]
    fn look_ahead_goes_by_middle_name() {
        let options = ParseOptions::new().initial_look_ahead(true);

        let name = options.parse("R. Jason Smith");
        assert_eq!("Jason", name.first_name);
        assert_eq!("R.", name.middle_name);
        assert_eq!("Smith", name.last_name);

        // Two leading initials: the first one stays the first name
        let name = options.parse("R. J. Smith");
        assert_eq!("R.", name.first_name);
        assert_eq!("J.", name.middle_name);
        assert_eq!("Smith", name.last_name);

        // Initial directly against the surname
        let name = options.parse("R. Smith");
        assert_eq!("", name.first_name);
        assert_eq!("R.", name.middle_name);
        assert_eq!("Smith", name.last_name);
    }

    #[test]
    fn multiple_nicknames() {
        let name = parse("James (Jim) (Jimmy) Stewart");
        assert_eq!("James", name.first_name);
        assert_eq!("Stewart", name.last_name);
        assert_eq!("Jim Jimmy", name.nick_name);
    }

    #[test]
    fn unmatched_paren_degrades_to_nickname() {
        let name = parse("Henry Ford (Hank");
        assert_eq!("Henry", name.first_name);
        assert_eq!("Ford", name.last_name);
        assert_eq!("Hank", name.nick_name);
    }

    #[test]
    fn nickname_only() {
        let name = parse("(Ghost)");
        assert_eq!("Ghost", name.nick_name);
        assert_eq!("", name.first_name);
        assert_eq!("", name.last_name);
    }

    #[test]
    fn interior_whitespace() {
        let name = parse("  John   Smith  ");
        assert_eq!("John", name.first_name);
        assert_eq!("Smith", name.last_name);
    }
}

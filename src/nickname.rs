use std::borrow::Cow;

// Appends with a space separator, so multiple parenthetical groups
// accumulate as "Jim Jimmy" rather than "JimJimmy".
fn push_nickname(nickname: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !nickname.is_empty() {
        nickname.push(' ');
    }
    nickname.push_str(text);
}

/// Remove every parenthetical group from the input, collecting the
/// interior text as the nickname.
///
/// Returns the input with all `(...)` groups (parentheses included)
/// removed, plus the space-joined nickname text. An opening paren with
/// no matching close consumes the rest of the string as nickname
/// content rather than failing.
///
/// A single forward pass; input without parentheses is returned
/// borrowed, unmodified.
pub fn extract_nickname(input: &str) -> (Cow<'_, str>, String) {
    if !input.contains('(') {
        return (Cow::Borrowed(input), String::new());
    }

    let mut stripped = String::with_capacity(input.len());
    let mut nickname = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('(') {
        stripped.push_str(&rest[..open]);
        let interior = &rest[open + 1..];

        match interior.find(')') {
            Some(close) => {
                push_nickname(&mut nickname, interior[..close].trim());
                rest = &interior[close + 1..];
            }
            None => {
                // Unmatched open paren: everything after it is nickname
                push_nickname(&mut nickname, interior.trim());
                rest = "";
            }
        }
    }
    stripped.push_str(rest);

    (Cow::Owned(stripped), nickname)
}

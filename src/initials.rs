// A single letter, possibly followed by a period ("J" or "J.").
pub fn is_initial(word: &str) -> bool {
    let mut significant = word.chars().filter(|c| *c != '.');
    match significant.next() {
        Some(_) => significant.next().is_none(),
        None => false,
    }
}

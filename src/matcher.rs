//! Nearest-word searches over a vocabulary snapshot.
//!
//! Both searches are stateless and operate on whatever word slice the
//! caller hands them. On an empty vocabulary there is no closest word and
//! both return `None`; that is the contract, not an error.

use tracing::debug;

/// Sum of the Unicode scalar values of a word's characters.
pub fn word_value(word: &str) -> u32 {
    word.chars().map(|c| c as u32).sum()
}

/// Three-way word comparison whose magnitude serves as the lexical
/// distance.
///
/// Characters are compared pairwise by scalar value; the first difference
/// decides sign and magnitude. When one word is a prefix of the other the
/// result is the difference of their character counts, so the shorter
/// word orders below the longer one. Equal words compare to 0.
///
/// This is deliberately the raw comparison magnitude, not an edit
/// distance; substituting one would change which word ranks closest.
fn lexical_compare(a: &str, b: &str) -> i64 {
    let mut rest_a = a.chars();
    let mut rest_b = b.chars();
    loop {
        match (rest_a.next(), rest_b.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (Some(x), Some(y)) => return x as i64 - y as i64,
            (None, None) => return 0,
            _ => return a.chars().count() as i64 - b.chars().count() as i64,
        }
    }
}

/// Closest word by character-code value.
///
/// Scans the vocabulary in its given order tracking the minimum absolute
/// value difference; on a tie the earlier word wins.
pub fn find_closest_by_value<'a>(query: &str, words: &'a [String]) -> Option<&'a str> {
    let target = i64::from(word_value(query));
    let mut best: Option<(&'a str, i64)> = None;
    for word in words {
        let diff = (i64::from(word_value(word)) - target).abs();
        if best.map_or(true, |(_, min)| diff < min) {
            best = Some((word, diff));
        }
    }
    let found = best.map(|(word, _)| word);
    debug!(query, ?found, "value match");
    found
}

/// Closest word by lexical order.
///
/// Sorts a copy of the vocabulary ascending by code point, then scans the
/// sorted copy tracking the minimum `|lexical_compare(word, query)|`; on a
/// tie the word that sorts earlier wins. The sort changes which word wins
/// a tie relative to a scan in insertion order, so it is part of the
/// contract rather than an implementation detail.
pub fn find_closest_by_lexical<'a>(query: &str, words: &'a [String]) -> Option<&'a str> {
    let mut sorted: Vec<&'a String> = words.iter().collect();
    sorted.sort_unstable();

    let mut best: Option<(&'a str, i64)> = None;
    for word in sorted {
        let dist = lexical_compare(word, query).abs();
        if best.map_or(true, |(_, min)| dist < min) {
            best = Some((word, dist));
        }
    }
    let found = best.map(|(word, _)| word);
    debug!(query, ?found, "lexical match");
    found
}

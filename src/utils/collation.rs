//! Reproducible name collation.
//!
//! Names are compared level by level: first by primary weights (letter
//! identity, case-insensitive), then by case (lowercase first), then by raw
//! code points so that the ordering is total. Primary classes sort as
//! whitespace, punctuation, digits, Latin, Cyrillic, everything else.

use std::cmp::Ordering;

/// Ukrainian alphabet with the remaining modern Cyrillic letters slotted in
/// where the root collation puts them. `ё` shares the weight of `е`.
const CYRILLIC_ORDER: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщъыьэюя";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Latin,
    Cyrillic,
    Other,
}

type PrimaryWeight = (CharClass, u32);

fn primary_weight(c: char) -> PrimaryWeight {
    let lower = c.to_lowercase().next().unwrap_or(c);

    if c.is_whitespace() {
        return (CharClass::Whitespace, 0);
    }
    if lower.is_ascii_digit() {
        return (CharClass::Digit, u32::from(lower) - u32::from('0'));
    }
    if lower.is_ascii_lowercase() {
        return (CharClass::Latin, u32::from(lower) - u32::from('a'));
    }
    let cyrillic = if lower == 'ё' { 'е' } else { lower };
    if let Some(position) = CYRILLIC_ORDER.chars().position(|letter| letter == cyrillic) {
        return (CharClass::Cyrillic, position as u32);
    }
    if !c.is_alphanumeric() {
        return (CharClass::Punctuation, u32::from(c));
    }
    (CharClass::Other, u32::from(lower))
}

fn case_weight(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Compares two strings under the collation described in the module docs.
pub fn compare(left: &str, right: &str) -> Ordering {
    left.chars()
        .map(primary_weight)
        .cmp(right.chars().map(primary_weight))
        .then_with(|| left.chars().map(case_weight).cmp(right.chars().map(case_weight)))
        .then_with(|| left.cmp(right))
}

//! Formatting utilities for terminal output

/// Circled digit for a word's letter count, e.g. `④` for 4
///
/// Counts outside 1..=20 fall back to a parenthesized number.
#[must_use]
pub fn count_badge(count: usize) -> String {
    match count {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// A used word annotated with its character count
#[must_use]
pub fn word_with_count(word: &str) -> String {
    format!("{} {word}", count_badge(word.chars().count()))
}

/// Spread a root word's letters out for a title, e.g. `S I L K W O R M`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_badge_circled_digits() {
        assert_eq!(count_badge(1), "①");
        assert_eq!(count_badge(4), "④");
        assert_eq!(count_badge(8), "⑧");
        assert_eq!(count_badge(20), "⑳");
    }

    #[test]
    fn count_badge_out_of_range() {
        assert_eq!(count_badge(0), "(0)");
        assert_eq!(count_badge(21), "(21)");
    }

    #[test]
    fn word_with_count_uses_char_count() {
        assert_eq!(word_with_count("silk"), "④ silk");
        assert_eq!(word_with_count("café"), "④ café");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("silkworm"), "S I L K W O R M");
        assert_eq!(spaced_letters(""), "");
    }
}

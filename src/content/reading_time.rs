//! Reading time estimation

use super::post::RichTextBlock;

/// Average reading speed
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in minutes
///
/// Each section is rounded up on its own and the results are summed, so ten
/// one-word sections read as ten minutes.
pub fn estimate(sections: &[RichTextBlock]) -> u32 {
    sections
        .iter()
        .map(|section| count_words(&section.body_text()).div_ceil(WORDS_PER_MINUTE) as u32)
        .sum()
}

/// Count whitespace separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

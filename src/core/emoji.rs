//! Emoji frequencies.
//!
//! Every emoji character is counted on its own: pictographs, skin-tone
//! modifiers and the regional indicators that pair up into flags. Variation
//! selectors and zero-width joiners are skipped, so 👍🏽 counts 👍 and 🏽, and
//! 🇮🇳 counts 🇮 and 🇳.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::filter::SenderFilter;
use crate::table::ChatTable;

// `\p{Emoji}` also covers ASCII `#`, `*` and digits, which are left out here.
static EMOJI_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\p{Emoji_Presentation}|\p{Extended_Pictographic}|\p{Emoji_Modifier}|\p{Regional_Indicator}",
    )
    .expect("emoji pattern compiles")
});

/// One distinct emoji and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Emojis found in one message, in order of appearance.
pub fn extract_emojis(message: &str) -> impl Iterator<Item = &str> {
    EMOJI_CHAR.find_iter(message).map(|m| m.as_str())
}

/// Frequency of every distinct emoji in the selection.
///
/// Sorted by count, most frequent first; ties keep first-seen order.
///
/// # Example
///
/// ```
/// use chatwrap::ChatTable;
/// use chatwrap::core::emoji::emoji_analysis;
/// use chatwrap::core::filter::SenderFilter;
/// use chatwrap::parser::DeviceFormat;
///
/// # fn main() -> chatwrap::Result<()> {
/// let table = ChatTable::from_export(
///     "1/2/24, 8:00 AM - Alice: 😂😂 great\n\
///      1/2/24, 8:01 AM - Bob: ❤ 😂",
///     DeviceFormat::Android,
/// )?;
///
/// let emojis = emoji_analysis(&table, &SenderFilter::WholeGroup);
/// assert_eq!(emojis[0].emoji, "😂");
/// assert_eq!(emojis[0].count, 3);
/// assert_eq!(emojis[1].emoji, "❤");
/// # Ok(())
/// # }
/// ```
pub fn emoji_analysis(table: &ChatTable, filter: &SenderFilter) -> Vec<EmojiCount> {
    let mut counts: Vec<EmojiCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in table.select(filter) {
        for emoji in extract_emojis(&record.message) {
            match index.get(emoji) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(emoji, counts.len());
                    counts.push(EmojiCount {
                        emoji: emoji.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

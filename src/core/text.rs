//! Word frequencies and word-cloud data.
//!
//! Stopwords are an explicit [`StopWords`] value, loaded once by the caller
//! and passed to [`generate_wc`]. Rasterizing the cloud is left to the
//! presentation layer; [`WordCloud`] carries the weighted words it needs.
//!
//! # Example
//!
//! ```
//! use chatwrap::ChatTable;
//! use chatwrap::core::filter::SenderFilter;
//! use chatwrap::core::text::{StopWords, generate_wc};
//! use chatwrap::parser::DeviceFormat;
//!
//! # fn main() -> chatwrap::Result<()> {
//! let table = ChatTable::from_export(
//!     "1/2/24, 8:00 AM - Alice: Hi there\n\
//!      1/2/24, 8:01 AM - Bob: there! there?",
//!     DeviceFormat::Android,
//! )?;
//!
//! let words = generate_wc(&table, &SenderFilter::WholeGroup, &StopWords::empty());
//! assert_eq!(words.top_words[0], ("there".to_string(), 3));
//! assert_eq!(words.top_words[1], ("hi".to_string(), 1));
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::filter::SenderFilter;
use crate::error::Result;
use crate::table::ChatTable;

/// Characters removed from tokens that survive stopword filtering.
pub const PUNCTUATION: &[char] = &[',', '.', '?', '!'];

/// Number of entries in [`WordCloudData::top_words`].
pub const TOP_WORDS: usize = 20;

/// Most words a [`WordCloud`] carries.
pub const CLOUD_MAX_WORDS: usize = 200;

/// Set of tokens excluded from word frequencies.
///
/// Lookups are made with the lower-cased token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads a stopword file with one token per line.
    ///
    /// Blank lines are ignored and tokens are lower-cased. A missing file is
    /// not an error: a warning is logged and the set is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ChatwrapError::Io`](crate::ChatwrapError::Io) for read
    /// failures other than a missing file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let stopwords = Self::parse(&content);
                tracing::debug!(path = %path.display(), count = stopwords.len(), "loaded stopwords");
                Ok(stopwords)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "stopword file not found, continuing without stopwords"
                );
                Ok(Self::empty())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses stopword file content.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Returns `true` if the token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// A word and its weight relative to the most frequent word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`.
    pub weight: f64,
}

/// Renderable word-cloud input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordCloud {
    /// Up to [`CLOUD_MAX_WORDS`] words, heaviest first.
    pub words: Vec<WeightedWord>,
}

impl WordCloud {
    fn from_ranked(ranked: &[(String, usize)]) -> Self {
        let Some(&(_, max)) = ranked.first() else {
            return Self::default();
        };
        Self {
            words: ranked
                .iter()
                .take(CLOUD_MAX_WORDS)
                .map(|(word, count)| WeightedWord {
                    word: word.clone(),
                    count: *count,
                    weight: *count as f64 / max as f64,
                })
                .collect(),
        }
    }

    /// Returns `true` if there are no words to draw.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Result of [`generate_wc`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordCloudData {
    /// The [`TOP_WORDS`] most frequent tokens with counts.
    pub top_words: Vec<(String, usize)>,
    pub cloud: WordCloud,
}

/// Tokens of one message after case folding, stopword removal and
/// punctuation stripping.
///
/// Stopwords are matched against the lower-cased token as written, before
/// any of [`PUNCTUATION`] (`,` `.` `?` `!`) is removed, so `"you?"` survives a
/// `"you"` stopword and comes out as `"you"`.
pub fn tokenize(message: &str, stopwords: &StopWords) -> Vec<String> {
    message
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !stopwords.contains(token))
        .map(|token| token.replace(PUNCTUATION, ""))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Word frequencies for the selection.
///
/// Tokens are ranked by count; ties keep the order in which tokens were
/// first seen.
pub fn generate_wc(table: &ChatTable, filter: &SenderFilter, stopwords: &StopWords) -> WordCloudData {
    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in table.select(filter) {
        for token in tokenize(&record.message, stopwords) {
            match index.get(&token) {
                Some(&i) => ranked[i].1 += 1,
                None => {
                    index.insert(token.clone(), ranked.len());
                    ranked.push((token, 1));
                }
            }
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    WordCloudData {
        cloud: WordCloud::from_ranked(&ranked),
        top_words: ranked.into_iter().take(TOP_WORDS).collect(),
    }
}

//! Every aggregation for one selection, bundled for output.

use serde::{Deserialize, Serialize};

use crate::core::emoji::{EmojiCount, emoji_analysis};
use crate::core::filter::SenderFilter;
use crate::core::stats::{
    ActiveUsers, ActivityCount, ChatStats, DailyCount, Heatmap, MonthlyCount, activity_heatmap,
    daily_timeline, fetch_stats, month_activity_map, monthly_timeline, most_active_user,
    week_activity_map,
};
use crate::core::text::{StopWords, WordCloud, generate_wc};
use crate::table::ChatTable;

/// Analysis results for one sender selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Sender name or `"Whole Group"`.
    pub selection: String,
    pub stats: ChatStats,
    /// Only computed for the whole group.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub active_users: Option<ActiveUsers>,
    pub top_words: Vec<(String, usize)>,
    pub word_cloud: WordCloud,
    pub emojis: Vec<EmojiCount>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
}

impl AnalysisReport {
    /// Runs every aggregation over `table` for `filter`.
    pub fn build(table: &ChatTable, filter: &SenderFilter, stopwords: &StopWords) -> Self {
        let words = generate_wc(table, filter, stopwords);

        let report = Self {
            selection: filter.label().to_string(),
            stats: fetch_stats(table, filter),
            active_users: filter
                .is_whole_group()
                .then(|| most_active_user(table, filter)),
            top_words: words.top_words,
            word_cloud: words.cloud,
            emojis: emoji_analysis(table, filter),
            monthly_timeline: monthly_timeline(table, filter),
            daily_timeline: daily_timeline(table, filter),
            week_activity: week_activity_map(table, filter),
            month_activity: month_activity_map(table, filter),
            heatmap: activity_heatmap(table, filter),
        };

        tracing::debug!(
            selection = %report.selection,
            messages = report.stats.total_messages,
            "built analysis report"
        );

        report
    }

    /// Returns `true` if the selection contained no messages.
    pub fn is_empty(&self) -> bool {
        self.stats.total_messages == 0
    }
}

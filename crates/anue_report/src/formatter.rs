use chrono::{Local, LocalResult, TimeZone};

use anue_core::{FeedItem, FeedPayload};

pub const ARTICLE_BASE_URL: &str = "https://news.cnyes.com/news/id/";

/// Fallback strings for entries without a summary or keywords, in the feed's
/// own locale.
pub const NO_SUMMARY: &str = "無摘要";
pub const NO_KEYWORDS: &str = "無關鍵字";

/// One display row derived from a [`FeedItem`]. The cells carry pre-composed
/// markup (links and line breaks) and are rendered unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    pub position: usize,
    pub title_cell: String,
    pub summary_cell: String,
    pub keyword_cell: String,
}

/// Formats the window of `payload.data` starting at `start`, at most `count`
/// entries long. A window past the end of the feed yields an empty sequence,
/// a partially covered one a shorter sequence.
pub fn format_window(payload: &FeedPayload, start: usize, count: usize) -> Vec<FormattedRow> {
    payload
        .data
        .iter()
        .skip(start)
        .take(count)
        .enumerate()
        .map(|(offset, item)| format_row(item, start + offset + 1))
        .collect()
}

fn format_row(item: &FeedItem, position: usize) -> FormattedRow {
    let url = format!("{}{}", ARTICLE_BASE_URL, item.news_id);
    let published = local_timestamp(item.publish_at);
    let summary = item.summary.as_deref().unwrap_or(NO_SUMMARY);
    let keywords = if item.keyword.is_empty() {
        NO_KEYWORDS.to_string()
    } else {
        item.keyword.join(", ")
    };
    let category = format!("{} (id:{})", item.category_name, item.category_id);

    FormattedRow {
        position,
        title_cell: format!(
            "<a href=\"{}\" target=\"_blank\">{}</a> <br> {}",
            url, item.title, published
        ),
        summary_cell: format!("{} <br> {} <br>", summary, url),
        keyword_cell: format!("{} <br> {}", keywords, category),
    }
}

fn local_timestamp(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        // Epochs outside chrono's range; keep the raw value visible.
        LocalResult::None => epoch.to_string(),
    }
}

use crate::models::{EnrichedVideo, VideoStatistics};

pub const TITLE_MAX_CHARS: usize = 45;
pub const TEXT_MAX_CHARS: usize = 120;

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

// Formats each x1000 step, absent counts show as 0
pub fn format_count(count: Option<u64>) -> String {
    let num_str = count.unwrap_or(0).to_string();
    let mut result = String::with_capacity(num_str.len() + num_str.len() / 3);
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}

/// Statistics as shown on a result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsDisplay {
    pub likes: String,
    pub views: String,
    pub comments: String,
}

impl From<&VideoStatistics> for StatisticsDisplay {
    fn from(statistics: &VideoStatistics) -> Self {
        Self {
            likes: format_count(statistics.like_count),
            views: format_count(statistics.view_count),
            comments: format_count(statistics.comment_count),
        }
    }
}

/// Card title, cut to [`TITLE_MAX_CHARS`].
pub fn card_title(video: &EnrichedVideo) -> &str {
    truncate_chars(&video.summary.title, TITLE_MAX_CHARS)
}

/// Card body text: the title again, with the longer [`TEXT_MAX_CHARS`] cut.
pub fn card_text(video: &EnrichedVideo) -> &str {
    truncate_chars(&video.summary.title, TEXT_MAX_CHARS)
}

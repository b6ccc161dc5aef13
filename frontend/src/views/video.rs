use crate::models::VideoDetails;
use crate::thumbnails::thumbnail_or_default;
use crate::utils::{format_count, format_duration, format_iso8601_date, truncate_chars};
use crate::views::{first_text, text_or, thumbnail_image};
use yew::prelude::*;

const DESCRIPTION_LIMIT: usize = 500;
const MAX_TAGS: usize = 10;
const PREFERRED_WIDTH: u32 = 720;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoView {
    pub title: String,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub views: u64,
    pub likes: u64,
    pub channel: String,
    pub uploaded: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl VideoView {
    pub fn from_payload(video: &VideoDetails) -> Self {
        let duration = first_text(&[&video.duration])
            .map(str::to_string)
            .or_else(|| video.duration_seconds.and_then(format_duration));

        Self {
            title: text_or(&[&video.title], "Unknown Title"),
            thumbnail: thumbnail_or_default(
                &video.thumbnail,
                PREFERRED_WIDTH,
                video.video_id.as_deref(),
                "hqdefault",
            ),
            duration,
            views: video.view_count.unwrap_or(0),
            likes: video.like_count.unwrap_or(0),
            channel: text_or(&[&video.channel_name], "N/A"),
            uploaded: first_text(&[&video.upload_date, &video.published_time_text])
                .map(format_iso8601_date)
                .unwrap_or_else(|| "N/A".to_string()),
            description: first_text(&[&video.description])
                .map(|text| truncate_chars(text, DESCRIPTION_LIMIT)),
            tags: video.tags.iter().take(MAX_TAGS).cloned().collect(),
        }
    }

    pub fn render(&self) -> Html {
        html! {
            <div class="video-card">
                <div class="video-thumbnail-container">
                    { thumbnail_image(self.thumbnail.as_deref(), "Video Thumbnail", Some("video-thumbnail")) }
                    if let Some(duration) = &self.duration {
                        <span class="video-duration-badge">{ duration }</span>
                    }
                </div>
                <div class="video-content">
                    <div class="video-title">{ &self.title }</div>
                    <div class="video-stats-grid">
                        { stat_card("Views", format_count(self.views), "stat-value") }
                        { stat_card("Likes", format_count(self.likes), "stat-value") }
                        { stat_card("Channel", self.channel.clone(), "stat-value stat-value-small") }
                        { stat_card("Upload", self.uploaded.clone(), "stat-value stat-value-small") }
                    </div>
                    if let Some(description) = &self.description {
                        <div class="video-description">{ description }</div>
                    }
                    if !self.tags.is_empty() {
                        <div class="video-tags">
                            { for self.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                        </div>
                    }
                </div>
            </div>
        }
    }
}

pub(crate) fn stat_card(label: &'static str, value: String, value_class: &'static str) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-label">{ label }</div>
            <div class={value_class}>{ value }</div>
        </div>
    }
}

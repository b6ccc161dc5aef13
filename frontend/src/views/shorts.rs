use crate::models::{ShortBundle, ShortDetails};
use crate::thumbnails::thumbnail_or_default;
use crate::utils::{format_count, format_iso8601_date};
use crate::views::comments::{comment_views, CommentView};
use crate::views::video::stat_card;
use crate::views::{action_button, first_text, text_or, thumbnail_image, ACTION_VIDEO_INFO};
use yew::prelude::*;

const CARD_THUMBNAIL_WIDTH: u32 = 320;

#[derive(Debug, Clone, PartialEq)]
pub struct ShortView {
    pub video_id: Option<String>,
    pub title: String,
    pub channel_name: String,
    pub channel_handle: Option<String>,
    pub thumbnail: Option<String>,
    pub likes: u64,
    pub views: u64,
    pub comment_count: u64,
    pub published: Option<String>,
    pub sound: Option<String>,
}

impl From<&ShortDetails> for ShortView {
    fn from(short: &ShortDetails) -> Self {
        Self {
            video_id: first_text(&[&short.video_id]).map(str::to_string),
            title: text_or(&[&short.title], "Unknown Title"),
            channel_name: text_or(&[&short.channel_name], "Unknown Channel"),
            channel_handle: first_text(&[&short.channel_handle]).map(str::to_string),
            thumbnail: thumbnail_or_default(
                &short.thumbnail,
                CARD_THUMBNAIL_WIDTH,
                short.video_id.as_deref(),
                "mqdefault",
            ),
            likes: short.like_count.unwrap_or(0),
            views: short.view_count.unwrap_or(0),
            comment_count: short.comment_count.unwrap_or(0),
            published: first_text(&[&short.publish_date]).map(format_iso8601_date),
            sound: first_text(&[&short.sound_metadata]).map(str::to_string),
        }
    }
}

impl ShortView {
    pub fn render(&self) -> Html {
        html! {
            <div class="short-card">
                <div class="short-thumbnail-container">
                    { thumbnail_image(self.thumbnail.as_deref(), "Short Thumbnail", Some("short-thumbnail")) }
                    <span class="video-duration-badge">{ "SHORT" }</span>
                </div>
                <div class="short-content">
                    <div class="video-title">{ &self.title }</div>
                    <div class="short-channel">
                        <span class="short-channel-name">{ &self.channel_name }</span>
                        if let Some(handle) = &self.channel_handle {
                            <span class="short-channel-handle">{ format!("@{}", handle.trim_start_matches('@')) }</span>
                        }
                    </div>
                    <div class="video-stats-grid">
                        { stat_card("Views", format_count(self.views), "stat-value") }
                        { stat_card("Likes", format_count(self.likes), "stat-value") }
                        { stat_card("Comments", format_count(self.comment_count), "stat-value") }
                        { stat_card(
                            "Upload",
                            self.published.clone().unwrap_or_else(|| "N/A".to_string()),
                            "stat-value stat-value-small",
                        ) }
                    </div>
                    if let Some(sound) = &self.sound {
                        <div class="short-sound">{ format!("♫ {sound}") }</div>
                    }
                    if let Some(video_id) = &self.video_id {
                        <div class="video-item-actions">
                            { action_button("video-item-btn info-btn", ACTION_VIDEO_INFO, video_id, "🎬 Info") }
                        </div>
                    }
                </div>
            </div>
        }
    }
}

/// A short with every comment the backend returned for it. How many of the
/// comments are on screen is tracked by the shorts panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortsView {
    pub short: ShortView,
    pub comments: Vec<CommentView>,
}

impl ShortsView {
    pub fn from_payload(bundle: &ShortBundle) -> Self {
        Self {
            short: ShortView::from(&bundle.short),
            comments: comment_views(&bundle.comments),
        }
    }

    pub fn render_comments_title(&self) -> Html {
        html! {
            <h3 class="comments-title">{ format!("Comments ({})", self.comments.len()) }</h3>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_to_string;
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> ShortBundle {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn short_card_shows_stats_and_handle() {
        let view = ShortsView::from_payload(&bundle(json!({
            "short": {
                "video_id": "s1",
                "title": "Tiny <clip>",
                "channel_name": "@maker",
                "channel_handle": "maker",
                "like_count": 1500,
                "view_count": 2_000_000,
                "comment_count": 45,
                "sound_metadata": "Original sound"
            },
            "comments": []
        })));
        let html = render_to_string(&view.short.render());
        assert!(html.contains("Tiny &lt;clip&gt;"));
        assert!(html.contains("<span class=\"short-channel-handle\">@maker</span>"));
        assert!(html.contains(">1.5K<"));
        assert!(html.contains(">2.0M<"));
        assert!(html.contains(">45<"));
        assert!(html.contains("♫ Original sound"));
        assert!(html.contains("src=\"https://i.ytimg.com/vi/s1/mqdefault.jpg\""));
    }

    #[test]
    fn nested_and_flat_comments_are_both_collected() {
        let view = ShortsView::from_payload(&bundle(json!({
            "short": { "title": "x" },
            "comments": [
                { "author": { "display_name": "@a" }, "content": "one" },
                { "author": "@b", "text": "two" }
            ]
        })));
        assert_eq!(view.comments.len(), 2);
        assert_eq!(view.comments[0].text, "one");
        assert_eq!(view.comments[1].author, "@b");
        assert_eq!(
            render_to_string(&view.render_comments_title()),
            "<h3 class=\"comments-title\">Comments (2)</h3>"
        );
    }

    #[test]
    fn missing_short_uses_defaults() {
        let view = ShortsView::from_payload(&ShortBundle::default());
        assert_eq!(view.short.title, "Unknown Title");
        let html = render_to_string(&view.short.render());
        assert!(html.contains("<div class=\"no-thumbnail\"></div>"));
        assert!(!html.contains("data-action"));
    }
}

use crate::models::{ChannelPlaylist, ChannelProfile, ChannelReel, ChannelVideo};
use crate::thumbnails::{best_thumbnail, thumbnail_or_default};
use crate::utils::{format_count, parse_count_text, truncate_chars};
use crate::views::{
    action_button, external_link, first_text, playlist_url, text_or, thumbnail_box,
    ACTION_VIDEO_COMMENTS, ACTION_VIDEO_INFO,
};
use std::collections::HashSet;
use yew::prelude::*;

const DESCRIPTION_LIMIT: usize = 300;
const CARD_THUMBNAIL_WIDTH: u32 = 320;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoCard {
    pub video_id: Option<String>,
    pub title: String,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub views: u64,
    pub published: String,
}

impl From<&ChannelVideo> for VideoCard {
    fn from(video: &ChannelVideo) -> Self {
        // A view label wins over numeric fields, even when it holds no digits
        let views = match &video.view_count_text {
            Some(label) => parse_count_text(label),
            None => video.view_count.or(video.views).unwrap_or(0),
        };
        Self {
            video_id: first_text(&[&video.video_id]).map(str::to_string),
            title: text_or(&[&video.title], "Unknown Title"),
            thumbnail: thumbnail_or_default(
                &video.thumbnails,
                CARD_THUMBNAIL_WIDTH,
                video.video_id.as_deref(),
                "mqdefault",
            ),
            duration: first_text(&[&video.length_text, &video.duration]).map(str::to_string),
            views,
            published: text_or(&[&video.published_time_text, &video.upload_date], ""),
        }
    }
}

impl VideoCard {
    pub fn render(&self) -> Html {
        html! {
            <div class="video-item">
                { thumbnail_box("video-item-thumbnail", self.thumbnail.as_deref(), "video-item-duration", self.duration.as_deref()) }
                <div class="video-item-content">
                    <div class="video-item-title">{ &self.title }</div>
                    <div class="video-item-meta">
                        <span class="video-item-views">{ format!("{} views", format_count(self.views)) }</span>
                        <span class="video-item-published">{ &self.published }</span>
                    </div>
                    if let Some(video_id) = &self.video_id {
                        <div class="video-item-actions">
                            { action_button("video-item-btn info-btn", ACTION_VIDEO_INFO, video_id, "🎬 Info") }
                            { action_button("video-item-btn comments-btn", ACTION_VIDEO_COMMENTS, video_id, "💬 Comments") }
                        </div>
                    }
                </div>
            </div>
        }
    }
}

/// Drops repeated identifiers, keeping the first occurrence. Entries without
/// an identifier cannot collide and are kept.
pub fn dedup_videos(videos: &[ChannelVideo]) -> Vec<VideoCard> {
    let mut seen = HashSet::new();
    videos
        .iter()
        .map(VideoCard::from)
        .filter(|card| match &card.video_id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReelCard {
    pub video_id: Option<String>,
    pub title: String,
    pub thumbnail: Option<String>,
    pub views_label: String,
}

impl From<&ChannelReel> for ReelCard {
    fn from(reel: &ChannelReel) -> Self {
        Self {
            video_id: first_text(&[&reel.video_id]).map(str::to_string),
            title: text_or(&[&reel.title], "Unknown Title"),
            thumbnail: thumbnail_or_default(
                &reel.thumbnails,
                CARD_THUMBNAIL_WIDTH,
                reel.video_id.as_deref(),
                "mqdefault",
            ),
            views_label: text_or(&[&reel.view_count_text], "0 views"),
        }
    }
}

impl ReelCard {
    fn render(&self) -> Html {
        html! {
            <div class="video-item">
                { thumbnail_box("video-item-thumbnail", self.thumbnail.as_deref(), "video-item-duration", Some("REEL")) }
                <div class="video-item-content">
                    <div class="video-item-title">{ &self.title }</div>
                    <div class="video-item-meta">
                        <span class="video-item-views">{ &self.views_label }</span>
                    </div>
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

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistCard {
    pub playlist_id: Option<String>,
    pub title: String,
    pub thumbnail: Option<String>,
    pub videos_label: String,
}

impl From<&ChannelPlaylist> for PlaylistCard {
    fn from(playlist: &ChannelPlaylist) -> Self {
        Self {
            playlist_id: first_text(&[&playlist.playlist_id]).map(str::to_string),
            title: text_or(&[&playlist.title], "Unknown Playlist"),
            thumbnail: best_thumbnail(&playlist.thumbnails, CARD_THUMBNAIL_WIDTH)
                .map(str::to_string),
            videos_label: text_or(&[&playlist.video_count_text], "0 videos"),
        }
    }
}

impl PlaylistCard {
    fn render(&self) -> Html {
        html! {
            <div class="video-item">
                { thumbnail_box("video-item-thumbnail", self.thumbnail.as_deref(), "video-item-duration", Some("PLAYLIST")) }
                <div class="video-item-content">
                    <div class="video-item-title">{ &self.title }</div>
                    <div class="video-item-meta">
                        <span class="video-item-videos">{ &self.videos_label }</span>
                    </div>
                    if let Some(playlist_id) = &self.playlist_id {
                        <div class="video-item-actions">
                            { external_link("video-item-btn", playlist_url(playlist_id), "📺 Open") }
                        </div>
                    }
                </div>
            </div>
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelView {
    pub name: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub subscribers: u64,
    pub video_count: u64,
    pub loaded_videos: u64,
    pub loaded_reels: u64,
    pub loaded_playlists: u64,
    pub videos: Vec<VideoCard>,
    pub reels: Vec<ReelCard>,
    pub playlists: Vec<PlaylistCard>,
}

impl ChannelView {
    pub fn from_payload(profile: &ChannelProfile) -> Self {
        let avatar = profile
            .avatar
            .first()
            .or_else(|| profile.thumbnails.first())
            .and_then(|thumb| thumb.url.clone());
        let stats = &profile.stats;

        Self {
            name: text_or(&[&profile.title, &profile.channel_name], "Unknown Channel"),
            description: first_text(&[&profile.description])
                .map(|text| truncate_chars(text, DESCRIPTION_LIMIT)),
            avatar,
            subscribers: stats.subscribers.unwrap_or(0),
            video_count: stats.video_count.unwrap_or(0),
            loaded_videos: stats.loaded_videos_count.unwrap_or(0),
            loaded_reels: stats.loaded_reels_count.unwrap_or(0),
            loaded_playlists: stats.loaded_playlists_count.unwrap_or(0),
            videos: dedup_videos(&profile.videos),
            reels: profile.reels.iter().map(ReelCard::from).collect(),
            playlists: profile.playlists.iter().map(PlaylistCard::from).collect(),
        }
    }

    pub fn render_header(&self) -> Html {
        html! {
            <div class="channel-header">
                if let Some(avatar) = &self.avatar {
                    <img src={avatar.clone()} alt="" class="channel-avatar" />
                }
                <div class="channel-name">{ &self.name }</div>
                if let Some(description) = &self.description {
                    <div class="channel-description">{ description }</div>
                }
                <div class="channel-stats">
                    { channel_stat("Subscribers", self.subscribers) }
                    { channel_stat("Videos", self.video_count) }
                    { channel_stat("Loaded Videos", self.loaded_videos) }
                    if self.loaded_reels > 0 {
                        { channel_stat("Loaded Reels", self.loaded_reels) }
                    }
                    if self.loaded_playlists > 0 {
                        { channel_stat("Loaded Playlists", self.loaded_playlists) }
                    }
                </div>
            </div>
        }
    }

    /// Reels and playlists, each section omitted when empty.
    pub fn render_extras(&self) -> Html {
        html! {
            <>
                if !self.reels.is_empty() {
                    { section_title("Recent Reels", self.reels.len()) }
                    <div class="videos-grid">
                        { for self.reels.iter().map(ReelCard::render) }
                    </div>
                }
                if !self.playlists.is_empty() {
                    { section_title("Recent Playlists", self.playlists.len()) }
                    <div class="videos-grid">
                        { for self.playlists.iter().map(PlaylistCard::render) }
                    </div>
                }
            </>
        }
    }
}

/// Title plus grid for the channel's video list; empty when there are no
/// videos.
pub fn render_video_section(videos: &[VideoCard]) -> Html {
    if videos.is_empty() {
        return html! {};
    }
    html! {
        <>
            { section_title("Recent Videos", videos.len()) }
            <div class="videos-grid" id="channelVideosGrid">
                { for videos.iter().map(VideoCard::render) }
            </div>
        </>
    }
}

fn section_title(title: &str, count: usize) -> Html {
    html! {
        <div class="videos-section-title">
            <span class="section-marker">{ "►" }</span>
            { format!(" {title} ({count})") }
        </div>
    }
}

fn channel_stat(label: &'static str, value: u64) -> Html {
    html! {
        <div class="channel-stat">
            <div class="channel-stat-label">{ label }</div>
            <div class="channel-stat-value">{ format_count(value) }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_to_string;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> ChannelProfile {
        serde_json::from_value(value).unwrap()
    }

    fn render_page(view: &ChannelView) -> String {
        let mut page = render_to_string(&view.render_header());
        page.push_str(&render_to_string(&render_video_section(&view.videos)));
        page.push_str(&render_to_string(&view.render_extras()));
        page
    }

    fn render_channel(profile: &ChannelProfile) -> String {
        render_page(&ChannelView::from_payload(profile))
    }

    #[test]
    fn duplicate_video_ids_collapse_to_first_occurrence() {
        let view = ChannelView::from_payload(&profile(json!({
            "videos": [
                { "videoId": "a", "title": "First" },
                { "videoId": "b", "title": "Other" },
                { "videoId": "a", "title": "Second" }
            ]
        })));
        assert_eq!(view.videos.len(), 2);
        assert_eq!(view.videos[0].title, "First");

        let html = render_page(&view);
        assert_eq!(html.matches("class=\"video-item\"").count(), 2);
        assert!(html.contains("Recent Videos (2)"));
        assert!(!html.contains("Second"));
    }

    #[test]
    fn videos_without_id_are_kept_without_actions() {
        let cards = dedup_videos(&[
            ChannelVideo::default(),
            ChannelVideo::default(),
        ]);
        assert_eq!(cards.len(), 2);

        let html = render_to_string(&cards[0].render());
        assert!(!html.contains("data-action"));
        assert!(html.contains("no-thumbnail"));
    }

    #[test]
    fn view_labels_are_parsed_before_numeric_fields() {
        let cards = dedup_videos(&[
            serde_json::from_value(json!({ "videoId": "a", "viewCountText": "1.234.567 Aufrufe" }))
                .unwrap(),
            serde_json::from_value(json!({ "videoId": "b", "views": 42 })).unwrap(),
            serde_json::from_value(json!({ "videoId": "c", "viewCountText": "keine Aufrufe", "views": 9 }))
                .unwrap(),
        ]);
        assert_eq!(cards[0].views, 1_234_567);
        assert_eq!(cards[1].views, 42);
        assert_eq!(cards[2].views, 0);
    }

    #[test]
    fn header_uses_stats_and_truncates_description() {
        let view = ChannelView::from_payload(&profile(json!({
            "channel_name": "Fallback",
            "description": "d".repeat(400),
            "avatar": [{ "url": "https://img/avatar.jpg" }],
            "stats": {
                "subscribers": 2_500_000,
                "video_count": "310",
                "loaded_videos_count": 5,
                "loaded_reels_count": 0,
                "loaded_playlists_count": 3
            }
        })));
        assert_eq!(view.name, "Fallback");
        assert_eq!(view.video_count, 310);

        let header = render_to_string(&view.render_header());
        assert!(header.contains("src=\"https://img/avatar.jpg\""));
        assert!(header.contains(">2.5M<"));
        assert!(header.contains("Loaded Playlists"));
        assert!(!header.contains("Loaded Reels"));
        assert!(header.contains(&format!("{}...", "d".repeat(DESCRIPTION_LIMIT))));
    }

    #[test]
    fn reels_and_playlists_render_their_badges() {
        let html = render_channel(&profile(json!({
            "title": "Chan",
            "reels": [{ "videoId": "r1", "title": "Reel" }],
            "playlists": [{ "playlistId": "PL1\"x", "title": "List", "videoCountText": "12 videos" }]
        })));
        assert!(html.contains(">REEL<"));
        assert!(html.contains("0 views"));
        assert!(html.contains(">PLAYLIST<"));
        assert!(html.contains("href=\"https://www.youtube.com/playlist?list=PL1&quot;x\""));
        assert!(html.contains("Recent Reels (1)"));
        assert!(!html.contains("Recent Videos"));
    }
}

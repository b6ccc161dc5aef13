use crate::models::{SearchItem, SearchResults};
use crate::thumbnails::default_thumbnail_url;
use crate::utils::{format_count, format_iso8601_date, parse_count_text};
use crate::views::{
    action_button, channel_url, error_message, external_link, first_text, playlist_url, text_or,
    thumbnail_box, ACTION_VIDEO_COMMENTS, ACTION_VIDEO_INFO,
};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchDetail {
    Video {
        video_id: Option<String>,
        duration: Option<String>,
        views: u64,
        published: Option<String>,
    },
    Channel {
        channel_id: Option<String>,
        subscribers: Option<String>,
    },
    Playlist {
        playlist_id: Option<String>,
        video_count: Option<String>,
    },
    Movie {
        video_id: Option<String>,
        duration: Option<String>,
        published: Option<String>,
    },
}

impl SearchDetail {
    pub fn label(&self) -> &'static str {
        match self {
            SearchDetail::Video { .. } => "Video",
            SearchDetail::Channel { .. } => "Channel",
            SearchDetail::Playlist { .. } => "Playlist",
            SearchDetail::Movie { .. } => "Movie",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub title: String,
    pub thumbnail: Option<String>,
    pub channel: Option<String>,
    pub description: Option<String>,
    pub detail: SearchDetail,
}

fn owned(text: Option<&str>) -> Option<String> {
    text.map(str::to_string)
}

impl From<&SearchItem> for SearchEntry {
    fn from(item: &SearchItem) -> Self {
        let video_id = owned(first_text(&[&item.video_id]));
        let duration = owned(first_text(&[&item.length, &item.duration]));
        let published =
            first_text(&[&item.published_time, &item.upload_date]).map(format_iso8601_date);

        let detail = match item.kind.as_deref() {
            Some("channel") => SearchDetail::Channel {
                channel_id: owned(first_text(&[&item.channel_id])),
                subscribers: owned(first_text(&[&item.subscriber_count])),
            },
            Some("playlist") => SearchDetail::Playlist {
                playlist_id: owned(first_text(&[&item.playlist_id])),
                video_count: owned(first_text(&[&item.video_count])),
            },
            Some("movie") => SearchDetail::Movie {
                video_id: video_id.clone(),
                duration,
                published,
            },
            _ => {
                let views = match &item.view_count {
                    Some(label) => parse_count_text(label),
                    None => item.view_count_number.unwrap_or(0),
                };
                SearchDetail::Video {
                    video_id: video_id.clone(),
                    duration,
                    views,
                    published,
                }
            }
        };

        Self {
            title: text_or(&[&item.title], "Unknown Title"),
            thumbnail: owned(first_text(&[&item.thumbnail]))
                .or_else(|| video_id.map(|id| default_thumbnail_url(&id, "mqdefault"))),
            channel: owned(first_text(&[&item.channel])),
            description: owned(first_text(&[&item.description])),
            detail,
        }
    }
}

impl SearchEntry {
    pub fn render(&self) -> Html {
        let duration = match &self.detail {
            SearchDetail::Video { duration, .. } | SearchDetail::Movie { duration, .. } => {
                duration.as_deref()
            }
            _ => None,
        };

        html! {
            <div class="search-item">
                { thumbnail_box("search-item-thumbnail", self.thumbnail.as_deref(), "search-item-duration", duration) }
                <div class="search-item-content">
                    <span class="search-item-type">{ self.detail.label() }</span>
                    <div class="search-item-title">{ &self.title }</div>
                    if let Some(channel) = &self.channel {
                        <div class="search-item-channel">{ channel }</div>
                    }
                    if let Some(description) = &self.description {
                        <div class="search-item-description">{ description }</div>
                    }
                    <div class="search-item-meta">{ self.render_meta() }</div>
                    { self.render_actions() }
                </div>
            </div>
        }
    }

    fn render_meta(&self) -> Html {
        let meta = |class: &'static str, text: String| html! { <span {class}>{ text }</span> };
        match &self.detail {
            SearchDetail::Video {
                views, published, ..
            } => html! {
                <>
                    if *views > 0 {
                        { meta("search-item-views", format!("{} views", format_count(*views))) }
                    }
                    { published.clone().map(|published| meta("search-item-published", published)) }
                </>
            },
            SearchDetail::Movie { published, .. } => published
                .clone()
                .map(|published| meta("search-item-published", published))
                .unwrap_or_default(),
            SearchDetail::Channel { subscribers, .. } => subscribers
                .clone()
                .map(|subscribers| meta("search-item-subscribers", subscribers))
                .unwrap_or_default(),
            SearchDetail::Playlist { video_count, .. } => video_count
                .clone()
                .map(|count| meta("search-item-videos", count))
                .unwrap_or_default(),
        }
    }

    fn render_actions(&self) -> Html {
        let actions = match &self.detail {
            SearchDetail::Video {
                video_id: Some(video_id),
                ..
            }
            | SearchDetail::Movie {
                video_id: Some(video_id),
                ..
            } => html! {
                <>
                    { action_button("video-item-btn info-btn", ACTION_VIDEO_INFO, video_id, "🎬 Info") }
                    { action_button("video-item-btn comments-btn", ACTION_VIDEO_COMMENTS, video_id, "💬 Comments") }
                </>
            },
            SearchDetail::Channel {
                channel_id: Some(channel_id),
                ..
            } => external_link("video-item-btn", channel_url(channel_id), "📺 Open"),
            SearchDetail::Playlist {
                playlist_id: Some(playlist_id),
                ..
            } => external_link("video-item-btn", playlist_url(playlist_id), "📺 Open"),
            _ => return html! {},
        };
        html! { <div class="search-item-actions">{ actions }</div> }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub entries: Vec<SearchEntry>,
}

impl SearchView {
    pub fn from_payload(results: &SearchResults) -> Self {
        Self {
            entries: results.0.iter().map(SearchEntry::from).collect(),
        }
    }

    pub fn render(&self) -> Html {
        if self.entries.is_empty() {
            return error_message("No search results found");
        }
        html! {
            <div class="search-results-grid">
                { for self.entries.iter().map(SearchEntry::render) }
            </div>
        }
    }
}

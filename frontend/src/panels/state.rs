use crate::models::{ChannelProfile, ChannelVideo, ChannelVideosPage};
use crate::panels::api::FetchError;
use crate::views::channel::{dedup_videos, ChannelView, VideoCard};
use crate::views::comments::CommentView;
use crate::views::error_message;
use crate::views::shorts::ShortsView;
use std::collections::HashSet;
use yew::prelude::*;

/// Content of one results container.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<V> {
    Idle,
    Loading,
    Ready(V),
    Failed(String),
}

impl<V> Default for PanelState<V> {
    fn default() -> Self {
        PanelState::Idle
    }
}

impl<V> PanelState<V> {
    pub fn from_result(result: Result<V, FetchError>) -> Self {
        match result {
            Ok(view) => PanelState::Ready(view),
            Err(e) => PanelState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    pub fn container_class(&self) -> &'static str {
        match self {
            PanelState::Failed(_) => "results error",
            _ => "results",
        }
    }

    /// Content for every state except `Ready`, which each panel lays out
    /// itself.
    pub fn status_html(&self) -> Option<Html> {
        match self {
            PanelState::Idle | PanelState::Ready(_) => None,
            PanelState::Loading => Some(html! { <div class="loading">{ "LOADING DATA..." }</div> }),
            PanelState::Failed(message) => Some(error_message(message)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreStatus {
    Ready,
    Loading,
    Exhausted,
    Failed,
}

impl LoadMoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoadMoreStatus::Ready => "+ Load More Videos",
            LoadMoreStatus::Loading => "LOADING...",
            LoadMoreStatus::Exhausted => "NO MORE VIDEOS",
            LoadMoreStatus::Failed => "ERROR - TRY AGAIN",
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, LoadMoreStatus::Loading | LoadMoreStatus::Exhausted)
    }
}

pub const CHANNEL_PAGE_INCREMENT: usize = 10;

/// Pagination state of the channel panel's video list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFeed {
    pub url: String,
    pub loaded: usize,
    pub seen: HashSet<String>,
    pub videos: Vec<VideoCard>,
}

impl ChannelFeed {
    /// Starts a feed from the first page, which is already de-duplicated.
    pub fn new(url: impl Into<String>, videos: Vec<VideoCard>) -> Self {
        let seen = videos
            .iter()
            .filter_map(|video| video.video_id.clone())
            .collect();
        Self {
            url: url.into(),
            loaded: videos.len(),
            seen,
            videos,
        }
    }

    /// Page size to request next; the backend returns the whole prefix of
    /// the channel's uploads, not just the new part.
    pub fn next_page_size(&self) -> usize {
        self.loaded + CHANNEL_PAGE_INCREMENT
    }

    /// Appends the videos of `page` that have an identifier not shown yet.
    /// Returns how many were appended.
    pub fn merge(&mut self, page: &[ChannelVideo]) -> usize {
        let fresh: Vec<VideoCard> = dedup_videos(page)
            .into_iter()
            .filter(|video| match &video.video_id {
                Some(id) => !self.seen.contains(id),
                None => false,
            })
            .collect();
        if fresh.is_empty() {
            return 0;
        }

        let appended = fresh.len();
        self.seen
            .extend(fresh.iter().filter_map(|video| video.video_id.clone()));
        self.videos.extend(fresh);
        self.loaded = page.len();
        appended
    }
}

/// What the channel panel shows: the header and extras of the first
/// response, and the growing video list. `generation` numbers the channel
/// submissions of a panel so late load-more responses can be recognised.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPage {
    pub view: ChannelView,
    pub feed: ChannelFeed,
    pub generation: u32,
}

impl ChannelPage {
    pub fn new(url: impl Into<String>, profile: &ChannelProfile, generation: u32) -> Self {
        let view = ChannelView::from_payload(profile);
        let feed = ChannelFeed::new(url, view.videos.clone());
        Self {
            view,
            feed,
            generation,
        }
    }

    /// Merges a load-more response into the feed. Returns `None`, leaving the
    /// page untouched, when another channel was submitted after this page.
    pub fn apply_more(
        &mut self,
        page: &ChannelVideosPage,
        current_generation: u32,
    ) -> Option<LoadMoreStatus> {
        if self.generation != current_generation {
            return None;
        }
        let status = match &page.videos {
            None => LoadMoreStatus::Failed,
            Some(videos) => match self.feed.merge(videos) {
                0 => LoadMoreStatus::Exhausted,
                _ => LoadMoreStatus::Ready,
            },
        };
        Some(status)
    }
}

pub const COMMENT_BATCH_SIZE: usize = 20;

/// How much of an already fetched comment list is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentCursor {
    total: usize,
    shown: usize,
}

impl CommentCursor {
    pub fn new(total: usize) -> Self {
        Self { total, shown: 0 }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn remaining(&self) -> usize {
        self.total - self.shown
    }

    /// Advances over the next batch and returns its index range.
    pub fn next_batch(&mut self) -> std::ops::Range<usize> {
        let start = self.shown;
        self.shown = (start + COMMENT_BATCH_SIZE).min(self.total);
        start..self.shown
    }

    pub fn visible<'a>(&self, comments: &'a [CommentView]) -> &'a [CommentView] {
        &comments[..self.shown.min(comments.len())]
    }
}

/// A fetched short and how many of its comments are on screen. The first
/// batch is shown right away.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortsPage {
    pub view: ShortsView,
    pub cursor: CommentCursor,
}

impl ShortsPage {
    pub fn new(view: ShortsView) -> Self {
        let mut cursor = CommentCursor::new(view.comments.len());
        cursor.next_batch();
        Self { view, cursor }
    }

    pub fn show_more(&mut self) {
        self.cursor.next_batch();
    }

    pub fn visible_comments(&self) -> &[CommentView] {
        self.cursor.visible(&self.view.comments)
    }
}

//! Wire shapes of the JSON returned by the scraping backend.
//!
//! The backend assembles these from scraped pages, so almost every field is
//! optional and several of them exist under more than one key. The `views`
//! module turns them into stable view models.

use crate::thumbnails::Thumbnail;
use crate::utils::parse_leading_int;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

// Counts arrive as numbers, numeric strings or not at all
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64)),
        Value::String(s) => parse_leading_int(&s),
        _ => None,
    }))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

// Lists that may be absent, null, or contain malformed entries
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

// Like `lenient_vec`, but keeps "no list at all" apart from an empty one
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub duration_seconds: Option<u64>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub thumbnail: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub upload_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_time_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentsPayload {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub comments: Vec<CommentRecord>,
}

/// Comments come in two layouts: the flat one of the comments endpoint and
/// the nested one attached to short-form videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentRecord {
    Nested(NestedComment),
    Flat(FlatComment),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatComment {
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, alias = "likeCount", deserialize_with = "lenient_count")]
    pub like_count: Option<u64>,
    #[serde(default, alias = "replyCount", deserialize_with = "lenient_count")]
    pub reply_count: Option<u64>,
    #[serde(default, alias = "publishedTimeText", deserialize_with = "lenient_text")]
    pub published_time_text: Option<String>,
    #[serde(default, alias = "authorThumbnail", deserialize_with = "lenient_text")]
    pub author_thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedComment {
    pub author: NestedAuthor,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_time: Option<String>,
    #[serde(default)]
    pub toolbar: Toolbar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedAuthor {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar_thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toolbar {
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub reply_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelProfile {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub avatar: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub stats: ChannelStats,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub videos: Vec<ChannelVideo>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub reels: Vec<ChannelReel>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub playlists: Vec<ChannelPlaylist>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscribers: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub video_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub loaded_videos_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub loaded_reels_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub loaded_playlists_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub view_count_text: Option<String>,
    #[serde(default, rename = "view_count", deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub length_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_time_text: Option<String>,
    #[serde(default, rename = "upload_date", deserialize_with = "lenient_text")]
    pub upload_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelReel {
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub view_count_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPlaylist {
    #[serde(default, deserialize_with = "lenient_text")]
    pub playlist_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_count_text: Option<String>,
}

/// Load-more response of the channel endpoint. Only the video list is read;
/// `None` means the key was missing, which is not the same as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelVideosPage {
    #[serde(default, deserialize_with = "lenient_list")]
    pub videos: Option<Vec<ChannelVideo>>,
}

/// The search endpoint returns the item list itself as `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults(#[serde(deserialize_with = "lenient_vec")] pub Vec<SearchItem>);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub playlist_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub view_count: Option<String>,
    #[serde(default, rename = "view_count", deserialize_with = "lenient_count")]
    pub view_count_number: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_time: Option<String>,
    #[serde(default, rename = "upload_date", deserialize_with = "lenient_text")]
    pub upload_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subscriber_count: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_count: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortBundle {
    #[serde(default)]
    pub short: ShortDetails,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub comments: Vec<CommentRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_handle: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sound_metadata: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub thumbnail: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comment_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub publish_date: Option<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
}

/// Picks the URL of the candidate whose width is closest to `preferred`.
///
/// Candidates without a width count as zero wide. On a tie the earlier
/// candidate wins. If the winner carries no URL the first candidate's URL is
/// used instead.
pub fn best_thumbnail(candidates: &[Thumbnail], preferred: u32) -> Option<&str> {
    let closest = candidates
        .iter()
        .min_by_key(|thumb| thumb.width.unwrap_or(0).abs_diff(preferred))?;
    closest
        .url
        .as_deref()
        .or_else(|| candidates.first().and_then(|thumb| thumb.url.as_deref()))
}

/// `hqdefault`, `mqdefault`, ...
pub fn default_thumbnail_url(video_id: &str, quality: &str) -> String {
    format!("https://i.ytimg.com/vi/{video_id}/{quality}.jpg")
}

/// Best candidate, else the platform's default image for `video_id`.
pub fn thumbnail_or_default(
    candidates: &[Thumbnail],
    preferred: u32,
    video_id: Option<&str>,
    quality: &str,
) -> Option<String> {
    best_thumbnail(candidates, preferred)
        .map(str::to_string)
        .or_else(|| video_id.map(|id| default_thumbnail_url(id, quality)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(url: &str, width: u32) -> Thumbnail {
        Thumbnail {
            url: Some(url.to_string()),
            width: Some(width),
        }
    }

    #[test]
    fn closest_width_wins() {
        let candidates = vec![thumb("small", 120), thumb("medium", 480), thumb("large", 640)];
        assert_eq!(best_thumbnail(&candidates, 500), Some("medium"));
        assert_eq!(best_thumbnail(&candidates, 480), Some("medium"));
        assert_eq!(best_thumbnail(&candidates, 720), Some("large"));
    }

    #[test]
    fn ties_keep_input_order() {
        let candidates = vec![thumb("first", 400), thumb("second", 600)];
        assert_eq!(best_thumbnail(&candidates, 500), Some("first"));
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(best_thumbnail(&[], 480), None);
    }

    #[test]
    fn falls_back_to_default_image() {
        assert_eq!(
            thumbnail_or_default(&[], 320, Some("abc"), "mqdefault").as_deref(),
            Some("https://i.ytimg.com/vi/abc/mqdefault.jpg")
        );
        assert_eq!(thumbnail_or_default(&[], 320, None, "mqdefault"), None);
    }
}

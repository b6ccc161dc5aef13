use crate::models::{CommentRecord, CommentsPayload};
use crate::utils::{format_count, initial_letter};
use crate::views::{error_message, first_text, image_fallback, text_or};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub author: String,
    pub avatar: Option<String>,
    pub text: String,
    pub likes: u64,
    pub replies: u64,
    pub published: String,
}

impl From<&CommentRecord> for CommentView {
    fn from(record: &CommentRecord) -> Self {
        match record {
            CommentRecord::Flat(comment) => Self {
                author: text_or(&[&comment.author], "Anonymous"),
                avatar: first_text(&[&comment.author_thumbnail]).map(str::to_string),
                text: comment.text.clone().unwrap_or_default(),
                likes: comment.like_count.unwrap_or(0),
                replies: comment.reply_count.unwrap_or(0),
                published: comment.published_time_text.clone().unwrap_or_default(),
            },
            CommentRecord::Nested(comment) => Self {
                author: text_or(&[&comment.author.display_name], "Anonymous"),
                avatar: first_text(&[&comment.author.avatar_thumbnail_url]).map(str::to_string),
                text: comment.content.clone().unwrap_or_default(),
                likes: comment.toolbar.like_count.unwrap_or(0),
                replies: comment.toolbar.reply_count.unwrap_or(0),
                published: comment.published_time.clone().unwrap_or_default(),
            },
        }
    }
}

impl CommentView {
    // Handles look like "@name", skip the sigil for the placeholder
    fn placeholder_initial(&self) -> String {
        initial_letter(self.author.trim_start_matches('@'))
    }

    pub fn render(&self) -> Html {
        html! {
            <div class="comment-card">
                <div class="comment-header">
                    if let Some(avatar) = &self.avatar {
                        <img src={avatar.clone()} alt="" class="comment-avatar" onerror={image_fallback()} />
                        <div class="comment-avatar-placeholder" hidden=true>{ self.placeholder_initial() }</div>
                    } else {
                        <div class="comment-avatar-placeholder">{ self.placeholder_initial() }</div>
                    }
                    <div class="comment-author">{ &self.author }</div>
                </div>
                <div class="comment-text">{ &self.text }</div>
                <div class="comment-meta">
                    if self.likes > 0 {
                        <span class="comment-likes">{ format_count(self.likes) }</span>
                    }
                    if self.replies > 0 {
                        <span class="comment-replies">{ format!("{} replies", format_count(self.replies)) }</span>
                    }
                    <span class="comment-published">{ &self.published }</span>
                </div>
            </div>
        }
    }
}

pub fn comment_views(records: &[CommentRecord]) -> Vec<CommentView> {
    records.iter().map(CommentView::from).collect()
}

/// Comment cards without a surrounding section, for appending to a list.
pub fn render_comment_items(comments: &[CommentView]) -> Html {
    comments.iter().map(CommentView::render).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentsView {
    pub comments: Vec<CommentView>,
}

impl CommentsView {
    pub fn from_payload(payload: &CommentsPayload) -> Self {
        Self {
            comments: comment_views(&payload.comments),
        }
    }

    pub fn render(&self) -> Html {
        if self.comments.is_empty() {
            return error_message("No comments found");
        }
        html! {
            <div class="comments-section">
                <h3 class="comments-title">{ format!("Comments ({})", self.comments.len()) }</h3>
                { render_comment_items(&self.comments) }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_to_string;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> CommentsPayload {
        serde_json::from_value(value).unwrap()
    }

    fn render_comments(payload: &CommentsPayload) -> String {
        render_to_string(&CommentsView::from_payload(payload).render())
    }

    #[test]
    fn empty_list_shows_error_fragment() {
        let html = render_comments(&CommentsPayload::default());
        assert_eq!(html, "<div class=\"error\">No comments found</div>");
    }

    #[test]
    fn placeholder_uses_upper_cased_initial() {
        let html = render_comments(&payload(json!({
            "comments": [{ "author": "@zoe", "text": "nice" }]
        })));
        assert!(html.contains("<div class=\"comment-avatar-placeholder\">Z</div>"));
        assert!(html.contains("Comments (1)"));
    }

    #[test]
    fn anonymous_author_and_avatar_image() {
        let html = render_comments(&payload(json!({
            "comments": [{ "text": "hi", "authorThumbnail": "https://img/a.jpg" }]
        })));
        assert!(html.contains("<div class=\"comment-author\">Anonymous</div>"));
        assert!(html.contains(
            "<img src=\"https://img/a.jpg\" alt=\"\" class=\"comment-avatar\">\
             <div hidden=\"hidden\" class=\"comment-avatar-placeholder\">A</div>"
        ));
    }

    #[test]
    fn zero_likes_are_omitted() {
        let html = render_comments(&payload(json!({
            "comments": [
                { "author": "a", "text": "x", "likeCount": 0 },
                { "author": "b", "text": "y", "likeCount": 2500, "publishedTimeText": "vor 1 Tag" }
            ]
        })));
        assert_eq!(html.matches("comment-likes").count(), 1);
        assert!(html.contains("<span class=\"comment-likes\">2.5K</span>"));
        assert!(html.contains("vor 1 Tag"));
    }

    #[test]
    fn nested_comments_are_normalised() {
        let view = CommentView::from(&CommentRecord::Nested(crate::models::NestedComment {
            author: crate::models::NestedAuthor {
                display_name: Some("@short_fan".to_string()),
                avatar_thumbnail_url: None,
            },
            content: Some("<3".to_string()),
            published_time: Some("vor 2 Stunden".to_string()),
            toolbar: crate::models::Toolbar {
                like_count: Some(7),
                reply_count: Some(1),
            },
        }));
        assert_eq!(view.author, "@short_fan");
        assert_eq!(view.likes, 7);

        let html = render_to_string(&render_comment_items(&[view]));
        assert!(html.contains("&lt;3"));
        assert!(html.contains("1 replies"));
    }
}

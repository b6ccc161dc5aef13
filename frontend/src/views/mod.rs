//! Typed view models and their HTML presentation, one module per kind of
//! backend payload.

pub mod channel;
pub mod comments;
pub mod search;
pub mod shorts;
pub mod video;

use web_sys::Element;
use yew::prelude::*;

/// `data-action` values understood by the panels' click delegation.
pub const ACTION_VIDEO_INFO: &str = "video-info";
pub const ACTION_VIDEO_COMMENTS: &str = "video-comments";

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn playlist_url(playlist_id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={playlist_id}")
}

pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}

/// First candidate that is present and not blank.
pub(crate) fn first_text<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|candidate| candidate.as_deref())
        .find(|text| !text.trim().is_empty())
}

pub(crate) fn text_or(candidates: &[&Option<String>], fallback: &str) -> String {
    first_text(candidates).unwrap_or(fallback).to_string()
}

/// Swaps a broken image for the placeholder rendered right after it.
pub(crate) fn image_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<Element>() {
            let _ = img.set_attribute("hidden", "");
            if let Some(placeholder) = img.next_element_sibling() {
                let _ = placeholder.remove_attribute("hidden");
            }
        }
    })
}

/// Image followed by a hidden `no-thumbnail` placeholder that takes its place
/// when loading fails; only the placeholder when there is no source.
pub(crate) fn thumbnail_image(
    src: Option<&str>,
    alt: &'static str,
    class: Option<&'static str>,
) -> Html {
    match src {
        Some(src) => html! {
            <>
                <img src={src.to_string()} alt={alt} loading="lazy" {class} onerror={image_fallback()} />
                <div class="no-thumbnail" hidden=true></div>
            </>
        },
        None => html! { <div class="no-thumbnail"></div> },
    }
}

/// Thumbnail container with an optional corner badge (duration, `REEL`, ...).
pub(crate) fn thumbnail_box(
    container_class: &'static str,
    src: Option<&str>,
    badge_class: &'static str,
    badge: Option<&str>,
) -> Html {
    html! {
        <div class={container_class}>
            { thumbnail_image(src, "", None) }
            if let Some(badge) = badge {
                <span class={badge_class}>{ badge }</span>
            }
        </div>
    }
}

pub(crate) fn action_button(
    class: &'static str,
    action: &'static str,
    video_id: &str,
    label: &'static str,
) -> Html {
    html! {
        <button type="button" data-action={action} data-video-id={video_id.to_string()} {class}>
            { label }
        </button>
    }
}

pub(crate) fn external_link(class: &'static str, href: String, label: &'static str) -> Html {
    html! {
        <a {href} target="_blank" rel="noopener noreferrer" {class}>{ label }</a>
    }
}

pub(crate) fn error_message(message: &str) -> Html {
    html! { <div class="error">{ message }</div> }
}

use crate::models::{
    ChannelProfile, ChannelVideosPage, CommentsPayload, SearchResults, ShortBundle, VideoDetails,
};
use crate::panels::api::{
    post_form, FormFields, CHANNEL_ENDPOINT, COMMENTS_ENDPOINT, SEARCH_ENDPOINT, SHORTS_ENDPOINT,
    VIDEO_ENDPOINT,
};
use crate::panels::components::{
    event_value, on_item_action, panel_body, submit_form, ItemAction, LoadMoreButton, SubmitButton,
};
use crate::panels::state::{ChannelPage, LoadMoreStatus, PanelState, ShortsPage};
use crate::views::channel::render_video_section;
use crate::views::comments::{render_comment_items, CommentsView};
use crate::views::search::SearchView;
use crate::views::shorts::ShortsView;
use crate::views::video::VideoView;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const DEFAULT_COMMENT_LIMIT: u32 = 10;
const DEFAULT_CHANNEL_VIDEOS: u32 = 5;
const DEFAULT_CHANNEL_REELS: u32 = 5;
const DEFAULT_CHANNEL_PLAYLISTS: u32 = 5;
const DEFAULT_SEARCH_RESULTS: u32 = 10;
const DEFAULT_SHORT_COMMENTS: u32 = 50;

const SEARCH_FILTERS: [(&str, &str); 7] = [
    ("", "All results"),
    ("VIDEOS_TODAY", "Videos from today"),
    ("LAST_HOUR", "Last hour"),
    ("SORT_BY_DATE", "Sorted by date"),
    ("CHANNELS", "Channels"),
    ("PLAYLISTS", "Playlists"),
    ("MOVIES", "Movies"),
];

/// A URL pushed into a panel from elsewhere, e.g. the "Info" button of a
/// channel video. `seq` makes repeated requests for the same URL distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefill {
    pub url: String,
    pub seq: u32,
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
        state.set(input_value);
    })
}

// Number inputs keep their previous value when the field is cleared
fn number_input(state: &UseStateHandle<u32>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
        if let Ok(value) = input_value.trim().parse() {
            state.set(value);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct VideoPanelProps {
    pub prefill: Option<Prefill>,
}

#[function_component(VideoPanel)]
pub fn video_panel(props: &VideoPanelProps) -> Html {
    let url = use_state(String::new);
    let state = use_state(PanelState::<VideoView>::default);

    let submit = {
        let state = state.clone();
        move |url: String| {
            let fields = FormFields::new().with("url", url);
            submit_form(VIDEO_ENDPOINT, fields, state.clone(), |video: &VideoDetails| {
                VideoView::from_payload(video)
            });
        }
    };

    {
        let url = url.clone();
        let submit = submit.clone();
        use_effect_with(props.prefill.clone(), move |prefill| {
            if let Some(prefill) = prefill {
                url.set(prefill.url.clone());
                submit(prefill.url.clone());
            }
        });
    }

    let on_submit = {
        let url = url.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit((*url).clone());
        })
    };

    html! {
        <>
            <form id="videoForm" onsubmit={on_submit}>
                <input
                    type="text"
                    id="videoUrl"
                    placeholder="https://www.youtube.com/watch?v=..."
                    value={(*url).clone()}
                    oninput={text_input(&url)}
                    required=true
                />
                <SubmitButton loading={state.is_loading()} label="Get Video Info" />
            </form>
            <div id="videoResults" class={state.container_class()}>
                { panel_body(&state, |view| view.render()) }
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentsPanelProps {
    pub prefill: Option<Prefill>,
}

#[function_component(CommentsPanel)]
pub fn comments_panel(props: &CommentsPanelProps) -> Html {
    let url = use_state(String::new);
    let limit = use_state(|| DEFAULT_COMMENT_LIMIT);
    let state = use_state(PanelState::<CommentsView>::default);

    let submit = {
        let state = state.clone();
        let limit = limit.clone();
        move |url: String| {
            let fields = FormFields::new().with("url", url).with("limit", *limit);
            submit_form(COMMENTS_ENDPOINT, fields, state.clone(), |payload: &CommentsPayload| {
                CommentsView::from_payload(payload)
            });
        }
    };

    {
        let url = url.clone();
        let submit = submit.clone();
        use_effect_with(props.prefill.clone(), move |prefill| {
            if let Some(prefill) = prefill {
                url.set(prefill.url.clone());
                submit(prefill.url.clone());
            }
        });
    }

    let on_submit = {
        let url = url.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit((*url).clone());
        })
    };

    html! {
        <>
            <form id="commentsForm" onsubmit={on_submit}>
                <input
                    type="text"
                    id="commentsUrl"
                    placeholder="https://www.youtube.com/watch?v=..."
                    value={(*url).clone()}
                    oninput={text_input(&url)}
                    required=true
                />
                <label class="form-option">
                    { "Limit" }
                    <input
                        type="number"
                        min="1"
                        value={limit.to_string()}
                        oninput={number_input(&limit)}
                    />
                </label>
                <SubmitButton loading={state.is_loading()} label="Get Comments" />
            </form>
            <div id="commentsResults" class={state.container_class()}>
                { panel_body(&state, |view| view.render()) }
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelPanelProps {
    pub on_action: Callback<ItemAction>,
}

#[function_component(ChannelPanel)]
pub fn channel_panel(props: &ChannelPanelProps) -> Html {
    let url = use_state(String::new);
    let max_videos = use_state(|| DEFAULT_CHANNEL_VIDEOS);
    let max_reels = use_state(|| DEFAULT_CHANNEL_REELS);
    let max_playlists = use_state(|| DEFAULT_CHANNEL_PLAYLISTS);
    let state = use_state(PanelState::<ChannelPage>::default);
    let load_more = use_state(|| LoadMoreStatus::Ready);
    let generation = use_mut_ref(|| 0u32);

    let on_submit = {
        let url = url.clone();
        let max_videos = max_videos.clone();
        let max_reels = max_reels.clone();
        let max_playlists = max_playlists.clone();
        let state = state.clone();
        let load_more = load_more.clone();
        let generation = generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // A new channel starts a new feed
            load_more.set(LoadMoreStatus::Ready);
            let page_generation = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            let channel_url = (*url).clone();
            let fields = FormFields::new()
                .with("url", &channel_url)
                .with("max_videos", *max_videos)
                .with("max_reels", *max_reels)
                .with("max_playlists", *max_playlists);
            submit_form(
                CHANNEL_ENDPOINT,
                fields,
                state.clone(),
                move |profile: &ChannelProfile| ChannelPage::new(channel_url, profile, page_generation),
            );
        })
    };

    let on_load_more = {
        let state = state.clone();
        let load_more = load_more.clone();
        Callback::from(move |_: MouseEvent| {
            let PanelState::Ready(page) = &*state else {
                return;
            };
            if load_more.disabled() {
                return;
            }
            let mut page = page.clone();
            let state = state.clone();
            let load_more = load_more.clone();
            let generation = generation.clone();
            load_more.set(LoadMoreStatus::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fields = FormFields::new()
                    .with("url", &page.feed.url)
                    .with("max_videos", page.feed.next_page_size());
                let result = post_form::<ChannelVideosPage>(CHANNEL_ENDPOINT, &fields).await;
                let current = *generation.borrow();
                if page.generation != current {
                    log::debug!("dropping load-more result for {}", page.feed.url);
                    return;
                }
                match result {
                    Ok(more) => match page.apply_more(&more, current) {
                        Some(LoadMoreStatus::Ready) => {
                            state.set(PanelState::Ready(page));
                            load_more.set(LoadMoreStatus::Ready);
                        }
                        Some(status) => load_more.set(status),
                        None => {}
                    },
                    Err(e) => {
                        log::warn!("loading more channel videos failed: {e}");
                        load_more.set(LoadMoreStatus::Failed);
                    }
                }
            });
        })
    };

    let body = panel_body(&state, |page| {
        html! {
            <>
                { page.view.render_header() }
                if !page.feed.videos.is_empty() {
                    <>
                        { render_video_section(&page.feed.videos) }
                        <LoadMoreButton status={*load_more} on_click={on_load_more.clone()} />
                    </>
                }
                { page.view.render_extras() }
            </>
        }
    });

    html! {
        <>
            <form id="channelForm" onsubmit={on_submit}>
                <input
                    type="text"
                    id="channelUrl"
                    placeholder="https://www.youtube.com/@channel"
                    value={(*url).clone()}
                    oninput={text_input(&url)}
                    required=true
                />
                <label class="form-option">
                    { "Videos" }
                    <input
                        type="number"
                        min="1"
                        value={max_videos.to_string()}
                        oninput={number_input(&max_videos)}
                    />
                </label>
                <label class="form-option">
                    { "Reels" }
                    <input
                        type="number"
                        min="0"
                        value={max_reels.to_string()}
                        oninput={number_input(&max_reels)}
                    />
                </label>
                <label class="form-option">
                    { "Playlists" }
                    <input
                        type="number"
                        min="0"
                        value={max_playlists.to_string()}
                        oninput={number_input(&max_playlists)}
                    />
                </label>
                <SubmitButton loading={state.is_loading()} label="Get Channel" />
            </form>
            <div
                id="channelResults"
                class={state.container_class()}
                onclick={on_item_action(&props.on_action)}
            >
                { body }
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub on_action: Callback<ItemAction>,
}

#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let query = use_state(String::new);
    let filter = use_state(String::new);
    let max_results = use_state(|| DEFAULT_SEARCH_RESULTS);
    let state = use_state(PanelState::<SearchView>::default);

    let on_submit = {
        let query = query.clone();
        let filter = filter.clone();
        let max_results = max_results.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = FormFields::new()
                .with("query", &*query)
                .with("filter", &*filter)
                .with("max_results", *max_results);
            submit_form(SEARCH_ENDPOINT, fields, state.clone(), |results: &SearchResults| {
                SearchView::from_payload(results)
            });
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                filter.set(value);
            }
        })
    };

    html! {
        <>
            <form id="searchForm" onsubmit={on_submit}>
                <input
                    type="text"
                    id="searchQuery"
                    placeholder="Search query..."
                    value={(*query).clone()}
                    oninput={text_input(&query)}
                    required=true
                />
                <label class="form-option">
                    { "Filter" }
                    <select onchange={on_filter_change}>
                        { for SEARCH_FILTERS.iter().map(|(key, name)| html! {
                            <option value={*key} selected={*filter == *key}>{ *name }</option>
                        })}
                    </select>
                </label>
                <label class="form-option">
                    { "Results" }
                    <input
                        type="number"
                        min="1"
                        value={max_results.to_string()}
                        oninput={number_input(&max_results)}
                    />
                </label>
                <SubmitButton loading={state.is_loading()} label="Search" />
            </form>
            <div
                id="searchResults"
                class={state.container_class()}
                onclick={on_item_action(&props.on_action)}
            >
                { panel_body(&state, |view| view.render()) }
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShortsPanelProps {
    pub on_action: Callback<ItemAction>,
}

#[function_component(ShortsPanel)]
pub fn shorts_panel(props: &ShortsPanelProps) -> Html {
    let url = use_state(String::new);
    let limit = use_state(|| DEFAULT_SHORT_COMMENTS);
    let state = use_state(PanelState::<ShortsPage>::default);

    let submit = {
        let state = state.clone();
        move |fields: FormFields| {
            submit_form(SHORTS_ENDPOINT, fields, state.clone(), |bundle: &ShortBundle| {
                ShortsPage::new(ShortsView::from_payload(bundle))
            });
        }
    };

    let on_submit = {
        let url = url.clone();
        let limit = limit.clone();
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit(FormFields::new().with("url", &*url).with("limit", *limit));
        })
    };

    let on_random = {
        let limit = limit.clone();
        Callback::from(move |_: MouseEvent| {
            submit(FormFields::new().with("random", true).with("limit", *limit));
        })
    };

    let on_more_comments = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if let PanelState::Ready(page) = &*state {
                let mut page = page.clone();
                page.show_more();
                state.set(PanelState::Ready(page));
            }
        })
    };

    let body = panel_body(&state, |page| {
        let cursor = &page.cursor;
        html! {
            <>
                { page.view.short.render() }
                <div class="comments-section">
                    { page.view.render_comments_title() }
                    { render_comment_items(page.visible_comments()) }
                    if cursor.remaining() > 0 {
                        <div class="load-more-container">
                            <button type="button" class="load-more-btn" onclick={on_more_comments.clone()}>
                                { format!("+ Load More Comments ({} of {} shown)", cursor.shown(), page.view.comments.len()) }
                            </button>
                        </div>
                    }
                </div>
            </>
        }
    });

    html! {
        <>
            <form id="shortsForm" onsubmit={on_submit}>
                <input
                    type="text"
                    id="shortsUrl"
                    placeholder="https://www.youtube.com/shorts/..."
                    value={(*url).clone()}
                    oninput={text_input(&url)}
                />
                <label class="form-option">
                    { "Comments" }
                    <input
                        type="number"
                        min="0"
                        value={limit.to_string()}
                        oninput={number_input(&limit)}
                    />
                </label>
                <SubmitButton loading={state.is_loading()} label="Get Short" />
                <button type="button" class="submit-button" onclick={on_random} disabled={state.is_loading()}>
                    { "🎲 Random Short" }
                </button>
            </form>
            <div
                id="shortsResults"
                class={state.container_class()}
                onclick={on_item_action(&props.on_action)}
            >
                { body }
            </div>
        </>
    }
}

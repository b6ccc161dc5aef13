use crate::env_variable_utils::get_app_name;
use crate::panels::components::{ItemAction, TabBar};
use crate::panels::forms::{
    ChannelPanel, CommentsPanel, Prefill, SearchPanel, ShortsPanel, VideoPanel,
};
use crate::panels::tabs::{Tab, TabState};
use crate::views::watch_url;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <DemoApp /> },
        Route::NotFound => html! {
            <div class="container">
                <div class="error">
                    <h1>{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home}>
                        {"Back to the demo"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

/// Where an item action sends the user: which tab to open and which URL to
/// submit there.
fn action_target(action: &ItemAction) -> (Tab, String) {
    match action {
        ItemAction::VideoInfo(id) => (Tab::Video, watch_url(id)),
        ItemAction::VideoComments(id) => (Tab::Comments, watch_url(id)),
    }
}

#[function_component(DemoApp)]
pub fn demo_app() -> Html {
    let tabs = use_state(TabState::default);
    let video_prefill = use_state(|| None::<Prefill>);
    let comments_prefill = use_state(|| None::<Prefill>);
    let prefill_seq = use_mut_ref(|| 0u32);

    let on_select = {
        let tabs = tabs.clone();
        Callback::from(move |tab: Tab| {
            let mut next = *tabs;
            next.activate(tab);
            tabs.set(next);
        })
    };

    // Info and Comments buttons inside the channel, search and shorts
    // results open the matching tab and submit the video's URL there.
    let on_action = {
        let tabs = tabs.clone();
        let video_prefill = video_prefill.clone();
        let comments_prefill = comments_prefill.clone();
        Callback::from(move |action: ItemAction| {
            let (tab, url) = action_target(&action);
            let mut next = *tabs;
            next.activate(tab);
            tabs.set(next);

            let seq = {
                let mut seq = prefill_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            let prefill = Some(Prefill { url, seq });
            match tab {
                Tab::Comments => comments_prefill.set(prefill),
                _ => video_prefill.set(prefill),
            }
        })
    };

    html! {
        <div class="container">
            <header>
                <h1>{ get_app_name() }</h1>
            </header>

            <TabBar tabs={*tabs} on_select={on_select} />

            <div id={Tab::Video.key()} class={tabs.panel_class(Tab::Video)}>
                <VideoPanel prefill={(*video_prefill).clone()} />
            </div>
            <div id={Tab::Comments.key()} class={tabs.panel_class(Tab::Comments)}>
                <CommentsPanel prefill={(*comments_prefill).clone()} />
            </div>
            <div id={Tab::Channel.key()} class={tabs.panel_class(Tab::Channel)}>
                <ChannelPanel on_action={on_action.clone()} />
            </div>
            <div id={Tab::Search.key()} class={tabs.panel_class(Tab::Search)}>
                <SearchPanel on_action={on_action.clone()} />
            </div>
            <div id={Tab::Shorts.key()} class={tabs.panel_class(Tab::Shorts)}>
                <ShortsPanel on_action={on_action} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_target_the_matching_tab_with_a_watch_url() {
        let (tab, url) = action_target(&ItemAction::VideoComments("abc".to_string()));
        assert_eq!(tab, Tab::Comments);
        assert_eq!(url, "https://www.youtube.com/watch?v=abc");

        let (tab, _) = action_target(&ItemAction::VideoInfo("abc".to_string()));
        assert_eq!(tab, Tab::Video);
    }
}

use crate::panels::api::{post_form, FetchError, FormFields};
use crate::panels::state::{LoadMoreStatus, PanelState};
use crate::panels::tabs::{Tab, TabState};
use crate::views::{ACTION_VIDEO_COMMENTS, ACTION_VIDEO_INFO};
use js_sys::Reflect;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event};
use yew::prelude::*;

/// Clicks on `data-action` buttons inside rendered fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    VideoInfo(String),
    VideoComments(String),
}

impl ItemAction {
    pub fn parse(action: &str, video_id: &str) -> Option<Self> {
        if video_id.is_empty() {
            return None;
        }
        match action {
            ACTION_VIDEO_INFO => Some(ItemAction::VideoInfo(video_id.to_string())),
            ACTION_VIDEO_COMMENTS => Some(ItemAction::VideoComments(video_id.to_string())),
            _ => None,
        }
    }
}

/// Resolves a click anywhere inside a results container to the action of
/// the closest enclosing action button.
pub fn delegated_action(e: &MouseEvent) -> Option<ItemAction> {
    let target: Element = e.target_dyn_into()?;
    let button = target.closest("[data-action]").ok()??;
    ItemAction::parse(
        &button.get_attribute("data-action")?,
        &button.get_attribute("data-video-id")?,
    )
}

pub fn on_item_action(on_action: &Callback<ItemAction>) -> Callback<MouseEvent> {
    let on_action = on_action.clone();
    Callback::from(move |e: MouseEvent| {
        if let Some(action) = delegated_action(&e) {
            e.prevent_default();
            on_action.emit(action);
        }
    })
}

// Reads "value" from any event target without HtmlSelectElement.
pub fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

/// Sets `state` to loading, posts the form and stores either the view built
/// from the payload or the error message.
pub fn submit_form<P, V, F>(
    endpoint: &'static str,
    fields: FormFields,
    state: UseStateHandle<PanelState<V>>,
    build: F,
) where
    P: DeserializeOwned + 'static,
    V: 'static,
    F: FnOnce(&P) -> V + 'static,
{
    state.set(PanelState::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let result: Result<V, FetchError> = post_form::<P>(endpoint, &fields)
            .await
            .map(|payload| build(&payload));
        state.set(PanelState::from_result(result));
    });
}

/// Status fragment for every state but `Ready`, which is delegated.
pub fn panel_body<V>(state: &PanelState<V>, ready: impl FnOnce(&V) -> Html) -> Html {
    match state {
        PanelState::Ready(view) => ready(view),
        other => other.status_html().unwrap_or_default(),
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: TabState,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs">
            { for Tab::all_variants().into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        type="button"
                        class={props.tabs.button_class(tab.position())}
                        onclick={move |_| on_select.emit(tab)}
                    >
                        { tab.display_name() }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub loading: bool,
    pub label: AttrValue,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="submit-button" disabled={props.loading}>
            { if props.loading { "LOADING..." } else { props.label.as_str() } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadMoreButtonProps {
    pub status: LoadMoreStatus,
    pub on_click: Callback<MouseEvent>,
}

#[function_component(LoadMoreButton)]
pub fn load_more_button(props: &LoadMoreButtonProps) -> Html {
    let class = if props.status == LoadMoreStatus::Loading {
        "load-more-btn loading"
    } else {
        "load-more-btn"
    };
    html! {
        <div class="load-more-container">
            <button
                type="button"
                class={class}
                disabled={props.status.disabled()}
                onclick={props.on_click.clone()}
            >
                { props.status.label() }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_actions_parse() {
        assert_eq!(
            ItemAction::parse(ACTION_VIDEO_INFO, "abc"),
            Some(ItemAction::VideoInfo("abc".to_string()))
        );
        assert_eq!(
            ItemAction::parse(ACTION_VIDEO_COMMENTS, "abc"),
            Some(ItemAction::VideoComments("abc".to_string()))
        );
    }

    #[test]
    fn unknown_actions_and_empty_ids_are_ignored() {
        assert_eq!(ItemAction::parse("delete", "abc"), None);
        assert_eq!(ItemAction::parse(ACTION_VIDEO_INFO, ""), None);
    }
}

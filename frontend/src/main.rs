mod env_variable_utils;
#[cfg(test)]
mod markup;
mod models;
mod panels;
mod router;
mod thumbnails;
mod utils;
mod views;

use crate::env_variable_utils::{get_app_name, get_backend_url, is_debug_mode};
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            get_backend_url(),
            is_debug_mode()
        )
        .into(),
    );
}

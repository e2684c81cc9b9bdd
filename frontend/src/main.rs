mod env_variable_utils;
mod logging;
mod router;
mod search;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, SEARCH_CONFIG};
use crate::router::{switch, Route};
use crate::utils::describe_config;
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
    logging::init_logger(is_debug_mode());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", {}, DEBUG: \"{}\"",
        get_app_name(),
        describe_config(&SEARCH_CONFIG),
        is_debug_mode()
    );
}

use crate::env_variable_utils::{get_app_name, SEARCH_CONFIG};
use crate::search::api::BrowserVideoApi;
use crate::search::components::{AlertBanner, SearchBar, VideoGrid};
use std::rc::Rc;
use video_search_core::{submit_search, SearchAction, SearchForm, SearchOrchestrator, SearchState};
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
        Route::Home => html! { <SearchApp /> },
        Route::NotFound => html! {
            <div class="container main-div text-center">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home}>
                    {"Go back to search"}
                </Link<Route>>
            </div>
        },
    }
}

#[derive(Clone, Default, PartialEq)]
struct SearchPageState(SearchState);

impl Reducible for SearchPageState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = Rc::unwrap_or_clone(self).0;
        Rc::new(SearchPageState(state.reduce(action)))
    }
}

#[function_component(SearchApp)]
pub fn search_app() -> Html {
    let state = use_reducer(SearchPageState::default);

    let on_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |form: SearchForm| {
            let dispatcher = dispatcher.clone();

            let config = match &*SEARCH_CONFIG {
                Ok(config) => config.clone(),
                Err(e) => {
                    log::error!("Search is not configured: {e}");
                    dispatcher.dispatch(SearchAction::Failed(e.clone().into()));
                    return;
                }
            };

            wasm_bindgen_futures::spawn_local(async move {
                let orchestrator =
                    SearchOrchestrator::new(BrowserVideoApi::new(config.clone()), config);
                submit_search(&orchestrator, &form, |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SearchAction::DismissAlert))
    };

    html! {
        <div class="container main-div">
            <AlertBanner alert={state.0.alert.clone()} on_dismiss={on_dismiss} />

            <h3>{ get_app_name() }</h3>

            <SearchBar loading={state.0.loading} on_search={on_search} />

            <VideoGrid videos={state.0.results.clone()} />
        </div>
    }
}

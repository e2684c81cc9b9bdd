use crate::utils::format_local_date;
use video_search_core::format::{card_text, card_title, channel_url, watch_url, StatisticsDisplay};
use video_search_core::{Alert, EnrichedVideo, SearchForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub loading: bool,
    pub on_search: Callback<SearchForm>,
}

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub alert: Option<Alert>,
    pub on_dismiss: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: EnrichedVideo,
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<EnrichedVideo>,
}

fn input_callback(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
        handle.set(input_value);
    })
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let keyword = use_state(String::new);
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);

    let on_submit = {
        let on_search = props.on_search.clone();
        let keyword = keyword.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_search.emit(SearchForm::new(&keyword, &start_date, &end_date));
        })
    };

    html! {
        <form onsubmit={on_submit} class="search-inputs">
            <div class="form-floating mb-3">
                <input
                    type="text"
                    id="keywordInput"
                    class="form-control"
                    placeholder="Enter Keyword"
                    value={(*keyword).clone()}
                    oninput={input_callback(&keyword)}
                />
                <label for="keywordInput" class="form-label">{"Keyword"}</label>
            </div>
            <div class="form-floating mb-3">
                <input
                    type="date"
                    id="dateFrom"
                    class="form-control"
                    value={(*start_date).clone()}
                    oninput={input_callback(&start_date)}
                />
                <label for="dateFrom" class="form-label">{"Start Date"}</label>
            </div>
            <div class="form-floating mb-3">
                <input
                    type="date"
                    id="dateTo"
                    class="form-control"
                    value={(*end_date).clone()}
                    oninput={input_callback(&end_date)}
                />
                <label for="dateTo" class="form-label">{"End Date"}</label>
            </div>
            <div class="mb-3 search-btn-div">
                <button type="submit" class="btn btn-danger" disabled={props.loading}>
                    { if props.loading { "Please Wait" } else { "Search" } }
                </button>
            </div>
        </form>
    }
}

#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    let Some(alert) = &props.alert else {
        return html! {};
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="alert alert-warning alert-dismissible fade show" role="alert">
            { &alert.message }
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let summary = &video.summary;
    let stats = StatisticsDisplay::from(&video.statistics);

    html! {
        <div class="col-md-4 video-single">
            <div class="card">
                <a href={watch_url(&summary.id)} target="_blank">
                    <img src={summary.thumbnail_url.clone()} class="card-img-top" alt={summary.title.clone()} />
                </a>
                <div class="card-body">
                    <h4 class="card-title">{ card_title(video) }</h4>
                    <p class="card-text">{ card_text(video) }</p>
                </div>
                <div class="card-body">
                    <p>
                        <span class="text-default">{"Published By: "}</span>
                        <a href={channel_url(&summary.channel_id)} target="_blank">{ &summary.channel_title }</a>
                    </p>
                    <p>
                        <span class="text-default">{"Published Date: "}</span>
                        { format_local_date(&summary.published_at.to_rfc3339()) }
                    </p>
                    <div class="statistics">
                        <div title="Likes">{"👍 "}<span>{ stats.likes }</span></div>
                        <div title="Views">{"👁️ "}<span>{ stats.views }</span></div>
                        <div title="Comments">{"💬 "}<span>{ stats.comments }</span></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    if props.videos.is_empty() {
        return html! {};
    }

    html! {
        <div class="row videos-container">
            { for props.videos.iter().map(|video| html! {
                <VideoCard key={video.id().to_string()} video={video.clone()} />
            })}
        </div>
    }
}

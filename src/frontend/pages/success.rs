use crate::{
    frontend::components::confirmation::ConfirmationView,
    state::AppState,
    web::viewer::Viewer,
};
use axum::http::request::Parts;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let state = expect_context::<Arc<AppState>>();
    let request = use_context::<Parts>();

    let viewer = Viewer::resolve(&state, request.as_ref().map(|parts| &parts.headers));

    view! {
        <ConfirmationView
            homepage_url=state.config.homepage_url.clone()
            dashboard_url=state.config.dashboard_url.clone()
            is_logged_in=viewer.is_logged_in
            catalog=viewer.catalog
        />
    }
}

use crate::{
    frontend::{components::confirmation::HEADING, pages::success::SuccessPage},
    state::AppState,
    web::viewer::Viewer,
};
use axum::http::request::Parts;
use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use std::sync::Arc;

/// Document wrapper for server-rendered pages, in the viewer's language.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let state = expect_context::<Arc<AppState>>();
    let request = use_context::<Parts>();
    let viewer = Viewer::resolve(&state, request.as_ref().map(|parts| &parts.headers));

    view! {
        <!DOCTYPE html>
        <html lang=viewer.language>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{viewer.catalog.gettext(HEADING)}</title>
                <AutoReload options/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| "Page not found".into_view()>
                    <Route
                        path=(
                            StaticSegment("support"),
                            StaticSegment("contact_us"),
                            StaticSegment("success"),
                        )
                        view=SuccessPage
                    />
                </Routes>
            </main>
        </Router>
    }
}

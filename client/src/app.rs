//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ClientConfig};
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, register::RegisterPage,
};
use crate::routes;
use crate::state::session::Session;
use crate::util::messages;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL from server context is echoed into a meta tag so the
/// hydrated client resolves the same value.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = ClientConfig::resolve();
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=config.api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and client config, then maps the four views
/// to their paths.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::resolve());
    provide_context(Session::for_environment());

    view! {
        <Title text=messages::APP_TITLE/>

        <Router>
            <Routes fallback=|| messages::NOT_FOUND.into_view()>
                <Route path=StaticSegment(routes::Route::Landing.segment()) view=LandingPage/>
                <Route path=StaticSegment(routes::Route::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(routes::Route::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(routes::Route::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}

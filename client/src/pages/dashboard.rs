//! Protected dashboard page.
//!
//! Authorization is checked here on mount rather than in the router: no token,
//! a rejected token, or a transport failure all end in a redirect to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::dashboard::{DashboardPhase, begin_logout};
use crate::state::session::Session;
use crate::util::messages;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let phase = RwSignal::new(DashboardPhase::Loading);

    // Resolve the phase once per mount. A continuation that outlives the page
    // neither writes state nor navigates.
    #[cfg(feature = "hydrate")]
    {
        let transport = crate::net::api::BrowserTransport::new(&config);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let next = crate::state::dashboard::load_dashboard(&transport, &session).await;
            let target = next.redirect_target();
            if phase.try_set(next).is_none() {
                if let Some(route) = target {
                    navigate(route.path(), NavigateOptions::default());
                }
            }
        });
    }

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if !phase.with(DashboardPhase::can_logout) {
            return;
        }
        let logout = begin_logout(&session);

        #[cfg(feature = "hydrate")]
        {
            if let Some(request) = logout.notify {
                let transport = crate::net::api::BrowserTransport::new(&config);
                leptos::task::spawn_local(async move {
                    crate::state::dashboard::notify_logout(&transport, request).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &config;

        phase.set(DashboardPhase::Redirecting);
        navigate(logout.navigate_to.path(), NavigateOptions::default());
    };

    view! {
        <div class="form-container">
            <h2>"Dashboard"</h2>
            {move || match phase.get() {
                DashboardPhase::Authenticated { message } => {
                    view! {
                        <p>{message}</p>
                        <button on:click=on_logout.clone()>"Logout"</button>
                    }
                        .into_any()
                }
                DashboardPhase::Loading | DashboardPhase::Redirecting => {
                    view! { <p>{messages::DASHBOARD_LOADING}</p> }.into_any()
                }
            }}
        </div>
    }
}

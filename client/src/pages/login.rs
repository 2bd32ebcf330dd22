//! Login page: posts credentials and stores the returned session token.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::credentials_form::{CredentialsForm, FormState};
use crate::config::ClientConfig;
use crate::net::types::Credentials;
use crate::routes::Route;
use crate::state::session::Session;
use crate::util::messages;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let form = FormState::new();

    let on_submit = Callback::new(move |credentials: Credentials| {
        form.start(messages::LOGIN_PENDING);

        #[cfg(feature = "hydrate")]
        {
            let transport = crate::net::api::BrowserTransport::new(&config);
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::state::auth::submit_login(&transport, &session, &credentials).await;
                if form.finish(outcome.message) {
                    if let Some(route) = outcome.navigate_to {
                        navigate(route.path(), leptos_router::NavigateOptions::default());
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &session, &config, &navigate);
        }
    });

    view! {
        <div class="form-container">
            <h2>"Login"</h2>
            <CredentialsForm state=form submit_label="Login" on_submit=on_submit/>
            <p>
                "Belum punya akun? "
                <A href=Route::Register.path()>"Daftar di sini."</A>
            </p>
        </div>
    }
}

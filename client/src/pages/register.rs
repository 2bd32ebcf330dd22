//! Registration page. Success sends the user to the login page; there is no
//! automatic login.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::credentials_form::{CredentialsForm, FormState};
use crate::config::ClientConfig;
use crate::net::types::Credentials;
use crate::routes::Route;
use crate::util::messages;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let form = FormState::new();

    let on_submit = Callback::new(move |credentials: Credentials| {
        form.start(messages::REGISTER_PENDING);

        #[cfg(feature = "hydrate")]
        {
            let transport = crate::net::api::BrowserTransport::new(&config);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::state::auth::submit_register(&transport, &credentials).await;
                if form.finish(outcome.message) {
                    if let Some(route) = outcome.navigate_to {
                        navigate(route.path(), leptos_router::NavigateOptions::default());
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &config, &navigate);
        }
    });

    view! {
        <div class="form-container">
            <h2>{messages::REGISTER_HEADING}</h2>
            <CredentialsForm state=form submit_label="Daftar" on_submit=on_submit/>
            <div class="form-links">
                <p>
                    "Sudah punya akun? "
                    <A href=Route::Login.path()>"Masuk di sini."</A>
                </p>
                <p>
                    <A href=Route::Landing.path()>"Kembali ke Beranda"</A>
                </p>
            </div>
        </div>
    }
}

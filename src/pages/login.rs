//! Admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one place a session is created. Submits are serialized by the
//! `busy` flag (no overlapping login calls); the backend's rejection
//! detail is shown unchanged. The post-login destination branches on the
//! master flag from the response.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;
use crate::util::nav;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Veuillez saisir votre email et votre mot de passe.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Already signed in (e.g. startup validation finished while on this
    // page): go straight to the right dashboard.
    let navigate_in = navigate.clone();
    Effect::new(move || {
        let session = auth.get();
        if session.is_authenticated() {
            navigate_in(
                nav::post_login_destination(session.is_master_admin),
                NavigateOptions::default(),
            );
        }
    });

    let navigate_submit = navigate;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::util::auth::login(auth, &email_value, &password_value).await {
                    Ok(response) => {
                        navigate(
                            nav::post_login_destination(response.is_master_admin),
                            NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate_submit);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <span class="login-card__logo">"✝"</span>
                <h1>"Administration Paroissiale"</h1>
                <p class="login-card__subtitle">"Connectez-vous pour gérer votre paroisse"</p>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-form__error">{move || error.get()}</p>
                    </Show>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-form__input"
                            type="email"
                            placeholder="admin@paroisse.sn"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                            disabled=move || busy.get()
                        />
                    </label>
                    <label class="login-form__label">
                        "Mot de passe"
                        <input
                            class="login-form__input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                            disabled=move || busy.get()
                        />
                    </label>
                    <button class="btn btn--primary login-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion en cours..." } else { "Se connecter" }}
                    </button>
                </form>

                <div class="login-card__links">
                    <p>"Vous n'avez pas de compte ?"</p>
                    <a href=nav::REGISTER_ROUTE>"Inscrire votre paroisse"</a>
                    <a href="/">"← Retour au site public"</a>
                </div>
            </div>
        </div>
    }
}

//! Own-password change, available to both session tiers.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::auth::AuthSession;

const MIN_PASSWORD_CHARS: usize = 6;

fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if current.is_empty() {
        return Err("Veuillez saisir votre mot de passe actuel.");
    }
    if new.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Le nouveau mot de passe doit contenir au moins 6 caractères.");
    }
    if new != confirm {
        return Err("Les mots de passe ne correspondent pas.");
    }
    if new == current {
        return Err("Le nouveau mot de passe doit être différent de l'actuel.");
    }
    Ok(())
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_password_change(&current.get(), &new.get(), &confirm.get())
        {
            error.set(message.to_owned());
            success.set(String::new());
            return;
        }
        busy.set(true);
        error.set(String::new());
        success.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::change_password(&current.get_untracked(), &new.get_untracked()).await {
                Ok(ack) => {
                    success.set(ack.message);
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <p class="admin-page__fallback">
                        {move || {
                            if auth.get().loading() {
                                "Chargement..."
                            } else {
                                "Redirection vers la connexion..."
                            }
                        }}
                    </p>
                }
            }
        >
            <div class="admin-page">
                <AdminNavbar/>
                <main class="admin-page__content admin-page__content--narrow">
                    <h1>"Changer le mot de passe"</h1>

                    <Show when=move || !error.get().is_empty()>
                        <p class="admin-page__error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="admin-page__success">{move || success.get()}</p>
                    </Show>

                    <form class="admin-form" on:submit=on_submit>
                        <label>
                            "Mot de passe actuel"
                            <input
                                type="password"
                                prop:value=move || current.get()
                                on:input=move |ev| current.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Nouveau mot de passe"
                            <input
                                type="password"
                                prop:value=move || new.get()
                                on:input=move |ev| new.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Confirmer le nouveau mot de passe"
                            <input
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() { "Modification..." } else { "Changer le mot de passe" }
                            }}
                        </button>
                    </form>
                </main>
            </div>
        </Show>
    }
}

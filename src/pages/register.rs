//! Parish self-registration (pending-approval flow).
//!
//! Submitting creates an unapproved parish account; no token is issued.
//! A master admin reviews the registration before the account can log in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{RegistrationRequest, RegistrationResponse};
use crate::util::nav;

const MIN_PASSWORD_CHARS: usize = 6;

fn validate_registration(
    name: &str,
    city: &str,
    admin_email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if name.trim().is_empty() || city.trim().is_empty() || admin_email.trim().is_empty() {
        return Err("Veuillez remplir les champs obligatoires.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Le mot de passe doit contenir au moins 6 caractères.");
    }
    if password != confirm {
        return Err("Les mots de passe ne correspondent pas.");
    }
    Ok(())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let admin_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(None::<RegistrationResponse>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_registration(
            &name.get(),
            &city.get(),
            &admin_email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            error.set(message.to_owned());
            return;
        }
        let request = RegistrationRequest {
            name: name.get().trim().to_owned(),
            city: city.get().trim().to_owned(),
            region: optional(&region.get()),
            address: optional(&address.get()),
            phone: optional(&phone.get()),
            email: optional(&contact_email.get()),
            admin_email: admin_email.get().trim().to_owned(),
            admin_password: password.get(),
            ..RegistrationRequest::default()
        };
        busy.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(response) => submitted.set(Some(response)),
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Inscrire votre paroisse"</h1>

                <Show
                    when=move || submitted.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="register-card__success">
                                <h2>"Demande envoyée"</h2>
                                <p>
                                    {move || {
                                        submitted.get().map(|r| r.message).unwrap_or_default()
                                    }}
                                </p>
                                <p>
                                    "Votre inscription sera examinée par un administrateur. "
                                    "Vous pourrez vous connecter une fois la paroisse approuvée."
                                </p>
                                <a class="btn btn--primary" href=nav::LOGIN_ROUTE>
                                    "Retour à la connexion"
                                </a>
                            </div>
                        }
                    }
                >
                    <form class="register-form" on:submit=on_submit>
                        <Show when=move || !error.get().is_empty()>
                            <p class="register-form__error">{move || error.get()}</p>
                        </Show>

                        <label>
                            "Nom de la paroisse *"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Ville *"
                            <input
                                type="text"
                                prop:value=move || city.get()
                                on:input=move |ev| city.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Région"
                            <input
                                type="text"
                                prop:value=move || region.get()
                                on:input=move |ev| region.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Adresse"
                            <input
                                type="text"
                                prop:value=move || address.get()
                                on:input=move |ev| address.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Téléphone"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email de contact"
                            <input
                                type="email"
                                prop:value=move || contact_email.get()
                                on:input=move |ev| contact_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email administrateur *"
                            <input
                                type="email"
                                prop:value=move || admin_email.get()
                                on:input=move |ev| admin_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Mot de passe *"
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Confirmer le mot de passe *"
                            <input
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Envoi en cours..." } else { "Envoyer la demande" }}
                        </button>
                    </form>
                </Show>

                <a class="register-card__back" href=nav::LOGIN_ROUTE>
                    "← Retour à la connexion"
                </a>
            </div>
        </div>
    }
}

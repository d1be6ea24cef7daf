//! Parish profile editing (contact details and coordinates).

#[cfg(test)]
#[path = "parish_info_test.rs"]
mod parish_info_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::loading_spinner::LoadingSpinner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::ParishUpdate;
use crate::state::auth::AuthSession;

fn field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Blank means "leave unset"; anything else must parse as a number.
fn parse_coordinate(raw: &str) -> Result<Option<f64>, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|_| "Coordonnée invalide.")
}

#[allow(clippy::too_many_arguments)]
fn build_update(
    name: &str,
    city: &str,
    region: &str,
    address: &str,
    phone: &str,
    email: &str,
    website: &str,
    latitude: &str,
    longitude: &str,
) -> Result<ParishUpdate, &'static str> {
    if name.trim().is_empty() || city.trim().is_empty() {
        return Err("Le nom et la ville sont obligatoires.");
    }
    Ok(ParishUpdate {
        name: field(name),
        city: field(city),
        region: field(region),
        address: field(address),
        phone: field(phone),
        email: field(email),
        website: field(website),
        latitude: parse_coordinate(latitude)?,
        longitude: parse_coordinate(longitude)?,
    })
}

#[component]
pub fn ParishInfoPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let name = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());

    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !auth.get().is_authenticated() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_my_parish().await {
                Ok(parish) => {
                    name.set(parish.name);
                    city.set(parish.city);
                    region.set(parish.region.unwrap_or_default());
                    address.set(parish.address.unwrap_or_default());
                    phone.set(parish.phone.unwrap_or_default());
                    email.set(parish.email.unwrap_or_default());
                    website.set(parish.website.unwrap_or_default());
                    latitude.set(parish.latitude.map(|v| v.to_string()).unwrap_or_default());
                    longitude.set(parish.longitude.map(|v| v.to_string()).unwrap_or_default());
                }
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match build_update(
            &name.get(),
            &city.get(),
            &region.get(),
            &address.get(),
            &phone.get(),
            &email.get(),
            &website.get(),
            &latitude.get(),
            &longitude.get(),
        ) {
            Ok(update) => update,
            Err(message) => {
                error.set(message.to_owned());
                saved.set(false);
                return;
            }
        };
        let Some(parish_id) = auth.get().parish_id else {
            return;
        };
        busy.set(true);
        error.set(String::new());
        saved.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_parish(parish_id, &update).await {
                Ok(_) => saved.set(true),
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (parish_id, update);
            busy.set(false);
        }
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
                <main class="admin-page__content">
                    <h1>"Informations de la paroisse"</h1>

                    <Show when=move || !error.get().is_empty()>
                        <p class="admin-page__error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || saved.get()>
                        <p class="admin-page__success">"Informations enregistrées."</p>
                    </Show>

                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <LoadingSpinner/> }
                    >
                        <form class="admin-form" on:submit=on_submit>
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
                                "Email"
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Site web"
                                <input
                                    type="url"
                                    prop:value=move || website.get()
                                    on:input=move |ev| website.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="admin-form__row">
                                <label>
                                    "Latitude"
                                    <input
                                        type="text"
                                        placeholder="14.6928"
                                        prop:value=move || latitude.get()
                                        on:input=move |ev| latitude.set(event_target_value(&ev))
                                    />
                                </label>
                                <label>
                                    "Longitude"
                                    <input
                                        type="text"
                                        placeholder="-17.4467"
                                        prop:value=move || longitude.get()
                                        on:input=move |ev| longitude.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || {
                                    if busy.get() { "Enregistrement..." } else { "Enregistrer" }
                                }}
                            </button>
                        </form>
                    </Show>
                </main>
            </div>
        </Show>
    }
}

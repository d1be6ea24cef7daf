//! Mass schedule management for the signed-in parish.

#[cfg(test)]
#[path = "mass_times_test.rs"]
mod mass_times_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_spinner::LoadingSpinner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{MassTime, MassTimePayload};
use crate::state::auth::AuthSession;
use crate::util::schedule::{display_time, group_by_day};
use crate::util::translations::{DAY_ORDER, day_name, language_name, mass_type_name};

const LANGUAGES: [&str; 5] = ["French", "Wolof", "Serer", "English", "Portuguese"];

const MASS_TYPES: [&str; 6] =
    ["Main Mass", "Morning Mass", "Evening Mass", "Vigil Mass", "Youth Mass", "Children Mass"];

fn validate_mass_time(day: &str, time: &str, language: &str) -> Result<(), &'static str> {
    if !DAY_ORDER.contains(&day) {
        return Err("Veuillez choisir un jour.");
    }
    if time.is_empty() {
        return Err("Veuillez saisir une heure.");
    }
    if language.is_empty() {
        return Err("Veuillez choisir une langue.");
    }
    Ok(())
}

fn payload_from_form(
    day: &str,
    time: &str,
    language: &str,
    mass_type: &str,
    notes: &str,
) -> MassTimePayload {
    MassTimePayload {
        day_of_week: day.to_owned(),
        time: time.to_owned(),
        language: language.to_owned(),
        mass_type: if mass_type.is_empty() { None } else { Some(mass_type.to_owned()) },
        notes: {
            let trimmed = notes.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
        },
    }
}

/// Form prefill for editing: `HH:MM:SS` from the backend becomes the
/// `HH:MM` a time input expects.
fn form_time(time: &str) -> &str {
    display_time(time)
}

#[component]
pub fn MassTimesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let mass_times = RwSignal::new(Vec::<MassTime>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // None = form closed, Some(None) = adding, Some(Some(id)) = editing.
    let editing = RwSignal::new(None::<Option<i64>>);
    let day = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let language = RwSignal::new("French".to_owned());
    let mass_type = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let deleting = RwSignal::new(None::<i64>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_my_parish().await {
                Ok(parish) => {
                    mass_times.set(parish.mass_times);
                    error.set(String::new());
                }
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !auth.get().is_authenticated() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        reload();
    });

    let open_add = move |_| {
        day.set(String::new());
        time.set(String::new());
        language.set("French".to_owned());
        mass_type.set(String::new());
        notes.set(String::new());
        error.set(String::new());
        editing.set(Some(None));
    };

    let open_edit = move |mass: &MassTime| {
        day.set(mass.day_of_week.clone());
        time.set(form_time(&mass.time).to_owned());
        language.set(mass.language.clone());
        mass_type.set(mass.mass_type.clone().unwrap_or_default());
        notes.set(mass.notes.clone().unwrap_or_default());
        error.set(String::new());
        editing.set(Some(Some(mass.id)));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_mass_time(&day.get(), &time.get(), &language.get()) {
            error.set(message.to_owned());
            return;
        }
        let Some(parish_id) = auth.get().parish_id else {
            return;
        };
        let payload =
            payload_from_form(&day.get(), &time.get(), &language.get(), &mass_type.get(), &notes.get());
        let target = editing.get().flatten();
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(mass_time_id) => {
                    api::update_mass_time(parish_id, mass_time_id, &payload).await
                }
                None => api::add_mass_time(parish_id, &payload).await,
            };
            match result {
                Ok(_) => {
                    editing.set(None);
                    reload();
                }
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (parish_id, payload, target);
            busy.set(false);
        }
    };

    let on_delete = Callback::new(move |()| {
        let Some(mass_time_id) = deleting.get() else {
            return;
        };
        let Some(parish_id) = auth.get().parish_id else {
            return;
        };
        deleting.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_mass_time(parish_id, mass_time_id).await {
                Ok(_) => reload(),
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (parish_id, mass_time_id);
    });

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
                    <header class="admin-page__header">
                        <h1>"Horaires des messes"</h1>
                        <button class="btn btn--primary" on:click=open_add>
                            "+ Ajouter un horaire"
                        </button>
                    </header>

                    <Show when=move || !error.get().is_empty()>
                        <p class="admin-page__error">{move || error.get()}</p>
                    </Show>

                    <Show when=move || editing.get().is_some()>
                        <form class="admin-form" on:submit=on_save>
                            <h2>
                                {move || {
                                    if editing.get().flatten().is_some() {
                                        "Modifier l'horaire"
                                    } else {
                                        "Nouvel horaire"
                                    }
                                }}
                            </h2>
                            <label>
                                "Jour"
                                <select
                                    prop:value=move || day.get()
                                    on:change=move |ev| day.set(event_target_value(&ev))
                                >
                                    <option value="">"-- Choisir --"</option>
                                    {DAY_ORDER
                                        .into_iter()
                                        .map(|d| {
                                            view! { <option value=d>{day_name(d).to_owned()}</option> }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label>
                                "Heure"
                                <input
                                    type="time"
                                    prop:value=move || time.get()
                                    on:input=move |ev| time.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Langue"
                                <select
                                    prop:value=move || language.get()
                                    on:change=move |ev| language.set(event_target_value(&ev))
                                >
                                    {LANGUAGES
                                        .into_iter()
                                        .map(|l| {
                                            view! {
                                                <option value=l>{language_name(l).to_owned()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label>
                                "Type de messe"
                                <select
                                    prop:value=move || mass_type.get()
                                    on:change=move |ev| mass_type.set(event_target_value(&ev))
                                >
                                    <option value="">"-- Aucun --"</option>
                                    {MASS_TYPES
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <option value=t>{mass_type_name(t).to_owned()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label>
                                "Notes"
                                <input
                                    type="text"
                                    prop:value=move || notes.get()
                                    on:input=move |ev| notes.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="admin-form__actions">
                                <button class="btn" type="button" on:click=move |_| editing.set(None)>
                                    "Annuler"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Enregistrer"
                                </button>
                            </div>
                        </form>
                    </Show>

                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <LoadingSpinner/> }
                    >
                        <Show
                            when=move || !mass_times.get().is_empty()
                            fallback=move || {
                                view! {
                                    <p class="admin-page__empty">
                                        "Aucun horaire enregistré. Ajoutez le premier !"
                                    </p>
                                }
                            }
                        >
                            {move || {
                                group_by_day(&mass_times.get())
                                    .into_iter()
                                    .map(|schedule| {
                                        view! {
                                            <section class="schedule__day">
                                                <h3>{schedule.day_fr}</h3>
                                                <ul>
                                                    {schedule
                                                        .masses
                                                        .into_iter()
                                                        .map(|mass| {
                                                            let mass_for_edit = mass.clone();
                                                            let mass_id = mass.id;
                                                            view! {
                                                                <li class="schedule__mass">
                                                                    <span class="schedule__time">
                                                                        {display_time(&mass.time).to_owned()}
                                                                    </span>
                                                                    <span class="schedule__language">
                                                                        {language_name(&mass.language).to_owned()}
                                                                    </span>
                                                                    {mass
                                                                        .mass_type
                                                                        .as_deref()
                                                                        .map(|kind| {
                                                                            view! {
                                                                                <span class="schedule__type">
                                                                                    {mass_type_name(kind).to_owned()}
                                                                                </span>
                                                                            }
                                                                        })}
                                                                    <span class="schedule__actions">
                                                                        <button
                                                                            class="btn btn--small"
                                                                            on:click=move |_| open_edit(&mass_for_edit)
                                                                        >
                                                                            "Modifier"
                                                                        </button>
                                                                        <button
                                                                            class="btn btn--small btn--danger"
                                                                            on:click=move |_| deleting.set(Some(mass_id))
                                                                        >
                                                                            "Supprimer"
                                                                        </button>
                                                                    </span>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </section>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </Show>

                    <Show when=move || deleting.get().is_some()>
                        <ConfirmDialog
                            title="Supprimer cet horaire"
                            message="Cet horaire de messe sera définitivement supprimé."
                            on_confirm=on_delete
                            on_cancel=Callback::new(move |()| deleting.set(None))
                        />
                    </Show>
                </main>
            </div>
        </Show>
    }
}

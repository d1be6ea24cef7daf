//! Master-admin console: cross-parish management and registration review.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable with a master session; parish admins who land here are
//! bounced to their own dashboard. The guard is presentation only — every
//! call below hits master-only endpoints the server re-authorizes.

#[cfg(test)]
#[path = "master_dashboard_test.rs"]
mod master_dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_spinner::LoadingSpinner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{CredentialsUpdate, ParishAdmin, PendingParish, RegistrationRequest};
use crate::state::auth::AuthSession;
use crate::util::nav;

const MIN_PASSWORD_CHARS: usize = 6;

fn validate_new_parish(
    name: &str,
    city: &str,
    admin_email: &str,
    admin_password: &str,
) -> Result<(), &'static str> {
    if name.trim().is_empty() || city.trim().is_empty() || admin_email.trim().is_empty() {
        return Err("Veuillez remplir les champs obligatoires.");
    }
    if admin_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Le mot de passe doit contenir au moins 6 caractères.");
    }
    Ok(())
}

/// Build a credentials update from the dialog fields. Blank fields are left
/// untouched server-side; both blank means there is nothing to send.
fn credentials_update(email: &str, password: &str) -> Option<CredentialsUpdate> {
    let email = email.trim();
    let update = CredentialsUpdate {
        admin_email: if email.is_empty() { None } else { Some(email.to_owned()) },
        admin_password: if password.is_empty() { None } else { Some(password.to_owned()) },
    };
    if update.admin_email.is_none() && update.admin_password.is_none() { None } else { Some(update) }
}

fn approval_label(is_approved: bool) -> &'static str {
    if is_approved { "Approuvée" } else { "En attente" }
}

#[component]
pub fn MasterDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    // Parish admins get bounced to their own dashboard.
    Effect::new(move || {
        let session = auth.get();
        if session.is_authenticated() && !session.is_master_admin {
            navigate(nav::DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });

    let parishes = RwSignal::new(Vec::<ParishAdmin>::new());
    let pending = RwSignal::new(Vec::<PendingParish>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let creating = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let new_city = RwSignal::new(String::new());
    let new_region = RwSignal::new(String::new());
    let new_admin_email = RwSignal::new(String::new());
    let new_admin_password = RwSignal::new(String::new());

    // Credentials dialog target plus its two fields.
    let editing_credentials = RwSignal::new(None::<i64>);
    let cred_email = RwSignal::new(String::new());
    let cred_password = RwSignal::new(String::new());

    let deleting = RwSignal::new(None::<i64>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_all_parishes().await {
                Ok(rows) => {
                    parishes.set(rows);
                    error.set(String::new());
                }
                Err(err) => error.set(err.to_string()),
            }
            match api::fetch_pending_registrations().await {
                Ok(rows) => pending.set(rows),
                Err(err) => log::warn!("pending registrations load failed: {err}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let session = auth.get();
        if !session.is_authenticated() || !session.is_master_admin || requested.get_untracked() {
            return;
        }
        requested.set(true);
        reload();
    });

    let on_approve = move |parish_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::approve_parish(parish_id).await {
                Ok(_) => reload(),
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = parish_id;
    };

    let on_reject = move |parish_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::reject_parish(parish_id).await {
                Ok(_) => reload(),
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = parish_id;
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_new_parish(
            &new_name.get(),
            &new_city.get(),
            &new_admin_email.get(),
            &new_admin_password.get(),
        ) {
            error.set(message.to_owned());
            return;
        }
        let region = new_region.get();
        let region = region.trim();
        let request = RegistrationRequest {
            name: new_name.get().trim().to_owned(),
            city: new_city.get().trim().to_owned(),
            region: if region.is_empty() { None } else { Some(region.to_owned()) },
            admin_email: new_admin_email.get().trim().to_owned(),
            admin_password: new_admin_password.get(),
            ..RegistrationRequest::default()
        };
        busy.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_parish(&request).await {
                Ok(_) => {
                    creating.set(false);
                    new_name.set(String::new());
                    new_city.set(String::new());
                    new_region.set(String::new());
                    new_admin_email.set(String::new());
                    new_admin_password.set(String::new());
                    reload();
                }
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

    let on_save_credentials = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(parish_id) = editing_credentials.get() else {
            return;
        };
        let Some(update) = credentials_update(&cred_email.get(), &cred_password.get()) else {
            error.set("Renseignez un email ou un mot de passe.".to_owned());
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_credentials(parish_id, &update).await {
                Ok(_) => {
                    editing_credentials.set(None);
                    cred_email.set(String::new());
                    cred_password.set(String::new());
                    reload();
                }
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (parish_id, update);
    };

    let on_delete = Callback::new(move |()| {
        let Some(parish_id) = deleting.get() else {
            return;
        };
        deleting.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_parish(parish_id).await {
                Ok(_) => reload(),
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = parish_id;
    });

    view! {
        <Show
            when=move || {
                let session = auth.get();
                session.is_authenticated() && session.is_master_admin
            }
            fallback=move || {
                view! {
                    <p class="admin-page__fallback">
                        {move || {
                            if auth.get().loading() {
                                "Chargement..."
                            } else {
                                "Redirection..."
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
                        <h1>"Gestion des Paroisses"</h1>
                        <button class="btn btn--primary" on:click=move |_| creating.set(true)>
                            "+ Créer une paroisse"
                        </button>
                    </header>

                    <Show when=move || !error.get().is_empty()>
                        <p class="admin-page__error">{move || error.get()}</p>
                    </Show>

                    <Show when=move || !pending.get().is_empty()>
                        <section class="master__pending">
                            <h2>
                                {move || format!("Inscriptions en attente ({})", pending.get().len())}
                            </h2>
                            {move || {
                                pending
                                    .get()
                                    .into_iter()
                                    .map(|parish| {
                                        let parish_id = parish.id;
                                        view! {
                                            <div class="pending-card">
                                                <div class="pending-card__info">
                                                    <strong>{parish.name}</strong>
                                                    <span>{parish.city}</span>
                                                    <span class="pending-card__email">
                                                        {parish.admin_email}
                                                    </span>
                                                </div>
                                                <div class="pending-card__actions">
                                                    <button
                                                        class="btn btn--small btn--primary"
                                                        on:click=move |_| on_approve(parish_id)
                                                    >
                                                        "Approuver"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_reject(parish_id)
                                                    >
                                                        "Rejeter"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </section>
                    </Show>

                    <Show when=move || creating.get()>
                        <form class="admin-form" on:submit=on_create>
                            <h2>"Nouvelle paroisse"</h2>
                            <label>
                                "Nom *"
                                <input
                                    type="text"
                                    prop:value=move || new_name.get()
                                    on:input=move |ev| new_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Ville *"
                                <input
                                    type="text"
                                    prop:value=move || new_city.get()
                                    on:input=move |ev| new_city.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Région"
                                <input
                                    type="text"
                                    prop:value=move || new_region.get()
                                    on:input=move |ev| new_region.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Email administrateur *"
                                <input
                                    type="email"
                                    prop:value=move || new_admin_email.get()
                                    on:input=move |ev| new_admin_email.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Mot de passe *"
                                <input
                                    type="password"
                                    prop:value=move || new_admin_password.get()
                                    on:input=move |ev| {
                                        new_admin_password.set(event_target_value(&ev));
                                    }
                                />
                            </label>
                            <div class="admin-form__actions">
                                <button class="btn" type="button" on:click=move |_| creating.set(false)>
                                    "Annuler"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Créer"
                                </button>
                            </div>
                        </form>
                    </Show>

                    <Show when=move || editing_credentials.get().is_some()>
                        <form class="admin-form" on:submit=on_save_credentials>
                            <h2>"Modifier les identifiants"</h2>
                            <label>
                                "Nouvel email (laisser vide pour conserver)"
                                <input
                                    type="email"
                                    prop:value=move || cred_email.get()
                                    on:input=move |ev| cred_email.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Nouveau mot de passe (laisser vide pour conserver)"
                                <input
                                    type="password"
                                    prop:value=move || cred_password.get()
                                    on:input=move |ev| cred_password.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="admin-form__actions">
                                <button
                                    class="btn"
                                    type="button"
                                    on:click=move |_| {
                                        editing_credentials.set(None);
                                        cred_email.set(String::new());
                                        cred_password.set(String::new());
                                    }
                                >
                                    "Annuler"
                                </button>
                                <button class="btn btn--primary" type="submit">
                                    "Enregistrer"
                                </button>
                            </div>
                        </form>
                    </Show>

                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <LoadingSpinner/> }
                    >
                        <table class="master__table">
                            <thead>
                                <tr>
                                    <th>"Paroisse"</th>
                                    <th>"Ville"</th>
                                    <th>"Email admin"</th>
                                    <th>"Statut"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    parishes
                                        .get()
                                        .into_iter()
                                        .map(|parish| {
                                            let parish_id = parish.id;
                                            view! {
                                                <tr>
                                                    <td>{parish.name}</td>
                                                    <td>{parish.city}</td>
                                                    <td>{parish.admin_email}</td>
                                                    <td>{approval_label(parish.is_approved)}</td>
                                                    <td class="master__actions">
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| {
                                                                editing_credentials.set(Some(parish_id));
                                                            }
                                                        >
                                                            "Identifiants"
                                                        </button>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| deleting.set(Some(parish_id))
                                                        >
                                                            "Supprimer"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>

                    <Show when=move || deleting.get().is_some()>
                        <ConfirmDialog
                            title="Supprimer cette paroisse"
                            message="La paroisse, ses horaires et ses actualités seront définitivement supprimés."
                            on_confirm=on_delete
                            on_cancel=Callback::new(move |()| deleting.set(None))
                        />
                    </Show>
                </main>
            </div>
        </Show>
    }
}

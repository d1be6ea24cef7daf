//! News management for the signed-in parish.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_spinner::LoadingSpinner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{NewsItem, NewsPayload};
use crate::state::auth::AuthSession;

const CATEGORIES: [&str; 3] = ["General", "Event", "Announcement"];

/// French label for a news category, passing unknown values through.
fn category_label(category: &str) -> &str {
    match category {
        "General" => "Général",
        "Event" => "Événement",
        "Announcement" => "Annonce",
        other => other,
    }
}

fn validate_news(title: &str, content: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Veuillez saisir un titre.");
    }
    if content.trim().is_empty() {
        return Err("Veuillez saisir le contenu.");
    }
    Ok(())
}

/// `2024-03-01T09:00:00` displays as `01/03/2024`; anything unparsable is
/// shown as-is.
fn display_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if year.len() == 4 => {
            format!("{day}/{month}/{year}")
        }
        _ => iso.to_owned(),
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let news = RwSignal::new(Vec::<NewsItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // None = form closed, Some(None) = adding, Some(Some(id)) = editing.
    let editing = RwSignal::new(None::<Option<i64>>);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new("General".to_owned());

    let deleting = RwSignal::new(None::<i64>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_my_news().await {
                Ok(items) => {
                    news.set(items);
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
        title.set(String::new());
        content.set(String::new());
        category.set("General".to_owned());
        error.set(String::new());
        editing.set(Some(None));
    };

    let open_edit = move |item: &NewsItem| {
        title.set(item.title.clone());
        content.set(item.content.clone());
        category.set(item.category.clone());
        error.set(String::new());
        editing.set(Some(Some(item.id)));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_news(&title.get(), &content.get()) {
            error.set(message.to_owned());
            return;
        }
        let Some(parish_id) = auth.get().parish_id else {
            return;
        };
        let payload = NewsPayload {
            title: title.get().trim().to_owned(),
            content: content.get().trim().to_owned(),
            category: category.get(),
        };
        let target = editing.get().flatten();
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(news_id) => api::update_news(parish_id, news_id, &payload).await,
                None => api::add_news(parish_id, &payload).await,
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
        let Some(news_id) = deleting.get() else {
            return;
        };
        let Some(parish_id) = auth.get().parish_id else {
            return;
        };
        deleting.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_news(parish_id, news_id).await {
                Ok(_) => reload(),
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (parish_id, news_id);
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
                        <h1>"Actualités"</h1>
                        <button class="btn btn--primary" on:click=open_add>
                            "+ Nouvelle actualité"
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
                                        "Modifier l'actualité"
                                    } else {
                                        "Nouvelle actualité"
                                    }
                                }}
                            </h2>
                            <label>
                                "Titre"
                                <input
                                    type="text"
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Catégorie"
                                <select
                                    prop:value=move || category.get()
                                    on:change=move |ev| category.set(event_target_value(&ev))
                                >
                                    {CATEGORIES
                                        .into_iter()
                                        .map(|c| {
                                            view! {
                                                <option value=c>{category_label(c).to_owned()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label>
                                "Contenu"
                                <textarea
                                    rows="5"
                                    prop:value=move || content.get()
                                    on:input=move |ev| content.set(event_target_value(&ev))
                                ></textarea>
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
                            when=move || !news.get().is_empty()
                            fallback=move || {
                                view! {
                                    <p class="admin-page__empty">
                                        "Aucune actualité publiée pour le moment."
                                    </p>
                                }
                            }
                        >
                            {move || {
                                news.get()
                                    .into_iter()
                                    .map(|item| {
                                        let item_for_edit = item.clone();
                                        let item_id = item.id;
                                        view! {
                                            <article class="news-card news-card--admin">
                                                <header class="news-card__header">
                                                    <h3 class="news-card__title">{item.title}</h3>
                                                    <span class="news-card__category">
                                                        {category_label(&item.category).to_owned()}
                                                    </span>
                                                    <span class="news-card__date">
                                                        {display_date(&item.publish_date)}
                                                    </span>
                                                </header>
                                                <p class="news-card__content">{item.content}</p>
                                                <div class="news-card__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| open_edit(&item_for_edit)
                                                    >
                                                        "Modifier"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| deleting.set(Some(item_id))
                                                    >
                                                        "Supprimer"
                                                    </button>
                                                </div>
                                            </article>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </Show>

                    <Show when=move || deleting.get().is_some()>
                        <ConfirmDialog
                            title="Supprimer cette actualité"
                            message="Cette actualité sera définitivement supprimée."
                            on_confirm=on_delete
                            on_cancel=Callback::new(move |()| deleting.set(None))
                        />
                    </Show>
                </main>
            </div>
        </Show>
    }
}

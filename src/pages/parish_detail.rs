//! Public parish detail: contact information, weekly schedule, news.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading_spinner::LoadingSpinner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{NewsItem, Parish};
use crate::util::schedule::{display_time, group_by_day};
use crate::util::translations::{language_name, mass_type_name};

const NOT_FOUND: &str = "Paroisse non trouvée";

#[component]
pub fn ParishDetailPage() -> impl IntoView {
    let params = use_params_map();
    let parish = RwSignal::new(None::<Parish>);
    let news = RwSignal::new(Vec::<NewsItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let route_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let last_loaded = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let Some(id) = route_id() else {
            loading.set(false);
            error.set(Some(NOT_FOUND.to_owned()));
            return;
        };
        if last_loaded.get_untracked() == Some(id) {
            return;
        }
        last_loaded.set(Some(id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loading.set(true);
            match api::fetch_parish(id).await {
                Ok(found) => {
                    parish.set(Some(found));
                    error.set(None);
                }
                Err(err) => {
                    log::warn!("parish {id} load failed: {err}");
                    error.set(Some(NOT_FOUND.to_owned()));
                }
            }
            loading.set(false);
            // News failures are non-fatal: the schedule still renders.
            match api::fetch_parish_news(id).await {
                Ok(items) => news.set(items),
                Err(err) => log::warn!("parish {id} news load failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let contact_line = move |parish: &Parish| {
        let mut parts = vec![parish.city.clone()];
        if let Some(region) = &parish.region {
            parts.push(region.clone());
        }
        parts.join(", ")
    };

    view! {
        <div class="parish-page">
            <nav class="public-navbar">
                <a class="public-navbar__back" href="/search">
                    "← Retour à la recherche"
                </a>
            </nav>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <LoadingSpinner message="Chargement de la paroisse..."/> }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="parish-page__error">
                                <h2>{move || error.get().unwrap_or_default()}</h2>
                                <a class="btn btn--primary" href="/search">
                                    "Retour à la recherche"
                                </a>
                            </div>
                        }
                    }
                >
                    <article class="parish-page__body">
                        <header class="parish-page__header">
                            <h1>{move || parish.get().map(|p| p.name).unwrap_or_default()}</h1>
                            <p class="parish-page__place">
                                {move || parish.get().map(|p| contact_line(&p)).unwrap_or_default()}
                            </p>
                        </header>

                        <section class="parish-page__contact">
                            {move || {
                                parish
                                    .get()
                                    .map(|p| {
                                        view! {
                                            {p
                                                .address
                                                .map(|address| {
                                                    view! {
                                                        <p class="parish-page__detail">{address}</p>
                                                    }
                                                })}
                                            {p
                                                .phone
                                                .map(|phone| {
                                                    view! {
                                                        <p class="parish-page__detail">{phone}</p>
                                                    }
                                                })}
                                            {p
                                                .email
                                                .map(|email| {
                                                    view! {
                                                        <p class="parish-page__detail">{email}</p>
                                                    }
                                                })}
                                            {p
                                                .website
                                                .map(|website| {
                                                    view! {
                                                        <p class="parish-page__detail">
                                                            <a href=website.clone() target="_blank" rel="noopener">
                                                                {website.clone()}
                                                            </a>
                                                        </p>
                                                    }
                                                })}
                                        }
                                    })
                            }}
                        </section>

                        <section class="parish-page__schedule">
                            <h2>"Horaires des messes"</h2>
                            <Show
                                when=move || {
                                    parish.get().is_some_and(|p| !p.mass_times.is_empty())
                                }
                                fallback=move || {
                                    view! {
                                        <p class="parish-page__empty">
                                            "Aucun horaire publié pour le moment."
                                        </p>
                                    }
                                }
                            >
                                {move || {
                                    let mass_times =
                                        parish.get().map(|p| p.mass_times).unwrap_or_default();
                                    group_by_day(&mass_times)
                                        .into_iter()
                                        .map(|day| {
                                            view! {
                                                <div class="schedule__day">
                                                    <h3>{day.day_fr}</h3>
                                                    <ul>
                                                        {day
                                                            .masses
                                                            .into_iter()
                                                            .map(|mass| {
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
                                                                            .map(|kind| {
                                                                                view! {
                                                                                    <span class="schedule__type">
                                                                                        {mass_type_name(&kind).to_owned()}
                                                                                    </span>
                                                                                }
                                                                            })}
                                                                        {mass
                                                                            .notes
                                                                            .map(|notes| {
                                                                                view! {
                                                                                    <span class="schedule__notes">{notes}</span>
                                                                                }
                                                                            })}
                                                                    </li>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </ul>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </Show>
                        </section>

                        <Show when=move || !news.get().is_empty()>
                            <section class="parish-page__news">
                                <h2>"Actualités"</h2>
                                {move || {
                                    news.get()
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <article class="news-card">
                                                    <h3 class="news-card__title">{item.title}</h3>
                                                    <p class="news-card__content">{item.content}</p>
                                                </article>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </section>
                        </Show>
                    </article>
                </Show>
            </Show>
        </div>
    }
}

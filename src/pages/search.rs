//! Public parish search: debounced city lookup plus geolocation proximity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Text search debounces while the user types and asks the backend to
//! filter by city; "near me" resolves a device position and delegates the
//! distance query to the backend. Only the latest scheduled fetch runs —
//! a generation counter discards superseded debounce timers.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Parish;

const DEBOUNCE_MS: u64 = 300;
const MIN_QUERY_CHARS: usize = 2;
const DEFAULT_RADIUS_KM: f64 = 10.0;

const SEARCH_FAILED: &str = "Erreur lors du chargement des paroisses";
const NEARBY_FAILED: &str = "Erreur lors de la recherche des paroisses à proximité";

/// What an input change should trigger once the debounce elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SearchPlan {
    /// Query the backend with this trimmed city filter.
    Fetch(String),
    /// Input cleared: drop results immediately.
    Clear,
    /// Too short to search yet; keep whatever is shown.
    Wait,
}

fn plan_for_query(query: &str) -> SearchPlan {
    let trimmed = query.trim();
    if trimmed.chars().count() >= MIN_QUERY_CHARS {
        SearchPlan::Fetch(trimmed.to_owned())
    } else if trimmed.is_empty() {
        SearchPlan::Clear
    } else {
        SearchPlan::Wait
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Parish>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let geo_error = RwSignal::new(None::<String>);
    let show_results = RwSignal::new(false);
    let generation = RwSignal::new(0_u64);

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        let scheduled = generation.get_untracked() + 1;
        generation.set(scheduled);
        match plan_for_query(&value) {
            SearchPlan::Fetch(city) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(DEBOUNCE_MS))
                        .await;
                    if generation.get_untracked() != scheduled {
                        return;
                    }
                    loading.set(true);
                    error.set(None);
                    show_results.set(true);
                    match api::fetch_parishes(Some(&city)).await {
                        Ok(list) => results.set(list),
                        Err(err) => {
                            log::warn!("parish search failed: {err}");
                            error.set(Some(SEARCH_FAILED.to_owned()));
                        }
                    }
                    loading.set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = city;
                }
            }
            SearchPlan::Clear => {
                results.set(Vec::new());
                show_results.set(false);
                error.set(None);
            }
            SearchPlan::Wait => {}
        }
    };

    let on_clear = move |_| {
        query.set(String::new());
        generation.set(generation.get_untracked() + 1);
        results.set(Vec::new());
        show_results.set(false);
        error.set(None);
        geo_error.set(None);
    };

    let on_find_nearby = move |_| {
        if loading.get() {
            return;
        }
        geo_error.set(None);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loading.set(true);
            match crate::util::geo::current_position().await {
                Ok(position) => {
                    match api::fetch_nearby(position.latitude, position.longitude, DEFAULT_RADIUS_KM)
                        .await
                    {
                        Ok(list) => {
                            results.set(list);
                            show_results.set(true);
                            // Text search and proximity search are exclusive.
                            query.set(String::new());
                            generation.set(generation.get_untracked() + 1);
                        }
                        Err(err) => {
                            log::warn!("nearby search failed: {err}");
                            error.set(Some(NEARBY_FAILED.to_owned()));
                        }
                    }
                }
                Err(message) => geo_error.set(Some(message)),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="search-page">
            <nav class="public-navbar">
                <a class="public-navbar__back" href="/">
                    "← Accueil"
                </a>
                <h1 class="public-navbar__title">"Rechercher une paroisse"</h1>
            </nav>

            <div class="search-page__controls">
                <input
                    class="search-page__input"
                    type="search"
                    placeholder="Ville (ex. Dakar, Thiès...)"
                    prop:value=move || query.get()
                    on:input=on_input
                />
                <Show when=move || !query.get().is_empty()>
                    <button class="btn search-page__clear" on:click=on_clear>
                        "Effacer"
                    </button>
                </Show>
                <button
                    class="btn search-page__nearby"
                    on:click=on_find_nearby
                    disabled=move || loading.get()
                >
                    "Paroisses à proximité"
                </button>
            </div>

            <Show when=move || geo_error.get().is_some()>
                <p class="search-page__error">{move || geo_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="search-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner/> }>
                <Show when=move || show_results.get()>
                    <Show
                        when=move || !results.get().is_empty()
                        fallback=move || {
                            view! {
                                <p class="search-page__empty">"Aucune paroisse trouvée."</p>
                            }
                        }
                    >
                        <div class="search-page__results">
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .map(|parish| {
                                        let href = format!("/parish/{}", parish.id);
                                        let place = match &parish.region {
                                            Some(region) => format!("{}, {}", parish.city, region),
                                            None => parish.city.clone(),
                                        };
                                        view! {
                                            <a class="parish-card" href=href>
                                                <h3 class="parish-card__name">{parish.name}</h3>
                                                <p class="parish-card__place">{place}</p>
                                                {parish
                                                    .address
                                                    .map(|address| {
                                                        view! {
                                                            <p class="parish-card__address">{address}</p>
                                                        }
                                                    })}
                                                <span class="parish-card__masses">
                                                    {format!(
                                                        "{} messe(s) par semaine",
                                                        parish.mass_times.len(),
                                                    )}
                                                </span>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

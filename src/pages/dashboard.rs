//! Parish admin overview: schedule and news counts with quick links.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{NewsItem, Parish};
use crate::state::auth::AuthSession;
use crate::util::nav;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let parish = RwSignal::new(None::<Parish>);
    let news = RwSignal::new(Vec::<NewsItem>::new());
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !auth.get().is_authenticated() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_my_parish().await {
                Ok(found) => parish.set(Some(found)),
                Err(err) => error.set(Some(err.to_string())),
            }
            match api::fetch_my_news().await {
                Ok(items) => news.set(items),
                Err(err) => log::warn!("dashboard news load failed: {err}"),
            }
        });
    });

    let mass_count = move || parish.get().map(|p| p.mass_times.len()).unwrap_or_default();
    let active_news = move || news.get().iter().filter(|n| n.is_active).count();

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
                    <h1>"Tableau de bord"</h1>
                    <Show when=move || error.get().is_some()>
                        <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="dashboard__cards">
                        <a class="dashboard-card" href=nav::MASS_TIMES_ROUTE>
                            <span class="dashboard-card__count">{mass_count}</span>
                            <span class="dashboard-card__label">"Horaires de messe"</span>
                        </a>
                        <a class="dashboard-card" href=nav::NEWS_ROUTE>
                            <span class="dashboard-card__count">{active_news}</span>
                            <span class="dashboard-card__label">"Actualités publiées"</span>
                        </a>
                        <a class="dashboard-card" href=nav::PARISH_INFO_ROUTE>
                            <span class="dashboard-card__count">"ℹ"</span>
                            <span class="dashboard-card__label">"Informations de la paroisse"</span>
                        </a>
                    </div>

                    <Show when=move || parish.get().is_some()>
                        <section class="dashboard__parish">
                            <h2>{move || parish.get().map(|p| p.name).unwrap_or_default()}</h2>
                            <p>
                                {move || {
                                    parish
                                        .get()
                                        .map(|p| match p.region {
                                            Some(region) => format!("{}, {region}", p.city),
                                            None => p.city,
                                        })
                                        .unwrap_or_default()
                                }}
                            </p>
                            <a href=move || {
                                format!("/parish/{}", parish.get().map(|p| p.id).unwrap_or_default())
                            }>"Voir la page publique →"</a>
                        </section>
                    </Show>
                </main>
            </div>
        </Show>
    }
}

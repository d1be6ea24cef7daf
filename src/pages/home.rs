//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <span class="home-page__logo">"✝"</span>
                <h1>"Paroisses du Sénégal"</h1>
                <p class="home-page__subtitle">
                    "Trouvez les horaires des messes dans les paroisses catholiques du Sénégal"
                </p>
                <a class="btn btn--primary home-page__cta" href="/search">
                    "Rechercher une paroisse"
                </a>
            </header>
            <footer class="home-page__footer">
                <a class="home-page__admin-link" href="/admin/login">
                    "Espace administration"
                </a>
            </footer>
        </div>
    }
}

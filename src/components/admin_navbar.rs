//! Navigation bar for the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link set branches solely on the session's master flag (see `util::nav`);
//! the logout button is the one logout entry point in the UI.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthSession;
use crate::util::nav;

#[component]
pub fn AdminNavbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::util::auth::logout(auth);
        navigate(nav::LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <nav class="admin-navbar">
            <div class="admin-navbar__brand">
                <span class="admin-navbar__logo">"✝"</span>
                <div>
                    <h1 class="admin-navbar__title">"Administration Paroissiale"</h1>
                    <Show when=move || auth.get().parish_name.is_some()>
                        <p class="admin-navbar__parish">
                            {move || auth.get().parish_name.unwrap_or_default()}
                        </p>
                    </Show>
                </div>
            </div>
            <div class="admin-navbar__links">
                {move || {
                    let current = location.pathname.get();
                    nav::nav_links(auth.get().is_master_admin)
                        .into_iter()
                        .map(|link| {
                            let class = if current == link.to {
                                "admin-navbar__link admin-navbar__link--active"
                            } else {
                                "admin-navbar__link"
                            };
                            view! {
                                <a class=class href=link.to>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button class="admin-navbar__logout" on:click=on_logout>
                    "Déconnexion"
                </button>
            </div>
        </nav>
    }
}

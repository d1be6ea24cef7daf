//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    change_password::ChangePasswordPage, dashboard::DashboardPage, home::HomePage,
    login::LoginPage, mass_times::MassTimesPage, master_dashboard::MasterDashboardPage,
    news::NewsPage, parish_detail::ParishDetailPage, parish_info::ParishInfoPage,
    register::RegistrationPage, search::SearchPage,
};
use crate::state::auth::AuthSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth session context, kicks off the startup token
/// validation, and sets up client-side routing. The session signal starts
/// in `Initializing` so guarded routes render their loading fallback — not
/// a login flash — until the probe resolves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthSession::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::auth::restore_session(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/paroisses-sn.css"/>
        <Title text="Paroisses du Sénégal"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("search") view=SearchPage/>
                <Route path=(StaticSegment("parish"), ParamSegment("id")) view=ParishDetailPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("register")) view=RegistrationPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=DashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("mass-times")) view=MassTimesPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("news")) view=NewsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("parish-info")) view=ParishInfoPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("change-password")) view=ChangePasswordPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("master-dashboard")) view=MasterDashboardPage/>
            </Routes>
        </Router>
    }
}

//! Full-width loading indicator with an optional message.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[prop(default = "Chargement...".to_owned(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__message">{message}</p>
        </div>
    }
}

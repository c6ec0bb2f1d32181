//! App Root Component
//!
//! Holds the session and switches between the signed-out and signed-in
//! views.

use leptos::*;

use phonepro::Session;

use crate::pages::{ApplicationView, AuthView};
use crate::state::LocalStorage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Restore a persisted identity, if any
    let session = create_rw_signal(Session::restore(LocalStorage));

    let on_authenticated = Callback::new(move |username: String| {
        session.update(|s| {
            if let Err(e) = s.authenticated(&username) {
                web_sys::console::error_1(&format!("Failed to persist session: {}", e).into());
            }
        });
    });

    let on_logout = Callback::new(move |_: ()| {
        session.update(|s| {
            if let Err(e) = s.logout() {
                web_sys::console::error_1(&format!("Failed to clear session: {}", e).into());
            }
        });
    });

    let username = create_memo(move |_| session.with(|s| s.username().map(str::to_string)));

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="container mx-auto px-4 py-8">
                {move || match username.get() {
                    Some(name) => view! {
                        <ApplicationView username=name on_logout=on_logout />
                    }.into_view(),
                    None => view! {
                        <AuthView on_authenticated=on_authenticated />
                    }.into_view(),
                }}
            </main>
        </div>
    }
}

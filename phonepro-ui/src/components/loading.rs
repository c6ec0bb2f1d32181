//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Block spinner with a status line
#[component]
pub fn Loading(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 py-6 text-gray-400">
            <div class="loading-spinner w-6 h-6" />
            <span>{text}</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

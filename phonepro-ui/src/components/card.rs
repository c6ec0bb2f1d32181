//! Card Component

use leptos::*;

/// Titled panel
#[component]
pub fn SectionCard(
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-6 shadow-lg space-y-4">
            <h2 class="text-xl font-semibold">{title}</h2>
            {children()}
        </section>
    }
}

//! Key/Value List

use leptos::*;

/// Two-column rows, in the given order
#[component]
pub fn KeyValueList(rows: Vec<(String, String)>) -> impl IntoView {
    view! {
        <dl class="divide-y divide-gray-700 text-sm">
            {rows
                .into_iter()
                .map(|(key, value)| view! {
                    <div class="grid grid-cols-2 gap-4 py-2">
                        <dt class="text-gray-400 break-words">{key}</dt>
                        <dd class="break-words">{value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}

//! Buttons

use leptos::*;

use super::InlineLoading;

const BASE: &str = "rounded-lg px-4 py-2 font-semibold transition-colors \
                    disabled:cursor-not-allowed flex items-center justify-center space-x-2";

/// Filled button; shows a spinner while `busy`
#[component]
pub fn PrimaryButton(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into, optional)]
    busy: MaybeSignal<bool>,
    #[prop(default = "button")]
    button_type: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            disabled=move || busy.get()
            class=format!("{} w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600", BASE)
        >
            {move || busy.get().then(|| view! { <InlineLoading /> })}
            <span>{move || label.get()}</span>
        </button>
    }
}

/// Bordered button; `active` highlights it as the current choice
#[component]
pub fn OutlineButton(
    #[prop(into)]
    label: String,
    #[prop(into, optional)]
    active: MaybeSignal<bool>,
    on_click: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |ev| on_click.call(ev)
            class=move || {
                if active.get() {
                    format!("{} border border-primary-500 bg-gray-700 text-white", BASE)
                } else {
                    format!("{} border border-gray-600 text-gray-400 hover:text-white", BASE)
                }
            }
        >
            {label}
        </button>
    }
}

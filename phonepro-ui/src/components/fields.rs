//! Form Fields
//!
//! Labeled inputs bound to signals.

use leptos::*;
use phonepro::Slider;

const INPUT: &str = "w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 \
                     focus:outline-none focus:border-primary-500";

/// Labeled text input
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm text-gray-400">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class=INPUT
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Labeled dropdown over a reactive option list
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm text-gray-400">{label}</label>
            <select
                id=id
                class=INPUT
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = option == value.get_untracked();
                            view! {
                                <option value=option.clone() selected=selected>{option.clone()}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Numeric slider with its current value in the label
#[component]
pub fn RangeField(
    slider: Slider,
    #[prop(into)]
    value: Signal<u32>,
    on_input: Callback<u32>,
) -> impl IntoView {
    let range = slider.range();

    view! {
        <div class="space-y-1">
            <label for=slider.id() class="block text-sm text-gray-400">
                {move || format!("{}: {}", slider.label(), value.get())}
            </label>
            <input
                id=slider.id()
                type="range"
                class="w-full accent-primary-500"
                min=range.min
                max=range.max
                step=range.step
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    // Browsers only report values inside min/max
                    if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                        on_input.call(v);
                    }
                }
            />
        </div>
    }
}
